//! Sample catalogue used by the development server and the test suites.
//!
//! Identifiers are fixed so tests and manual requests can address
//! individual records.

// Identifiers are named after the records they seed
#![allow(missing_docs)]

use uuid::Uuid;

use crate::entities::{
    Banknote, Coin, Collectable, Collection, CollectionCollectable, CollectorValue, Condition,
    Country, User,
};
use crate::error::StorageResult;

use super::InMemoryBackend;

pub const USER_RYAN: Uuid = Uuid::from_u128(0x4a9522da_66f9_4dfb_88b8_f92b950d1df1);
pub const USER_MICHAEL: Uuid = Uuid::from_u128(0xc7304af2_e5cd_4186_83d9_77807c9512ec);
pub const USER_GEOFF: Uuid = Uuid::from_u128(0xe640b01f_9eb8_407f_a8f9_68197a7fe48e);
pub const USER_JACK: Uuid = Uuid::from_u128(0x2e795c80_8c60_4d18_bd10_ca5832ab4158);
pub const USER_JEREMY: Uuid = Uuid::from_u128(0xca26fdfb_46b3_4120_9e52_a07820bc0409);
pub const USER_GAVIN: Uuid = Uuid::from_u128(0x58ba1e18_46a2_44d5_8f88_51a8e6426a56);

pub const COLLECTION_RYAN_COINS: Uuid = Uuid::from_u128(0x03a6907d_4e93_4863_bdaf_1d05140dec12);
pub const COLLECTION_GEOFF_COINS: Uuid = Uuid::from_u128(0x46df9402_62e1_4ff6_9cb0_0955957ec789);
pub const COLLECTION_MICHAEL_BANKNOTES: Uuid =
    Uuid::from_u128(0x80fa9706_2465_48cf_8933_932fdce18c89);
pub const COLLECTION_JACK_BANKNOTES: Uuid =
    Uuid::from_u128(0x528fc017_4289_492a_b942_bb34a2363d9d);
pub const COLLECTION_RYAN_BANKNOTES: Uuid =
    Uuid::from_u128(0x6ee10276_5cb7_4c9f_819d_9204274c088a);
pub const COLLECTION_MICHAEL_COINS: Uuid = Uuid::from_u128(0xab76b149_09c9_40c8_9b35_e62e53e06c8a);

pub const COUNTRY_USA: Uuid = Uuid::from_u128(0xc8f2031e_c780_4d27_bf13_1ee48a7207a3);
pub const COUNTRY_KUWAIT: Uuid = Uuid::from_u128(0x1e6a79fa_f216_41a4_8efe_0b87e58d2b33);
pub const COUNTRY_CANADA: Uuid = Uuid::from_u128(0x74619fd9_898c_4250_b5c9_833ce2d599c0);
pub const COUNTRY_MEXICO: Uuid = Uuid::from_u128(0x8c29c8a2_93ae_483d_8235_b0c728d3a034);
pub const COUNTRY_FRANCE: Uuid = Uuid::from_u128(0x1b38bfce_567c_4d49_9dd2_e0fbef480367);
pub const COUNTRY_JAPAN: Uuid = Uuid::from_u128(0x8cef5964_01a4_40c7_9f16_28af109094d4);

pub const COIN_US_DOLLAR: Uuid = Uuid::from_u128(0xa4b0f559_449f_414c_943e_5e69b6c522fb);
pub const COIN_MEXICAN_PESO: Uuid = Uuid::from_u128(0x3a7fd6a5_d654_4647_8374_eba27001b0d3);
pub const COIN_CANADIAN_POUND: Uuid = Uuid::from_u128(0xbe258d41_f9f5_46d3_9738_f9e0123201ac);
pub const COIN_FRENCH_EURO: Uuid = Uuid::from_u128(0xdc94e4a0_8ad1_4eec_ad9d_e4c6cf147f48);
pub const COIN_JAPANESE_YEN: Uuid = Uuid::from_u128(0xdb14f24e_aceb_4315_bfcf_6ace1f9b3613);
pub const COIN_US_DIME: Uuid = Uuid::from_u128(0x30a24244_ca29_40a8_95a6_8f68f5de2f78);

pub const BANKNOTE_US_DOLLAR: Uuid = Uuid::from_u128(0x54826cab_0395_4304_8c2f_6c3bdc82237f);
pub const BANKNOTE_MEXICAN_PESO: Uuid = Uuid::from_u128(0x28c83ea6_665c_41a0_acb0_92a057228fd4);
pub const BANKNOTE_JAPANESE_YEN: Uuid = Uuid::from_u128(0x51d91016_54f5_44f0_a1d8_e87f72d4bcc4);
pub const BANKNOTE_US_DOLLAR_SERIES: Uuid =
    Uuid::from_u128(0x48d9049b_04f0_4c24_a1c3_c3668878013e);
pub const BANKNOTE_CANADIAN_POUND: Uuid = Uuid::from_u128(0x3da0c34f_dbfb_41a3_801f_97b7f4cdde89);
pub const BANKNOTE_KUWAITI_DINAR: Uuid = Uuid::from_u128(0x0acf8863_1bec_49a6_b761_ce27dd219e7c);

pub const CONDITION_FINE: Uuid = Uuid::from_u128(0xb064b098_d141_4935_ac7e_b78a1063fc6d);
pub const CONDITION_GOOD: Uuid = Uuid::from_u128(0xc48c174e_96dd_4eef_9e79_2e6f67446344);
pub const CONDITION_VG10: Uuid = Uuid::from_u128(0x64dc0403_db60_479a_bce4_8662e3a16e55);
pub const CONDITION_XF45: Uuid = Uuid::from_u128(0xe55b0420_f390_41e6_9100_212b611bbca7);
pub const CONDITION_AU52: Uuid = Uuid::from_u128(0x371da3ae_d2e0_4ee7_abf3_3a7574ae669a);
pub const CONDITION_MS68: Uuid = Uuid::from_u128(0x58f7b2c7_b8fc_48dc_83ab_862a85c80fc8);

pub const COLLECTABLE_GEOFF_DOLLAR: Uuid = Uuid::from_u128(0x355e785b_dd47_4fb7_b112_1fb34d189569);
pub const COLLECTABLE_RYAN_YEN: Uuid = Uuid::from_u128(0x88460c77_e98b_403a_8e15_1a26d843ffe5);
pub const COLLECTABLE_MICHAEL_PESO: Uuid = Uuid::from_u128(0xba0d7466_1fe9_478e_803c_0fcbcd48f6ec);
pub const COLLECTABLE_MICHAEL_YEN: Uuid = Uuid::from_u128(0x22e513a9_b851_4b93_931c_5904d9120f73);
pub const COLLECTABLE_MICHAEL_DINAR: Uuid =
    Uuid::from_u128(0xc165ebe2_3b35_4eeb_9fab_5f952598a0c5);
pub const COLLECTABLE_GEOFF_PESO: Uuid = Uuid::from_u128(0x25da5d7a_d9bc_4f31_9982_2a44d1facdb1);

fn users() -> Vec<User> {
    [
        (USER_RYAN, "Ryan", "Haywood"),
        (USER_MICHAEL, "Michael", "Jones"),
        (USER_GEOFF, "Geoff", "Ramsey"),
        (USER_JACK, "Jack", "Pattillo"),
        (USER_JEREMY, "Jeremy", "Dooley"),
        (USER_GAVIN, "Gavin", "Free"),
    ]
    .into_iter()
    .map(|(id, first, last)| User {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        user_name: first.to_string(),
        email: format!("{}.{}@recollectable.example", first, last).to_lowercase(),
    })
    .collect()
}

fn collections() -> Vec<Collection> {
    [
        (COLLECTION_RYAN_COINS, "Coin", USER_RYAN),
        (COLLECTION_GEOFF_COINS, "Coin", USER_GEOFF),
        (COLLECTION_MICHAEL_BANKNOTES, "Banknote", USER_MICHAEL),
        (COLLECTION_JACK_BANKNOTES, "Banknote", USER_JACK),
        (COLLECTION_RYAN_BANKNOTES, "Banknote", USER_RYAN),
        (COLLECTION_MICHAEL_COINS, "Coin", USER_MICHAEL),
    ]
    .into_iter()
    .map(|(id, kind, user_id)| Collection {
        id,
        collection_type: kind.to_string(),
        description: String::new(),
        user_id,
    })
    .collect()
}

fn countries() -> Vec<Country> {
    [
        (COUNTRY_USA, "United States of America"),
        (COUNTRY_KUWAIT, "Kuwait"),
        (COUNTRY_CANADA, "Canada"),
        (COUNTRY_MEXICO, "Mexico"),
        (COUNTRY_FRANCE, "France"),
        (COUNTRY_JAPAN, "Japan"),
    ]
    .into_iter()
    .map(|(id, name)| Country {
        id,
        name: name.to_string(),
        description: None,
    })
    .collect()
}

fn conditions() -> Vec<Condition> {
    [
        (CONDITION_FINE, "Fine", "en-GB"),
        (CONDITION_GOOD, "Good", "en-GB"),
        (CONDITION_VG10, "VG10", "en-US"),
        (CONDITION_XF45, "XF45", "en-US"),
        (CONDITION_AU52, "AU52", "en-US"),
        (CONDITION_MS68, "MS68", "en-US"),
    ]
    .into_iter()
    .map(|(id, grade, language_code)| Condition {
        id,
        grade: grade.to_string(),
        language_code: language_code.to_string(),
    })
    .collect()
}

fn collector_values() -> Vec<CollectorValue> {
    vec![
        CollectorValue {
            id: Uuid::from_u128(0x843a6427_48ab_421c_ba35_3159b1b024a5),
            g4: Some(15.54),
            vg8: Some(15.54),
            f12: Some(15.54),
            vf20: Some(15.54),
            xf40: Some(25.0),
            ms60: Some(28.0),
            ms63: Some(32.0),
            ..Default::default()
        },
        CollectorValue {
            id: Uuid::from_u128(0x46bac791_8afc_420f_975e_3f3b5f3778fb),
            pf60: Some(50.0),
            pf63: Some(65.0),
            pf65: Some(85.0),
            ..Default::default()
        },
        CollectorValue {
            id: Uuid::from_u128(0x2c716f5b_6792_4753_9f1a_fa8bcd4eabfb),
            g4: Some(3.0),
            vg8: Some(3.5),
            f12: Some(4.0),
            vf20: Some(4.5),
            xf40: Some(13.5),
            ms60: Some(40.0),
            ms63: Some(165.0),
            ..Default::default()
        },
        CollectorValue {
            id: Uuid::from_u128(0x64246e79_c3fe_4020_a222_32c0f329a643),
            g4: Some(10.0),
            vg8: Some(25.0),
            f12: Some(32.0),
            vf20: Some(55.0),
            xf40: Some(125.0),
            ms60: Some(200.0),
            ms63: Some(250.0),
            ..Default::default()
        },
        CollectorValue {
            id: Uuid::from_u128(0x2037c78d_81cd_45c6_b447_476cc1ba90a4),
            g4: Some(125.48),
            vg8: Some(25.0),
            f12: Some(32.0),
            vf20: Some(55.0),
            xf40: Some(125.0),
            ms60: Some(285.0),
            ms63: Some(320.0),
            pf60: Some(350.0),
            pf63: Some(375.0),
            pf65: Some(425.0),
            ..Default::default()
        },
        CollectorValue {
            id: Uuid::from_u128(0x5e9cb33b_b12c_4e20_8113_d8e002aeb38d),
            g4: Some(760.0),
            vg8: Some(760.0),
            f12: Some(760.0),
            vf20: Some(760.0),
            xf40: Some(760.0),
            ms60: Some(1650.0),
            ms63: Some(1650.0),
            ..Default::default()
        },
    ]
}

fn lookup<T: Clone>(items: &[T], index: usize) -> T {
    items[index % items.len()].clone()
}

fn coins(countries: &[Country], values: &[CollectorValue]) -> Vec<Coin> {
    [
        (COIN_US_DOLLAR, "Dollars", 1, "1921", "Silver", 0, 2),
        (COIN_MEXICAN_PESO, "Pesos", 5, "1951", "Silver", 3, 0),
        (COIN_CANADIAN_POUND, "Pounds", 1, "1911", "Gold", 2, 3),
        (COIN_FRENCH_EURO, "Euros", 2, "2002", "Bimetal", 4, 1),
        (COIN_JAPANESE_YEN, "Yen", 100, "1967", "Cupronickel", 5, 2),
        (COIN_US_DIME, "Dime", 10, "1964", "Silver", 0, 0),
    ]
    .into_iter()
    .map(
        |(id, kind, face_value, release_date, metal, country, value)| Coin {
            id,
            face_value,
            coin_type: kind.to_string(),
            release_date: release_date.to_string(),
            metal: metal.to_string(),
            country: lookup(countries, country),
            collector_value: lookup(values, value),
            ..Default::default()
        },
    )
    .collect()
}

fn banknotes(countries: &[Country], values: &[CollectorValue]) -> Vec<Banknote> {
    [
        (BANKNOTE_US_DOLLAR, "Dollars", 1, "1957", "Green", 0, 4),
        (BANKNOTE_MEXICAN_PESO, "Pesos", 50, "1981", "Blue", 3, 1),
        (BANKNOTE_JAPANESE_YEN, "Yen", 1000, "1984", "Blue", 5, 0),
        (BANKNOTE_US_DOLLAR_SERIES, "Dollars", 5, "1963", "Green", 0, 1),
        (BANKNOTE_CANADIAN_POUND, "Pounds", 1, "1870", "Black", 2, 5),
        (BANKNOTE_KUWAITI_DINAR, "Dinars", 20, "1994", "Brown", 1, 3),
    ]
    .into_iter()
    .map(
        |(id, kind, face_value, release_date, color, country, value)| Banknote {
            id,
            face_value,
            banknote_type: kind.to_string(),
            release_date: release_date.to_string(),
            color: color.to_string(),
            country: lookup(countries, country),
            collector_value: lookup(values, value),
            ..Default::default()
        },
    )
    .collect()
}

fn collectables(
    coins: &[Coin],
    banknotes: &[Banknote],
    conditions: &[Condition],
) -> Vec<CollectionCollectable> {
    let catalogue: Vec<Collectable> = coins
        .iter()
        .map(Collectable::from)
        .chain(banknotes.iter().map(Collectable::from))
        .collect();

    [
        (COLLECTABLE_GEOFF_DOLLAR, COLLECTION_GEOFF_COINS, COIN_US_DOLLAR, CONDITION_XF45),
        (COLLECTABLE_RYAN_YEN, COLLECTION_RYAN_BANKNOTES, BANKNOTE_JAPANESE_YEN, CONDITION_MS68),
        (COLLECTABLE_MICHAEL_PESO, COLLECTION_MICHAEL_BANKNOTES, BANKNOTE_MEXICAN_PESO, CONDITION_FINE),
        (COLLECTABLE_MICHAEL_YEN, COLLECTION_MICHAEL_COINS, COIN_JAPANESE_YEN, CONDITION_GOOD),
        (COLLECTABLE_MICHAEL_DINAR, COLLECTION_MICHAEL_BANKNOTES, BANKNOTE_KUWAITI_DINAR, CONDITION_AU52),
        (COLLECTABLE_GEOFF_PESO, COLLECTION_GEOFF_COINS, COIN_MEXICAN_PESO, CONDITION_VG10),
    ]
    .into_iter()
    .filter_map(|(id, collection_id, collectable_id, condition_id)| {
        let collectable = catalogue.iter().find(|c| c.id == collectable_id)?.clone();
        let condition = conditions.iter().find(|c| c.id == condition_id)?.clone();
        Some(CollectionCollectable {
            id,
            collection_id,
            collectable,
            condition,
        })
    })
    .collect()
}

impl InMemoryBackend {
    /// Creates a backend preloaded with the sample catalogue.
    pub fn with_sample_data() -> StorageResult<Self> {
        let backend = Self::new();
        backend.seed()?;
        Ok(backend)
    }

    /// Loads the sample catalogue into this backend.
    pub fn seed(&self) -> StorageResult<()> {
        let countries = countries();
        let values = collector_values();
        let conditions = conditions();
        let coins = coins(&countries, &values);
        let banknotes = banknotes(&countries, &values);
        let collectables = collectables(&coins, &banknotes, &conditions);

        for user in users() {
            self.put(user)?;
        }
        for collection in collections() {
            self.put(collection)?;
        }
        for item in collectables {
            self.put(item)?;
        }
        for coin in coins {
            self.put(coin)?;
        }
        for banknote in banknotes {
            self.put(banknote)?;
        }
        for country in countries {
            self.put(country)?;
        }
        for condition in conditions {
            self.put(condition)?;
        }
        for value in values {
            self.put(value)?;
        }

        tracing::info!(backend = Self::NAME, "Loaded sample catalogue");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_counts() {
        let backend = InMemoryBackend::with_sample_data().unwrap();
        assert_eq!(backend.count::<User>(), 6);
        assert_eq!(backend.count::<Collection>(), 6);
        assert_eq!(backend.count::<CollectionCollectable>(), 6);
        assert_eq!(backend.count::<Coin>(), 6);
        assert_eq!(backend.count::<Banknote>(), 6);
        assert_eq!(backend.count::<Country>(), 6);
        assert_eq!(backend.count::<Condition>(), 6);
        assert_eq!(backend.count::<CollectorValue>(), 6);
    }

    #[test]
    fn test_seed_twice_fails() {
        let backend = InMemoryBackend::with_sample_data().unwrap();
        assert!(backend.seed().is_err());
    }
}
