//! Collections and the collectables placed in them.

use uuid::Uuid;

use super::{Banknote, Coin, CollectorValue, Condition, Country, nested};
use crate::types::{AttributeValue, Entity};

/// A user's collection of coins or banknotes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    pub id: Uuid,
    pub collection_type: String,
    pub description: String,
    pub user_id: Uuid,
}

impl Entity for Collection {
    const RESOURCE_TYPE: &'static str = "Collection";
    const ATTRIBUTES: &'static [&'static str] = &["Id", "Type", "Description", "UserId"];

    fn id(&self) -> Uuid {
        self.id
    }

    fn attribute(&self, path: &str) -> Option<AttributeValue> {
        match path {
            "Id" => Some(self.id.into()),
            "Type" => Some((&self.collection_type).into()),
            "Description" => Some((&self.description).into()),
            "UserId" => Some(self.user_id.into()),
            _ => None,
        }
    }
}

/// The catalogue item behind a [`CollectionCollectable`].
///
/// Coins and banknotes share this shape once they are placed in a collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collectable {
    pub id: Uuid,
    pub collectable_type: String,
    pub release_date: String,
    pub country: Country,
    pub collector_value: CollectorValue,
}

impl Entity for Collectable {
    const RESOURCE_TYPE: &'static str = "Collectable";
    const ATTRIBUTES: &'static [&'static str] = &[
        "Id",
        "Type",
        "ReleaseDate",
        "Country.Id",
        "Country.Name",
        "CollectorValue.Id",
    ];

    fn id(&self) -> Uuid {
        self.id
    }

    fn attribute(&self, path: &str) -> Option<AttributeValue> {
        match path {
            "Id" => Some(self.id.into()),
            "Type" => Some((&self.collectable_type).into()),
            "ReleaseDate" => Some((&self.release_date).into()),
            "Country.Id" | "Country.Name" => nested(&self.country, "Country", path),
            "CollectorValue.Id" => nested(&self.collector_value, "CollectorValue", path),
            _ => None,
        }
    }
}

impl From<&Coin> for Collectable {
    fn from(coin: &Coin) -> Self {
        Self {
            id: coin.id,
            collectable_type: coin.coin_type.clone(),
            release_date: coin.release_date.clone(),
            country: coin.country.clone(),
            collector_value: coin.collector_value.clone(),
        }
    }
}

impl From<&Banknote> for Collectable {
    fn from(banknote: &Banknote) -> Self {
        Self {
            id: banknote.id,
            collectable_type: banknote.banknote_type.clone(),
            release_date: banknote.release_date.clone(),
            country: banknote.country.clone(),
            collector_value: banknote.collector_value.clone(),
        }
    }
}

/// A collectable held in a collection, in a given condition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionCollectable {
    pub id: Uuid,
    pub collection_id: Uuid,
    pub collectable: Collectable,
    pub condition: Condition,
}

impl Entity for CollectionCollectable {
    const RESOURCE_TYPE: &'static str = "CollectionCollectable";
    const ATTRIBUTES: &'static [&'static str] = &[
        "Id",
        "CollectionId",
        "Collectable.Id",
        "Collectable.Type",
        "Collectable.ReleaseDate",
        "Collectable.Country.Name",
        "Condition.Id",
        "Condition.Grade",
    ];

    fn id(&self) -> Uuid {
        self.id
    }

    fn attribute(&self, path: &str) -> Option<AttributeValue> {
        match path {
            "Id" => Some(self.id.into()),
            "CollectionId" => Some(self.collection_id.into()),
            "Collectable.Id"
            | "Collectable.Type"
            | "Collectable.ReleaseDate"
            | "Collectable.Country.Name" => nested(&self.collectable, "Collectable", path),
            "Condition.Id" | "Condition.Grade" => nested(&self.condition, "Condition", path),
            _ => None,
        }
    }
}
