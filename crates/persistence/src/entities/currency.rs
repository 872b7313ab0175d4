//! Coins and banknotes.

use uuid::Uuid;

use super::{CollectorValue, Country, nested};
use crate::types::{AttributeValue, Entity};

/// A coin in the catalogue.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Coin {
    pub id: Uuid,
    pub face_value: i32,
    pub coin_type: String,
    pub release_date: String,
    pub mintage: i64,
    pub weight: f64,
    pub size: f64,
    pub metal: String,
    pub note: String,
    pub subject: String,
    pub obverse_description: String,
    pub obverse_inscription: String,
    pub obverse_legend: String,
    pub reverse_description: String,
    pub reverse_inscription: String,
    pub reverse_legend: String,
    pub edge_type: String,
    pub edge_legend: String,
    pub designer: String,
    pub head_of_state: String,
    pub mint_mark: String,
    pub front_image_path: String,
    pub back_image_path: String,
    pub country: Country,
    pub collector_value: CollectorValue,
}

impl Entity for Coin {
    const RESOURCE_TYPE: &'static str = "Coin";
    const ATTRIBUTES: &'static [&'static str] = &[
        "Id",
        "FaceValue",
        "Type",
        "ReleaseDate",
        "Mintage",
        "Weight",
        "Size",
        "Metal",
        "Subject",
        "Designer",
        "HeadOfState",
        "MintMark",
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
            "FaceValue" => Some(self.face_value.into()),
            "Type" => Some((&self.coin_type).into()),
            "ReleaseDate" => Some((&self.release_date).into()),
            "Mintage" => Some(self.mintage.into()),
            "Weight" => Some(self.weight.into()),
            "Size" => Some(self.size.into()),
            "Metal" => Some((&self.metal).into()),
            "Subject" => Some((&self.subject).into()),
            "Designer" => Some((&self.designer).into()),
            "HeadOfState" => Some((&self.head_of_state).into()),
            "MintMark" => Some((&self.mint_mark).into()),
            "Country.Id" | "Country.Name" => nested(&self.country, "Country", path),
            "CollectorValue.Id" => nested(&self.collector_value, "CollectorValue", path),
            _ => None,
        }
    }
}

/// A banknote in the catalogue.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Banknote {
    pub id: Uuid,
    pub face_value: i32,
    pub banknote_type: String,
    pub release_date: String,
    pub length: f64,
    pub width: f64,
    pub color: String,
    pub watermark: String,
    pub signature: String,
    pub obverse_description: String,
    pub reverse_description: String,
    pub designer: String,
    pub head_of_state: String,
    pub note: String,
    pub front_image_path: String,
    pub back_image_path: String,
    pub country: Country,
    pub collector_value: CollectorValue,
}

impl Entity for Banknote {
    const RESOURCE_TYPE: &'static str = "Banknote";
    const ATTRIBUTES: &'static [&'static str] = &[
        "Id",
        "FaceValue",
        "Type",
        "ReleaseDate",
        "Length",
        "Width",
        "Color",
        "Watermark",
        "Signature",
        "Designer",
        "HeadOfState",
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
            "FaceValue" => Some(self.face_value.into()),
            "Type" => Some((&self.banknote_type).into()),
            "ReleaseDate" => Some((&self.release_date).into()),
            "Length" => Some(self.length.into()),
            "Width" => Some(self.width.into()),
            "Color" => Some((&self.color).into()),
            "Watermark" => Some((&self.watermark).into()),
            "Signature" => Some((&self.signature).into()),
            "Designer" => Some((&self.designer).into()),
            "HeadOfState" => Some((&self.head_of_state).into()),
            "Country.Id" | "Country.Name" => nested(&self.country, "Country", path),
            "CollectorValue.Id" => nested(&self.collector_value, "CollectorValue", path),
            _ => None,
        }
    }
}
