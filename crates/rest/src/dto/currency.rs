//! Coin and banknote DTOs.

use recollectable_persistence::core::ResourceStorage;
use recollectable_persistence::entities::{Banknote, Coin, CollectorValue, Country};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::input::{EntityInput, reference, required};
use super::{CollectorValueDto, CountryDto};
use crate::error::RestResult;
use crate::responses::shaping::FieldSchema;

/// A coin.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CoinDto {
    pub id: Uuid,
    pub face_value: i32,
    #[serde(rename = "Type")]
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
    pub country: CountryDto,
    pub collector_value: CollectorValueDto,
}

impl FieldSchema for CoinDto {
    const FIELDS: &'static [&'static str] = &[
        "Id",
        "FaceValue",
        "Type",
        "ReleaseDate",
        "Mintage",
        "Weight",
        "Size",
        "Metal",
        "Note",
        "Subject",
        "ObverseDescription",
        "ObverseInscription",
        "ObverseLegend",
        "ReverseDescription",
        "ReverseInscription",
        "ReverseLegend",
        "EdgeType",
        "EdgeLegend",
        "Designer",
        "HeadOfState",
        "MintMark",
        "FrontImagePath",
        "BackImagePath",
        "Country",
        "CollectorValue",
    ];
}

impl From<&Coin> for CoinDto {
    fn from(coin: &Coin) -> Self {
        Self {
            id: coin.id,
            face_value: coin.face_value,
            coin_type: coin.coin_type.clone(),
            release_date: coin.release_date.clone(),
            mintage: coin.mintage,
            weight: coin.weight,
            size: coin.size,
            metal: coin.metal.clone(),
            note: coin.note.clone(),
            subject: coin.subject.clone(),
            obverse_description: coin.obverse_description.clone(),
            obverse_inscription: coin.obverse_inscription.clone(),
            obverse_legend: coin.obverse_legend.clone(),
            reverse_description: coin.reverse_description.clone(),
            reverse_inscription: coin.reverse_inscription.clone(),
            reverse_legend: coin.reverse_legend.clone(),
            edge_type: coin.edge_type.clone(),
            edge_legend: coin.edge_legend.clone(),
            designer: coin.designer.clone(),
            head_of_state: coin.head_of_state.clone(),
            mint_mark: coin.mint_mark.clone(),
            front_image_path: coin.front_image_path.clone(),
            back_image_path: coin.back_image_path.clone(),
            country: CountryDto::from(&coin.country),
            collector_value: CollectorValueDto::from(&coin.collector_value),
        }
    }
}

/// A banknote.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BanknoteDto {
    pub id: Uuid,
    pub face_value: i32,
    #[serde(rename = "Type")]
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
    pub country: CountryDto,
    pub collector_value: CollectorValueDto,
}

impl FieldSchema for BanknoteDto {
    const FIELDS: &'static [&'static str] = &[
        "Id",
        "FaceValue",
        "Type",
        "ReleaseDate",
        "Length",
        "Width",
        "Color",
        "Watermark",
        "Signature",
        "ObverseDescription",
        "ReverseDescription",
        "Designer",
        "HeadOfState",
        "Note",
        "FrontImagePath",
        "BackImagePath",
        "Country",
        "CollectorValue",
    ];
}

impl From<&Banknote> for BanknoteDto {
    fn from(banknote: &Banknote) -> Self {
        Self {
            id: banknote.id,
            face_value: banknote.face_value,
            banknote_type: banknote.banknote_type.clone(),
            release_date: banknote.release_date.clone(),
            length: banknote.length,
            width: banknote.width,
            color: banknote.color.clone(),
            watermark: banknote.watermark.clone(),
            signature: banknote.signature.clone(),
            obverse_description: banknote.obverse_description.clone(),
            reverse_description: banknote.reverse_description.clone(),
            designer: banknote.designer.clone(),
            head_of_state: banknote.head_of_state.clone(),
            note: banknote.note.clone(),
            front_image_path: banknote.front_image_path.clone(),
            back_image_path: banknote.back_image_path.clone(),
            country: CountryDto::from(&banknote.country),
            collector_value: CollectorValueDto::from(&banknote.collector_value),
        }
    }
}

/// Resolves the country and collector values a coin or banknote points at.
async fn currency_references<S: ResourceStorage>(
    storage: &S,
    country_id: Uuid,
    collector_value_id: Uuid,
) -> RestResult<(Country, CollectorValue)> {
    let country = reference(storage, "CountryId", country_id).await?;
    let collector_value = reference(storage, "CollectorValueId", collector_value_id).await?;
    Ok((country, collector_value))
}

/// Body that creates or replaces a coin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CoinInput {
    pub face_value: i32,
    #[serde(rename = "Type")]
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
    pub country_id: Uuid,
    pub collector_value_id: Uuid,
}

impl EntityInput for CoinInput {
    type Entity = Coin;

    fn from_entity(coin: &Coin) -> Self {
        Self {
            face_value: coin.face_value,
            coin_type: coin.coin_type.clone(),
            release_date: coin.release_date.clone(),
            mintage: coin.mintage,
            weight: coin.weight,
            size: coin.size,
            metal: coin.metal.clone(),
            note: coin.note.clone(),
            subject: coin.subject.clone(),
            obverse_description: coin.obverse_description.clone(),
            obverse_inscription: coin.obverse_inscription.clone(),
            obverse_legend: coin.obverse_legend.clone(),
            reverse_description: coin.reverse_description.clone(),
            reverse_inscription: coin.reverse_inscription.clone(),
            reverse_legend: coin.reverse_legend.clone(),
            edge_type: coin.edge_type.clone(),
            edge_legend: coin.edge_legend.clone(),
            designer: coin.designer.clone(),
            head_of_state: coin.head_of_state.clone(),
            mint_mark: coin.mint_mark.clone(),
            front_image_path: coin.front_image_path.clone(),
            back_image_path: coin.back_image_path.clone(),
            country_id: coin.country.id,
            collector_value_id: coin.collector_value.id,
        }
    }

    async fn into_entity<S: ResourceStorage>(self, storage: &S, id: Uuid) -> RestResult<Coin> {
        required("Type", &self.coin_type)?;
        let (country, collector_value) =
            currency_references(storage, self.country_id, self.collector_value_id).await?;

        Ok(Coin {
            id,
            face_value: self.face_value,
            coin_type: self.coin_type,
            release_date: self.release_date,
            mintage: self.mintage,
            weight: self.weight,
            size: self.size,
            metal: self.metal,
            note: self.note,
            subject: self.subject,
            obverse_description: self.obverse_description,
            obverse_inscription: self.obverse_inscription,
            obverse_legend: self.obverse_legend,
            reverse_description: self.reverse_description,
            reverse_inscription: self.reverse_inscription,
            reverse_legend: self.reverse_legend,
            edge_type: self.edge_type,
            edge_legend: self.edge_legend,
            designer: self.designer,
            head_of_state: self.head_of_state,
            mint_mark: self.mint_mark,
            front_image_path: self.front_image_path,
            back_image_path: self.back_image_path,
            country,
            collector_value,
        })
    }
}

/// Body that creates or replaces a banknote.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BanknoteInput {
    pub face_value: i32,
    #[serde(rename = "Type")]
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
    pub country_id: Uuid,
    pub collector_value_id: Uuid,
}

impl EntityInput for BanknoteInput {
    type Entity = Banknote;

    fn from_entity(banknote: &Banknote) -> Self {
        Self {
            face_value: banknote.face_value,
            banknote_type: banknote.banknote_type.clone(),
            release_date: banknote.release_date.clone(),
            length: banknote.length,
            width: banknote.width,
            color: banknote.color.clone(),
            watermark: banknote.watermark.clone(),
            signature: banknote.signature.clone(),
            obverse_description: banknote.obverse_description.clone(),
            reverse_description: banknote.reverse_description.clone(),
            designer: banknote.designer.clone(),
            head_of_state: banknote.head_of_state.clone(),
            note: banknote.note.clone(),
            front_image_path: banknote.front_image_path.clone(),
            back_image_path: banknote.back_image_path.clone(),
            country_id: banknote.country.id,
            collector_value_id: banknote.collector_value.id,
        }
    }

    async fn into_entity<S: ResourceStorage>(self, storage: &S, id: Uuid) -> RestResult<Banknote> {
        required("Type", &self.banknote_type)?;
        let (country, collector_value) =
            currency_references(storage, self.country_id, self.collector_value_id).await?;

        Ok(Banknote {
            id,
            face_value: self.face_value,
            banknote_type: self.banknote_type,
            release_date: self.release_date,
            length: self.length,
            width: self.width,
            color: self.color,
            watermark: self.watermark,
            signature: self.signature,
            obverse_description: self.obverse_description,
            reverse_description: self.reverse_description,
            designer: self.designer,
            head_of_state: self.head_of_state,
            note: self.note,
            front_image_path: self.front_image_path,
            back_image_path: self.back_image_path,
            country,
            collector_value,
        })
    }
}
