//! Reference data DTOs.

use recollectable_persistence::core::ResourceStorage;
use recollectable_persistence::entities::{CollectorValue, Condition, Country};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::input::{EntityInput, required};
use crate::error::RestResult;
use crate::responses::shaping::FieldSchema;

/// A country.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CountryDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

impl FieldSchema for CountryDto {
    const FIELDS: &'static [&'static str] = &["Id", "Name", "Description"];
}

impl From<&Country> for CountryDto {
    fn from(country: &Country) -> Self {
        Self {
            id: country.id,
            name: country.name.clone(),
            description: country.description.clone(),
        }
    }
}

/// A condition grade.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConditionDto {
    pub id: Uuid,
    pub grade: String,
    pub language_code: String,
}

impl FieldSchema for ConditionDto {
    const FIELDS: &'static [&'static str] = &["Id", "Grade", "LanguageCode"];
}

impl From<&Condition> for ConditionDto {
    fn from(condition: &Condition) -> Self {
        Self {
            id: condition.id,
            grade: condition.grade.clone(),
            language_code: condition.language_code.clone(),
        }
    }
}

/// Collector values per grade.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct CollectorValueDto {
    #[serde(rename = "Id")]
    pub id: Uuid,
    pub g4: Option<f64>,
    pub vg8: Option<f64>,
    pub f12: Option<f64>,
    pub vf20: Option<f64>,
    pub xf40: Option<f64>,
    pub au50: Option<f64>,
    pub ms60: Option<f64>,
    pub ms63: Option<f64>,
    pub pf60: Option<f64>,
    pub pf63: Option<f64>,
    pub pf65: Option<f64>,
}

impl FieldSchema for CollectorValueDto {
    const FIELDS: &'static [&'static str] = &[
        "Id", "G4", "VG8", "F12", "VF20", "XF40", "AU50", "MS60", "MS63", "PF60", "PF63", "PF65",
    ];
}

impl From<&CollectorValue> for CollectorValueDto {
    fn from(value: &CollectorValue) -> Self {
        Self {
            id: value.id,
            g4: value.g4,
            vg8: value.vg8,
            f12: value.f12,
            vf20: value.vf20,
            xf40: value.xf40,
            au50: value.au50,
            ms60: value.ms60,
            ms63: value.ms63,
            pf60: value.pf60,
            pf63: value.pf63,
            pf65: value.pf65,
        }
    }
}

/// Body that creates or replaces a country.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CountryInput {
    pub name: String,
    pub description: Option<String>,
}

impl EntityInput for CountryInput {
    type Entity = Country;

    fn from_entity(country: &Country) -> Self {
        Self {
            name: country.name.clone(),
            description: country.description.clone(),
        }
    }

    async fn into_entity<S: ResourceStorage>(self, _storage: &S, id: Uuid) -> RestResult<Country> {
        required("Name", &self.name)?;
        Ok(Country {
            id,
            name: self.name,
            description: self.description,
        })
    }
}

/// Body that creates or replaces a condition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ConditionInput {
    pub grade: String,
    pub language_code: String,
}

impl EntityInput for ConditionInput {
    type Entity = Condition;

    fn from_entity(condition: &Condition) -> Self {
        Self {
            grade: condition.grade.clone(),
            language_code: condition.language_code.clone(),
        }
    }

    async fn into_entity<S: ResourceStorage>(
        self,
        _storage: &S,
        id: Uuid,
    ) -> RestResult<Condition> {
        required("Grade", &self.grade)?;
        Ok(Condition {
            id,
            grade: self.grade,
            language_code: self.language_code,
        })
    }
}

/// Body that creates or replaces a set of collector values. Every grade is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "UPPERCASE")]
pub struct CollectorValueInput {
    pub g4: Option<f64>,
    pub vg8: Option<f64>,
    pub f12: Option<f64>,
    pub vf20: Option<f64>,
    pub xf40: Option<f64>,
    pub au50: Option<f64>,
    pub ms60: Option<f64>,
    pub ms63: Option<f64>,
    pub pf60: Option<f64>,
    pub pf63: Option<f64>,
    pub pf65: Option<f64>,
}

impl EntityInput for CollectorValueInput {
    type Entity = CollectorValue;

    fn from_entity(value: &CollectorValue) -> Self {
        Self {
            g4: value.g4,
            vg8: value.vg8,
            f12: value.f12,
            vf20: value.vf20,
            xf40: value.xf40,
            au50: value.au50,
            ms60: value.ms60,
            ms63: value.ms63,
            pf60: value.pf60,
            pf63: value.pf63,
            pf65: value.pf65,
        }
    }

    async fn into_entity<S: ResourceStorage>(
        self,
        _storage: &S,
        id: Uuid,
    ) -> RestResult<CollectorValue> {
        Ok(CollectorValue {
            id,
            g4: self.g4,
            vg8: self.vg8,
            f12: self.f12,
            vf20: self.vf20,
            xf40: self.xf40,
            au50: self.au50,
            ms60: self.ms60,
            ms63: self.ms63,
            pf60: self.pf60,
            pf63: self.pf63,
            pf65: self.pf65,
        })
    }
}
