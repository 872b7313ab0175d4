//! Reference data shared by collectables: countries, conditions, and
//! collector values.

use uuid::Uuid;

use crate::types::{AttributeValue, Entity};

/// A country that issues currency.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Country {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

impl Entity for Country {
    const RESOURCE_TYPE: &'static str = "Country";
    const ATTRIBUTES: &'static [&'static str] = &["Id", "Name", "Description"];

    fn id(&self) -> Uuid {
        self.id
    }

    fn attribute(&self, path: &str) -> Option<AttributeValue> {
        match path {
            "Id" => Some(self.id.into()),
            "Name" => Some((&self.name).into()),
            "Description" => Some(self.description.clone().into()),
            _ => None,
        }
    }
}

/// The physical state of a collectable, e.g. `Fine` or `MS68`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Condition {
    pub id: Uuid,
    pub grade: String,
    pub language_code: String,
}

impl Entity for Condition {
    const RESOURCE_TYPE: &'static str = "Condition";
    const ATTRIBUTES: &'static [&'static str] = &["Id", "Grade", "LanguageCode"];

    fn id(&self) -> Uuid {
        self.id
    }

    fn attribute(&self, path: &str) -> Option<AttributeValue> {
        match path {
            "Id" => Some(self.id.into()),
            "Grade" => Some((&self.grade).into()),
            "LanguageCode" => Some((&self.language_code).into()),
            _ => None,
        }
    }
}

/// Market values of a collectable per Sheldon grade.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectorValue {
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

impl Entity for CollectorValue {
    const RESOURCE_TYPE: &'static str = "CollectorValue";
    const ATTRIBUTES: &'static [&'static str] = &[
        "Id", "G4", "VG8", "F12", "VF20", "XF40", "AU50", "MS60", "MS63", "PF60", "PF63", "PF65",
    ];

    fn id(&self) -> Uuid {
        self.id
    }

    fn attribute(&self, path: &str) -> Option<AttributeValue> {
        let value = match path {
            "Id" => return Some(self.id.into()),
            "G4" => self.g4,
            "VG8" => self.vg8,
            "F12" => self.f12,
            "VF20" => self.vf20,
            "XF40" => self.xf40,
            "AU50" => self.au50,
            "MS60" => self.ms60,
            "MS63" => self.ms63,
            "PF60" => self.pf60,
            "PF63" => self.pf63,
            "PF65" => self.pf65,
            _ => return None,
        };
        Some(value.into())
    }
}
