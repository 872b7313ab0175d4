//! Collectors.

use uuid::Uuid;

use crate::types::{AttributeValue, Entity};

/// A collector who owns collections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub email: String,
}

impl User {
    /// First and last name joined by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Entity for User {
    const RESOURCE_TYPE: &'static str = "User";
    const ATTRIBUTES: &'static [&'static str] =
        &["Id", "FirstName", "LastName", "UserName", "Email"];

    fn id(&self) -> Uuid {
        self.id
    }

    fn attribute(&self, path: &str) -> Option<AttributeValue> {
        match path {
            "Id" => Some(self.id.into()),
            "FirstName" => Some((&self.first_name).into()),
            "LastName" => Some((&self.last_name).into()),
            "UserName" => Some((&self.user_name).into()),
            "Email" => Some((&self.email).into()),
            _ => None,
        }
    }
}
