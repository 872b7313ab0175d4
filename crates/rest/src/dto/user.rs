//! User DTOs.

use recollectable_persistence::core::ResourceStorage;
use recollectable_persistence::entities::User;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::input::{EntityInput, required};
use crate::error::RestResult;
use crate::responses::shaping::FieldSchema;

/// A collector. `Name` joins first and last name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserDto {
    pub id: Uuid,
    pub name: String,
    pub user_name: String,
    pub email: String,
}

impl FieldSchema for UserDto {
    const FIELDS: &'static [&'static str] = &["Id", "Name", "UserName", "Email"];
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.full_name(),
            user_name: user.user_name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Body that creates or replaces a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UserInput {
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub email: String,
}

impl EntityInput for UserInput {
    type Entity = User;

    fn from_entity(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            user_name: user.user_name.clone(),
            email: user.email.clone(),
        }
    }

    async fn into_entity<S: ResourceStorage>(self, _storage: &S, id: Uuid) -> RestResult<User> {
        required("FirstName", &self.first_name)?;
        required("LastName", &self.last_name)?;
        required("Email", &self.email)?;
        Ok(User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            user_name: self.user_name,
            email: self.email,
        })
    }
}
