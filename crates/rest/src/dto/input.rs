//! Request bodies that create or replace entities.
//!
//! One input shape serves `POST` and `PUT`, and is also the document a
//! `PATCH` is applied to. References to other records travel as ids
//! (`CountryId`, `ConditionId`, ...) and are resolved against storage when
//! the entity is built.

use std::future::Future;

use recollectable_persistence::core::ResourceStorage;
use recollectable_persistence::specification::Specification;
use recollectable_persistence::types::Entity;
use serde::{Serialize, de::DeserializeOwned};
use uuid::Uuid;

use crate::error::{RestError, RestResult};

/// A client-supplied body for one kind of entity.
pub trait EntityInput: Serialize + DeserializeOwned + Send + 'static {
    /// The entity this input builds.
    type Entity: Entity;

    /// The input that would rebuild `entity` unchanged.
    fn from_entity(entity: &Self::Entity) -> Self;

    /// Builds the entity stored under `id`.
    ///
    /// # Errors
    ///
    /// * `RestError::BadRequest` - A required field is blank, or a referenced
    ///   record does not exist
    fn into_entity<S: ResourceStorage>(
        self,
        storage: &S,
        id: Uuid,
    ) -> impl Future<Output = RestResult<Self::Entity>> + Send;
}

/// Loads the record `field` points at.
pub(crate) async fn reference<S, E>(storage: &S, field: &str, id: Uuid) -> RestResult<E>
where
    S: ResourceStorage,
    E: Entity,
{
    storage
        .find(&Specification::<E>::by_id(id))
        .await?
        .ok_or_else(|| RestError::BadRequest {
            message: format!("{} '{}' does not name an existing {}", field, id, E::RESOURCE_TYPE),
        })
}

/// Rejects a blank required field.
pub(crate) fn required(field: &str, value: &str) -> RestResult<()> {
    if value.trim().is_empty() {
        return Err(missing(field));
    }
    Ok(())
}

/// The error for a required field that was not sent.
pub(crate) fn missing(field: &str) -> RestError {
    RestError::BadRequest {
        message: format!("missing required field: {}", field),
    }
}
