//! Core resource storage trait.
//!
//! This module defines the [`ResourceStorage`] trait, the contract every
//! backend fulfils for catalogue entities. Queries take a
//! [`Specification`] and a list of [`SortInstruction`]s and return the full
//! filtered and sorted sequence. Paging happens above the storage layer so
//! that counts and items always come from the same materialization.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StorageResult;
use crate::specification::Specification;
use crate::types::{Entity, SortInstruction};

/// Core storage trait for catalogue entities.
///
/// # Example
///
/// ```
/// use recollectable_persistence::backends::memory::InMemoryBackend;
/// use recollectable_persistence::core::ResourceStorage;
/// use recollectable_persistence::entities::Country;
/// use recollectable_persistence::specification::Specification;
/// use recollectable_persistence::types::SortInstruction;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let storage = InMemoryBackend::with_sample_data()?;
///
/// let spec = Specification::<Country>::contains_ignore_case("Name", "an")?;
/// let countries = storage
///     .query(&spec, &[SortInstruction::ascending("Name")])
///     .await?;
///
/// let names: Vec<_> = countries.iter().map(|c| c.name.as_str()).collect();
/// assert_eq!(names, ["Canada", "France", "Japan"]);
/// # Ok::<(), recollectable_persistence::StorageError>(())
/// # }).unwrap();
/// ```
#[async_trait]
pub trait ResourceStorage: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Returns every entity matching `specification`, ordered by `sort`.
    ///
    /// The sort is stable: entities equal under every instruction keep their
    /// storage order.
    ///
    /// # Errors
    ///
    /// * `StorageError::Validation(UnknownAttribute)` - If a sort path is not
    ///   declared by the entity. Nothing is read in that case.
    async fn query<E: Entity>(
        &self,
        specification: &Specification<E>,
        sort: &[SortInstruction],
    ) -> StorageResult<Vec<E>>;

    /// Returns the first entity matching `specification`, if any.
    async fn find<E: Entity>(&self, specification: &Specification<E>) -> StorageResult<Option<E>> {
        Ok(self.query(specification, &[]).await?.into_iter().next())
    }

    /// Returns true if any entity matches `specification`.
    async fn exists<E: Entity>(&self, specification: &Specification<E>) -> StorageResult<bool> {
        Ok(self.find(specification).await?.is_some())
    }

    /// Stores a new entity.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(AlreadyExists)` - If an entity with the same ID exists
    async fn insert<E: Entity>(&self, entity: E) -> StorageResult<E>;

    /// Replaces the stored entity that has the same ID, keeping its position.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - If no such entity exists
    async fn update<E: Entity>(&self, entity: E) -> StorageResult<E>;

    /// Removes the entity with the given ID.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - If no such entity exists
    async fn delete<E: Entity>(&self, id: Uuid) -> StorageResult<()>;
}
