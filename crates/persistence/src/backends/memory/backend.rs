//! In-memory backend implementation.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt::Debug;

use parking_lot::RwLock;

use crate::error::{BackendError, ResourceError, StorageError, StorageResult};
use crate::types::Entity;

type Table = Box<dyn Any + Send + Sync>;

/// In-memory storage for catalogue entities.
///
/// Each entity type lives in its own table, kept in insertion order. All
/// tables sit behind one [`RwLock`], so queries run concurrently and writes
/// are serialized.
pub struct InMemoryBackend {
    tables: RwLock<HashMap<TypeId, Table>>,
}

impl Debug for InMemoryBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryBackend")
            .field("tables", &self.tables.read().len())
            .finish_non_exhaustive()
    }
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryBackend {
    /// Name reported by [`ResourceStorage::backend_name`](crate::core::ResourceStorage::backend_name).
    pub const NAME: &'static str = "memory";

    /// Creates an empty backend.
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(HashMap::new()),
        }
    }

    /// Runs `f` against the table for `E` under a read lock.
    ///
    /// A type with no table yet reads as empty.
    pub(crate) fn read_table<E: Entity, R>(
        &self,
        f: impl FnOnce(&[E]) -> R,
    ) -> StorageResult<R> {
        let tables = self.tables.read();
        match tables.get(&TypeId::of::<E>()) {
            None => Ok(f(&[])),
            Some(table) => table
                .downcast_ref::<Vec<E>>()
                .map(|rows| f(rows))
                .ok_or_else(|| table_mismatch::<E>()),
        }
    }

    /// Runs `f` against the table for `E` under a write lock, creating it if needed.
    pub(crate) fn write_table<E: Entity, R>(
        &self,
        f: impl FnOnce(&mut Vec<E>) -> StorageResult<R>,
    ) -> StorageResult<R> {
        let mut tables = self.tables.write();
        let table = tables
            .entry(TypeId::of::<E>())
            .or_insert_with(|| Box::new(Vec::<E>::new()));
        let rows = table
            .downcast_mut::<Vec<E>>()
            .ok_or_else(table_mismatch::<E>)?;
        f(rows)
    }

    /// Stores `entity` without going through the async trait.
    pub fn put<E: Entity>(&self, entity: E) -> StorageResult<E> {
        self.write_table(|rows: &mut Vec<E>| {
            let id = entity.id();
            if rows.iter().any(|row| row.id() == id) {
                return Err(StorageError::Resource(ResourceError::AlreadyExists {
                    resource_type: E::RESOURCE_TYPE.to_string(),
                    id: id.to_string(),
                }));
            }
            rows.push(entity.clone());
            Ok(entity)
        })
    }

    /// Number of stored entities of type `E`.
    pub fn count<E: Entity>(&self) -> usize {
        self.read_table(|rows: &[E]| rows.len()).unwrap_or(0)
    }
}

fn table_mismatch<E: Entity>() -> StorageError {
    StorageError::Backend(BackendError::Internal {
        backend_name: InMemoryBackend::NAME.to_string(),
        message: format!("table for {} holds another type", E::RESOURCE_TYPE),
        source: None,
    })
}
