//! Core storage traits and abstractions.
//!
//! - [`ResourceStorage`] - query, lookup, insert, and delete for any
//!   [`Entity`](crate::types::Entity)
//!
//! # Example: Implementing a Storage Backend
//!
//! ```ignore
//! use async_trait::async_trait;
//! use recollectable_persistence::core::ResourceStorage;
//! use recollectable_persistence::error::StorageResult;
//! use recollectable_persistence::specification::Specification;
//! use recollectable_persistence::types::{Entity, SortInstruction};
//!
//! struct MyBackend {
//!     // ... backend-specific fields
//! }
//!
//! #[async_trait]
//! impl ResourceStorage for MyBackend {
//!     fn backend_name(&self) -> &'static str {
//!         "my-backend"
//!     }
//!
//!     async fn query<E: Entity>(
//!         &self,
//!         specification: &Specification<E>,
//!         sort: &[SortInstruction],
//!     ) -> StorageResult<Vec<E>> {
//!         // Translate specification.filter() into the store's filter language
//!         todo!()
//!     }
//!
//!     // ... other methods
//! }
//! ```

mod storage;

pub use storage::ResourceStorage;
