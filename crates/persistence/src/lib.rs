//! Recollectable Persistence Layer
//!
//! This crate holds the catalogue entities (coins, banknotes, collections,
//! users, and their reference data) and the storage abstraction the REST
//! layer queries.
//!
//! # Architecture
//!
//! - [`entities`] - Catalogue entities with declared attribute paths
//! - [`specification`] - Composable, backend-neutral filters
//! - [`types`] - Attribute values, sort instructions, and pagination
//! - [`error`] - Error types for all operations
//! - [`core`] - The [`ResourceStorage`] trait
//! - [`backends`] - Backend implementations
//!
//! # Quick Start
//!
//! ```
//! use recollectable_persistence::entities::Coin;
//! use recollectable_persistence::specification::Specification;
//! use recollectable_persistence::types::{PageComputer, SortInstruction};
//!
//! // Which coins: anything from a country whose name contains "an"
//! let spec = Specification::<Coin>::contains_ignore_case("Country.Name", "an")?;
//!
//! // In which order: country name, then face value, highest first
//! let sort = vec![
//!     SortInstruction::ascending("Country.Name"),
//!     SortInstruction::descending("FaceValue"),
//! ];
//!
//! // Which slice: second page of two
//! let page = PageComputer::new(50).create(vec![1, 2, 3], 2, 2);
//! assert_eq!(page.items(), &[3]);
//! # let _ = (spec, sort);
//! # Ok::<(), recollectable_persistence::StorageError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod entities;
pub mod error;
pub mod specification;
pub mod types;

// Re-export commonly used types at crate root
pub use core::ResourceStorage;
pub use error::{StorageError, StorageResult};
pub use specification::{Filter, Specification};
pub use types::{Entity, Page, PageComputer, SortDirection, SortInstruction};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
