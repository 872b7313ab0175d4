//! In-memory backend.
//!
//! Keeps every entity type in an insertion-ordered table behind a single
//! `parking_lot` read/write lock. Queries evaluate the specification's
//! [`Filter`](crate::specification::Filter) in memory, then apply a stable
//! multi-key sort.
//!
//! ```
//! use recollectable_persistence::backends::memory::{InMemoryBackend, seed};
//! use recollectable_persistence::entities::User;
//!
//! let backend = InMemoryBackend::with_sample_data()?;
//! assert_eq!(backend.count::<User>(), 6);
//! # let _ = seed::USER_RYAN;
//! # Ok::<(), recollectable_persistence::StorageError>(())
//! ```

mod backend;
pub mod seed;
mod storage;

pub use backend::InMemoryBackend;
