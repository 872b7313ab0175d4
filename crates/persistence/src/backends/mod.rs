//! Storage backend implementations.
//!
//! # Available Backends
//!
//! | Backend | Module | Description |
//! |---------|--------|-------------|
//! | In-memory | [`memory`] | Lock-guarded tables, used for development and tests |
//!
//! # Example
//!
//! ```
//! use recollectable_persistence::backends::memory::InMemoryBackend;
//! use recollectable_persistence::core::ResourceStorage;
//!
//! let backend = InMemoryBackend::new();
//! assert_eq!(backend.backend_name(), "memory");
//! ```

pub mod memory;
