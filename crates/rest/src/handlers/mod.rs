//! HTTP request handlers.
//!
//! - [`resource`] - List, read, create, update, patch, and delete for every
//!   top-level resource
//! - [`collectables`] - The same interactions nested under a collection
//! - [`pipeline`] - Validation, filtering, sorting, and paging shared by both
//! - [`health`] - Health check endpoint

pub mod collectables;
pub mod health;
pub mod pipeline;
pub mod resource;

pub use collectables::{
    create_collectable_handler, delete_collectable_handler, list_collectables_handler,
    patch_collectable_handler, read_collectable_handler, update_collectable_handler,
};
pub use health::health_handler;
pub use pipeline::PreparedQuery;
pub use resource::{
    block_creation_handler, create_handler, delete_handler, list_handler, patch_handler,
    read_handler, update_handler,
};
