//! Response building.
//!
//! - [`shaping`] - `fields` validation and projection
//! - [`links`] - Collection and item hypermedia links
//! - [`headers`] - The `X-Pagination` header
//! - [`envelope`] - Bodies for each representation

pub mod envelope;
pub mod headers;
pub mod links;
pub mod shaping;

pub use envelope::{
    LinkedCollection, ResponseContext, created_response, item_response, list_response,
};
pub use headers::{PaginationMetadata, X_PAGINATION};
pub use links::{HypermediaLinkBuilder, Link, ResourceUriType};
pub use shaping::{FieldProjector, FieldSchema, FieldSelection, ProjectedRecord};
