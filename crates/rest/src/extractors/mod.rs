//! Axum extractors.
//!
//! - [`Representation`] - Response representation negotiated from `Accept`
//! - [`ListQuery`] - Decoded list query string

mod representation;

pub use crate::query::ListQuery;
pub use representation::{HATEOAS_MEDIA_TYPE, Representation};
