//! Request query handling.
//!
//! - [`parameters`] - Raw query string decoding and clamped [`ResourceParameters`]
//! - [`sort`] - Public sort keys resolved to ordered sort instructions

pub mod parameters;
pub mod sort;

pub use parameters::{ListQuery, ResourceParameters};
pub use sort::{PropertyMappingValue, SortFieldResolver, SortMappingTable};

use thiserror::Error;

/// Errors raised while validating a request's query before any data access.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// An `orderBy` term has no mapping for the resource.
    #[error("cannot sort {resource_type} by '{key}'")]
    UnknownSortKey {
        /// The resource being listed.
        resource_type: String,
        /// The offending sort key as the client sent it.
        key: String,
    },

    /// A `fields` entry is not part of the resource's schema.
    #[error("{resource_type} has no field named '{field}'")]
    UnknownFieldName {
        /// The resource being shaped.
        resource_type: String,
        /// The offending field name as the client sent it.
        field: String,
    },

    /// No sort table or field schema was registered for the resource.
    #[error("no query mapping registered for {resource_type}")]
    UnknownResource {
        /// The unregistered resource.
        resource_type: String,
    },
}
