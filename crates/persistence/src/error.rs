//! Error types for the persistence layer.
//!
//! Storage errors are split by category so callers can map each one to an
//! appropriate transport status without inspecting messages.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Resource state errors
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// Validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Backend-specific errors
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Errors related to resource state.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// The requested resource was not found.
    #[error("resource not found: {resource_type}/{id}")]
    NotFound { resource_type: String, id: String },

    /// A resource with the given ID already exists.
    #[error("resource already exists: {resource_type}/{id}")]
    AlreadyExists { resource_type: String, id: String },
}

/// Errors raised while building queries against an entity.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A specification or sort instruction referenced an attribute the entity does not declare.
    #[error("unknown attribute '{attribute}' on {resource_type}")]
    UnknownAttribute {
        resource_type: String,
        attribute: String,
    },
}

/// Errors originating from the storage backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Internal backend error.
    #[error("internal error in {backend_name}: {message}")]
    Internal {
        backend_name: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

impl StorageError {
    /// Shorthand for a [`ResourceError::NotFound`].
    pub fn not_found(resource_type: impl Into<String>, id: impl ToString) -> Self {
        StorageError::Resource(ResourceError::NotFound {
            resource_type: resource_type.into(),
            id: id.to_string(),
        })
    }

    /// Shorthand for a [`ValidationError::UnknownAttribute`].
    pub fn unknown_attribute(resource_type: impl Into<String>, attribute: impl Into<String>) -> Self {
        StorageError::Validation(ValidationError::UnknownAttribute {
            resource_type: resource_type.into(),
            attribute: attribute.into(),
        })
    }

    /// Returns true if this error means the addressed resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::Resource(ResourceError::NotFound { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::not_found("Coin", "123");
        assert_eq!(err.to_string(), "resource not found: Coin/123");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_unknown_attribute_display() {
        let err = StorageError::unknown_attribute("Coin", "Colour");
        assert_eq!(err.to_string(), "unknown attribute 'Colour' on Coin");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_backend_error_display() {
        let err = BackendError::Internal {
            backend_name: "memory".to_string(),
            message: "table type mismatch".to_string(),
            source: None,
        };
        assert_eq!(
            err.to_string(),
            "internal error in memory: table type mismatch"
        );
    }
}
