//! Error types for the Recollectable REST API.
//!
//! Every error renders as a JSON problem body:
//!
//! ```json
//! { "status": 400, "code": "unknown-sort-key", "message": "cannot sort coins by 'Weight'" }
//! ```
//!
//! # Error Mapping
//!
//! | Source | HTTP Status | Code |
//! |--------|-------------|------|
//! | NotFound | 404 | not-found |
//! | AlreadyExists | 409 | conflict |
//! | UnknownSortKey | 400 | unknown-sort-key |
//! | UnknownFieldName | 400 | unknown-field |
//! | ValidationError | 400 | invalid |
//! | BackendError | 500 | exception |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use recollectable_persistence::error::{
    BackendError, ResourceError, StorageError, ValidationError,
};
use std::fmt;

use crate::query::QueryError;

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// Resource not found (HTTP 404).
    NotFound {
        /// The resource type (e.g., "coins").
        resource_type: String,
        /// The resource ID.
        id: String,
    },

    /// Malformed request (HTTP 400).
    BadRequest {
        /// Message describing the problem.
        message: String,
    },

    /// `orderBy` names a key the resource cannot be sorted by (HTTP 400).
    UnknownSortKey {
        /// The resource type.
        resource_type: String,
        /// The rejected key.
        key: String,
    },

    /// `fields` names a field the resource does not have (HTTP 400).
    UnknownField {
        /// The resource type.
        resource_type: String,
        /// The rejected field.
        field: String,
    },

    /// The resource already exists (HTTP 409).
    Conflict {
        /// Message describing the conflict.
        message: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },
}

impl RestError {
    /// Shorthand for [`RestError::NotFound`].
    pub fn not_found(resource_type: impl Into<String>, id: impl ToString) -> Self {
        RestError::NotFound {
            resource_type: resource_type.into(),
            id: id.to_string(),
        }
    }

    /// Returns the HTTP status this error renders with.
    pub fn status(&self) -> StatusCode {
        match self {
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::BadRequest { .. }
            | RestError::UnknownSortKey { .. }
            | RestError::UnknownField { .. } => StatusCode::BAD_REQUEST,
            RestError::Conflict { .. } => StatusCode::CONFLICT,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the machine-readable code placed in the response body.
    pub fn code(&self) -> &'static str {
        match self {
            RestError::NotFound { .. } => "not-found",
            RestError::BadRequest { .. } => "invalid",
            RestError::UnknownSortKey { .. } => "unknown-sort-key",
            RestError::UnknownField { .. } => "unknown-field",
            RestError::Conflict { .. } => "conflict",
            RestError::InternalError { .. } => "exception",
        }
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound { resource_type, id } => {
                write!(f, "Resource not found: {}/{}", resource_type, id)
            }
            RestError::BadRequest { message } => write!(f, "Bad request: {}", message),
            RestError::UnknownSortKey { resource_type, key } => {
                write!(f, "Cannot sort {} by '{}'", resource_type, key)
            }
            RestError::UnknownField {
                resource_type,
                field,
            } => write!(f, "{} has no field named '{}'", resource_type, field),
            RestError::Conflict { message } => write!(f, "Conflict: {}", message),
            RestError::InternalError { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            RestError::NotFound { resource_type, id } => {
                format!("Resource {}/{} not found", resource_type, id)
            }
            RestError::BadRequest { message }
            | RestError::Conflict { message }
            | RestError::InternalError { message } => message.clone(),
            other => other.to_string(),
        };

        if status.is_server_error() {
            tracing::error!(code = self.code(), %message, "Request failed");
        }

        (status, Json(problem_body(status, self.code(), &message))).into_response()
    }
}

/// Builds the JSON problem body shared by every error response.
fn problem_body(status: StatusCode, code: &str, message: &str) -> serde_json::Value {
    serde_json::json!({
        "status": status.as_u16(),
        "code": code,
        "message": message,
    })
}

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Resource(e) => e.into(),
            StorageError::Validation(e) => e.into(),
            StorageError::Backend(e) => e.into(),
        }
    }
}

impl From<ResourceError> for RestError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::NotFound { resource_type, id } => {
                RestError::NotFound { resource_type, id }
            }
            ResourceError::AlreadyExists { resource_type, id } => RestError::Conflict {
                message: format!("Resource {}/{} already exists", resource_type, id),
            },
        }
    }
}

impl From<ValidationError> for RestError {
    fn from(err: ValidationError) -> Self {
        RestError::BadRequest {
            message: err.to_string(),
        }
    }
}

impl From<BackendError> for RestError {
    fn from(err: BackendError) -> Self {
        RestError::InternalError {
            message: err.to_string(),
        }
    }
}

impl From<QueryError> for RestError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::UnknownSortKey { resource_type, key } => {
                RestError::UnknownSortKey { resource_type, key }
            }
            QueryError::UnknownFieldName {
                resource_type,
                field,
            } => RestError::UnknownField {
                resource_type,
                field,
            },
            other @ QueryError::UnknownResource { .. } => RestError::InternalError {
                message: other.to_string(),
            },
        }
    }
}

impl From<serde_json::Error> for RestError {
    fn from(err: serde_json::Error) -> Self {
        RestError::InternalError {
            message: format!("Failed to serialize response: {}", err),
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = RestError::not_found("coins", "123");
        assert_eq!(err.to_string(), "Resource not found: coins/123");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_query_errors_are_bad_requests_with_distinct_codes() {
        let sort: RestError = QueryError::UnknownSortKey {
            resource_type: "coins".to_string(),
            key: "Weight".to_string(),
        }
        .into();
        let field: RestError = QueryError::UnknownFieldName {
            resource_type: "coins".to_string(),
            field: "bogus".to_string(),
        }
        .into();

        assert_eq!(sort.status(), StatusCode::BAD_REQUEST);
        assert_eq!(field.status(), StatusCode::BAD_REQUEST);
        assert_eq!(sort.code(), "unknown-sort-key");
        assert_eq!(field.code(), "unknown-field");
    }

    #[test]
    fn test_unregistered_resource_is_internal() {
        let err: RestError = QueryError::UnknownResource {
            resource_type: "stamps".to_string(),
        }
        .into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_storage_error_mapping() {
        let not_found: RestError = StorageError::not_found("Coin", "abc").into();
        assert!(matches!(not_found, RestError::NotFound { .. }));

        let unknown: RestError = StorageError::unknown_attribute("Coin", "Weight2").into();
        assert_eq!(unknown.code(), "invalid");

        let exists: RestError = StorageError::Resource(ResourceError::AlreadyExists {
            resource_type: "Coin".to_string(),
            id: "abc".to_string(),
        })
        .into();
        assert_eq!(exists.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_problem_body() {
        let body = problem_body(StatusCode::NOT_FOUND, "not-found", "gone fishing");
        assert_eq!(body["status"], 404);
        assert_eq!(body["code"], "not-found");
        assert_eq!(body["message"], "gone fishing");
    }
}
