//! Error types for the datasource cache
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Lookup Error Enum ==
/// Unified error type for cache and lookup operations.
///
/// A key that no layer can resolve is not an error inside the library
/// (lookups return `Ok(None)`); `NotFound` is raised at the HTTP edge.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LookupError {
    /// Nothing resolved for the requested key
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A bounded cache was configured with zero capacity
    #[error("Invalid capacity: {0}")]
    InvalidCapacity(usize),

    /// A backing resolver (repository, RDF store) failed
    #[error("Resolver failure: {0}")]
    Resolver(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        let status = match &self {
            LookupError::NotFound(_) => StatusCode::NOT_FOUND,
            LookupError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            LookupError::Resolver(_) => StatusCode::BAD_GATEWAY,
            LookupError::InvalidCapacity(_) | LookupError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for lookups.
pub type Result<T> = std::result::Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        let test_cases = vec![
            (LookupError::NotFound("job 7".to_string()), StatusCode::NOT_FOUND),
            (LookupError::InvalidRequest("bad".to_string()), StatusCode::BAD_REQUEST),
            (LookupError::Resolver("down".to_string()), StatusCode::BAD_GATEWAY),
            (LookupError::InvalidCapacity(0), StatusCode::INTERNAL_SERVER_ERROR),
            (LookupError::Internal("error".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            LookupError::Resolver("connection refused".to_string()).to_string(),
            "Resolver failure: connection refused"
        );
        assert_eq!(LookupError::InvalidCapacity(0).to_string(), "Invalid capacity: 0");
    }
}
