//! Shared HTTP error body.

use serde::Serialize;

/// JSON error body returned by every endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    /// 400 body.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: "bad_request".to_string(),
            message: message.into(),
        }
    }

    /// 404 body.
    pub fn not_found(resource: &str, id: &str) -> Self {
        Self {
            error: "not_found".to_string(),
            message: format!("{resource} {id} not found"),
        }
    }

    /// 500 body.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: "internal_error".to_string(),
            message: message.into(),
        }
    }
}
