//! Structured error responses shared by all HTTP surfaces.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response body.
///
/// Returned for all error responses so clients see a consistent shape:
/// - `error`: machine-readable identifier (e.g. "conflict")
/// - `message`: human-readable message
/// - `details`: optional structured details (e.g. validation violations)
///
/// # JSON example
///
/// ```json
/// {
///   "error": "conflict",
///   "message": "user 'alice' already exists"
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Fallback handler for unmatched routes.
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("not_found", "The requested resource was not found")),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_serializes_without_empty_details() {
        let body = serde_json::to_value(ErrorResponse::new("conflict", "already exists")).unwrap();
        assert_eq!(body["error"], "conflict");
        assert_eq!(body["message"], "already exists");
        assert!(body.get("details").is_none());
    }

    #[test]
    fn test_error_response_with_details() {
        let body = serde_json::to_value(
            ErrorResponse::new("bad_request", "validation failed")
                .with_details(serde_json::json!({"violations": ["username is required"]})),
        )
        .unwrap();
        assert_eq!(body["details"]["violations"][0], "username is required");
    }
}
