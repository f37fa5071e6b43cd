//! API error types with IntoResponse
//!
//! Library errors are converted to JSON responses with appropriate status
//! codes. No library error surfaces as a 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use setlist_core::LibraryError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request input failed validation (400)
    Validation { field: &'static str, reason: &'static str },

    /// Resource not found (404)
    NotFound { resource: &'static str, id: i64 },

    /// Id already taken (409)
    Conflict { resource: &'static str, id: i64 },

    /// Unsupported argument such as a sort key (400)
    InvalidArgument { message: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation { field, reason } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "validation_error",
                    "message": format!("{}: {}", field, reason)
                }),
            ),
            Self::NotFound { resource, id } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "not_found",
                    "message": format!("{} '{}' not found", resource, id)
                }),
            ),
            Self::Conflict { resource, id } => (
                StatusCode::CONFLICT,
                json!({
                    "error": "conflict",
                    "message": format!("{} '{}' already exists", resource, id)
                }),
            ),
            Self::InvalidArgument { message } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "invalid_argument",
                    "message": message
                }),
            ),
        };

        tracing::debug!(status = status.as_u16(), error = ?self, "request rejected");
        (status, Json(body)).into_response()
    }
}

impl From<LibraryError> for ApiError {
    fn from(e: LibraryError) -> Self {
        match e {
            LibraryError::NotFound { resource, id } => Self::NotFound { resource, id },
            LibraryError::DuplicateKey { resource, id } => Self::Conflict { resource, id },
            LibraryError::InvalidArgument { .. } => Self::InvalidArgument {
                message: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation {
            field: "id",
            reason: "must be an integer",
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let err = ApiError::from(LibraryError::song_not_found(4));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "not_found");
        assert_eq!(body["message"], "song '4' not found");
    }

    #[tokio::test]
    async fn duplicate_is_409() {
        let err = ApiError::from(LibraryError::duplicate_playlist(10));
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn invalid_argument_is_400() {
        let err = ApiError::from(LibraryError::invalid_argument("sort key", "bpm"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "invalid_argument");
        assert_eq!(body["message"], "invalid sort key: 'bpm'");
    }
}
