//! Error handling for the mock stability server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors a request handler can produce.
///
/// Validation failures map to HTTP 400, everything unexpected to HTTP 500.
/// Neither is fatal to the server process.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field is missing or a value is outside its closed set.
    #[error("{0}")]
    Validation(String),

    /// An unexpected failure while processing an otherwise routed request.
    #[error("{0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    #[must_use]
    pub fn validation(msg: impl Into<String>) -> Self {
        ApiError::Validation(msg.into())
    }

    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        ApiError::Internal(msg.into())
    }

    /// Whether this error reports an invalid request rather than a server fault.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = Json(serde_json::json!({
            "msg": "error",
            "code": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_implements_std_error() {
        let err = ApiError::internal("test");
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_validation_is_client_error() {
        assert!(ApiError::validation("missing field").is_client_error());
        assert!(!ApiError::internal("bug").is_client_error());
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::validation("x").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::internal("x").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
