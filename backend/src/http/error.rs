//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::db::repository::RepositoryError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (validation error)
    BadRequest(String),
    /// Internal server error
    Internal(String),
    /// Repository error
    Repository(RepositoryError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
            AppError::Repository(e) => {
                let details = e.context().to_string();
                match e {
                    RepositoryError::NotFound { message, .. } => (
                        StatusCode::NOT_FOUND,
                        ApiError::new("NOT_FOUND", message).with_details(details),
                    ),
                    RepositoryError::ValidationError { message, .. } => (
                        StatusCode::BAD_REQUEST,
                        ApiError::new("VALIDATION_ERROR", message).with_details(details),
                    ),
                    RepositoryError::ConnectionError { message, .. } => (
                        StatusCode::SERVICE_UNAVAILABLE,
                        ApiError::new("REPOSITORY_UNAVAILABLE", message).with_details(details),
                    ),
                    other => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ApiError::new("REPOSITORY_ERROR", other.to_string()),
                    ),
                }
            }
        };

        if status.is_server_error() {
            tracing::error!(code = %error.code, "{}", error.message);
        }

        (status, Json(error)).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_status() {
        let response = AppError::BadRequest("too long".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_repository_not_found_maps_to_404() {
        let response = AppError::from(RepositoryError::not_found("Video x not found")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_repository_validation_maps_to_400() {
        let response = AppError::from(RepositoryError::validation("bad")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_repository_connection_maps_to_503() {
        let response = AppError::from(RepositoryError::connection("down")).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_anyhow_maps_to_500() {
        let response = AppError::from(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_api_error_skips_empty_details() {
        let json = serde_json::to_value(ApiError::new("X", "y")).unwrap();
        assert!(json.get("details").is_none());
    }
}
