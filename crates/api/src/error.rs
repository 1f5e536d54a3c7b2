//! API error handling
//!
//! Consistent JSON error responses across all endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

/// Structured JSON error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// API error type that converts to JSON responses
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found
    NotFound(String),
    /// A diagnosis is already in flight
    Busy,
    /// Remedy provider failure: the diagnosis was aborted
    DiagnosisFailed(String),
    /// Storage error
    Storage(String),
    /// Internal server error
    Internal(String),
}

impl From<common::Error> for ApiError {
    fn from(e: common::Error) -> Self {
        match e {
            common::Error::NotFound(msg) => ApiError::NotFound(msg),
            common::Error::Busy => ApiError::Busy,
            common::Error::Provider(msg) => ApiError::DiagnosisFailed(msg),
            common::Error::Storage(msg) => ApiError::Storage(msg),
            common::Error::Config(msg) | common::Error::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, response) = match self {
            ApiError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: msg,
                    code: Some("not_found".to_string()),
                },
            ),
            ApiError::Busy => (
                StatusCode::CONFLICT,
                ErrorResponse {
                    error: "A diagnosis is already in progress".to_string(),
                    code: Some("diagnosis_in_flight".to_string()),
                },
            ),
            ApiError::DiagnosisFailed(msg) => {
                error!("Diagnosis failed: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorResponse {
                        error: "Could not analyze the plant image. Please try again."
                            .to_string(),
                        code: Some("diagnosis_failed".to_string()),
                    },
                )
            }
            ApiError::Storage(msg) => {
                error!("Storage error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Storage error".to_string(),
                        code: Some("storage_error".to_string()),
                    },
                )
            }
            ApiError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal server error".to_string(),
                        code: Some("internal_error".to_string()),
                    },
                )
            }
        };

        (status, Json(response)).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Extension trait to convert Option to NotFound
pub trait OptionExt<T> {
    fn not_found(self, resource: impl Into<String>) -> Result<T, ApiError>;
}

impl<T> OptionExt<T> for Option<T> {
    fn not_found(self, resource: impl Into<String>) -> Result<T, ApiError> {
        self.ok_or_else(|| ApiError::NotFound(resource.into()))
    }
}
