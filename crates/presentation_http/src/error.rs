//! API error handling
//!
//! Provides sanitized error responses that don't leak implementation details.
//! The body is always `{ "error": "<fixed message>" }`; causes are logged, not
//! returned.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body message for any failure of the upstream weather feed
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to retrieve Mars weather data";

/// Body message for failures unrelated to the upstream feed
pub const INTERNAL_FAILURE_MESSAGE: &str = "An internal error occurred";

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Upstream fetch failed: {0}")]
    UpstreamFetch(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::UpstreamFetch(_) => UPSTREAM_FAILURE_MESSAGE,
            Self::Internal(_) => INTERNAL_FAILURE_MESSAGE,
        };

        let body = ErrorResponse {
            error: message.to_string(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::UpstreamFetch | ApplicationError::MalformedDocument(_) => {
                Self::UpstreamFetch(err.to_string())
            },
            ApplicationError::Configuration(msg) => Self::Internal(msg),
        }
    }
}
