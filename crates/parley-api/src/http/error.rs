//! Relay error to HTTP response mapping.
//!
//! Vendor failures never reach this layer -- the relay converts them into
//! diagnostic reply text. Only request-shape errors (400) and genuinely
//! unexpected failures (500) surface as non-200 responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use parley_types::error::RelayError;

/// Application-level error that maps to the relay's HTTP error envelope.
#[derive(Debug)]
pub enum AppError {
    /// Request carried no usable message.
    EmptyMessage,
    /// Anything else.
    Internal(String),
}

impl From<RelayError> for AppError {
    fn from(e: RelayError) -> Self {
        match e {
            RelayError::EmptyMessage => AppError::EmptyMessage,
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::EmptyMessage => {
                (StatusCode::BAD_REQUEST, "No message provided".to_string())
            }
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
