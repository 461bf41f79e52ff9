use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::model::NotaryError;

/// Wire-format error body.
///
/// Always carries exactly these three fields, so every failure serializes
/// the same way regardless of which variant produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable code for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Structured context; key set fixed per code
    pub details: Map<String, Value>,
}

impl ErrorResponse {
    /// Create a new error response body
    pub fn new(
        error: impl Into<String>,
        message: impl Into<String>,
        details: Map<String, Value>,
    ) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details,
        }
    }
}

impl From<&NotaryError> for ErrorResponse {
    fn from(err: &NotaryError) -> Self {
        err.to_response()
    }
}

impl From<NotaryError> for ErrorResponse {
    fn from(err: NotaryError) -> Self {
        err.to_response()
    }
}

impl IntoResponse for NotaryError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}
