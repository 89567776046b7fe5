use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use jot_core::backend::AckEnvelope;
use thiserror::Error;

/// Errors rendered to clients.
///
/// Every failure leaves the wire as the `{success: false, message}` envelope
/// the original spreadsheet endpoint used, with a status code on top.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Note not found: {0}")]
    NotFound(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<jot_core::Error> for ApiError {
    fn from(error: jot_core::Error) -> Self {
        match error {
            jot_core::Error::NotFound(id) => Self::NotFound(id),
            other => Self::Storage(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = AckEnvelope {
            success: false,
            message: Some(self.to_string()),
        };
        (self.status(), Json(body)).into_response()
    }
}
