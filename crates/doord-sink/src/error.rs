use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("method not implemented: {0}")]
    UnsupportedMethod(String),

    #[error("missing Content-Length header")]
    LengthRequired,

    #[error("invalid Content-Length header: {0}")]
    InvalidLength(String),

    #[error("declared body of {declared} bytes exceeds limit of {limit}")]
    PayloadTooLarge { declared: u64, limit: u64 },

    #[error("body not received within {0:?}")]
    ReadTimeout(Duration),

    #[error("body length mismatch: declared {declared}, received {actual}")]
    BodyMismatch { declared: u64, actual: u64 },

    #[error("body read error: {0}")]
    Body(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type SinkResult<T> = Result<T, SinkError>;

impl SinkError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UnsupportedMethod(_) => StatusCode::NOT_IMPLEMENTED,
            Self::LengthRequired => StatusCode::LENGTH_REQUIRED,
            Self::InvalidLength(_) | Self::BodyMismatch { .. } | Self::Body(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::ReadTimeout(_) => StatusCode::REQUEST_TIMEOUT,
            Self::Io(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SinkError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }
        (status, self.to_string()).into_response()
    }
}
