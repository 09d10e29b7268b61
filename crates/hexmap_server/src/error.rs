//! Transport-level errors.
//!
//! The core is total; everything that can fail here (reading the UI
//! asset, encoding a response) is reported to the caller as a coarse
//! 500 with no retry semantics. Requests are independent and generation
//! is idempotent, so retries are safe and left to the caller.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "500 - internal error").into_response()
    }
}
