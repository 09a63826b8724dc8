//! Plain-text error responses.

use crate::schedule::services::ScheduleParsingError;
use axum::{
    extract::rejection::BytesRejection,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors surfaced to HTTP clients.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request body was empty.
    #[error("{0}")]
    MissingInput(String),

    /// Fetching or decoding the project file failed.
    #[error("Error parsing file: {0}")]
    Parse(String),
}

impl ApiError {
    /// Returns the HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MissingInput(_) => StatusCode::BAD_REQUEST,
            Self::Parse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ScheduleParsingError> for ApiError {
    fn from(err: ScheduleParsingError) -> Self {
        if err.is_missing_input() {
            Self::MissingInput(err.to_string())
        } else {
            Self::Parse(err.to_string())
        }
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        Self::Parse(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}
