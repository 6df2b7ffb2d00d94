use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use stockwatch_core::{SourceError, ValidationError};
use thiserror::Error;

pub const SYMBOL_REQUIRED: &str = "Symbol parameter is required";
pub const INVALID_DATE: &str = "Invalid date format. Use YYYY-MM-DD";

/// Errors returned by request handlers, rendered as `{"error": message}`.
///
/// Client input problems map to 400. Provider and unexpected failures map to
/// 500 and carry the underlying message unchanged.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{}", .0.message())]
    Provider(#[from] SourceError),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn missing_symbol() -> Self {
        Self::BadRequest(String::from(SYMBOL_REQUIRED))
    }

    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Provider(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        match error {
            ValidationError::EmptySymbol => Self::missing_symbol(),
            ValidationError::InvalidDate { .. } => Self::BadRequest(String::from(INVALID_DATE)),
            other => Self::Internal(other.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::debug!(%status, error = %self, "request failed");
        }
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}
