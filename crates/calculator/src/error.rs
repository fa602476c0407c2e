//! Error types for calculator requests.

use crate::envelope::Envelope;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Everything that can go wrong between reading a request body and producing a result.
///
/// All variants are client errors; see [`CalcError::status`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// Body is not a JSON object
    #[error("request body must be a JSON object: {0}")]
    MalformedBody(String),

    /// `x` or `y` is absent
    #[error("missing field '{0}'")]
    MissingField(&'static str),

    /// Field present but not convertible to an integer
    #[error("field '{field}' cannot be converted to an integer: {reason}")]
    TypeCoercion { field: &'static str, reason: String },

    #[error("division by zero")]
    DivisionByZero,
}

impl CalcError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedBody(_)
            | Self::MissingField(_)
            | Self::TypeCoercion { .. }
            | Self::DivisionByZero => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for CalcError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(Envelope::new(self.to_string(), status))).into_response()
    }
}

/// Result type alias for calculator operations.
pub type Result<T> = std::result::Result<T, CalcError>;
