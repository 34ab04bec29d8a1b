use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Input that fails the field rules of a write operation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is missing, empty or only whitespace.
    #[error("{field} must not be blank")]
    Required {
        /// Name of the field
        field: &'static str,
    },

    /// Text field exceeds its maximum length in characters.
    #[error("{field} must be at most {max} characters")]
    TooLong {
        /// Name of the field
        field: &'static str,
        /// Maximum allowed characters
        max: usize,
    },

    /// Numeric value outside its allowed range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        /// Name of the field
        field: &'static str,
        /// Smallest allowed value
        min: u64,
        /// Largest allowed value
        max: u64,
    },

    /// Value does not have the expected format.
    #[error("{field} is invalid: {reason}")]
    InvalidFormat {
        /// Name of the field
        field: &'static str,
        /// What the value should look like
        reason: &'static str,
    },

    /// Sort parameter names an unknown field or direction.
    #[error("Invalid sort parameter '{0}'")]
    InvalidSort(String),

    /// Patch document could not be read as a game patch.
    #[error("Malformed patch document: {0}")]
    MalformedPatch(String),
}

/// Converts validation errors into 422 Unprocessable Entity responses carrying the message.
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
