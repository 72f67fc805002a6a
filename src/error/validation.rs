use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// A request payload failed schema validation.
///
/// Every create route validates its form fields into a typed parameter struct
/// before touching the database; failures land here and map to a clean 400
/// instead of a generic server fault.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// A required form field was absent.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// A form field was present but could not be interpreted.
    #[error("invalid value for field '{field}': {reason}")]
    InvalidField {
        /// Name of the offending form field.
        field: &'static str,
        /// Human-readable description of what was wrong.
        reason: String,
    },
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(ErrorDto::new(self.to_string()))).into_response()
    }
}
