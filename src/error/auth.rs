use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The username was unknown or the password did not match the stored hash.
    ///
    /// Results in a 401 Unauthorized response. The client-facing message never
    /// says which of the two fields was wrong.
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// `InvalidCredentials` maps to 401 Unauthorized with the fixed message
/// `"Invalid credentials"` so login failures don't reveal whether the username
/// exists.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Invalid credentials")),
            )
                .into_response(),
        }
    }
}
