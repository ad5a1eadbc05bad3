use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No bearer token was supplied with the request.
    #[error("Missing bearer token")]
    MissingToken,

    /// The bearer token is unknown or its session has expired.
    #[error("Invalid or expired bearer token")]
    InvalidToken,

    /// Login name or password did not match.
    #[error("Invalid login or password")]
    InvalidCredentials,

    /// The user is authenticated but not allowed to perform the action.
    ///
    /// # Fields
    /// - ID of the user that was denied
    /// - Reason, logged server-side only
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `InvalidCredentials` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
///
/// Denials are logged at debug level; client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken | Self::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Authentication required")),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Invalid login or password")),
            )
                .into_response(),
            Self::AccessDenied(user_id, reason) => {
                tracing::debug!("Access denied for user {}: {}", user_id, reason);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto::new("You do not have permission to do that")),
                )
                    .into_response()
            }
        }
    }
}
