use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id stored in the session.
    ///
    /// The request requires an authenticated user but the session carries no
    /// user id. Results in a 401 Unauthorized response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// Session references a user that no longer exists.
    ///
    /// Happens when an account is deleted while a session for it is still
    /// alive. Results in a 401 Unauthorized response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Email/password combination did not match a stored credential.
    ///
    /// Deliberately does not reveal whether the email exists. Results in a
    /// 401 Unauthorized response.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Authenticated user lacks the required permission.
    ///
    /// Results in a 403 Forbidden response; the detail message is logged
    /// server-side only.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// Password reset token failed signature or expiry validation.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Invalid or expired password reset token")]
    InvalidResetToken,
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while keeping client-facing
/// messages generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "You need to be logged in to do that.".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid email or password.".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You don't have permission to do that.".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidResetToken => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "This password reset link is invalid or has expired.".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
