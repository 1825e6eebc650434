use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user is bound to the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No user ID found in session")]
    UserNotInSession,

    /// Session references a user that no longer exists.
    ///
    /// Happens when the account was deleted from another session. Results in a
    /// 404 Not Found response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Authenticated user is not allowed to act on the requested resource.
    ///
    /// Results in a 403 Forbidden response; the message is only logged.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// The identity token failed verification.
    ///
    /// Covers malformed tokens, unknown signing keys, bad signatures and wrong issuer,
    /// audience or expiry. Results in a 400 Bad Request response.
    #[error("Invalid identity token: {0}")]
    InvalidIdToken(String),

    /// A new account would be created from a token without a phone number claim.
    #[error("Identity token for new user {0} carries no phone number")]
    MissingPhoneClaim(String),

    /// The submitted verification code is wrong, expired or already used.
    #[error("Invalid verification code")]
    InvalidVerificationCode,
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while client-facing messages
/// stay generic.
///
/// # Returns
/// - 400 Bad Request - Token, phone claim or verification code failures
/// - 401 Unauthorized - Not logged in
/// - 403 Forbidden - Acting on another user's resources
/// - 404 Not Found - Session user no longer exists
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession => (StatusCode::UNAUTHORIZED, "Authentication required"),
            Self::UserNotInDatabase(_) => (StatusCode::NOT_FOUND, "User not found"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to access this resource",
            ),
            Self::InvalidIdToken(_) => (StatusCode::BAD_REQUEST, "Invalid Firebase token"),
            Self::MissingPhoneClaim(_) => (
                StatusCode::BAD_REQUEST,
                "Firebase token does not contain a phone number",
            ),
            Self::InvalidVerificationCode => {
                (StatusCode::BAD_REQUEST, "Invalid verification code")
            }
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
