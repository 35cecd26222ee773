use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user ID is stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No user is logged in for this session")]
    UserNotInSession,

    /// The session names a user that no longer exists in the database.
    ///
    /// Results in a 404 Not Found response.
    #[error("User {0} from session was not found in the database")]
    UserNotInDatabase(i32),

    /// The authenticated user lacks the permission required by the endpoint.
    ///
    /// Results in a 403 Forbidden response. The message is logged but not returned.
    #[error("User {0} was denied access: {1}")]
    AccessDenied(i32, String),

    /// Unknown username or wrong password. Both cases share this variant so the
    /// response never reveals whether the username exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Registration attempted with a username that is already taken.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Username '{0}' is already taken")]
    UsernameTaken(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `InvalidCredentials` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
/// - `UserNotInDatabase` → 404 Not Found with "User not found"
/// - `UsernameTaken` → 400 Bad Request
///
/// All errors are logged at debug level while keeping client-facing messages generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession => (StatusCode::UNAUTHORIZED, "Not authenticated".to_string()),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid username or password".to_string(),
            ),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Access denied".to_string()),
            Self::UserNotInDatabase(_) => (StatusCode::NOT_FOUND, "User not found".to_string()),
            Self::UsernameTaken(_) => (
                StatusCode::BAD_REQUEST,
                "Username already exists".to_string(),
            ),
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
