use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::Value;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{CredentialsDto, UserDto, UserWithCharacterDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        model::user::CredentialsParam,
        service::auth::AuthService,
        state::AppState,
        validation,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account and log it in.
///
/// # Returns
/// - `200 OK` - The created user, password omitted
/// - `400 Bad Request` - Invalid payload or username already taken
/// - `500 Internal Server Error` - Database or session store error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 200, description = "Registered and logged in", body = UserDto),
        (status = 400, description = "Invalid payload or username already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let payload: CredentialsDto = validation::CREDENTIALS.parse(payload)?;

    let user = AuthService::new(&state.db)
        .register(CredentialsParam::from(payload))
        .await?;

    AuthSession::new(&session).start(user.id).await?;

    tracing::info!("Registered user {} ({})", user.username, user.id);

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log in with username and password.
///
/// Unknown usernames and wrong passwords produce the same 401 response.
///
/// # Returns
/// - `200 OK` - The authenticated user, password omitted
/// - `400 Bad Request` - Missing or malformed fields
/// - `401 Unauthorized` - Invalid username or password
/// - `500 Internal Server Error` - Database or session store error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 400, description = "Missing or malformed fields", body = ErrorDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let payload: CredentialsDto = validation::CREDENTIALS.parse(payload)?;

    let user = AuthService::new(&state.db)
        .login(CredentialsParam::from(payload))
        .await?;

    AuthSession::new(&session).start(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log out and destroy the session.
///
/// # Returns
/// - `200 OK` - Session destroyed
/// - `500 Internal Server Error` - The session store failed; the session data is still cleared
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 500, description = "Session store error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).destroy().await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out".to_string(),
        }),
    ))
}

/// Get the logged in user with their character.
///
/// # Returns
/// - `200 OK` - The user and their character (`null` if none)
/// - `401 Unauthorized` - No session
/// - `404 Not Found` - The session names a user that no longer exists
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserWithCharacterDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let Some(user_id) = AuthSession::new(&session).get_user_id().await? else {
        return Err(AuthError::UserNotInSession.into());
    };

    let user = AuthService::new(&state.db).current_user(user_id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
