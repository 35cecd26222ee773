use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        admin::AdminStatsDto, api::ErrorDto, character::CharacterDto,
        user::UserWithCharacterDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::admin::AdminService,
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// List all users with their characters.
///
/// # Access Control
/// - `Admin` - Only admins can list users
///
/// # Returns
/// - `200 OK` - Every user with a nested character or `null`; passwords are never included
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserWithCharacterDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users = AdminService::new(&state.db).get_users().await?;
    let users_dto: Vec<_> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}

/// Get aggregate dashboard statistics.
///
/// # Access Control
/// - `Admin` - Only admins can view stats
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Aggregate counts", body = AdminStatsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let stats = AdminService::new(&state.db).get_stats().await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}

/// Eliminate a user's character.
///
/// Does not send a Wild Card invitation.
///
/// # Access Control
/// - `Admin` - Only admins can eliminate characters
///
/// # Returns
/// - `200 OK` - The eliminated character
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `404 Not Found` - The user has no character
#[utoipa::path(
    patch,
    path = "/api/admin/character/{user_id}/eliminate",
    tag = ADMIN_TAG,
    params(
        ("user_id" = i32, Path, description = "Owner of the character")
    ),
    responses(
        (status = 200, description = "Character eliminated", body = CharacterDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn eliminate_character(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let character = AdminService::new(&state.db).eliminate(user_id).await?;

    Ok((StatusCode::OK, Json(character.into_dto())))
}

/// List eliminated characters.
#[utoipa::path(
    get,
    path = "/api/admin/characters/eliminated",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Eliminated characters", body = Vec<CharacterDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_eliminated_characters(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let characters = AdminService::new(&state.db).get_eliminated().await?;
    let characters_dto: Vec<_> = characters.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(characters_dto)))
}
