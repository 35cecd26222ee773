use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::Value;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        character::{CharacterDto, CreateCharacterDto, UpdateCharacterDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::character::{CreateCharacterParam, UpdateCharacterParam},
        service::character::CharacterService,
        state::AppState,
        validation,
    },
};

/// Tag for grouping character endpoints in OpenAPI documentation
pub static CHARACTER_TAG: &str = "character";

/// Create the logged in user's character.
///
/// Omitted stats default to 50. Progression fields start at level 1, ranking 299.
///
/// # Returns
/// - `200 OK` - The created character
/// - `400 Bad Request` - Invalid payload or the user already has a character
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/characters",
    tag = CHARACTER_TAG,
    request_body = CreateCharacterDto,
    responses(
        (status = 200, description = "Character created", body = CharacterDto),
        (status = 400, description = "Invalid payload or character already exists", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let payload: CreateCharacterDto = validation::CHARACTER.parse(payload)?;
    let param = CreateCharacterParam::from_dto(user.id, payload);

    let character = CharacterService::new(&state.db).create(param).await?;

    Ok((StatusCode::OK, Json(character.into_dto())))
}

/// Partially update the logged in user's character.
///
/// Only the fields present in the body are changed.
///
/// # Returns
/// - `200 OK` - The updated character
/// - `400 Bad Request` - A present field is invalid
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - The user has no character
#[utoipa::path(
    put,
    path = "/api/characters",
    tag = CHARACTER_TAG,
    request_body = UpdateCharacterDto,
    responses(
        (status = 200, description = "Character updated", body = CharacterDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_character(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let payload: UpdateCharacterDto = validation::CHARACTER.parse_partial(payload)?;

    let character = CharacterService::new(&state.db)
        .update(user.id, UpdateCharacterParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(character.into_dto())))
}

/// Get the logged in user's character.
#[utoipa::path(
    get,
    path = "/api/characters/me",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "The user's character", body = CharacterDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_character(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let character = CharacterService::new(&state.db)
        .get_by_user_id(user.id)
        .await?;

    Ok((StatusCode::OK, Json(character.into_dto())))
}
