use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        game_match::{CreateMatchDto, GoalDto, MatchDto, MatchWithGoalsDto, RecordGoalDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::game_match::{CreateMatchParam, RecordGoalParam},
        service::game_match::MatchService,
        state::AppState,
        validation,
    },
};

/// Tag for grouping match endpoints in OpenAPI documentation
pub static MATCH_TAG: &str = "match";

/// Create a match in the preparing state.
///
/// Team names default to "Team V" and "Team Z".
#[utoipa::path(
    post,
    path = "/api/admin/matches",
    tag = MATCH_TAG,
    request_body = CreateMatchDto,
    responses(
        (status = 200, description = "Match created", body = MatchDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_match(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let payload: CreateMatchDto = validation::CREATE_MATCH.parse(payload)?;

    let game_match = MatchService::new(&state.db, &state.realtime)
        .create(CreateMatchParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(game_match.into_dto())))
}

/// Start a preparing match.
///
/// Broadcasts the character intro sequence to every connected user.
///
/// # Returns
/// - `200 OK` - The match, now active
/// - `400 Bad Request` - The match is not preparing
/// - `404 Not Found` - No match with that ID
#[utoipa::path(
    post,
    path = "/api/admin/matches/{match_id}/start",
    tag = MATCH_TAG,
    params(
        ("match_id" = i32, Path, description = "Match ID")
    ),
    responses(
        (status = 200, description = "Match started", body = MatchDto),
        (status = 400, description = "Match already started", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn start_match(
    State(state): State<AppState>,
    session: Session,
    Path(match_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let game_match = MatchService::new(&state.db, &state.realtime)
        .start(match_id)
        .await?;

    Ok((StatusCode::OK, Json(game_match.into_dto())))
}

/// Record a goal in an active match.
///
/// Updates the team score, the match clock, and the scorer's goal counter together.
///
/// # Returns
/// - `200 OK` - The recorded goal
/// - `400 Bad Request` - Invalid payload or the match is not active
/// - `404 Not Found` - No match with that ID, or unknown scorer
#[utoipa::path(
    post,
    path = "/api/admin/matches/{match_id}/goals",
    tag = MATCH_TAG,
    params(
        ("match_id" = i32, Path, description = "Match ID")
    ),
    request_body = RecordGoalDto,
    responses(
        (status = 200, description = "Goal recorded", body = GoalDto),
        (status = 400, description = "Invalid payload or match not active", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Match or scorer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_goal(
    State(state): State<AppState>,
    session: Session,
    Path(match_id): Path<i32>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let payload: RecordGoalDto = validation::RECORD_GOAL.parse(payload)?;

    let goal = MatchService::new(&state.db, &state.realtime)
        .record_goal(match_id, RecordGoalParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(goal.into_dto())))
}

/// Finish an active match.
#[utoipa::path(
    post,
    path = "/api/admin/matches/{match_id}/finish",
    tag = MATCH_TAG,
    params(
        ("match_id" = i32, Path, description = "Match ID")
    ),
    responses(
        (status = 200, description = "Match finished", body = MatchDto),
        (status = 400, description = "Match not active", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn finish_match(
    State(state): State<AppState>,
    session: Session,
    Path(match_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let game_match = MatchService::new(&state.db, &state.realtime)
        .finish(match_id)
        .await?;

    Ok((StatusCode::OK, Json(game_match.into_dto())))
}

/// Get the latest match that has not finished.
#[utoipa::path(
    get,
    path = "/api/matches/current",
    tag = MATCH_TAG,
    responses(
        (status = 200, description = "Current match", body = MatchDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No match in progress", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_match(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let game_match = MatchService::new(&state.db, &state.realtime)
        .get_current()
        .await?;

    Ok((StatusCode::OK, Json(game_match.into_dto())))
}

/// Get a match with all of its goals.
#[utoipa::path(
    get,
    path = "/api/matches/{match_id}",
    tag = MATCH_TAG,
    params(
        ("match_id" = i32, Path, description = "Match ID")
    ),
    responses(
        (status = 200, description = "Match with goals", body = MatchWithGoalsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_match(
    State(state): State<AppState>,
    session: Session,
    Path(match_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let game_match = MatchService::new(&state.db, &state.realtime)
        .get_with_goals(match_id)
        .await?;

    Ok((StatusCode::OK, Json(game_match.into_dto())))
}
