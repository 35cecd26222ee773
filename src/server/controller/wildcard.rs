use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::Value;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        wildcard::{InviteDto, RespondInvitationDto, WildCardInvitationDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::wildcard::InvitationResponse,
        service::wildcard::WildCardService,
        state::AppState,
        validation,
    },
};

/// Tag for grouping Wild Card endpoints in OpenAPI documentation
pub static WILDCARD_TAG: &str = "wildcard";

/// Send (or resend) a Wild Card invitation to an eliminated player.
///
/// The invitation is pushed to the player's open sockets.
///
/// # Access Control
/// - `Admin` - Only admins can send invitations
///
/// # Returns
/// - `200 OK` - The pending invitation
/// - `400 Bad Request` - Invalid payload or the character is not eliminated
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `404 Not Found` - The user has no character
#[utoipa::path(
    post,
    path = "/api/admin/wildcard/invite",
    tag = WILDCARD_TAG,
    request_body = InviteDto,
    responses(
        (status = 200, description = "Invitation sent", body = WildCardInvitationDto),
        (status = 400, description = "Invalid payload or character not eliminated", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn invite(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let payload: InviteDto = validation::INVITE.parse(payload)?;

    let invitation = WildCardService::new(&state.db, &state.realtime)
        .invite(payload.user_id)
        .await?;

    Ok((StatusCode::OK, Json(invitation.into_dto())))
}

/// List every invitation, newest first.
///
/// # Access Control
/// - `Admin` - Only admins can list invitations
#[utoipa::path(
    get,
    path = "/api/admin/wildcard/invitations",
    tag = WILDCARD_TAG,
    responses(
        (status = 200, description = "All invitations", body = Vec<WildCardInvitationDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_invitations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let invitations = WildCardService::new(&state.db, &state.realtime)
        .get_all()
        .await?;
    let invitations_dto: Vec<_> = invitations.into_iter().map(|i| i.into_dto()).collect();

    Ok((StatusCode::OK, Json(invitations_dto)))
}

/// Get the logged in user's latest invitation.
#[utoipa::path(
    get,
    path = "/api/wildcard/invitation",
    tag = WILDCARD_TAG,
    responses(
        (status = 200, description = "Latest invitation", body = WildCardInvitationDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No invitation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_invitation(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let invitation = WildCardService::new(&state.db, &state.realtime)
        .get_for_user(user.id)
        .await?;

    Ok((StatusCode::OK, Json(invitation.into_dto())))
}

/// Accept or reject the logged in user's pending invitation.
///
/// Accepting reinstates the user's character.
///
/// # Returns
/// - `200 OK` - The answered invitation
/// - `400 Bad Request` - Invalid payload or the invitation was already answered
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No invitation
#[utoipa::path(
    post,
    path = "/api/wildcard/invitation/respond",
    tag = WILDCARD_TAG,
    request_body = RespondInvitationDto,
    responses(
        (status = 200, description = "Invitation answered", body = WildCardInvitationDto),
        (status = 400, description = "Invalid payload or invitation already answered", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No invitation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn respond_invitation(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let payload: RespondInvitationDto = validation::RESPOND_INVITATION.parse(payload)?;

    let invitation = WildCardService::new(&state.db, &state.realtime)
        .respond(user.id, InvitationResponse::from_accept(payload.accept))
        .await?;

    Ok((StatusCode::OK, Json(invitation.into_dto())))
}
