use axum::{
    routing::{get, patch, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{admin, auth, character, game_match, realtime, wildcard},
    state::AppState,
};

/// OpenAPI description of the HTTP API, served through Swagger UI at `/api/docs`.
#[derive(OpenApi)]
#[openapi(
    info(title = "Blue Lock RPG API"),
    paths(
        auth::register,
        auth::login,
        auth::logout,
        auth::get_user,
        character::create_character,
        character::update_character,
        character::get_my_character,
        admin::get_users,
        admin::get_stats,
        admin::eliminate_character,
        admin::get_eliminated_characters,
        wildcard::invite,
        wildcard::get_invitations,
        wildcard::get_my_invitation,
        wildcard::respond_invitation,
        game_match::create_match,
        game_match::start_match,
        game_match::record_goal,
        game_match::finish_match,
        game_match::get_current_match,
        game_match::get_match,
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route(
            "/api/characters",
            post(character::create_character).put(character::update_character),
        )
        .route("/api/characters/me", get(character::get_my_character))
        .route("/api/admin/users", get(admin::get_users))
        .route("/api/admin/stats", get(admin::get_stats))
        .route(
            "/api/admin/character/{user_id}/eliminate",
            patch(admin::eliminate_character),
        )
        .route(
            "/api/admin/characters/eliminated",
            get(admin::get_eliminated_characters),
        )
        .route("/api/admin/wildcard/invite", post(wildcard::invite))
        .route(
            "/api/admin/wildcard/invitations",
            get(wildcard::get_invitations),
        )
        .route("/api/wildcard/invitation", get(wildcard::get_my_invitation))
        .route(
            "/api/wildcard/invitation/respond",
            post(wildcard::respond_invitation),
        )
        .route("/api/admin/matches", post(game_match::create_match))
        .route(
            "/api/admin/matches/{match_id}/start",
            post(game_match::start_match),
        )
        .route(
            "/api/admin/matches/{match_id}/goals",
            post(game_match::record_goal),
        )
        .route(
            "/api/admin/matches/{match_id}/finish",
            post(game_match::finish_match),
        )
        .route("/api/matches/current", get(game_match::get_current_match))
        .route("/api/matches/{match_id}", get(game_match::get_match))
        .route("/ws", get(realtime::connect))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
