use axum::{
    extract::{State, WebSocketUpgrade},
    response::IntoResponse,
};
use tower_sessions::Session;

use crate::server::{
    error::AppError, middleware::auth::AuthGuard, realtime::socket, state::AppState,
};

/// GET /ws - Upgrade to the realtime notification socket
///
/// The upgrade is refused unless the request carries an authenticated session. The
/// client must then send `{"type":"auth","userId":<id>}` for that same user before any
/// events are delivered.
///
/// # Returns
/// - `101 Switching Protocols` - Socket opened
/// - `401 Unauthorized` - Not logged in
pub async fn connect(
    State(state): State<AppState>,
    session: Session,
    ws: WebSocketUpgrade,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let registry = state.realtime.clone();
    Ok(ws.on_upgrade(move |socket_conn| socket::serve(socket_conn, user.id, registry)))
}
