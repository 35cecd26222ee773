//! Per-connection WebSocket task.
//!
//! The socket is upgraded only for requests carrying an authenticated session. The
//! first text frame must be `{"type":"auth","userId":<id>}` naming that same user;
//! anything else gets an `auth_error` and the socket is closed. After the handshake
//! the task forwards registry pushes to the client until either side goes away.

use axum::extract::ws::{Message, WebSocket};
use futures_util::{
    stream::{SplitSink, SplitStream},
    SinkExt, StreamExt,
};
use tokio::sync::mpsc;

use crate::{
    model::event::ClientMessageDto,
    server::{model::event::ServerEvent, realtime::registry::ConnectionRegistry},
};

/// Drives one WebSocket from handshake to disconnect.
///
/// # Arguments
/// - `socket` - The upgraded connection
/// - `session_user_id` - User ID resolved from the HTTP session during the upgrade
/// - `registry` - Registry the socket joins once authenticated
pub async fn serve(socket: WebSocket, session_user_id: i32, registry: ConnectionRegistry) {
    let (mut sink, mut stream) = socket.split();

    let Some(first_frame) = next_text(&mut stream).await else {
        tracing::debug!("Socket for user {} closed before handshake", session_user_id);
        return;
    };

    let user_id = match authenticate(&first_frame, session_user_id) {
        Ok(user_id) => user_id,
        Err(message) => {
            tracing::warn!(
                "Rejected socket handshake for session user {}: {}",
                session_user_id,
                message
            );
            let _ = send_event(&mut sink, ServerEvent::AuthError { message }).await;
            let _ = sink.close().await;
            return;
        }
    };

    if send_event(&mut sink, ServerEvent::AuthSuccess { user_id })
        .await
        .is_err()
    {
        return;
    }

    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    let connection_id = registry.register(user_id, tx).await;
    tracing::info!("Socket {} opened for user {}", connection_id, user_id);

    loop {
        tokio::select! {
            frame = stream.next() => {
                match frame {
                    Some(Ok(Message::Text(text))) => {
                        if let Err(message) = authenticate(text.as_str(), user_id) {
                            tracing::warn!("Ignoring client frame on socket {}: {}", connection_id, message);
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        tracing::debug!("Socket {} read failed: {}", connection_id, err);
                        break;
                    }
                }
            }
            Some(message) = rx.recv() => {
                if let Err(err) = sink.send(Message::Text(message.into())).await {
                    tracing::debug!("Socket {} write failed: {}", connection_id, err);
                    break;
                }
            }
        }
    }

    registry.unregister(user_id, connection_id).await;
    tracing::info!("Socket {} closed for user {}", connection_id, user_id);
}

/// Validates a handshake frame against the session user.
///
/// # Returns
/// - `Ok(user_id)` - The frame is an auth message for the session user
/// - `Err(message)` - Malformed frame or a user ID that does not match the session
pub fn authenticate(frame: &str, session_user_id: i32) -> Result<i32, String> {
    let message: ClientMessageDto =
        serde_json::from_str(frame).map_err(|_| "Invalid message format".to_string())?;

    match message {
        ClientMessageDto::Auth { user_id } if user_id == session_user_id => Ok(user_id),
        ClientMessageDto::Auth { .. } => Err("User ID does not match session".to_string()),
    }
}

async fn next_text(stream: &mut SplitStream<WebSocket>) -> Option<String> {
    while let Some(frame) = stream.next().await {
        match frame {
            Ok(Message::Text(text)) => return Some(text.as_str().to_string()),
            Ok(Message::Close(_)) | Err(_) => return None,
            Ok(_) => continue,
        }
    }
    None
}

async fn send_event(
    sink: &mut SplitSink<WebSocket, Message>,
    event: ServerEvent,
) -> Result<(), axum::Error> {
    let message = match event.to_message() {
        Ok(message) => message,
        Err(err) => {
            tracing::error!("Failed to serialize realtime event: {}", err);
            return Ok(());
        }
    };
    sink.send(Message::Text(message.into())).await
}
