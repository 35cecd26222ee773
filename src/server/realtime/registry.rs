//! Connection registry for pushing events to authenticated sockets.
//!
//! Each authenticated WebSocket registers an unbounded sender under its user ID and
//! receives a connection ID. A user may hold several connections at once (multiple
//! tabs). Registration happens after a successful handshake and removal happens when
//! the socket task ends; these are the only mutations.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use tokio::sync::{mpsc::UnboundedSender, RwLock};

use crate::server::model::event::ServerEvent;

/// Identifier of a single registered socket.
pub type ConnectionId = u64;

type Connections = HashMap<i32, HashMap<ConnectionId, UnboundedSender<String>>>;

/// Shared registry of open sockets keyed by user ID.
///
/// Cloning is cheap and every clone refers to the same registry.
#[derive(Clone, Default)]
pub struct ConnectionRegistry {
    connections: Arc<RwLock<Connections>>,
    next_id: Arc<AtomicU64>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a socket for a user.
    ///
    /// # Arguments
    /// - `user_id` - The authenticated user owning the socket
    /// - `sender` - Channel drained by the socket task into outgoing text frames
    ///
    /// # Returns
    /// - `ConnectionId` - Handle to pass to `unregister` when the socket closes
    pub async fn register(&self, user_id: i32, sender: UnboundedSender<String>) -> ConnectionId {
        let connection_id = self.next_id.fetch_add(1, Ordering::Relaxed);

        self.connections
            .write()
            .await
            .entry(user_id)
            .or_default()
            .insert(connection_id, sender);

        connection_id
    }

    /// Removes a socket. Users left with no sockets are dropped from the map.
    pub async fn unregister(&self, user_id: i32, connection_id: ConnectionId) {
        let mut connections = self.connections.write().await;

        if let Some(user_connections) = connections.get_mut(&user_id) {
            user_connections.remove(&connection_id);
            if user_connections.is_empty() {
                connections.remove(&user_id);
            }
        }
    }

    /// Pushes an event to every socket of one user.
    ///
    /// # Returns
    /// - `usize` - Number of sockets the event was handed to (0 if the user is offline)
    pub async fn send_to_user(&self, user_id: i32, event: ServerEvent) -> usize {
        let Some(message) = Self::encode(&event) else {
            return 0;
        };

        let connections = self.connections.read().await;
        let Some(user_connections) = connections.get(&user_id) else {
            tracing::debug!("User {} has no open sockets, dropping event", user_id);
            return 0;
        };

        user_connections
            .values()
            .filter(|sender| sender.send(message.clone()).is_ok())
            .count()
    }

    /// Pushes an event to every registered socket.
    ///
    /// # Returns
    /// - `usize` - Number of sockets the event was handed to
    pub async fn broadcast(&self, event: ServerEvent) -> usize {
        let Some(message) = Self::encode(&event) else {
            return 0;
        };

        let connections = self.connections.read().await;
        connections
            .values()
            .flat_map(|user_connections| user_connections.values())
            .filter(|sender| sender.send(message.clone()).is_ok())
            .count()
    }

    /// Number of open sockets registered for a user.
    #[cfg(test)]
    pub async fn connection_count(&self, user_id: i32) -> usize {
        self.connections
            .read()
            .await
            .get(&user_id)
            .map_or(0, HashMap::len)
    }

    fn encode(event: &ServerEvent) -> Option<String> {
        match event.to_message() {
            Ok(message) => Some(message),
            Err(err) => {
                tracing::error!("Failed to serialize realtime event: {}", err);
                None
            }
        }
    }
}
