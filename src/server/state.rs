//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources needed by
//! the request handlers. The state is initialized once during startup and then cloned
//! for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::realtime::registry::ConnectionRegistry;

/// Application state containing shared resources and dependencies.
///
/// Both fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `ConnectionRegistry` uses `Arc` for shared state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Open WebSocket connections keyed by user ID.
    ///
    /// Services push Wild Card and match events through this registry.
    pub realtime: ConnectionRegistry,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `realtime` - Registry of open WebSocket connections
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, realtime: ConnectionRegistry) -> Self {
        Self { db, realtime }
    }
}
