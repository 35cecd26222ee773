//! Type-safe session management wrapper.
//!
//! This module provides a typed interface over the raw `tower_sessions::Session` for the
//! authentication state of a request. Centralizing the session key and value type here
//! keeps controllers, the auth guard, and the WebSocket handshake reading the same data.

use time::{Duration, OffsetDateTime};
use tower_sessions::{Expiry, Session};

use crate::server::error::AppError;

const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Lifetime of a session established by login or registration.
pub const SESSION_LIFETIME: Duration = Duration::hours(24);

/// Authentication session management.
///
/// Handles storing and retrieving the authenticated user's ID and the session
/// lifecycle operations used by login, registration, and logout.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    ///
    /// # Returns
    /// A new AuthSession instance
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Establishes a fresh authenticated session for the user.
    ///
    /// Rotates the session ID so a pre-login cookie cannot be reused, stores the user ID,
    /// and pins the expiry to 24 hours from now.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user who just authenticated
    ///
    /// # Returns
    /// - `Ok(())` - Session established
    /// - `Err(AppError::SessionErr(_))` - Failed to write the session
    pub async fn start(&self, user_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.set_user_id(user_id).await?;
        self.session.set_expiry(Some(Expiry::AtDateTime(
            OffsetDateTime::now_utc() + SESSION_LIFETIME,
        )));
        Ok(())
    }

    /// Stores the user's ID in the session.
    ///
    /// # Returns
    /// - `Ok(())` - User ID successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the user's ID from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        let user_id = self.session.get::<i32>(SESSION_AUTH_USER_ID).await?;
        Ok(user_id)
    }

    /// Destroys the session, deleting it from the store and expiring the cookie.
    ///
    /// If the store delete fails the in-memory data is still cleared, so the current
    /// request no longer sees an authenticated user.
    ///
    /// # Returns
    /// - `Ok(())` - Session destroyed
    /// - `Err(AppError::SessionErr(_))` - The store rejected the delete
    pub async fn destroy(&self) -> Result<(), AppError> {
        if let Err(err) = self.session.flush().await {
            self.session.clear().await;
            return Err(err.into());
        }
        Ok(())
    }
}
