//! Type-safe session management wrappers.
//!
//! This module provides a typed interface over the raw tower-sessions `Session`
//! for the one piece of state the portal keeps between requests: who is logged
//! in. Wrapping the session centralizes the key names and value types so
//! handlers never touch string keys directly.

use tower_sessions::Session;

use crate::{error::AppError, model::user::User};

// Session key constants
const SESSION_AUTH_USER_ID: &str = "auth:user_id";
const SESSION_AUTH_USERNAME: &str = "auth:username";
const SESSION_AUTH_ROLE: &str = "auth:role";

/// The identity stored in a logged-in session: exactly the three attributes
/// login persists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionIdentity {
    pub user_id: i32,
    pub username: String,
    pub role: String,
}

/// Authentication session management.
///
/// Handles the logged-in identity: storing it on login, reading it back, and
/// clearing it on logout.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's identity in the session.
    ///
    /// Called after successful login to establish a logged-in session. Writes
    /// the user id, username, and role under separate keys.
    ///
    /// # Arguments
    /// - `user` - The freshly authenticated user
    ///
    /// # Returns
    /// - `Ok(())` - Identity successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_identity(&self, user: &User) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user.id).await?;
        self.session
            .insert(SESSION_AUTH_USERNAME, user.username.clone())
            .await?;
        self.session
            .insert(SESSION_AUTH_ROLE, user.role.clone())
            .await?;
        Ok(())
    }

    /// Retrieves the logged-in identity from the session.
    ///
    /// All three attributes must be present for the session to count as
    /// logged in; a partially written session reads as logged out.
    ///
    /// # Returns
    /// - `Ok(Some(SessionIdentity))` - User is logged in
    /// - `Ok(None)` - No identity in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn identity(&self) -> Result<Option<SessionIdentity>, AppError> {
        let Some(user_id) = self.session.get::<i32>(SESSION_AUTH_USER_ID).await? else {
            return Ok(None);
        };
        let Some(username) = self.session.get::<String>(SESSION_AUTH_USERNAME).await? else {
            return Ok(None);
        };
        let Some(role) = self.session.get::<String>(SESSION_AUTH_ROLE).await? else {
            return Ok(None);
        };

        Ok(Some(SessionIdentity {
            user_id,
            username,
            role,
        }))
    }

    /// Clears all data from the session.
    ///
    /// Used during logout. Unconditional: clearing an empty session is fine.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
