//! Session binding: signs users in and ties each one to at most one player.
//!
//! ```text
//! sign_in() ──→ [signed in, not playing] ──bind_player()──→ [playing]
//!     ↑                     │                                   │
//!     └──────── sign_out() ─┴───────────────────────────────────┘
//! ```
//!
//! `sign_out` forgets the user; the registry keeps the player (no
//! eviction), it just becomes unreachable from this session.

use std::sync::Arc;

use crate::{IdentityRegistry, IdentityToken, Session, SessionError, User};

/// Resolves and creates session → user → player bindings.
pub struct SessionBinding<P> {
    registry: Arc<IdentityRegistry<P>>,
}

impl<P: Send + Sync> SessionBinding<P> {
    /// Creates a binding service on top of a shared registry.
    pub fn new(registry: Arc<IdentityRegistry<P>>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<IdentityRegistry<P>> {
        &self.registry
    }

    /// Signs `username` in on this session.
    ///
    /// # Errors
    /// - [`SessionError::InvalidUsername`]: empty after trimming
    /// - [`SessionError::AlreadySignedIn`]: the session already has a user
    pub fn sign_in(
        &self,
        session: &mut Session,
        username: &str,
    ) -> Result<(), SessionError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(SessionError::InvalidUsername);
        }
        if let Some(user) = &session.user {
            return Err(SessionError::AlreadySignedIn(user.username.clone()));
        }

        session.user = Some(User {
            username: username.to_owned(),
            token: None,
        });
        tracing::info!(session = %session.id(), %username, "user signed in");
        Ok(())
    }

    /// Ends the user's sign-in. Returns the user that was signed in, if
    /// any.
    pub fn sign_out(&self, session: &mut Session) -> Option<User> {
        let user = session.user.take();
        if let Some(user) = &user {
            tracing::info!(
                session = %session.id(),
                username = %user.username,
                "user signed out"
            );
        }
        user
    }

    /// Binds `player` to the session's user under a freshly minted token.
    ///
    /// # Errors
    /// - [`SessionError::NotSignedIn`]: no user on this session
    /// - [`SessionError::AlreadyBound`]: the user already has a player
    /// - [`SessionError::TokenCollision`]: from the registry; the user
    ///   stays unbound
    pub async fn bind_player(
        &self,
        session: &mut Session,
        player: Arc<P>,
    ) -> Result<IdentityToken, SessionError> {
        let session_id = session.id();
        let user = session
            .user
            .as_mut()
            .ok_or(SessionError::NotSignedIn(session_id))?;
        if user.token.is_some() {
            return Err(SessionError::AlreadyBound(user.username.clone()));
        }

        let token = IdentityToken::generate();
        self.registry.put(token.clone(), player).await?;
        user.token = Some(token.clone());

        tracing::info!(
            session = %session_id,
            username = %user.username,
            %token,
            "player bound"
        );
        Ok(token)
    }

    /// The player bound to this session's user, or `None` if nobody is
    /// signed in or the user is not playing yet.
    pub async fn current_player(&self, session: &Session) -> Option<Arc<P>> {
        let token = session.user.as_ref()?.token.as_ref()?;
        self.registry.get(token).await
    }
}
