//! Error types for the session layer.

use crate::{IdentityToken, SessionId};

/// Errors that can occur while signing in and binding players.
///
/// A session with no bound player is *not* an error: lookups return
/// `None` and the page layer redirects to sign-in.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The operation needs a signed-in user and the session has none.
    #[error("session {0} is not signed in")]
    NotSignedIn(SessionId),

    /// The session already carries a user.
    #[error("already signed in as {0}")]
    AlreadySignedIn(String),

    /// The username was empty after trimming.
    #[error("username must not be empty")]
    InvalidUsername,

    /// The user already has a player. Rebinding is rejected; the first
    /// binding stays in force until the session ends.
    #[error("user {0} is already bound to a player")]
    AlreadyBound(String),

    /// The token is already registered to a different player. Tokens are
    /// minted internally, so this is a programming error.
    #[error("identity token {0} is already bound to another player")]
    TokenCollision(IdentityToken),
}
