//! Session types: the per-browser-session context and its user.
//!
//! A session is passed explicitly into every bridge operation. It tracks:
//! - WHICH browser session this is (`SessionId`)
//! - WHO signed in on it (`User`, if anyone)
//! - WHICH player that user controls (the user's `IdentityToken`, if bound)

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;

/// Counter for generating unique session IDs.
static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

// ---------------------------------------------------------------------------
// IdentityToken
// ---------------------------------------------------------------------------

/// Opaque key under which a player is registered.
///
/// Tokens are minted by [`IdentityToken::generate`]: 128 random bits as
/// 32 lowercase hex characters. `Display` prints only a short prefix
/// (`tok-1a2b3c4d`) so full tokens stay out of logs; use
/// [`as_str`](Self::as_str) when the whole value is needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityToken(String);

impl IdentityToken {
    /// Wraps an existing token value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Mints a fresh random token.
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let bytes: [u8; 16] = rng.random();
        Self(bytes.iter().map(|b| format!("{b:02x}")).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdentityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix: String = self.0.chars().take(8).collect();
        write!(f, "tok-{prefix}")
    }
}

// ---------------------------------------------------------------------------
// SessionId
// ---------------------------------------------------------------------------

/// Identifies one browser session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S-{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A signed-in user. Without a token the user is "signed in but not yet
/// playing".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub(crate) username: String,
    pub(crate) token: Option<IdentityToken>,
}

impl User {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn token(&self) -> Option<&IdentityToken> {
        self.token.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.token.is_some()
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// One browser session's state. Created when the session starts, handed
/// to every operation, dropped when the session ends.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    pub(crate) user: Option<User>,
}

impl Session {
    /// Starts a new, signed-out session.
    pub fn new() -> Self {
        Self {
            id: SessionId(NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed)),
            user: None,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
