//! Unified error type for hexbridge.

use hexbridge_engine::EngineError;
use hexbridge_protocol::ProtocolError;
use hexbridge_session::{SessionError, SessionId};
use hexbridge_view::ViewError;

/// Top-level error that wraps all crate-specific errors.
///
/// When using the `hexbridge` meta-crate, you deal with this single
/// error type instead of importing errors from each sub-crate.
/// The `#[from]` attribute on each variant auto-generates `From` impls,
/// so the `?` operator converts sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum HexbridgeError {
    /// Encoding or embedding a document failed.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The engine refused an operation (unknown color, full game, ...).
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Sign-in or player binding failed.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// A board element could not be rendered.
    #[error(transparent)]
    View(#[from] ViewError),

    /// The session has no player. The page layer should send the user to
    /// sign in or join a game.
    #[error("session {0} has no player")]
    NotPlaying(SessionId),
}
