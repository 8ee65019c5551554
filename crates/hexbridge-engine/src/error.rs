//! Error types for the engine seam.

use crate::{EdgeCoord, NodeCoord};

/// Errors returned by the in-memory board and admin.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// No node exists at this coordinate. Returned when placing on, or
    /// connecting an edge to, a node the board does not have.
    #[error("no node at {0}")]
    UnknownNode(NodeCoord),

    /// No edge exists at this coordinate.
    #[error("no edge at {0}")]
    UnknownEdge(EdgeCoord),

    /// No registered player owns this color.
    #[error("no player with color {0}")]
    UnknownColor(String),

    /// Every color is taken; no more players can register.
    #[error("game is full ({0} players)")]
    GameFull(usize),

    /// The game a player belonged to has been dropped.
    #[error("game is no longer running")]
    GameClosed,
}
