//! Error types for the view layer.

use hexbridge_engine::{EdgeCoord, NodeCoord};

/// A board element that could not be rendered.
///
/// These never escape [`BoardProjector::project`](crate::BoardProjector::project):
/// the element is logged, skipped, and counted in
/// [`SnapshotDocument::skipped`](hexbridge_protocol::SnapshotDocument::skipped).
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    /// An edge points at a node the board no longer has, usually because
    /// the engine mutated the board between reads.
    #[error("{edge} has no endpoint at {node}")]
    MissingEndpoint { edge: EdgeCoord, node: NodeCoord },
}
