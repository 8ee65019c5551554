//! View layer for hexbridge: what the web client gets to see.
//!
//! - [`BoardProjector`] reads a [`BoardView`](hexbridge_engine::BoardView)
//!   and builds the [`SnapshotDocument`](hexbridge_protocol::SnapshotDocument)
//!   the page embeds as `var boardData = ...;`.
//! - [`MessageFeed`] renders a player's chat log with sender names and
//!   label colors, and forwards what the player types to the game.
//!
//! Both are read-mostly and hold no per-request state. Board colors and
//! chat colors go through separate paths: only chat labels are
//! normalized (see [`normalize_color`]).

mod error;
mod feed;
mod projector;

pub use error::ViewError;
pub use feed::{
    normalize_color, render_message, ChatInput, ChatOutcome, FeedConfig,
    MessageFeed, ADMIN_NAME, FALLBACK_COLOR,
};
pub use projector::{
    resource_name, tile_name, BoardProjector, ProjectorConfig,
};
