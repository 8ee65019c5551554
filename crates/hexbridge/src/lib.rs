//! # Hexbridge
//!
//! Server-side bridge between an in-memory hex-board game engine and a thin
//! web client.
//!
//! The bridge does three things for the page layer:
//!
//! - projects the live board into a snapshot document the client draws
//! - renders each player's chat log for the client to poll
//! - keeps track of which browser session plays which player
//!
//! It does not run the game, talk HTTP, or lay out pages.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use hexbridge::prelude::*;
//!
//! # async fn demo() -> Result<(), HexbridgeError> {
//! let bridge = Bridge::builder().build();
//! let game = bridge.new_game(Arc::new(Board::from_tiles([
//!     Tile::new(0, 0, HexType::Wood, 8),
//! ])));
//!
//! let mut session = Session::new();
//! bridge.sign_in(&mut session, "ann")?;
//! bridge.join_game(&mut session, &game, "Ann", "", Some("red")).await?;
//!
//! let script = bridge.board_script(&session).await?;
//! assert!(script.is_some());
//! # Ok(())
//! # }
//! ```

mod bridge;
mod error;
mod player;

pub use bridge::{Bridge, BridgeBuilder, BridgeConfig};
pub use error::HexbridgeError;
pub use player::WebPlayer;

pub use hexbridge_engine as engine;
pub use hexbridge_protocol as protocol;
pub use hexbridge_session as session;
pub use hexbridge_view as view;

/// The types most page-layer code needs.
pub mod prelude {
    pub use crate::{Bridge, BridgeBuilder, BridgeConfig, HexbridgeError, WebPlayer};
    pub use hexbridge_engine::{
        Board, BoardView, Building, BuildingKind, EdgeCoord, GameAdmin,
        GameConfig, HexType, NodeCoord, PlayerInfo, Port, Resource, Road,
        Seat, Tile,
    };
    pub use hexbridge_protocol::{FeedSnapshot, RenderedMessage, SnapshotDocument};
    pub use hexbridge_session::{Session, User};
    pub use hexbridge_view::{ChatInput, ChatOutcome, FeedConfig, ProjectorConfig};
}
