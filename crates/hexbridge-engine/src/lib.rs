//! Game engine seam for hexbridge.
//!
//! The bridge does not run the game. It reads a board owned by the
//! engine, reads each player's message log, and forwards chat. This crate
//! defines that seam:
//!
//! - [`BoardView`]: read access to tiles, nodes, and edges
//! - [`ChatSink`]: where chat submissions are forwarded
//! - [`Seat`]: the capability set a player adapter implements
//! - [`MessageLog`]: a player's append-only chat log
//!
//! It also ships the in-memory engine objects the bridge is wired to:
//! [`Board`] (an `RwLock`-guarded board graph) and [`GameAdmin`] (owns a
//! board and the seats registered to it). Game rules (dice, trades, turn
//! order) are not here.
//!
//! ```text
//! GameAdmin ──owns──→ Board ←──reads── projector
//!     │
//!     └──delivers chat──→ Seat::chat_msg ──→ MessageLog ←──reads── feed
//! ```

mod admin;
mod board;
mod error;
mod log;
mod model;
mod seat;

pub use admin::{GameAdmin, GameConfig};
pub use board::{edge_port, Board, BoardView};
pub use error::EngineError;
pub use log::MessageLog;
pub use model::{
    Building, BuildingKind, Edge, EdgeCoord, HexCoord, HexType, Message,
    Node, NodeCoord, PlayerInfo, Port, Quote, Resource, Road, Tile,
};
pub use seat::{ChatSink, Seat};
