//! Wire protocol for hexbridge.
//!
//! This crate defines the documents the web client receives:
//!
//! - **Types** ([`SnapshotDocument`], [`RenderedMessage`], [`FeedSnapshot`],
//!   etc.): the structures that get serialized and shipped to the page.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]): how those documents are
//!   turned into bytes.
//! - **Script embedding** ([`script_assignment`]): how a document is
//!   injected into a page as `var name = {...};`.
//! - **Errors** ([`ProtocolError`]): what can go wrong while encoding.
//!
//! # Architecture
//!
//! The protocol layer knows nothing about boards, players, or sessions.
//! The view layer builds these documents; this crate only shapes and
//! serializes them.
//!
//! ```text
//! Engine (board graph) → View (projection) → Protocol (wire document)
//! ```

mod codec;
mod error;
mod types;

pub use codec::{script_assignment, Codec};
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use error::ProtocolError;
pub use types::{
    BuildingEntry, BuildingType, EdgeEntry, FeedSnapshot, NodeEntry,
    PortEntry, RenderedMessage, ResourceName, RoadEntry, SnapshotDocument,
    TileEntry,
};
