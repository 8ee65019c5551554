//! Board and player model types.
//!
//! Coordinates follow the engine's hex layout: a hex is addressed by
//! `(x, y)` and each of its six corners (nodes) and sides (edges) by an
//! extra index `n` in `0..6`.
//!
//! ```text
//!  nodes                 edges
//!    5---------0            0
//!   /           \      5 /     \ 1
//!  4             1      |       |
//!   \           /      4 \     / 2
//!    3---------2            3
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// Coordinates
// ---------------------------------------------------------------------------

/// Position of a hex on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexCoord {
    pub x: i32,
    pub y: i32,
}

impl HexCoord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Position of a node: the hex it is addressed through plus its corner
/// index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeCoord {
    pub x: i32,
    pub y: i32,
    pub n: u8,
}

impl NodeCoord {
    pub fn new(x: i32, y: i32, n: u8) -> Self {
        Self { x, y, n }
    }
}

impl fmt::Display for NodeCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node({}, {}, {})", self.x, self.y, self.n)
    }
}

/// Position of an edge: the hex it is addressed through plus its side
/// index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeCoord {
    pub x: i32,
    pub y: i32,
    pub n: u8,
}

impl EdgeCoord {
    pub fn new(x: i32, y: i32, n: u8) -> Self {
        Self { x, y, n }
    }
}

impl fmt::Display for EdgeCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "edge({}, {}, {})", self.x, self.y, self.n)
    }
}

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// A tradable resource card.
///
/// `#[non_exhaustive]` keeps downstream crates honest: anything that maps
/// resources to names must carry a fallback arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Resource {
    Brick,
    Ore,
    Wood,
    Sheep,
    Wheat,
}

/// What a tile produces. Deserts produce nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum HexType {
    Brick,
    Ore,
    Wood,
    Sheep,
    Wheat,
    Desert,
}

impl HexType {
    /// The card this tile yields, or `None` for a desert.
    pub fn resource(self) -> Option<Resource> {
        match self {
            Self::Brick => Some(Resource::Brick),
            Self::Ore => Some(Resource::Ore),
            Self::Wood => Some(Resource::Wood),
            Self::Sheep => Some(Resource::Sheep),
            Self::Wheat => Some(Resource::Wheat),
            Self::Desert => None,
        }
    }
}

impl From<Resource> for HexType {
    fn from(resource: Resource) -> Self {
        match resource {
            Resource::Brick => Self::Brick,
            Resource::Ore => Self::Ore,
            Resource::Wood => Self::Wood,
            Resource::Sheep => Self::Sheep,
            Resource::Wheat => Self::Wheat,
        }
    }
}

// ---------------------------------------------------------------------------
// Board elements
// ---------------------------------------------------------------------------

/// A map tile. Immutable once the board is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub coord: HexCoord,
    pub kind: HexType,
    /// Production token (2..=12). Deserts carry 0.
    pub number: u8,
}

impl Tile {
    pub fn new(x: i32, y: i32, kind: HexType, number: u8) -> Self {
        Self {
            coord: HexCoord::new(x, y),
            kind,
            number,
        }
    }
}

/// Settlement or city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildingKind {
    Settlement,
    City,
}

/// A building owned by the player with `color`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Building {
    pub kind: BuildingKind,
    pub color: String,
}

impl Building {
    pub fn settlement(color: impl Into<String>) -> Self {
        Self {
            kind: BuildingKind::Settlement,
            color: color.into(),
        }
    }

    pub fn city(color: impl Into<String>) -> Self {
        Self {
            kind: BuildingKind::City,
            color: color.into(),
        }
    }

    /// Victory points this building is worth.
    pub fn points(&self) -> u32 {
        match self.kind {
            BuildingKind::Settlement => 1,
            BuildingKind::City => 2,
        }
    }
}

/// A trade port. `kind: None` is a generic port that accepts any resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Port {
    pub kind: Option<Resource>,
    pub rate: u32,
}

impl Port {
    pub fn generic(rate: u32) -> Self {
        Self { kind: None, rate }
    }

    pub fn specific(resource: Resource, rate: u32) -> Self {
        Self {
            kind: Some(resource),
            rate,
        }
    }
}

/// A road owned by the player with `color`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Road {
    pub color: String,
}

impl Road {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }
}

/// A graph vertex. Its port, if any, is the only stored port on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub coord: NodeCoord,
    pub building: Option<Building>,
    pub port: Option<Port>,
}

impl Node {
    pub fn new(coord: NodeCoord) -> Self {
        Self {
            coord,
            building: None,
            port: None,
        }
    }

    pub fn has_building(&self) -> bool {
        self.building.is_some()
    }

    pub fn has_port(&self) -> bool {
        self.port.is_some()
    }
}

/// A graph edge between two nodes. Endpoints are coordinates, looked up
/// on the board when needed; the edge owns neither node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub coord: EdgeCoord,
    pub endpoints: [NodeCoord; 2],
    pub road: Option<Road>,
}

impl Edge {
    pub fn new(coord: EdgeCoord, endpoints: [NodeCoord; 2]) -> Self {
        Self {
            coord,
            endpoints,
            road: None,
        }
    }

    pub fn has_road(&self) -> bool {
        self.road.is_some()
    }
}

// ---------------------------------------------------------------------------
// Players and messages
// ---------------------------------------------------------------------------

/// Public identity of a player, as other players see it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerInfo {
    pub first_name: String,
    pub last_name: String,
    pub color: String,
}

impl PlayerInfo {
    pub fn full_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

impl fmt::Display for PlayerInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.full_name(), self.color)
    }
}

/// One chat line. `sender: None` marks a message from the game admin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub sender: Option<PlayerInfo>,
    pub text: String,
}

impl Message {
    pub fn from_player(sender: PlayerInfo, text: impl Into<String>) -> Self {
        Self {
            sender: Some(sender),
            text: text.into(),
        }
    }

    pub fn from_admin(text: impl Into<String>) -> Self {
        Self {
            sender: None,
            text: text.into(),
        }
    }
}

/// A trade offer: `bidder` receives `give_count` of `give` in exchange
/// for one `receive`. `bidder: None` means the bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub bidder: Option<PlayerInfo>,
    pub receive: Resource,
    pub give: Resource,
    pub give_count: u32,
}
