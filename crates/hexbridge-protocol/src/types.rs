//! Wire documents sent to the web client.
//!
//! Two documents leave the server:
//!
//! - [`SnapshotDocument`]: the occupied parts of the board, embedded in the
//!   page as `var boardData = ...;`.
//! - [`FeedSnapshot`]: the rendered chat log, re-fetched by the client on a
//!   fixed polling interval.
//!
//! Optional sub-objects (`city`, `port`, `road`) are omitted from the JSON
//! when absent rather than written as `null`; the client tests for their
//! presence with `if (node.city)`.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Names
// ---------------------------------------------------------------------------

/// The resource-type literal a tile or port carries on the wire.
///
/// This is the closed set the client knows how to draw. Anything the
/// board model reports outside of it becomes [`ResourceName::Unknown`]
/// instead of failing the projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceName {
    Brick,
    Ore,
    Wood,
    Sheep,
    Wheat,
    Desert,
    Unknown,
}

impl ResourceName {
    /// The literal written on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Brick => "brick",
            Self::Ore => "ore",
            Self::Wood => "wood",
            Self::Sheep => "sheep",
            Self::Wheat => "wheat",
            Self::Desert => "desert",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ResourceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which kind of building occupies a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildingType {
    Settlement,
    City,
}

// ---------------------------------------------------------------------------
// Board snapshot
// ---------------------------------------------------------------------------

/// `{type, color}` under a node's `city` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingEntry {
    #[serde(rename = "type")]
    pub kind: BuildingType,
    pub color: String,
}

/// `{type, rate}` under a node's or edge's `port` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortEntry {
    #[serde(rename = "type")]
    pub kind: ResourceName,
    pub rate: u32,
}

/// `{color}` under an edge's `road` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadEntry {
    pub color: String,
}

/// One map tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileEntry {
    pub x: i32,
    pub y: i32,
    pub number: u8,
    #[serde(rename = "type")]
    pub kind: ResourceName,
}

/// One board node. Appears in the top-level `nodes` list (only when a
/// building is present) and as an edge endpoint (always).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeEntry {
    pub x: i32,
    pub y: i32,
    pub n: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<BuildingEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<PortEntry>,
}

/// One board edge with both endpoints rendered in full.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeEntry {
    pub x: i32,
    pub y: i32,
    pub n: u8,
    pub nodes: [NodeEntry; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub road: Option<RoadEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<PortEntry>,
}

/// The full board snapshot.
///
/// `skipped` counts elements dropped because they could not be rendered
/// (e.g. an edge whose endpoint vanished mid-read). It is server-side
/// bookkeeping only and never goes on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotDocument {
    pub tiles: Vec<TileEntry>,
    pub nodes: Vec<NodeEntry>,
    pub edges: Vec<EdgeEntry>,
    #[serde(skip)]
    pub skipped: usize,
}

impl SnapshotDocument {
    /// Returns `true` if every element of the board made it into the
    /// document.
    pub fn is_complete(&self) -> bool {
        self.skipped == 0
    }
}

// ---------------------------------------------------------------------------
// Message feed
// ---------------------------------------------------------------------------

/// One chat line as the client draws it: sender label, label color, text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedMessage {
    pub name: String,
    pub color: String,
    pub text: String,
}

/// A full re-render of a player's feed plus the cadence the client should
/// poll at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSnapshot {
    pub messages: Vec<RenderedMessage>,
    pub poll_interval_ms: u64,
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    //! The client reads these documents with plain property access, so
    //! the exact JSON shape matters more than round-tripping.

    use super::*;

    fn bare_node(n: u8) -> NodeEntry {
        NodeEntry {
            x: 1,
            y: 2,
            n,
            city: None,
            port: None,
        }
    }

    #[test]
    fn test_resource_name_serializes_lowercase() {
        let json = serde_json::to_string(&ResourceName::Wheat).unwrap();
        assert_eq!(json, "\"wheat\"");
        let json = serde_json::to_string(&ResourceName::Unknown).unwrap();
        assert_eq!(json, "\"unknown\"");
    }

    #[test]
    fn test_resource_name_as_str_matches_serde() {
        for name in [
            ResourceName::Brick,
            ResourceName::Ore,
            ResourceName::Wood,
            ResourceName::Sheep,
            ResourceName::Wheat,
            ResourceName::Desert,
            ResourceName::Unknown,
        ] {
            let json = serde_json::to_value(name).unwrap();
            assert_eq!(json, name.as_str());
            assert_eq!(name.to_string(), name.as_str());
        }
    }

    #[test]
    fn test_tile_entry_uses_type_key() {
        let tile = TileEntry {
            x: 0,
            y: 0,
            number: 8,
            kind: ResourceName::Wood,
        };
        let json = serde_json::to_value(&tile).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"x": 0, "y": 0, "number": 8, "type": "wood"})
        );
    }

    #[test]
    fn test_node_entry_omits_absent_city_and_port() {
        let json = serde_json::to_value(bare_node(3)).unwrap();
        assert_eq!(json, serde_json::json!({"x": 1, "y": 2, "n": 3}));
    }

    #[test]
    fn test_node_entry_with_city_and_port() {
        let node = NodeEntry {
            city: Some(BuildingEntry {
                kind: BuildingType::City,
                color: "red".into(),
            }),
            port: Some(PortEntry {
                kind: ResourceName::Ore,
                rate: 2,
            }),
            ..bare_node(0)
        };
        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json["city"]["type"], "city");
        assert_eq!(json["city"]["color"], "red");
        assert_eq!(json["port"]["type"], "ore");
        assert_eq!(json["port"]["rate"], 2);
    }

    #[test]
    fn test_edge_entry_json_shape() {
        let edge = EdgeEntry {
            x: 1,
            y: 2,
            n: 5,
            nodes: [bare_node(4), bare_node(5)],
            road: Some(RoadEntry {
                color: "white".into(),
            }),
            port: None,
        };
        let json = serde_json::to_value(&edge).unwrap();

        assert_eq!(json["n"], 5);
        assert_eq!(json["nodes"].as_array().unwrap().len(), 2);
        assert_eq!(json["road"], serde_json::json!({"color": "white"}));
        assert!(json.get("port").is_none());
    }

    #[test]
    fn test_snapshot_document_never_serializes_skipped() {
        let doc = SnapshotDocument {
            skipped: 3,
            ..SnapshotDocument::default()
        };
        let json = serde_json::to_value(&doc).unwrap();

        assert!(json.get("skipped").is_none());
        assert!(!doc.is_complete());
        assert!(SnapshotDocument::default().is_complete());
    }

    #[test]
    fn test_feed_snapshot_json_shape() {
        let feed = FeedSnapshot {
            messages: vec![RenderedMessage {
                name: "Ann".into(),
                color: "red".into(),
                text: "hi".into(),
            }],
            poll_interval_ms: 5000,
        };
        let json = serde_json::to_value(&feed).unwrap();

        assert_eq!(json["poll_interval_ms"], 5000);
        assert_eq!(
            json["messages"][0],
            serde_json::json!({"name": "Ann", "color": "red", "text": "hi"})
        );
    }

    #[test]
    fn test_decode_unknown_building_type_returns_error() {
        let result: Result<BuildingEntry, _> =
            serde_json::from_str(r#"{"type": "castle", "color": "red"}"#);
        assert!(result.is_err());
    }
}
