//! Projects the live board graph into a [`SnapshotDocument`].

use hexbridge_engine::{
    edge_port, BoardView, Building, BuildingKind, Edge, HexType, Node, Port,
    Resource, Road, Tile,
};
use hexbridge_protocol::{
    script_assignment, BuildingEntry, BuildingType, Codec, EdgeEntry,
    JsonCodec, NodeEntry, PortEntry, ProtocolError, ResourceName, RoadEntry,
    SnapshotDocument, TileEntry,
};
use serde::{Deserialize, Serialize};

use crate::ViewError;

// ---------------------------------------------------------------------------
// ProjectorConfig
// ---------------------------------------------------------------------------

/// Configuration for the board projector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectorConfig {
    /// Script variable the page reads the snapshot from.
    pub variable_name: String,
}

impl Default for ProjectorConfig {
    fn default() -> Self {
        Self {
            variable_name: "boardData".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// BoardProjector
// ---------------------------------------------------------------------------

/// Turns a board into the document the client draws.
///
/// What goes in:
///
/// - **tiles**: every tile
/// - **nodes**: only nodes with a building
/// - **edges**: only edges with a road, or whose endpoint 0 has a port
///
/// Projection is a pure read and is best effort. The engine may mutate
/// the board while it is being read; an edge whose endpoint disappears in
/// between is logged, left out, and counted in
/// [`SnapshotDocument::skipped`]. Everything else still renders.
pub struct BoardProjector<C: Codec = JsonCodec> {
    config: ProjectorConfig,
    codec: C,
}

impl BoardProjector<JsonCodec> {
    pub fn new(config: ProjectorConfig) -> Self {
        Self::with_codec(config, JsonCodec)
    }
}

impl Default for BoardProjector<JsonCodec> {
    fn default() -> Self {
        Self::new(ProjectorConfig::default())
    }
}

impl<C: Codec> BoardProjector<C> {
    /// Creates a projector that embeds documents with `codec`.
    pub fn with_codec(config: ProjectorConfig, codec: C) -> Self {
        Self { config, codec }
    }

    pub fn config(&self) -> &ProjectorConfig {
        &self.config
    }

    /// Builds the snapshot document for `board`.
    ///
    /// Listings are taken in the board's own order (`(x, y)` for tiles,
    /// `(x, y, n)` for nodes and edges), so two projections of an
    /// unchanged board are identical.
    pub async fn project<B: BoardView>(&self, board: &B) -> SnapshotDocument {
        let mut doc = SnapshotDocument {
            tiles: board.tiles().await.iter().map(render_tile).collect(),
            nodes: board
                .nodes()
                .await
                .iter()
                .filter(|node| node.has_building())
                .map(render_node)
                .collect(),
            ..SnapshotDocument::default()
        };

        for edge in board.edges().await {
            match render_edge(board, &edge).await {
                Ok(Some(entry)) => doc.edges.push(entry),
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(edge = %edge.coord, error = %e, "edge skipped");
                    doc.skipped += 1;
                }
            }
        }

        tracing::debug!(
            tiles = doc.tiles.len(),
            nodes = doc.nodes.len(),
            edges = doc.edges.len(),
            skipped = doc.skipped,
            "board projected"
        );
        doc
    }

    /// Projects `board` and embeds it as `var <variable_name> = ...;`.
    ///
    /// # Errors
    /// Whatever [`script_assignment`] returns for the configured codec and
    /// variable name.
    pub async fn render_script<B: BoardView>(
        &self,
        board: &B,
    ) -> Result<String, ProtocolError> {
        let doc = self.project(board).await;
        script_assignment(&self.codec, &self.config.variable_name, &doc)
    }
}

// ---------------------------------------------------------------------------
// Names
// ---------------------------------------------------------------------------

/// Wire name of a tile type.
pub fn tile_name(kind: HexType) -> ResourceName {
    match kind {
        HexType::Brick => ResourceName::Brick,
        HexType::Ore => ResourceName::Ore,
        HexType::Wood => ResourceName::Wood,
        HexType::Sheep => ResourceName::Sheep,
        HexType::Wheat => ResourceName::Wheat,
        HexType::Desert => ResourceName::Desert,
        _ => ResourceName::Unknown,
    }
}

/// Wire name of a port's resource. Generic ports (`None`) are `unknown`.
pub fn resource_name(resource: Option<Resource>) -> ResourceName {
    match resource {
        Some(Resource::Brick) => ResourceName::Brick,
        Some(Resource::Ore) => ResourceName::Ore,
        Some(Resource::Wood) => ResourceName::Wood,
        Some(Resource::Sheep) => ResourceName::Sheep,
        Some(Resource::Wheat) => ResourceName::Wheat,
        _ => ResourceName::Unknown,
    }
}

// ---------------------------------------------------------------------------
// Element rendering
// ---------------------------------------------------------------------------

fn render_tile(tile: &Tile) -> TileEntry {
    TileEntry {
        x: tile.coord.x,
        y: tile.coord.y,
        number: tile.number,
        kind: tile_name(tile.kind),
    }
}

fn render_building(building: &Building) -> BuildingEntry {
    let kind = match building.kind {
        BuildingKind::Settlement => BuildingType::Settlement,
        BuildingKind::City => BuildingType::City,
    };
    BuildingEntry {
        kind,
        color: building.color.clone(),
    }
}

fn render_port(port: &Port) -> PortEntry {
    PortEntry {
        kind: resource_name(port.kind),
        rate: port.rate,
    }
}

fn render_road(road: &Road) -> RoadEntry {
    RoadEntry {
        color: road.color.clone(),
    }
}

/// Used for both the `nodes` list and edge endpoints. Endpoints are
/// rendered in full even when unoccupied.
fn render_node(node: &Node) -> NodeEntry {
    NodeEntry {
        x: node.coord.x,
        y: node.coord.y,
        n: node.coord.n,
        city: node.building.as_ref().map(render_building),
        port: node.port.as_ref().map(render_port),
    }
}

/// `Ok(None)` when the edge has neither a road nor a port.
///
/// Endpoint 0 is looked up first because it decides the port; endpoint 1
/// is only fetched for edges that will be rendered.
async fn render_edge<B: BoardView>(
    board: &B,
    edge: &Edge,
) -> Result<Option<EdgeEntry>, ViewError> {
    let [first, second] = edge.endpoints;
    let first = board.node(first).await.ok_or(ViewError::MissingEndpoint {
        edge: edge.coord,
        node: first,
    })?;
    if !edge.has_road() && !first.has_port() {
        return Ok(None);
    }
    let second = board.node(second).await.ok_or(ViewError::MissingEndpoint {
        edge: edge.coord,
        node: second,
    })?;

    let endpoints = [first, second];
    Ok(Some(EdgeEntry {
        x: edge.coord.x,
        y: edge.coord.y,
        n: edge.coord.n,
        port: edge_port(&endpoints).map(render_port),
        road: edge.road.as_ref().map(render_road),
        nodes: [render_node(&endpoints[0]), render_node(&endpoints[1])],
    }))
}
