//! The board graph and its read seam.

use std::collections::BTreeMap;
use std::future::Future;

use tokio::sync::RwLock;

use crate::{
    Building, Edge, EdgeCoord, EngineError, HexCoord, Node, NodeCoord, Port,
    Road, Tile,
};

/// Read access to a board, as the projector consumes it.
///
/// Every method returns owned copies taken at call time. Nothing ties two
/// calls together: the engine may mutate the board between `edges()` and
/// a later `node()`, and a node seen in one call may be gone in the next.
/// Readers must tolerate that.
pub trait BoardView: Send + Sync {
    /// Every tile.
    fn tiles(&self) -> impl Future<Output = Vec<Tile>> + Send;

    /// Every node, occupied or not.
    fn nodes(&self) -> impl Future<Output = Vec<Node>> + Send;

    /// Every edge, occupied or not.
    fn edges(&self) -> impl Future<Output = Vec<Edge>> + Send;

    /// The node at `coord`, if the board has one.
    fn node(
        &self,
        coord: NodeCoord,
    ) -> impl Future<Output = Option<Node>> + Send;
}

/// The port an edge exposes, derived from its endpoint nodes.
///
/// Only endpoint 0 is consulted. Edges never store a port of their own.
pub fn edge_port(endpoints: &[Node; 2]) -> Option<&Port> {
    endpoints[0].port.as_ref()
}

#[derive(Debug, Default)]
struct BoardState {
    tiles: BTreeMap<HexCoord, Tile>,
    nodes: BTreeMap<NodeCoord, Node>,
    edges: BTreeMap<EdgeCoord, Edge>,
}

/// The in-memory board graph.
///
/// Elements live in `BTreeMap`s keyed by coordinate, so every listing
/// comes back in `(x, y, n)` order and two reads of an unchanged board are
/// identical. A single `RwLock` guards the whole graph: many concurrent
/// readers, one writer at a time.
#[derive(Debug, Default)]
pub struct Board {
    state: RwLock<BoardState>,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lays out a board from its tiles.
    ///
    /// Each hex gets its own six nodes and six edges; edge `n` joins nodes
    /// `(n + 5) % 6` and `n` of the same hex. Corners shared between
    /// neighbouring hexes are not merged.
    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Self {
        let mut state = BoardState::default();
        for tile in tiles {
            let HexCoord { x, y } = tile.coord;
            for n in 0..6u8 {
                let node = NodeCoord::new(x, y, n);
                state.nodes.insert(node, Node::new(node));
            }
            for n in 0..6u8 {
                let coord = EdgeCoord::new(x, y, n);
                let endpoints =
                    [NodeCoord::new(x, y, (n + 5) % 6), NodeCoord::new(x, y, n)];
                state.edges.insert(coord, Edge::new(coord, endpoints));
            }
            state.tiles.insert(tile.coord, tile);
        }
        Self {
            state: RwLock::new(state),
        }
    }

    /// Adds (or replaces) a tile.
    pub async fn add_tile(&self, tile: Tile) {
        self.state.write().await.tiles.insert(tile.coord, tile);
    }

    /// Adds (or replaces) a node.
    pub async fn add_node(&self, node: Node) {
        self.state.write().await.nodes.insert(node.coord, node);
    }

    /// Adds (or replaces) an edge.
    ///
    /// # Errors
    /// [`EngineError::UnknownNode`] if either endpoint is not on the board.
    pub async fn add_edge(&self, edge: Edge) -> Result<(), EngineError> {
        let mut state = self.state.write().await;
        for endpoint in edge.endpoints {
            if !state.nodes.contains_key(&endpoint) {
                return Err(EngineError::UnknownNode(endpoint));
            }
        }
        state.edges.insert(edge.coord, edge);
        Ok(())
    }

    /// Puts a building on a node, replacing any building already there
    /// (a city replaces its settlement).
    pub async fn place_building(
        &self,
        coord: NodeCoord,
        building: Building,
    ) -> Result<(), EngineError> {
        let mut state = self.state.write().await;
        let node = state
            .nodes
            .get_mut(&coord)
            .ok_or(EngineError::UnknownNode(coord))?;
        node.building = Some(building);
        Ok(())
    }

    /// Puts a road on an edge.
    pub async fn place_road(
        &self,
        coord: EdgeCoord,
        road: Road,
    ) -> Result<(), EngineError> {
        let mut state = self.state.write().await;
        let edge = state
            .edges
            .get_mut(&coord)
            .ok_or(EngineError::UnknownEdge(coord))?;
        edge.road = Some(road);
        Ok(())
    }

    /// Attaches a port to a node.
    pub async fn set_port(
        &self,
        coord: NodeCoord,
        port: Port,
    ) -> Result<(), EngineError> {
        let mut state = self.state.write().await;
        let node = state
            .nodes
            .get_mut(&coord)
            .ok_or(EngineError::UnknownNode(coord))?;
        node.port = Some(port);
        Ok(())
    }

    /// The port an edge exposes, read through its endpoint 0.
    pub async fn edge_port(
        &self,
        coord: EdgeCoord,
    ) -> Result<Option<Port>, EngineError> {
        let state = self.state.read().await;
        let edge = state
            .edges
            .get(&coord)
            .ok_or(EngineError::UnknownEdge(coord))?;
        let first = edge.endpoints[0];
        let node = state
            .nodes
            .get(&first)
            .ok_or(EngineError::UnknownNode(first))?;
        Ok(node.port)
    }

    /// Returns `true` if the edge's endpoint 0 has a port.
    pub async fn has_port(&self, coord: EdgeCoord) -> Result<bool, EngineError> {
        Ok(self.edge_port(coord).await?.is_some())
    }
}

impl BoardView for Board {
    async fn tiles(&self) -> Vec<Tile> {
        self.state.read().await.tiles.values().cloned().collect()
    }

    async fn nodes(&self) -> Vec<Node> {
        self.state.read().await.nodes.values().cloned().collect()
    }

    async fn edges(&self) -> Vec<Edge> {
        self.state.read().await.edges.values().cloned().collect()
    }

    async fn node(&self, coord: NodeCoord) -> Option<Node> {
        self.state.read().await.nodes.get(&coord).cloned()
    }
}
