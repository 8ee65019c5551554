//! Integration tests for board projection against real and flaky boards.

use std::collections::BTreeSet;
use std::sync::Arc;

use hexbridge_engine::{
    Board, BoardView, Building, Edge, EdgeCoord, HexType, Node, NodeCoord,
    Port, Resource, Road, Tile,
};
use hexbridge_protocol::{BuildingType, ResourceName, SnapshotDocument};
use hexbridge_view::{BoardProjector, ProjectorConfig};

fn projector() -> BoardProjector {
    BoardProjector::new(ProjectorConfig::default())
}

// =========================================================================
// Flaky board: a node disappears between the edge listing and the lookup.
// =========================================================================

/// Delegates to a real board but pretends `vanished` is gone whenever it
/// is looked up by coordinate, as if the engine removed it mid-read.
struct FlakyBoard {
    inner: Board,
    vanished: NodeCoord,
}

impl BoardView for FlakyBoard {
    async fn tiles(&self) -> Vec<Tile> {
        self.inner.tiles().await
    }

    async fn nodes(&self) -> Vec<Node> {
        self.inner.nodes().await
    }

    async fn edges(&self) -> Vec<Edge> {
        self.inner.edges().await
    }

    async fn node(&self, coord: NodeCoord) -> Option<Node> {
        if coord == self.vanished {
            None
        } else {
            self.inner.node(coord).await
        }
    }
}

// =========================================================================
// Scenario: one hex, one settlement, one road
// =========================================================================

#[tokio::test]
async fn test_single_hex_settlement_and_white_road() {
    let board = Board::new();
    board.add_tile(Tile::new(0, 0, HexType::Wood, 8)).await;
    for n in [3, 4] {
        board.add_node(Node::new(NodeCoord::new(0, 0, n))).await;
    }
    board
        .add_edge(Edge::new(
            EdgeCoord::new(0, 0, 5),
            [NodeCoord::new(0, 0, 3), NodeCoord::new(0, 0, 4)],
        ))
        .await
        .unwrap();
    board
        .place_building(NodeCoord::new(0, 0, 3), Building::settlement("red"))
        .await
        .unwrap();
    board
        .place_road(EdgeCoord::new(0, 0, 5), Road::new("white"))
        .await
        .unwrap();

    let doc = projector().project(&board).await;
    let json = serde_json::to_value(&doc).unwrap();

    assert_eq!(
        json["tiles"],
        serde_json::json!([{"x": 0, "y": 0, "number": 8, "type": "wood"}])
    );
    assert_eq!(
        json["nodes"],
        serde_json::json!([{
            "x": 0, "y": 0, "n": 3,
            "city": {"type": "settlement", "color": "red"}
        }])
    );
    assert_eq!(json["edges"].as_array().unwrap().len(), 1);
    let edge = &json["edges"][0];
    assert_eq!(edge["n"], 5);
    assert_eq!(edge["road"], serde_json::json!({"color": "white"}));
    assert!(edge.get("port").is_none());
    assert_eq!(edge["nodes"][0]["city"]["color"], "red");
    assert!(edge["nodes"][1].get("city").is_none());
}

// =========================================================================
// Filtering: exactly the occupied nodes and edges
// =========================================================================

/// Builds a 3-hex board and occupies a deterministic but irregular
/// subset of nodes, edges, and ports, chosen by `seed`.
async fn occupied_board(seed: u32) -> Board {
    let board = Board::from_tiles([
        Tile::new(0, 0, HexType::Brick, 6),
        Tile::new(1, 0, HexType::Sheep, 10),
        Tile::new(0, 1, HexType::Desert, 0),
    ]);
    for node in board.nodes().await {
        let c = node.coord;
        let h = (c.x as u32 * 7 + c.y as u32 * 13 + u32::from(c.n) * 3 + seed) % 5;
        match h {
            0 => board
                .place_building(c, Building::settlement("red"))
                .await
                .unwrap(),
            1 => board
                .place_building(c, Building::city("blue"))
                .await
                .unwrap(),
            2 => board.set_port(c, Port::generic(3)).await.unwrap(),
            _ => {}
        }
    }
    for edge in board.edges().await {
        let c = edge.coord;
        if (c.x as u32 + c.y as u32 * 2 + u32::from(c.n) + seed) % 3 == 0 {
            board.place_road(c, Road::new("orange")).await.unwrap();
        }
    }
    board
}

#[tokio::test]
async fn test_nodes_are_exactly_the_occupied_ones() {
    for seed in 0..8 {
        let board = occupied_board(seed).await;

        let doc = projector().project(&board).await;

        let expected: BTreeSet<_> = board
            .nodes()
            .await
            .into_iter()
            .filter(Node::has_building)
            .map(|n| (n.coord.x, n.coord.y, n.coord.n))
            .collect();
        let actual: BTreeSet<_> =
            doc.nodes.iter().map(|n| (n.x, n.y, n.n)).collect();
        assert_eq!(actual, expected, "seed {seed}");
        assert_eq!(doc.nodes.len(), expected.len());
    }
}

#[tokio::test]
async fn test_edges_are_exactly_roads_or_endpoint_zero_ports() {
    for seed in 0..8 {
        let board = occupied_board(seed).await;

        let doc = projector().project(&board).await;

        let mut expected = BTreeSet::new();
        for edge in board.edges().await {
            let has_port = board.has_port(edge.coord).await.unwrap();
            if edge.has_road() || has_port {
                expected.insert((edge.coord.x, edge.coord.y, edge.coord.n));
            }
        }
        let actual: BTreeSet<_> =
            doc.edges.iter().map(|e| (e.x, e.y, e.n)).collect();
        assert_eq!(actual, expected, "seed {seed}");
        assert!(doc.is_complete());
    }
}

#[tokio::test]
async fn test_city_and_settlement_are_distinguished() {
    let board = Board::from_tiles([Tile::new(0, 0, HexType::Ore, 4)]);
    board
        .place_building(NodeCoord::new(0, 0, 0), Building::settlement("red"))
        .await
        .unwrap();
    board
        .place_building(NodeCoord::new(0, 0, 1), Building::city("red"))
        .await
        .unwrap();

    let doc = projector().project(&board).await;

    let kinds: Vec<_> = doc
        .nodes
        .iter()
        .map(|n| n.city.as_ref().unwrap().kind)
        .collect();
    assert_eq!(kinds, vec![BuildingType::Settlement, BuildingType::City]);
}

#[tokio::test]
async fn test_specific_port_named_by_resource() {
    let board = Board::from_tiles([Tile::new(0, 0, HexType::Ore, 4)]);
    board
        .set_port(NodeCoord::new(0, 0, 3), Port::specific(Resource::Wheat, 2))
        .await
        .unwrap();

    let doc = projector().project(&board).await;

    // Node 3 is endpoint 0 of edge 4.
    assert_eq!(doc.edges.len(), 1);
    assert_eq!(doc.edges[0].n, 4);
    assert_eq!(
        doc.edges[0].port.as_ref().unwrap().kind,
        ResourceName::Wheat
    );
}

// =========================================================================
// Partial failures
// =========================================================================

#[tokio::test]
async fn test_vanished_endpoint_skips_only_edges_touching_it() {
    let inner = Board::from_tiles([Tile::new(0, 0, HexType::Wood, 8)]);
    // Edge 2 joins nodes 1 and 2; edge 3 joins nodes 2 and 3; edge 4
    // joins nodes 3 and 4.
    inner
        .place_road(EdgeCoord::new(0, 0, 2), Road::new("red"))
        .await
        .unwrap();
    inner
        .place_road(EdgeCoord::new(0, 0, 4), Road::new("blue"))
        .await
        .unwrap();
    let board = FlakyBoard {
        inner,
        vanished: NodeCoord::new(0, 0, 2),
    };

    let doc = projector().project(&board).await;

    // Edge 2 needs node 2 for its road, edge 3 needs it for the port
    // check. Edge 4 is untouched.
    assert_eq!(doc.skipped, 2);
    assert!(!doc.is_complete());
    assert_eq!(doc.tiles.len(), 1);
    assert_eq!(doc.edges.len(), 1);
    assert_eq!(doc.edges[0].n, 4);
}

#[tokio::test]
async fn test_vanished_endpoint_one_of_bare_edge_is_never_read() {
    let inner = Board::from_tiles([Tile::new(0, 0, HexType::Wood, 8)]);
    let board = FlakyBoard {
        inner,
        vanished: NodeCoord::new(0, 0, 4),
    };

    let doc = projector().project(&board).await;

    // Node 4 is endpoint 1 of edge 4, which has no road and no port and
    // so never looks it up. It is endpoint 0 of edge 5, whose port check
    // does.
    assert_eq!(doc.skipped, 1);
    assert!(doc.edges.is_empty());
}

#[tokio::test]
async fn test_skipped_count_never_reaches_the_script() {
    let inner = Board::from_tiles([Tile::new(0, 0, HexType::Wood, 8)]);
    inner
        .place_road(EdgeCoord::new(0, 0, 2), Road::new("red"))
        .await
        .unwrap();
    let board = FlakyBoard {
        inner,
        vanished: NodeCoord::new(0, 0, 1),
    };

    let script = projector().render_script(&board).await.unwrap();

    assert!(!script.contains("skipped"));
    assert!(script.contains(r#""edges":[]"#));
}

// =========================================================================
// Concurrent mutation
// =========================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_projection_during_mutation_sees_consistent_documents() {
    let board = Arc::new(Board::from_tiles([
        Tile::new(0, 0, HexType::Wood, 8),
        Tile::new(1, 0, HexType::Brick, 5),
    ]));

    let writer = {
        let board = Arc::clone(&board);
        tokio::spawn(async move {
            for edge in board.edges().await {
                board.place_road(edge.coord, Road::new("green")).await.unwrap();
                tokio::task::yield_now().await;
            }
        })
    };

    let projector = projector();
    let mut last = 0;
    for _ in 0..20 {
        let doc: SnapshotDocument = projector.project(board.as_ref()).await;
        assert!(doc.is_complete());
        // Roads are only ever added, so the edge count never shrinks.
        assert!(doc.edges.len() >= last);
        last = doc.edges.len();
        tokio::task::yield_now().await;
    }

    writer.await.unwrap();
    let done = projector.project(board.as_ref()).await;
    assert_eq!(done.edges.len(), 12);
}
