//! Seats two players on a small board, plays a few moves, and prints what
//! each browser would receive: the board script and the chat feed.
//!
//! Run with `RUST_LOG=debug` to see the bridge's own logging.

use std::sync::Arc;

use hexbridge::prelude::*;

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

fn board() -> Board {
    Board::from_tiles([
        Tile::new(0, 0, HexType::Wood, 8),
        Tile::new(1, 0, HexType::Brick, 5),
        Tile::new(0, 1, HexType::Desert, 0),
        Tile::new(1, 1, HexType::Ore, 10),
    ])
}

async fn sign_in_and_join(
    bridge: &Bridge,
    game: &Arc<GameAdmin<WebPlayer>>,
    username: &str,
    color: &str,
) -> Result<Session, HexbridgeError> {
    let mut session = Session::new();
    bridge.sign_in(&mut session, username)?;
    let player = bridge
        .join_game(&mut session, game, username, "", Some(color))
        .await?;
    tracing::info!(player = %player.info(), "seated");
    Ok(session)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let bridge = Bridge::builder().config(BridgeConfig::default()).build();
    let game = bridge.new_game(Arc::new(board()));

    let ann = sign_in_and_join(&bridge, &game, "Ann", "red").await?;
    let wes = sign_in_and_join(&bridge, &game, "Wes", "white").await?;

    game.board()
        .set_port(NodeCoord::new(1, 1, 0), Port::specific(Resource::Ore, 2))
        .await?;
    game.place_building("red", NodeCoord::new(0, 0, 3), BuildingKind::Settlement)
        .await?;
    game.place_building("white", NodeCoord::new(1, 0, 1), BuildingKind::City)
        .await?;
    game.place_road("white", EdgeCoord::new(1, 0, 1)).await?;

    game.admin_msg("Game started").await;
    bridge.post_chat(&ann, &mut ChatInput::new("good luck")).await?;
    bridge.post_chat(&wes, &mut ChatInput::new("you too")).await?;

    if let Some(script) = bridge.board_script(&ann).await? {
        println!("{script}");
    }
    for (name, session) in [("Ann", &ann), ("Wes", &wes)] {
        if let Some(feed) = bridge.feed(session).await {
            println!("-- feed for {name} --");
            println!("{}", serde_json::to_string_pretty(&feed)?);
        }
    }

    Ok(())
}
