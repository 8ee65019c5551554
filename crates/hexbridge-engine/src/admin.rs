//! The in-memory game admin: owns a board and its registered seats.

use std::sync::Arc;

use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::{
    Board, Building, BuildingKind, ChatSink, EdgeCoord, EngineError, NodeCoord,
    PlayerInfo, Road, Seat,
};

// ---------------------------------------------------------------------------
// GameConfig
// ---------------------------------------------------------------------------

/// Settings for one game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player colors, in the order they are offered. The length of this
    /// list is the player limit.
    pub colors: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            colors: ["blue", "red", "white", "orange", "green", "brown"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// GameAdmin
// ---------------------------------------------------------------------------

/// One running game: the board plus every seat registered to it.
///
/// The admin is the engine side of the bridge. It assigns colors, fans
/// chat out to every seat, and gates piece placement on the owner being a
/// registered player. It does not enforce game rules.
pub struct GameAdmin<P: Seat> {
    board: Arc<Board>,
    config: GameConfig,
    /// Registration order is chat delivery order.
    seats: RwLock<Vec<Arc<P>>>,
}

impl<P: Seat> GameAdmin<P> {
    pub fn new(board: Arc<Board>, config: GameConfig) -> Self {
        Self {
            board,
            config,
            seats: RwLock::new(Vec::new()),
        }
    }

    pub fn board(&self) -> &Arc<Board> {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Registers a new seat.
    ///
    /// Picks `preferred` if that color is still free, otherwise a random
    /// free color, then calls `build` with it under the registration lock,
    /// so two concurrent registrations can never get the same color.
    /// `build` must give the seat exactly that color.
    ///
    /// # Errors
    /// [`EngineError::GameFull`] when every color is taken.
    pub async fn register<F>(
        &self,
        preferred: Option<&str>,
        build: F,
    ) -> Result<Arc<P>, EngineError>
    where
        F: FnOnce(String) -> P + Send,
    {
        let mut seats = self.seats.write().await;
        let color = {
            let taken: Vec<&str> = seats.iter().map(|s| s.color()).collect();
            pick_color(&self.config.colors, &taken, preferred)
        }
        .ok_or(EngineError::GameFull(self.config.colors.len()))?;

        let seat = Arc::new(build(color));
        seats.push(Arc::clone(&seat));
        tracing::info!(player = %seat.info(), "player registered");
        Ok(seat)
    }

    /// Every registered seat, in registration order.
    pub async fn seats(&self) -> Vec<Arc<P>> {
        self.seats.read().await.clone()
    }

    pub async fn seat_by_color(&self, color: &str) -> Option<Arc<P>> {
        self.seats
            .read()
            .await
            .iter()
            .find(|s| s.color() == color)
            .cloned()
    }

    pub async fn player_count(&self) -> usize {
        self.seats.read().await.len()
    }

    /// Sends a message from the admin (no sender) to every seat.
    pub async fn admin_msg(&self, text: &str) {
        for seat in self.seats().await {
            seat.chat_msg(None, text).await;
        }
    }

    /// Places a building owned by `color`.
    ///
    /// # Errors
    /// [`EngineError::UnknownColor`] if no seat has that color, or
    /// whatever [`Board::place_building`] returns.
    pub async fn place_building(
        &self,
        color: &str,
        coord: NodeCoord,
        kind: BuildingKind,
    ) -> Result<(), EngineError> {
        self.require_color(color).await?;
        let building = Building {
            kind,
            color: color.to_owned(),
        };
        self.board.place_building(coord, building).await
    }

    /// Places a road owned by `color`.
    pub async fn place_road(
        &self,
        color: &str,
        coord: EdgeCoord,
    ) -> Result<(), EngineError> {
        self.require_color(color).await?;
        self.board.place_road(coord, Road::new(color)).await
    }

    async fn require_color(&self, color: &str) -> Result<(), EngineError> {
        match self.seat_by_color(color).await {
            Some(_) => Ok(()),
            None => Err(EngineError::UnknownColor(color.to_owned())),
        }
    }
}

impl<P: Seat> ChatSink for GameAdmin<P> {
    /// Delivers the line to every seat, attributed to the registered
    /// player with the sender's color.
    async fn chat_msg(
        &self,
        sender: &PlayerInfo,
        text: &str,
    ) -> Result<(), EngineError> {
        let seats = self.seats().await;
        let author = seats
            .iter()
            .find(|s| s.color() == sender.color)
            .map(|s| s.info().clone())
            .ok_or_else(|| EngineError::UnknownColor(sender.color.clone()))?;

        for seat in &seats {
            seat.chat_msg(Some(&author), text).await;
        }
        tracing::debug!(
            player = %author,
            recipients = seats.len(),
            "chat delivered"
        );
        Ok(())
    }
}

/// `preferred` if free, else a random free color, else `None`.
fn pick_color(
    palette: &[String],
    taken: &[&str],
    preferred: Option<&str>,
) -> Option<String> {
    let free: Vec<&String> = palette
        .iter()
        .filter(|c| !taken.contains(&c.as_str()))
        .collect();

    if let Some(wanted) = preferred {
        if free.iter().any(|c| c.as_str() == wanted) {
            return Some(wanted.to_owned());
        }
    }
    free.choose(&mut rand::rng()).map(|c| (*c).clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        BoardView, HexCoord, HexType, MessageLog, Quote, Resource, Tile,
    };

    struct TestSeat {
        info: PlayerInfo,
        log: MessageLog,
        board: Arc<Board>,
    }

    impl Seat for TestSeat {
        fn info(&self) -> &PlayerInfo {
            &self.info
        }

        fn msg_log(&self) -> &MessageLog {
            &self.log
        }

        fn board(&self) -> &Arc<Board> {
            &self.board
        }

        async fn get_user_quotes(
            &self,
            _bidder: &PlayerInfo,
            _wants: &[Resource],
            _offers: &[Resource],
        ) -> Vec<Quote> {
            Vec::new()
        }

        async fn move_bandit(&self, _current: HexCoord) -> Option<HexCoord> {
            None
        }

        async fn select_player(
            &self,
            _candidates: &[PlayerInfo],
            _reason: u32,
        ) -> Option<PlayerInfo> {
            None
        }

        async fn select_resource_cards(
            &self,
            _cards: &[Resource],
            _count: usize,
            _reason: u32,
        ) -> Vec<Resource> {
            Vec::new()
        }
    }

    fn admin() -> GameAdmin<TestSeat> {
        let board = Arc::new(Board::from_tiles([Tile::new(
            0,
            0,
            HexType::Wood,
            8,
        )]));
        GameAdmin::new(board, GameConfig::default())
    }

    async fn join(
        admin: &GameAdmin<TestSeat>,
        name: &str,
        preferred: Option<&str>,
    ) -> Result<Arc<TestSeat>, EngineError> {
        let board = Arc::clone(admin.board());
        admin
            .register(preferred, |color| TestSeat {
                info: PlayerInfo {
                    first_name: name.into(),
                    last_name: String::new(),
                    color,
                },
                log: MessageLog::new(),
                board,
            })
            .await
    }

    // =====================================================================
    // register()
    // =====================================================================

    #[tokio::test]
    async fn test_register_preferred_color_when_free() {
        let admin = admin();
        let seat = join(&admin, "Ann", Some("red")).await.unwrap();
        assert_eq!(seat.color(), "red");
    }

    #[tokio::test]
    async fn test_register_taken_preferred_color_falls_back() {
        let admin = admin();
        join(&admin, "Ann", Some("red")).await.unwrap();

        let bob = join(&admin, "Bob", Some("red")).await.unwrap();

        assert_ne!(bob.color(), "red");
        assert!(admin.config().colors.iter().any(|c| c == bob.color()));
    }

    #[tokio::test]
    async fn test_register_beyond_palette_returns_game_full() {
        let admin = admin();
        for i in 0..6 {
            join(&admin, &format!("p{i}"), None).await.unwrap();
        }

        let result = join(&admin, "late", None).await;

        assert!(matches!(result, Err(EngineError::GameFull(6))));
        assert_eq!(admin.player_count().await, 6);
    }

    #[tokio::test]
    async fn test_register_assigns_distinct_colors() {
        let admin = admin();
        for i in 0..6 {
            join(&admin, &format!("p{i}"), None).await.unwrap();
        }
        let mut colors: Vec<_> = admin
            .seats()
            .await
            .iter()
            .map(|s| s.color().to_owned())
            .collect();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), 6);
    }

    // =====================================================================
    // chat
    // =====================================================================

    #[tokio::test]
    async fn test_chat_msg_delivers_to_every_seat_with_sender() {
        let admin = admin();
        let ann = join(&admin, "Ann", Some("red")).await.unwrap();
        let bob = join(&admin, "Bob", Some("blue")).await.unwrap();

        ChatSink::chat_msg(&admin, ann.info(), "hi").await.unwrap();

        for seat in [&ann, &bob] {
            let log = seat.msg_log().snapshot().await;
            assert_eq!(log.len(), 1);
            assert_eq!(log[0].text, "hi");
            assert_eq!(log[0].sender.as_ref(), Some(ann.info()));
        }
    }

    #[tokio::test]
    async fn test_chat_msg_unknown_sender_returns_error() {
        let admin = admin();
        join(&admin, "Ann", Some("red")).await.unwrap();
        let stranger = PlayerInfo {
            first_name: "Eve".into(),
            last_name: String::new(),
            color: "purple".into(),
        };

        let result = ChatSink::chat_msg(&admin, &stranger, "hi").await;

        assert!(matches!(result, Err(EngineError::UnknownColor(c)) if c == "purple"));
    }

    #[tokio::test]
    async fn test_admin_msg_has_no_sender() {
        let admin = admin();
        let ann = join(&admin, "Ann", None).await.unwrap();

        admin.admin_msg("Game started").await;

        let log = ann.msg_log().snapshot().await;
        assert_eq!(log.len(), 1);
        assert!(log[0].sender.is_none());
    }

    // =====================================================================
    // placement
    // =====================================================================

    #[tokio::test]
    async fn test_place_building_requires_registered_color() {
        let admin = admin();
        join(&admin, "Ann", Some("red")).await.unwrap();

        let ok = admin
            .place_building("red", NodeCoord::new(0, 0, 3), BuildingKind::Settlement)
            .await;
        let bad = admin
            .place_building("green", NodeCoord::new(0, 0, 4), BuildingKind::City)
            .await;

        assert!(ok.is_ok());
        assert!(matches!(bad, Err(EngineError::UnknownColor(_))));
        let occupied: Vec<_> = admin
            .board()
            .nodes()
            .await
            .into_iter()
            .filter(|n| n.has_building())
            .collect();
        assert_eq!(occupied.len(), 1);
    }

    #[tokio::test]
    async fn test_place_road_requires_registered_color() {
        let admin = admin();
        join(&admin, "Ann", Some("white")).await.unwrap();

        admin.place_road("white", EdgeCoord::new(0, 0, 5)).await.unwrap();
        let bad = admin.place_road("red", EdgeCoord::new(0, 0, 4)).await;

        assert!(matches!(bad, Err(EngineError::UnknownColor(_))));
    }

    // =====================================================================
    // pick_color()
    // =====================================================================

    #[test]
    fn test_pick_color_none_free_returns_none() {
        let palette = vec!["red".to_owned()];
        assert_eq!(pick_color(&palette, &["red"], Some("red")), None);
    }

    #[test]
    fn test_pick_color_only_free_color_is_chosen() {
        let palette = vec!["red".to_owned(), "blue".to_owned()];
        assert_eq!(
            pick_color(&palette, &["red"], None),
            Some("blue".to_owned())
        );
    }
}
