//! `WebPlayer`: the seat a browser user plays through.

use std::sync::{Arc, Weak};

use hexbridge_engine::{
    Board, EngineError, GameAdmin, HexCoord, Message, MessageLog, PlayerInfo,
    Quote, Resource, Seat,
};

/// A player driven from the web client.
///
/// Chat lands in the player's [`MessageLog`], which the feed renders on
/// every poll. The client has no prompts for trades, the bandit, or card
/// selection, so those decisions are declined and the engine falls back
/// to its own choice.
///
/// The admin owns its seats; the seat only holds a [`Weak`] handle back,
/// so dropping the game frees both.
pub struct WebPlayer {
    info: PlayerInfo,
    log: MessageLog,
    board: Arc<Board>,
    admin: Weak<GameAdmin<WebPlayer>>,
}

impl WebPlayer {
    pub fn new(
        info: PlayerInfo,
        board: Arc<Board>,
        admin: Weak<GameAdmin<WebPlayer>>,
    ) -> Self {
        Self {
            info,
            log: MessageLog::new(),
            board,
            admin,
        }
    }

    /// The game this player belongs to.
    ///
    /// # Errors
    /// [`EngineError::GameClosed`] if the game has been dropped.
    pub fn admin(&self) -> Result<Arc<GameAdmin<WebPlayer>>, EngineError> {
        self.admin.upgrade().ok_or(EngineError::GameClosed)
    }
}

impl std::fmt::Debug for WebPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebPlayer")
            .field("info", &self.info)
            .finish_non_exhaustive()
    }
}

impl Seat for WebPlayer {
    fn info(&self) -> &PlayerInfo {
        &self.info
    }

    fn msg_log(&self) -> &MessageLog {
        &self.log
    }

    fn board(&self) -> &Arc<Board> {
        &self.board
    }

    async fn chat_msg(&self, sender: Option<&PlayerInfo>, text: &str) {
        tracing::debug!(
            player = %self.info,
            from = sender.map_or("admin", |s| s.first_name.as_str()),
            "chat received"
        );
        let message = Message {
            sender: sender.cloned(),
            text: text.to_owned(),
        };
        self.log.append(message).await;
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
