//! The capability traits at the engine boundary.
//!
//! The engine talks to every player through [`Seat`]: it delivers chat,
//! and asks for the handful of decisions it cannot make alone. Front ends
//! implement `Seat` once, with one adapter type, instead of subclassing a
//! player per UI.
//!
//! [`ChatSink`] is the other direction: where a front end sends a chat line
//! a player typed.

use std::future::Future;
use std::sync::Arc;

use crate::{Board, EngineError, HexCoord, Message, MessageLog, PlayerInfo, Quote, Resource};

/// A player as the engine sees it.
///
/// # Trait bounds
///
/// - `Send + Sync` → seats are shared between the admin and every request
///   handler that resolves the player.
/// - `'static` → seats live as long as the game, not as long as a request.
pub trait Seat: Send + Sync + 'static {
    /// Name and color. The color is assigned at registration and never
    /// changes afterwards.
    fn info(&self) -> &PlayerInfo;

    /// This player's chat log.
    fn msg_log(&self) -> &MessageLog;

    /// The board this player is playing on. Shared with the admin.
    fn board(&self) -> &Arc<Board>;

    fn color(&self) -> &str {
        &self.info().color
    }

    /// Delivers a chat line to this player. `sender: None` is the admin.
    ///
    /// The default appends to [`msg_log`](Self::msg_log).
    fn chat_msg(
        &self,
        sender: Option<&PlayerInfo>,
        text: &str,
    ) -> impl Future<Output = ()> + Send {
        let message = Message {
            sender: sender.cloned(),
            text: text.to_owned(),
        };
        async move { self.msg_log().append(message).await }
    }

    /// Asks for trade offers: `bidder` wants one of `wants` and can give
    /// from `offers`.
    fn get_user_quotes(
        &self,
        bidder: &PlayerInfo,
        wants: &[Resource],
        offers: &[Resource],
    ) -> impl Future<Output = Vec<Quote>> + Send;

    /// Asks where to move the bandit. `None` leaves the choice to the
    /// engine.
    fn move_bandit(
        &self,
        current: HexCoord,
    ) -> impl Future<Output = Option<HexCoord>> + Send;

    /// Asks the player to pick one of `candidates` (e.g. whom to steal
    /// from). `reason` is an engine-defined code.
    fn select_player(
        &self,
        candidates: &[PlayerInfo],
        reason: u32,
    ) -> impl Future<Output = Option<PlayerInfo>> + Send;

    /// Asks the player to pick `count` cards out of `cards`.
    fn select_resource_cards(
        &self,
        cards: &[Resource],
        count: usize,
        reason: u32,
    ) -> impl Future<Output = Vec<Resource>> + Send;
}

/// Accepts chat lines written by a player.
pub trait ChatSink: Send + Sync {
    /// Forwards `text`, written by `sender`, to the game.
    ///
    /// # Errors
    /// Implementation defined; the in-memory admin returns
    /// [`EngineError::UnknownColor`] when `sender` is not registered.
    fn chat_msg(
        &self,
        sender: &PlayerInfo,
        text: &str,
    ) -> impl Future<Output = Result<(), EngineError>> + Send;
}
