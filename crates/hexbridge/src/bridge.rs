//! `Bridge` builder and facade.
//!
//! This is what the page layer calls. It ties the layers together:
//! session → registry → player → view.

use std::sync::Arc;

use hexbridge_engine::{Board, GameAdmin, GameConfig, PlayerInfo, Seat};
use hexbridge_protocol::{FeedSnapshot, SnapshotDocument};
use hexbridge_session::{IdentityRegistry, Session, SessionBinding, SessionError, User};
use hexbridge_view::{
    BoardProjector, ChatInput, ChatOutcome, FeedConfig, MessageFeed,
    ProjectorConfig,
};
use serde::{Deserialize, Serialize};

use crate::{HexbridgeError, WebPlayer};

// ---------------------------------------------------------------------------
// BridgeConfig
// ---------------------------------------------------------------------------

/// Everything a [`Bridge`] can be tuned with.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Applied to games created through [`Bridge::new_game`].
    pub game: GameConfig,
    pub projector: ProjectorConfig,
    pub feed: FeedConfig,
}

// ---------------------------------------------------------------------------
// BridgeBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring a [`Bridge`].
///
/// # Example
///
/// ```rust
/// use hexbridge::prelude::*;
///
/// let bridge = Bridge::builder()
///     .config(BridgeConfig::default())
///     .build();
/// ```
pub struct BridgeBuilder {
    config: BridgeConfig,
    registry: Option<Arc<IdentityRegistry<WebPlayer>>>,
}

impl BridgeBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: BridgeConfig::default(),
            registry: None,
        }
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: BridgeConfig) -> Self {
        self.config = config;
        self
    }

    /// Shares an existing identity registry instead of creating a fresh
    /// one, e.g. to run several bridges over the same players.
    pub fn registry(mut self, registry: Arc<IdentityRegistry<WebPlayer>>) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn build(self) -> Bridge {
        let registry = self
            .registry
            .unwrap_or_else(|| Arc::new(IdentityRegistry::new()));
        let BridgeConfig {
            game,
            projector,
            feed,
        } = self.config;
        tracing::debug!(colors = game.colors.len(), "bridge built");
        Bridge {
            binding: SessionBinding::new(registry),
            projector: BoardProjector::new(projector),
            feed: MessageFeed::new(feed),
            game,
        }
    }
}

impl Default for BridgeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Bridge
// ---------------------------------------------------------------------------

/// The page layer's entry point.
///
/// Every operation takes the caller's [`Session`]. Operations that need a
/// player return `None` (or [`HexbridgeError::NotPlaying`] when they
/// already return a `Result`) if the session has none, so the caller can
/// redirect to sign-in.
pub struct Bridge {
    binding: SessionBinding<WebPlayer>,
    projector: BoardProjector,
    feed: MessageFeed,
    game: GameConfig,
}

impl Bridge {
    pub fn builder() -> BridgeBuilder {
        BridgeBuilder::new()
    }

    pub fn registry(&self) -> &Arc<IdentityRegistry<WebPlayer>> {
        self.binding.registry()
    }

    /// Starts a game on `board` with the configured [`GameConfig`].
    pub fn new_game(&self, board: Arc<Board>) -> Arc<GameAdmin<WebPlayer>> {
        tracing::info!(max_players = self.game.colors.len(), "game created");
        Arc::new(GameAdmin::new(board, self.game.clone()))
    }

    // -- identity ---------------------------------------------------------

    /// Signs `username` in on `session`.
    ///
    /// # Errors
    /// [`SessionError::InvalidUsername`] or
    /// [`SessionError::AlreadySignedIn`], wrapped.
    pub fn sign_in(
        &self,
        session: &mut Session,
        username: &str,
    ) -> Result<(), HexbridgeError> {
        Ok(self.binding.sign_in(session, username)?)
    }

    /// Ends the session's sign-in. The player stays in its game.
    pub fn sign_out(&self, session: &mut Session) -> Option<User> {
        self.binding.sign_out(session)
    }

    /// Seats the signed-in user in `admin`'s game and binds the new player
    /// to the session.
    ///
    /// The session is checked before the seat is created, so a rejected
    /// join never leaves an orphan seat in the game.
    ///
    /// # Errors
    /// - [`SessionError::NotSignedIn`] / [`SessionError::AlreadyBound`]
    /// - [`EngineError::GameFull`](hexbridge_engine::EngineError::GameFull)
    pub async fn join_game(
        &self,
        session: &mut Session,
        admin: &Arc<GameAdmin<WebPlayer>>,
        first_name: &str,
        last_name: &str,
        preferred_color: Option<&str>,
    ) -> Result<Arc<WebPlayer>, HexbridgeError> {
        let user = session
            .user()
            .ok_or(SessionError::NotSignedIn(session.id()))?;
        if user.is_playing() {
            return Err(SessionError::AlreadyBound(user.username().to_owned()).into());
        }

        let board = Arc::clone(admin.board());
        let weak = Arc::downgrade(admin);
        let player = admin
            .register(preferred_color, |color| {
                let info = PlayerInfo {
                    first_name: first_name.to_owned(),
                    last_name: last_name.to_owned(),
                    color,
                };
                WebPlayer::new(info, board, weak)
            })
            .await?;

        self.binding
            .bind_player(session, Arc::clone(&player))
            .await?;
        Ok(player)
    }

    /// The session's player, if it has one.
    pub async fn current_player(&self, session: &Session) -> Option<Arc<WebPlayer>> {
        self.binding.current_player(session).await
    }

    // -- board --------------------------------------------------------------

    /// The session player's board as a document.
    pub async fn board_snapshot(&self, session: &Session) -> Option<SnapshotDocument> {
        let player = self.current_player(session).await?;
        Some(self.projector.project(player.board().as_ref()).await)
    }

    /// The session player's board as an embeddable script.
    ///
    /// # Errors
    /// Whatever embedding the document returns.
    pub async fn board_script(
        &self,
        session: &Session,
    ) -> Result<Option<String>, HexbridgeError> {
        let Some(player) = self.current_player(session).await else {
            return Ok(None);
        };
        let script = self.projector.render_script(player.board().as_ref()).await?;
        Ok(Some(script))
    }

    // -- messages -----------------------------------------------------------

    /// The session player's rendered feed.
    pub async fn feed(&self, session: &Session) -> Option<FeedSnapshot> {
        let player = self.current_player(session).await?;
        Some(self.feed.snapshot(player.as_ref()).await)
    }

    /// Sends what the session's player typed to their game.
    ///
    /// # Errors
    /// - [`HexbridgeError::NotPlaying`] if the session has no player
    /// - [`EngineError::GameClosed`](hexbridge_engine::EngineError::GameClosed)
    ///   if the player's game is gone
    pub async fn post_chat(
        &self,
        session: &Session,
        input: &mut ChatInput,
    ) -> Result<ChatOutcome, HexbridgeError> {
        let player = self
            .current_player(session)
            .await
            .ok_or(HexbridgeError::NotPlaying(session.id()))?;
        let admin = player.admin()?;
        Ok(self
            .feed
            .post_message(admin.as_ref(), player.info(), input)
            .await)
    }
}
