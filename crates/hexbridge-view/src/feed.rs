//! The per-player message feed: rendering a chat log and posting to it.

use std::time::Duration;

use hexbridge_engine::{ChatSink, EngineError, Message, PlayerInfo, Seat};
use hexbridge_protocol::{FeedSnapshot, RenderedMessage};
use serde::{Deserialize, Serialize};

/// Sender label for messages with no sender.
pub const ADMIN_NAME: &str = "Admin";

/// Label color for messages with no sender, and the stand-in for colors
/// that are unreadable on the client's background.
pub const FALLBACK_COLOR: &str = "black";

/// Maps a player color to the color its label is drawn in.
///
/// `"white"` would vanish on the client's white background and becomes
/// `"black"`; every other color passes through unchanged.
pub fn normalize_color(color: &str) -> &str {
    if color == "white" {
        FALLBACK_COLOR
    } else {
        color
    }
}

/// Renders one log entry.
pub fn render_message(message: &Message) -> RenderedMessage {
    let (name, color) = match &message.sender {
        Some(sender) => (sender.first_name.as_str(), sender.color.as_str()),
        None => (ADMIN_NAME, FALLBACK_COLOR),
    };
    RenderedMessage {
        name: name.to_owned(),
        color: normalize_color(color).to_owned(),
        text: message.text.clone(),
    }
}

// ---------------------------------------------------------------------------
// FeedConfig
// ---------------------------------------------------------------------------

/// Configuration for the message feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// How often the client re-fetches the feed.
    pub poll_interval: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(5),
        }
    }
}

// ---------------------------------------------------------------------------
// ChatInput
// ---------------------------------------------------------------------------

/// The text a player has typed but not yet sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatInput {
    text: String,
}

impl ChatInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

/// What [`MessageFeed::post_message`] did with the input.
#[derive(Debug)]
pub enum ChatOutcome {
    /// The input was blank. Nothing was sent and the input is unchanged.
    Ignored,
    /// The line was handed to the chat sink and the input cleared.
    Forwarded,
    /// The sink refused the line. The input is cleared anyway.
    Rejected(EngineError),
}

impl ChatOutcome {
    pub fn is_forwarded(&self) -> bool {
        matches!(self, Self::Forwarded)
    }
}

// ---------------------------------------------------------------------------
// MessageFeed
// ---------------------------------------------------------------------------

/// Renders a player's chat log for the client and forwards what they type.
///
/// The feed keeps no state between calls. Every render reads the log as
/// it is at that moment; the client's timer decides how often that
/// happens.
#[derive(Debug, Clone, Default)]
pub struct MessageFeed {
    config: FeedConfig,
}

impl MessageFeed {
    pub fn new(config: FeedConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Every message in `seat`'s log, rendered, in log order.
    pub async fn render<S: Seat>(&self, seat: &S) -> Vec<RenderedMessage> {
        seat.msg_log()
            .snapshot()
            .await
            .iter()
            .map(render_message)
            .collect()
    }

    /// A full re-render plus the polling cadence.
    pub async fn snapshot<S: Seat>(&self, seat: &S) -> FeedSnapshot {
        FeedSnapshot {
            messages: self.render(seat).await,
            poll_interval_ms: u64::try_from(self.config.poll_interval.as_millis())
                .unwrap_or(u64::MAX),
        }
    }

    /// Sends the typed line to the game on behalf of `sender`.
    ///
    /// Blank input is ignored and left in place. Anything else is handed
    /// to `sink` and the input is cleared, whether or not the sink accepts
    /// it; a refusal is logged and returned as
    /// [`ChatOutcome::Rejected`].
    pub async fn post_message<K: ChatSink>(
        &self,
        sink: &K,
        sender: &PlayerInfo,
        input: &mut ChatInput,
    ) -> ChatOutcome {
        if input.is_blank() {
            return ChatOutcome::Ignored;
        }

        let text = std::mem::take(&mut input.text);
        match sink.chat_msg(sender, &text).await {
            Ok(()) => {
                tracing::debug!(player = %sender, "chat forwarded");
                ChatOutcome::Forwarded
            }
            Err(e) => {
                tracing::warn!(player = %sender, error = %e, "chat rejected");
                ChatOutcome::Rejected(e)
            }
        }
    }
}
