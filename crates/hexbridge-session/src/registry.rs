//! The identity registry: opaque token → player handle.
//!
//! # Lifecycle contract
//!
//! Entries are never removed. Every player ever bound during the process
//! lifetime stays reachable by its token, so memory grows with the number
//! of distinct players created. The registry is an injected service
//! (`Arc<IdentityRegistry<P>>`), not a global, so an eviction policy can be
//! added here later without touching callers.
//!
//! # Concurrency note
//!
//! Unlike a single-owner manager, the registry is shared by every request
//! handler at once. A `tokio::sync::RwLock` around the map gives many
//! concurrent readers and serialized writers; each key is linearizable.
//! Nothing is promised about ordering across keys.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{IdentityToken, SessionError};

/// Process-wide map from [`IdentityToken`] to player handle.
pub struct IdentityRegistry<P> {
    players: RwLock<HashMap<IdentityToken, Arc<P>>>,
}

impl<P: Send + Sync> IdentityRegistry<P> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            players: RwLock::new(HashMap::new()),
        }
    }

    /// Registers `player` under `token`.
    ///
    /// Putting the same player (the same `Arc`) under the same token again
    /// is a no-op. A token never moves to a different player.
    ///
    /// # Errors
    /// [`SessionError::TokenCollision`] if `token` already belongs to a
    /// different player. The existing binding is left untouched.
    pub async fn put(
        &self,
        token: IdentityToken,
        player: Arc<P>,
    ) -> Result<(), SessionError> {
        let mut players = self.players.write().await;
        match players.entry(token) {
            Entry::Occupied(existing) => {
                if Arc::ptr_eq(existing.get(), &player) {
                    return Ok(());
                }
                tracing::error!(
                    token = %existing.key(),
                    "identity token already bound to another player"
                );
                Err(SessionError::TokenCollision(existing.key().clone()))
            }
            Entry::Vacant(slot) => {
                tracing::debug!(token = %slot.key(), "identity registered");
                slot.insert(player);
                Ok(())
            }
        }
    }

    /// Looks up the player bound to `token`.
    pub async fn get(&self, token: &IdentityToken) -> Option<Arc<P>> {
        self.players.read().await.get(token).cloned()
    }

    /// Number of tokens ever registered.
    pub async fn len(&self) -> usize {
        self.players.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.players.read().await.is_empty()
    }
}

impl<P: Send + Sync> Default for IdentityRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}
