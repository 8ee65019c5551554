//! Append-only per-player message log.

use tokio::sync::RwLock;

use crate::Message;

/// A player's chat log.
///
/// Entries are only ever appended; insertion order is display order.
/// [`snapshot`](Self::snapshot) copies the whole log under a read lock, so
/// a reader sees a prefix of the log that never shrinks or reorders
/// between calls.
#[derive(Debug, Default)]
pub struct MessageLog {
    entries: RwLock<Vec<Message>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one message at the end of the log.
    pub async fn append(&self, message: Message) {
        self.entries.write().await.push(message);
    }

    /// A copy of every entry, in append order.
    pub async fn snapshot(&self) -> Vec<Message> {
        self.entries.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_snapshot_preserves_append_order() {
        let log = MessageLog::new();
        for i in 0..5 {
            log.append(Message::from_admin(format!("m{i}"))).await;
        }

        let texts: Vec<_> =
            log.snapshot().await.into_iter().map(|m| m.text).collect();
        assert_eq!(texts, vec!["m0", "m1", "m2", "m3", "m4"]);
    }

    #[tokio::test]
    async fn test_snapshot_is_detached_from_later_appends() {
        let log = MessageLog::new();
        log.append(Message::from_admin("first")).await;

        let before = log.snapshot().await;
        log.append(Message::from_admin("second")).await;

        assert_eq!(before.len(), 1);
        assert_eq!(log.len().await, 2);
        assert!(!log.is_empty().await);
    }
}
