//! In-memory reply sink that records everything it is asked to send.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use uuid::Uuid;

use crate::channel::{ChannelError, ReplySink};
use crate::message::InboundMessage;

/// A reply captured by [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedReply {
    /// Id of the message the reply was bound to.
    pub to: Uuid,
    /// Reply text, verbatim.
    pub text: String,
}

/// Records replies instead of sending them anywhere.
///
/// Cloning shares the underlying buffer, so a test can hold one handle
/// while the dispatcher holds another.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    sent: Arc<Mutex<Vec<RecordedReply>>>,
    closed: Arc<AtomicBool>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, in send order.
    pub fn replies(&self) -> Vec<RecordedReply> {
        self.sent.lock().clone()
    }

    /// Just the reply texts, in send order.
    pub fn texts(&self) -> Vec<String> {
        self.replies().into_iter().map(|r| r.text).collect()
    }

    /// Make every subsequent `reply` fail with [`ChannelError::Shutdown`].
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl ReplySink for MemorySink {
    async fn reply(&self, to: &InboundMessage, text: &str) -> Result<(), ChannelError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(ChannelError::Shutdown);
        }
        self.sent.lock().push(RecordedReply {
            to: to.id,
            text: text.to_string(),
        });
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_types::ActorRef;

    #[tokio::test]
    async fn records_replies_in_order() {
        let sink = MemorySink::new();
        let msg = InboundMessage::new("general", ActorRef::user("alice"), "!ping");

        sink.reply(&msg, "pong").await.expect("should record");
        sink.reply(&msg, "pong again").await.expect("should record");

        assert_eq!(sink.texts(), vec!["pong", "pong again"]);
        assert_eq!(sink.replies()[0].to, msg.id);
    }

    #[tokio::test]
    async fn closed_sink_reports_shutdown() {
        let sink = MemorySink::new();
        let msg = InboundMessage::new("general", ActorRef::user("alice"), "!ping");

        sink.close();
        let err = sink.reply(&msg, "pong").await.unwrap_err();
        assert!(matches!(err, ChannelError::Shutdown));
        assert!(sink.replies().is_empty());
    }

    #[tokio::test]
    async fn clones_share_the_buffer() {
        let sink = MemorySink::new();
        let handle = sink.clone();
        let msg = InboundMessage::new("general", ActorRef::user("alice"), "!ping");

        sink.reply(&msg, "pong").await.expect("should record");
        assert_eq!(handle.texts(), vec!["pong"]);
    }
}
