//! The `ReplySink` trait and channel errors.

use async_trait::async_trait;
use thiserror::Error;

use crate::message::InboundMessage;

/// Errors from channel operations.
#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("channel shut down")]
    Shutdown,
}

/// Outbound half of a chat transport: sends a text reply bound to the
/// originating message.
///
/// Every user-visible error and usage message in the dispatch pipeline goes
/// through this trait. Implementations are shared across concurrent
/// dispatch tasks, so they take `&self`.
#[async_trait]
pub trait ReplySink: Send + Sync {
    /// Send `text` as a reply to `to`.
    async fn reply(&self, to: &InboundMessage, text: &str) -> Result<(), ChannelError>;

    /// Human-readable name for this backend.
    fn name(&self) -> &str;
}
