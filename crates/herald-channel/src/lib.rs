//! Transport boundary for Herald.
//!
//! The dispatch engine never talks to a chat platform directly. Inbound
//! traffic arrives as [`InboundMessage`] values produced by a platform
//! adapter; outbound replies leave through a [`ReplySink`]. Implement
//! `ReplySink` once per backend (Telegram, Slack, IRC, ...); the engine is
//! indifferent to what sits behind it.
//!
//! # Architecture
//!
//! - [`message`]: the canonical inbound message shape
//! - [`channel`]: the `ReplySink` trait and channel errors
//! - [`memory`]: an in-memory sink that records replies, for tests and
//!   embedding experiments

pub mod channel;
pub mod memory;
pub mod message;

pub use channel::{ChannelError, ReplySink};
pub use memory::MemorySink;
pub use message::InboundMessage;
