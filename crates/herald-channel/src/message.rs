//! The canonical inbound message shape.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use herald_types::{ActorRef, ScopeId};

/// One message received from a chat platform, normalized by the adapter.
///
/// Created per message and discarded once dispatch completes; the engine
/// keeps no message history.
#[derive(Debug, Clone)]
pub struct InboundMessage {
    /// Engine-side identity for this message, used to bind replies.
    pub id: Uuid,
    /// The scope (channel/server/group) the message was posted in.
    pub scope: ScopeId,
    /// Who sent it.
    pub actor: ActorRef,
    /// Raw message text, exactly as received.
    pub text: String,
    /// When the message was received.
    pub sent_at: DateTime<Utc>,
}

impl InboundMessage {
    /// Build a message stamped with a fresh id and the current time.
    pub fn new(scope: impl Into<ScopeId>, actor: ActorRef, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            scope: scope.into(),
            actor,
            text: text.into(),
            sent_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stamps_identity() {
        let a = InboundMessage::new("general", ActorRef::user("alice"), "!ping");
        let b = InboundMessage::new("general", ActorRef::user("alice"), "!ping");
        assert_ne!(a.id, b.id);
        assert_eq!(a.scope, ScopeId::from("general"));
        assert_eq!(a.text, "!ping");
    }
}
