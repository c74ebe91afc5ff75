//! Strongly-typed identifier wrappers to prevent accidental misuse of strings.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! str_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        ///
        /// Uses `Arc<str>` internally so cloning is an atomic increment
        /// instead of a heap allocation.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(Arc<str>);

        impl $name {
            /// Create a new identifier from any string-like value.
            pub fn new(value: impl Into<Arc<str>>) -> Self {
                Self(value.into())
            }

            /// Borrow as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::new(s)
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                Ok($name::new(s))
            }
        }
    };
}

str_id! {
    /// Identifies one actor (a user) across scopes. Platform adapters are
    /// expected to namespace their native ids (e.g. `"telegram:12345"`).
    ActorId
}

str_id! {
    /// Identifies one chat scope (channel, server, group) -- the unit that
    /// carries configuration such as the command prefix.
    ScopeId
}

str_id! {
    /// A named permission required to execute a command. Herald treats
    /// permissions as opaque labels; their meaning belongs to the
    /// embedder's permission oracle.
    Permission
}

/// The originator of an inbound message: its identity plus whether it is an
/// automated actor (a bot, including this service itself). Messages from
/// automated actors are never dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorRef {
    /// The actor's identity.
    pub id: ActorId,
    /// Whether the actor is automated (bot/self).
    pub automated: bool,
}

impl ActorRef {
    /// A human actor.
    pub fn user(id: impl Into<ActorId>) -> Self {
        Self {
            id: id.into(),
            automated: false,
        }
    }

    /// An automated actor (bot or the service's own outbound identity).
    pub fn automated(id: impl Into<ActorId>) -> Self {
        Self {
            id: id.into(),
            automated: true,
        }
    }
}
