//! Core types shared across all Herald crates.
//!
//! Defines the actor/scope identity model, per-scope configuration (command
//! prefix lookup), and the error types used by the configuration layer.

pub mod config;
pub mod error;
pub mod ids;

pub use config::{ScopeConfig, ScopeConfigProvider, StaticScopeConfig, DEFAULT_PREFIX};
pub use error::ConfigError;
pub use ids::{ActorId, ActorRef, Permission, ScopeId};
