//! Command schema model, argument matcher, registry, and cooldowns.
//!
//! This crate is the domain core of Herald. A command is described once by
//! a [`CommandSpec`] (keywords, permissions, ordered argument schemas,
//! cooldown), implemented by a [`ChatCommand`] handler, and registered in a
//! [`CommandRegistry`] at startup. Per message, an [`Invocation`] is
//! derived from the raw text and the argument matcher binds its tokens
//! against the command's schema list.
//!
//! # Architecture
//!
//! - [`argument`]: positional argument schemas and token validators
//! - [`spec`]: the command descriptor and its construction-time validation
//! - [`command`]: the handler trait
//! - [`matcher`]: the offset/skip positional matcher
//! - [`context`]: per-message invocation context and tokenizer
//! - [`registry`]: the startup-time command table
//! - [`cooldown`]: per-command, per-actor invocation throttling
//! - [`permission`]: the permission oracle boundary

pub mod argument;
pub mod command;
pub mod context;
pub mod cooldown;
pub mod matcher;
pub mod permission;
pub mod registry;
pub mod spec;

pub use argument::{ArgSpec, ArgValidator, ArgValue};
pub use command::ChatCommand;
pub use context::{tokenize, Invocation};
pub use cooldown::CooldownTracker;
pub use matcher::{bind_arguments, BoundArgs, UsageError};
pub use permission::{AllowAll, PermissionOracle, StaticPermissions};
pub use registry::{CommandId, CommandRegistry, RegisteredCommand};
pub use spec::{CommandSpec, CommandSpecBuilder, SchemaError};
