//! Herald: a text-command dispatch engine for chat-oriented services.
//!
//! Raw message text goes in; a validated, permission-checked, rate-limited
//! handler invocation comes out. The engine is transport-agnostic: platform
//! adapters produce [`InboundMessage`] values and implement [`ReplySink`],
//! and everything else -- keyword lookup, the permission/cooldown/parse
//! gates, positional argument matching -- lives here.
//!
//! The workspace splits along the same lines as the crates it re-exports:
//! [`herald_types`] (identity + scope config), [`herald_channel`]
//! (transport boundary), [`herald_command`] (schema model, matcher,
//! registry, cooldowns), and [`herald_dispatch`] (the gate pipeline and
//! async runner).

pub use herald_channel::{ChannelError, InboundMessage, MemorySink, ReplySink};
pub use herald_command::{
    bind_arguments, tokenize, AllowAll, ArgSpec, ArgValidator, ArgValue, BoundArgs, ChatCommand,
    CommandId, CommandRegistry, CommandSpec, CommandSpecBuilder, CooldownTracker, Invocation,
    PermissionOracle, RegisteredCommand, SchemaError, StaticPermissions, UsageError,
};
pub use herald_dispatch::{run, DispatchOutcome, Dispatcher};
pub use herald_types::{
    ActorId, ActorRef, ConfigError, Permission, ScopeConfig, ScopeConfigProvider, ScopeId,
    StaticScopeConfig, DEFAULT_PREFIX,
};
