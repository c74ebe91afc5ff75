//! Shared helpers for integration tests.
//!
//! Each integration test file compiles common/ as its own module, so not
//! every helper is used in every file.
#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;

use herald::{
    ActorRef, ArgSpec, ArgValidator, ChannelError, ChatCommand, CommandRegistry, CommandSpec,
    Dispatcher, InboundMessage, Invocation, PermissionOracle, ReplySink, SchemaError, ScopeConfig,
    StaticScopeConfig,
};

/// Initialize tracing output for a test binary. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// A message from a human actor in the `general` scope.
pub fn user_message(actor: &str, text: &str) -> InboundMessage {
    InboundMessage::new("general", ActorRef::user(actor), text)
}

/// Greets the named user. No permissions, no cooldown.
pub struct GreetCommand {
    spec: CommandSpec,
}

impl GreetCommand {
    pub fn new() -> Result<Self, SchemaError> {
        Ok(Self {
            spec: CommandSpec::builder("greet")
                .description("Greets someone")
                .keyword("greet")
                .keyword("hello")
                .arg(ArgSpec::required("name", "who to greet", ArgValidator::Text))
                .arg(ArgSpec::optional(
                    "mood",
                    "greeting mood",
                    ArgValidator::one_of(["cheerful", "grumpy"]),
                ))
                .build()?,
        })
    }
}

#[async_trait]
impl ChatCommand for GreetCommand {
    fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    async fn execute(&self, ctx: Invocation, sink: &dyn ReplySink) -> Result<(), ChannelError> {
        let name = ctx.args().text("name").unwrap_or("stranger");
        let text = match ctx.args().text("mood") {
            Some("grumpy") => format!("Oh. It's {name}."),
            _ => format!("Hello, {name}!"),
        };
        sink.reply(ctx.message(), &text).await
    }
}

/// Repeats a variadic tail. Guarded by a permission and a cooldown.
pub struct AnnounceCommand {
    spec: CommandSpec,
}

impl AnnounceCommand {
    pub fn new() -> Result<Self, SchemaError> {
        Ok(Self {
            spec: CommandSpec::builder("announce")
                .description("Broadcasts an announcement")
                .keyword("announce")
                .permission("broadcast")
                .cooldown_secs(60)
                .arg(
                    ArgSpec::required("text", "what to announce", ArgValidator::Text).variadic(),
                )
                .build()?,
        })
    }
}

#[async_trait]
impl ChatCommand for AnnounceCommand {
    fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    async fn execute(&self, ctx: Invocation, sink: &dyn ReplySink) -> Result<(), ChannelError> {
        let text = ctx.args().text("text").unwrap_or_default().to_string();
        sink.reply(ctx.message(), &format!("ANNOUNCEMENT: {text}"))
            .await
    }
}

/// Registry preloaded with the test commands.
pub fn test_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(GreetCommand::new);
    registry.register(AnnounceCommand::new);
    registry
}

/// Dispatcher over [`test_registry`] with the default `!` prefix.
pub fn test_dispatcher(oracle: Arc<dyn PermissionOracle>) -> Dispatcher {
    Dispatcher::new(
        Arc::new(test_registry()),
        oracle,
        Arc::new(StaticScopeConfig::new(ScopeConfig::default())),
    )
}
