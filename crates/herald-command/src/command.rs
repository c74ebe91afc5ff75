//! The handler trait implemented by every concrete command.

use async_trait::async_trait;

use herald_channel::{ChannelError, ReplySink};

use crate::context::Invocation;
use crate::spec::CommandSpec;

/// One chat command: a descriptor plus an execute body.
///
/// Implementations are constructed once at startup by the factory passed to
/// [`CommandRegistry::register`](crate::registry::CommandRegistry::register)
/// and live for the process lifetime behind an `Arc`. The descriptor is
/// built in the factory, so a schema definition error surfaces as a factory
/// failure and the command is skipped.
///
/// ```
/// use herald_command::{ArgSpec, ArgValidator, ChatCommand, CommandSpec, Invocation, SchemaError};
/// use herald_channel::{ChannelError, ReplySink};
///
/// struct Greet {
///     spec: CommandSpec,
/// }
///
/// impl Greet {
///     fn new() -> Result<Self, SchemaError> {
///         Ok(Self {
///             spec: CommandSpec::builder("greet")
///                 .description("Greets someone")
///                 .keyword("greet")
///                 .arg(ArgSpec::required("name", "who to greet", ArgValidator::Text))
///                 .build()?,
///         })
///     }
/// }
///
/// #[async_trait::async_trait]
/// impl ChatCommand for Greet {
///     fn spec(&self) -> &CommandSpec {
///         &self.spec
///     }
///
///     async fn execute(
///         &self,
///         ctx: Invocation,
///         sink: &dyn ReplySink,
///     ) -> Result<(), ChannelError> {
///         let name = ctx.args().text("name").unwrap_or("stranger");
///         sink.reply(ctx.message(), &format!("Hello, {name}!")).await
///     }
/// }
/// ```
#[async_trait]
pub trait ChatCommand: Send + Sync + 'static {
    /// The command's immutable descriptor.
    fn spec(&self) -> &CommandSpec;

    /// Run the command with a fully populated invocation context.
    ///
    /// Called only after every gate has passed. Errors are logged by the
    /// dispatcher and never crash the pipeline.
    async fn execute(&self, ctx: Invocation, sink: &dyn ReplySink) -> Result<(), ChannelError>;
}
