//! Process-wide command table.

use std::any::TypeId;
use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::command::ChatCommand;
use crate::spec::{CommandSpec, SchemaError};

/// Identity of a registered command: the concrete handler type.
///
/// Doubles as the cooldown-table key, so per-actor cooldowns follow the
/// registry's one-instance-per-type invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandId(TypeId);

impl CommandId {
    /// Identity of handler type `C`.
    pub fn of<C: ChatCommand>() -> Self {
        Self(TypeId::of::<C>())
    }
}

/// One registry entry: the handler instance plus its type identity.
pub struct RegisteredCommand {
    id: CommandId,
    type_name: &'static str,
    handler: Arc<dyn ChatCommand>,
}

impl RegisteredCommand {
    pub fn id(&self) -> CommandId {
        self.id
    }

    pub fn spec(&self) -> &CommandSpec {
        self.handler.spec()
    }

    /// A shared handle to the handler, for invocation.
    pub fn handler(&self) -> Arc<dyn ChatCommand> {
        Arc::clone(&self.handler)
    }
}

impl std::fmt::Debug for RegisteredCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredCommand")
            .field("type_name", &self.type_name)
            .field("command", &self.spec().name())
            .finish()
    }
}

/// Table of registered commands.
///
/// Mutated only during single-threaded startup registration; afterwards it
/// is shared read-only (typically behind an `Arc`), so lookups take `&self`
/// with no interior locking. There is no removal operation.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    entries: Vec<RegisteredCommand>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register handler type `C` by running its factory.
    ///
    /// Skips (with a log, never a panic) when `C` is already registered or
    /// when the factory fails -- including a [`SchemaError`] from the
    /// spec builder. One command's bad definition must not abort startup
    /// for the others.
    pub fn register<C, F>(&mut self, factory: F)
    where
        C: ChatCommand,
        F: FnOnce() -> Result<C, SchemaError>,
    {
        let id = CommandId::of::<C>();
        let type_name = std::any::type_name::<C>();

        if self.entries.iter().any(|entry| entry.id == id) {
            warn!(command_type = type_name, "command already registered, skipping");
            return;
        }

        match factory() {
            Ok(command) => {
                debug!(
                    command = command.spec().name(),
                    arguments = command.spec().arguments().len(),
                    "registered command"
                );
                self.entries.push(RegisteredCommand {
                    id,
                    type_name,
                    handler: Arc::new(command),
                });
            }
            Err(e) => {
                error!(command_type = type_name, error = %e, "failed to construct command, skipping");
            }
        }
    }

    /// First registered command whose alias set contains `keyword`.
    ///
    /// Aliases are expected to be globally unique by convention; with
    /// duplicates, which entry wins is unspecified.
    pub fn find_by_keyword(&self, keyword: &str) -> Option<&RegisteredCommand> {
        self.entries
            .iter()
            .find(|entry| entry.spec().matches_keyword(keyword))
    }

    /// All registered commands, in registration order.
    pub fn commands(&self) -> impl Iterator<Item = &RegisteredCommand> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render a command list for help replies: one line per command with
    /// its primary keyword, usage summary, and description.
    pub fn help_text(&self) -> String {
        let mut lines: Vec<String> = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            let spec = entry.spec();
            let usage = spec.usage();
            let line = if usage.is_empty() {
                format!("{} - {}", spec.primary_keyword(), spec.description())
            } else {
                format!("{} {} - {}", spec.primary_keyword(), usage, spec.description())
            };
            lines.push(line);
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::{ArgSpec, ArgValidator};
    use crate::context::Invocation;
    use async_trait::async_trait;
    use herald_channel::{ChannelError, ReplySink};

    struct Ping {
        spec: CommandSpec,
    }

    impl Ping {
        fn new() -> Result<Self, SchemaError> {
            Ok(Self {
                spec: CommandSpec::builder("ping")
                    .description("Replies with pong")
                    .keyword("ping")
                    .keyword("p")
                    .build()?,
            })
        }
    }

    #[async_trait]
    impl ChatCommand for Ping {
        fn spec(&self) -> &CommandSpec {
            &self.spec
        }

        async fn execute(&self, _ctx: Invocation, _sink: &dyn ReplySink) -> Result<(), ChannelError> {
            Ok(())
        }
    }

    struct Broken {
        spec: CommandSpec,
    }

    impl Broken {
        fn new() -> Result<Self, SchemaError> {
            // Required after optional: rejected at build time.
            Ok(Self {
                spec: CommandSpec::builder("broken")
                    .keyword("broken")
                    .arg(ArgSpec::optional("a", "", ArgValidator::Text))
                    .arg(ArgSpec::required("b", "", ArgValidator::Text))
                    .build()?,
            })
        }
    }

    #[async_trait]
    impl ChatCommand for Broken {
        fn spec(&self) -> &CommandSpec {
            &self.spec
        }

        async fn execute(&self, _ctx: Invocation, _sink: &dyn ReplySink) -> Result<(), ChannelError> {
            Ok(())
        }
    }

    #[test]
    fn registers_and_finds_by_any_alias() {
        let mut registry = CommandRegistry::new();
        registry.register(Ping::new);

        assert_eq!(registry.len(), 1);
        assert!(registry.find_by_keyword("ping").is_some());
        assert!(registry.find_by_keyword("p").is_some());
        assert!(registry.find_by_keyword("pong").is_none());
    }

    #[test]
    fn duplicate_registration_keeps_one_entry() {
        let mut registry = CommandRegistry::new();
        registry.register(Ping::new);
        registry.register(Ping::new);

        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn failing_factory_is_skipped_without_aborting_others() {
        let mut registry = CommandRegistry::new();
        registry.register(Broken::new);
        registry.register(Ping::new);

        assert_eq!(registry.len(), 1);
        assert!(registry.find_by_keyword("broken").is_none());
        assert!(registry.find_by_keyword("ping").is_some());
    }

    #[test]
    fn command_id_distinguishes_handler_types() {
        assert_eq!(CommandId::of::<Ping>(), CommandId::of::<Ping>());
        assert_ne!(CommandId::of::<Ping>(), CommandId::of::<Broken>());
    }

    #[test]
    fn help_text_lists_commands() {
        let mut registry = CommandRegistry::new();
        registry.register(Ping::new);

        assert_eq!(registry.help_text(), "ping - Replies with pong");
    }
}
