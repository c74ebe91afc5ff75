//! The gate pipeline: one inbound message in, at most one handler
//! invocation out.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use herald_channel::{InboundMessage, ReplySink};
use herald_command::{CommandRegistry, CooldownTracker, Invocation, PermissionOracle};
use herald_types::ScopeConfigProvider;

/// How a dispatch attempt ended.
///
/// Every failure kind is an ordinary value; nothing in the pipeline panics
/// or propagates an error past the reply it owes the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Message came from an automated actor; ignored silently.
    Ignored,
    /// Message does not start with the scope's prefix; ignored silently.
    NotACommand,
    /// No registered command matches the keyword.
    NotFound,
    /// The permission oracle denied the actor.
    PermissionDenied,
    /// The actor is still within the command's cooldown window.
    CoolingDown {
        /// Time left until the command may run again.
        remaining: Duration,
    },
    /// The argument matcher rejected the tokens.
    UsageFailure,
    /// All gates passed and the handler ran.
    Invoked,
}

/// Orchestrates the dispatch gates, strictly ordered and short-circuiting:
/// ignore self-origin, prefix check, keyword lookup, permission gate,
/// cooldown gate, parse gate, cooldown record, handler invocation.
///
/// One instance is built at startup and shared across all dispatch tasks.
/// The registry is read-only after construction; the cooldown table locks
/// internally.
pub struct Dispatcher {
    registry: Arc<CommandRegistry>,
    cooldowns: Arc<CooldownTracker>,
    oracle: Arc<dyn PermissionOracle>,
    scopes: Arc<dyn ScopeConfigProvider>,
}

impl Dispatcher {
    pub fn new(
        registry: Arc<CommandRegistry>,
        oracle: Arc<dyn PermissionOracle>,
        scopes: Arc<dyn ScopeConfigProvider>,
    ) -> Self {
        Self {
            registry,
            cooldowns: Arc::new(CooldownTracker::new()),
            oracle,
            scopes,
        }
    }

    /// The command table this dispatcher serves.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Run the pipeline for one message.
    pub async fn dispatch(&self, message: InboundMessage, sink: &dyn ReplySink) -> DispatchOutcome {
        if message.actor.automated {
            return DispatchOutcome::Ignored;
        }

        let prefix = self.scopes.scope_config(&message.scope).prefix;
        let Some(mut invocation) = Invocation::from_message(message, &prefix) else {
            return DispatchOutcome::NotACommand;
        };

        let Some(entry) = self.registry.find_by_keyword(invocation.keyword()) else {
            debug!(keyword = invocation.keyword(), "no command for keyword");
            self.send_reply(sink, invocation.message(), "Command not found!")
                .await;
            return DispatchOutcome::NotFound;
        };
        let spec = entry.spec();

        if !spec.can_execute(self.oracle.as_ref(), invocation.actor(), invocation.scope()) {
            self.send_reply(
                sink,
                invocation.message(),
                "You don't have permission to execute this command!",
            )
            .await;
            return DispatchOutcome::PermissionDenied;
        }

        let remaining =
            self.cooldowns
                .remaining(entry.id(), spec.cooldown_secs(), &invocation.actor().id);
        if remaining > Duration::ZERO {
            let text = format!(
                "You must wait {} seconds before using this command again",
                remaining.as_millis() / 1000
            );
            self.send_reply(sink, invocation.message(), &text).await;
            return DispatchOutcome::CoolingDown { remaining };
        }

        if let Err(e) = invocation.bind(spec) {
            debug!(command = spec.name(), error = %e, "failed to parse command");
            let text = format!("Usage: {} {}", spec.primary_keyword(), spec.usage());
            self.send_reply(sink, invocation.message(), &text).await;
            return DispatchOutcome::UsageFailure;
        }

        self.cooldowns.record(entry.id(), &invocation.actor().id);

        debug!(command = spec.name(), actor = %invocation.actor().id, "executing command");
        let handler = entry.handler();
        if let Err(e) = handler.execute(invocation, sink).await {
            warn!(error = %e, "command handler failed");
        }
        DispatchOutcome::Invoked
    }

    async fn send_reply(&self, sink: &dyn ReplySink, to: &InboundMessage, text: &str) {
        if let Err(e) = sink.reply(to, text).await {
            warn!(channel = sink.name(), error = %e, "failed to send reply");
        }
    }
}
