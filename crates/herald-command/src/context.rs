//! Per-message invocation context.

use herald_channel::InboundMessage;
use herald_types::{ActorRef, ScopeId};

use crate::matcher::{bind_arguments, BoundArgs, UsageError};
use crate::spec::CommandSpec;

/// Split message text into tokens on runs of space characters.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(' ')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Everything derived from one inbound message: the extracted keyword, the
/// argument tokens, and (after the parse gate) the bound argument values.
///
/// Created per message, handed to the handler on success, and discarded.
#[derive(Debug)]
pub struct Invocation {
    message: InboundMessage,
    keyword: String,
    arg_tokens: Vec<String>,
    args: BoundArgs,
}

impl Invocation {
    /// Derive a context from a message, given the scope's prefix.
    ///
    /// Returns `None` when the text does not start with the prefix -- the
    /// message is not a command and dispatch ignores it silently.
    pub fn from_message(message: InboundMessage, prefix: &str) -> Option<Self> {
        if !message.text.starts_with(prefix) {
            return None;
        }

        let tokens = tokenize(&message.text);
        let keyword = tokens.first()?.strip_prefix(prefix)?.to_string();
        let arg_tokens = tokens[1..].to_vec();

        Some(Self {
            message,
            keyword,
            arg_tokens,
            args: BoundArgs::default(),
        })
    }

    /// Run the argument matcher for `spec`, storing the bound values.
    pub fn bind(&mut self, spec: &CommandSpec) -> Result<(), UsageError> {
        self.args = bind_arguments(spec.arguments(), &self.arg_tokens)?;
        Ok(())
    }

    pub fn message(&self) -> &InboundMessage {
        &self.message
    }

    pub fn actor(&self) -> &ActorRef {
        &self.message.actor
    }

    pub fn scope(&self) -> &ScopeId {
        &self.message.scope
    }

    /// The keyword the command was invoked with (an alias, minus prefix).
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Raw argument tokens, before matching.
    pub fn arg_tokens(&self) -> &[String] {
        &self.arg_tokens
    }

    /// Bound argument values; empty until [`Invocation::bind`] succeeds.
    pub fn args(&self) -> &BoundArgs {
        &self.args
    }
}
