//! The positional argument matcher.
//!
//! Consumes argument tokens against a command's ordered schema list,
//! producing bound values or a usage failure. The matcher keeps a signed
//! `offset` recording the drift between the schema index and the consumed
//! token index: skipping an optional schema decrements it, so the same
//! token is retried against the next schema. That is what lets a user omit
//! an optional positional argument without supplying a placeholder.

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use crate::argument::{ArgSpec, ArgValue};

/// Why a token stream failed to match a schema list.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("missing required argument '{name}'")]
    MissingArgument { name: String },

    #[error("invalid value '{token}' for required argument '{name}'")]
    InvalidArgument { name: String, token: String },

    #[error("{count} unexpected trailing token(s)")]
    TrailingTokens { count: usize },
}

/// Bound argument values, retrievable by schema name.
#[derive(Debug, Clone, Default)]
pub struct BoundArgs {
    values: HashMap<String, ArgValue>,
}

impl BoundArgs {
    /// The bound value for `name`, if the argument was supplied.
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values.get(name)
    }

    /// Text value for `name`, if bound as text.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ArgValue::as_text)
    }

    /// Integer value for `name`, if bound as an integer.
    pub fn integer(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(ArgValue::as_integer)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn insert(&mut self, name: &str, value: ArgValue) {
        self.values.insert(name.to_string(), value);
    }
}

/// Match `tokens` against `specs`, producing bound values.
///
/// Iterates schemas in order with consumed index = schema index + offset:
///
/// 1. A variadic schema binds every remaining token joined with single
///    spaces and terminates matching. Required with nothing left is a
///    usage failure; optional with nothing left stays unbound.
/// 2. A required schema with no token at the consumed index is a usage
///    failure. (The consumed index is checked against the token count
///    before any read.)
/// 3. A token that fails validation skips an optional schema -- the offset
///    is decremented and the token retried against the next schema -- and
///    fails a required one.
/// 4. Leftover tokens after the last schema of a non-variadic command are
///    a usage failure.
pub fn bind_arguments(specs: &[ArgSpec], tokens: &[String]) -> Result<BoundArgs, UsageError> {
    let mut bound = BoundArgs::default();
    let mut offset: isize = 0;
    let mut terminated_by_variadic = false;

    for (index, spec) in specs.iter().enumerate() {
        // Offset only ever decrements once per already-visited schema, so
        // the consumed index cannot go negative.
        let cursor = (index as isize + offset) as usize;

        if spec.is_variadic() {
            if cursor >= tokens.len() {
                if spec.is_required() {
                    return Err(UsageError::MissingArgument {
                        name: spec.name().to_string(),
                    });
                }
                debug!(argument = spec.name(), "optional variadic left unbound");
            } else {
                let joined = tokens[cursor..].join(" ");
                debug!(argument = spec.name(), value = %joined, "bound variadic tail");
                bound.insert(spec.name(), ArgValue::Text(joined));
            }
            terminated_by_variadic = true;
            break;
        }

        let Some(token) = tokens.get(cursor) else {
            if spec.is_required() {
                return Err(UsageError::MissingArgument {
                    name: spec.name().to_string(),
                });
            }
            // Optional argument with nothing left to consume.
            offset -= 1;
            continue;
        };

        match spec.parse(token) {
            Some(value) => {
                debug!(argument = spec.name(), %value, "bound argument");
                bound.insert(spec.name(), value);
            }
            None if spec.is_required() => {
                return Err(UsageError::InvalidArgument {
                    name: spec.name().to_string(),
                    token: token.clone(),
                });
            }
            None => {
                // Skip: treat the optional schema as absent and retry this
                // token against the next schema.
                offset -= 1;
                debug!(argument = spec.name(), offset, "skipped optional argument");
            }
        }
    }

    if !terminated_by_variadic {
        let consumed = (specs.len() as isize + offset).max(0) as usize;
        if consumed < tokens.len() {
            return Err(UsageError::TrailingTokens {
                count: tokens.len() - consumed,
            });
        }
    }

    Ok(bound)
}
