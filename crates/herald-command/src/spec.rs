//! Command descriptors and their construction-time validation.

use thiserror::Error;

use herald_types::{ActorRef, Permission, ScopeId};

use crate::argument::{ArgSpec, ArgValidator};
use crate::permission::PermissionOracle;

/// Definition errors caught when a command is built.
///
/// These are load-time schema validity failures: a spec that trips one can
/// never be registered, and the registry skips the offending command while
/// leaving the rest of startup untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("command '{command}' has no keywords")]
    NoKeywords { command: String },

    #[error("command '{command}' declares argument '{argument}' after a variadic argument")]
    ArgumentAfterVariadic { command: String, argument: String },

    #[error("command '{command}' declares required argument '{argument}' after an optional one")]
    RequiredAfterOptional { command: String, argument: String },

    #[error("command '{command}' declares variadic argument '{argument}' with a non-text validator")]
    VariadicNotText { command: String, argument: String },

    #[error("command '{command}' declares duplicate argument name '{argument}'")]
    DuplicateArgument { command: String, argument: String },
}

/// Immutable description of one command: identity, aliases, permission
/// requirements, argument schemas, and cooldown.
///
/// Built once inside the handler's factory at startup and never mutated.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    name: String,
    description: String,
    keywords: Vec<String>,
    required_permissions: Vec<Permission>,
    arguments: Vec<ArgSpec>,
    cooldown_secs: u64,
}

impl CommandSpec {
    /// Start building a spec for the command named `name`.
    pub fn builder(name: impl Into<String>) -> CommandSpecBuilder {
        CommandSpecBuilder {
            name: name.into(),
            description: String::new(),
            keywords: Vec::new(),
            required_permissions: Vec::new(),
            arguments: Vec::new(),
            cooldown_secs: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// The keyword shown in usage and help text.
    pub fn primary_keyword(&self) -> &str {
        // Builder guarantees at least one keyword.
        &self.keywords[0]
    }

    /// Whether `keyword` is one of this command's aliases.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }

    pub fn required_permissions(&self) -> &[Permission] {
        &self.required_permissions
    }

    pub fn arguments(&self) -> &[ArgSpec] {
        &self.arguments
    }

    pub fn cooldown_secs(&self) -> u64 {
        self.cooldown_secs
    }

    /// Whether `actor` may execute this command in `scope`.
    ///
    /// Delegates entirely to the permission oracle; no local policy.
    pub fn can_execute(
        &self,
        oracle: &dyn PermissionOracle,
        actor: &ActorRef,
        scope: &ScopeId,
    ) -> bool {
        oracle.check(actor, scope, &self.required_permissions)
    }

    /// Render the positional summary: `<name>` for required, `[name]` for
    /// optional, with `...` marking the variadic tail.
    pub fn usage(&self) -> String {
        self.arguments
            .iter()
            .map(|arg| {
                let dots = if arg.is_variadic() { "..." } else { "" };
                if arg.is_required() {
                    format!("<{}{dots}>", arg.name())
                } else {
                    format!("[{}{dots}]", arg.name())
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Builder for [`CommandSpec`]; `build` runs the schema validity scan.
#[derive(Debug)]
pub struct CommandSpecBuilder {
    name: String,
    description: String,
    keywords: Vec<String>,
    required_permissions: Vec<Permission>,
    arguments: Vec<ArgSpec>,
    cooldown_secs: u64,
}

impl CommandSpecBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add one keyword alias. The first keyword added is the primary one.
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into());
        self
    }

    /// Require a permission; may be called repeatedly.
    pub fn permission(mut self, permission: impl Into<Permission>) -> Self {
        self.required_permissions.push(permission.into());
        self
    }

    /// Minimum interval between successful invocations per actor.
    pub fn cooldown_secs(mut self, secs: u64) -> Self {
        self.cooldown_secs = secs;
        self
    }

    /// Append one positional argument schema.
    pub fn arg(mut self, arg: ArgSpec) -> Self {
        self.arguments.push(arg);
        self
    }

    /// Validate the accumulated schema list and produce the spec.
    ///
    /// The scan walks the schemas left to right tracking whether a variadic
    /// schema has been seen and whether the previous schema was optional;
    /// any violation is a definition error, caught here so a malformed
    /// command can never reach the registry.
    pub fn build(self) -> Result<CommandSpec, SchemaError> {
        let command = self.name.clone();

        if self.keywords.is_empty() {
            return Err(SchemaError::NoKeywords { command });
        }

        let mut seen_names = std::collections::HashSet::new();
        let mut seen_variadic = false;
        let mut prev_required = true;

        for arg in &self.arguments {
            let argument = arg.name().to_string();

            if seen_variadic {
                return Err(SchemaError::ArgumentAfterVariadic { command, argument });
            }
            if arg.is_required() && !prev_required {
                return Err(SchemaError::RequiredAfterOptional { command, argument });
            }
            if arg.is_variadic() && !matches!(arg.validator(), ArgValidator::Text) {
                return Err(SchemaError::VariadicNotText { command, argument });
            }
            if !seen_names.insert(argument.clone()) {
                return Err(SchemaError::DuplicateArgument { command, argument });
            }

            seen_variadic = arg.is_variadic();
            prev_required = arg.is_required();
        }

        Ok(CommandSpec {
            name: self.name,
            description: self.description,
            keywords: self.keywords,
            required_permissions: self.required_permissions,
            arguments: self.arguments,
            cooldown_secs: self.cooldown_secs,
        })
    }
}
