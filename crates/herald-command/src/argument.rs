//! Positional argument schemas and their token validators.

use std::fmt;

/// A value produced by a validator from one (or, for variadic text, many)
/// tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    Text(String),
    Integer(i64),
}

impl ArgValue {
    /// The value as text, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ArgValue::Text(s) => Some(s),
            ArgValue::Integer(_) => None,
        }
    }

    /// The value as an integer, if it is one.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ArgValue::Integer(n) => Some(*n),
            ArgValue::Text(_) => None,
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Text(s) => f.write_str(s),
            ArgValue::Integer(n) => write!(f, "{n}"),
        }
    }
}

/// Validates and converts one token into an [`ArgValue`].
///
/// Returning `None` signals the token does not satisfy this schema; the
/// matcher uses that to skip an optional argument and retry the token
/// against the next schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValidator {
    /// Accepts any token unchanged.
    Text,
    /// Accepts tokens that parse as a signed 64-bit integer.
    Integer,
    /// Accepts only tokens from a fixed allow-list, unchanged.
    OneOf(Vec<String>),
}

impl ArgValidator {
    /// Validate `token`, producing a value or `None` on mismatch.
    pub fn parse(&self, token: &str) -> Option<ArgValue> {
        match self {
            ArgValidator::Text => Some(ArgValue::Text(token.to_string())),
            ArgValidator::Integer => token.parse().ok().map(ArgValue::Integer),
            ArgValidator::OneOf(options) => options
                .iter()
                .any(|option| option == token)
                .then(|| ArgValue::Text(token.to_string())),
        }
    }

    /// One-of validator from anything iterable.
    pub fn one_of<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ArgValidator::OneOf(options.into_iter().map(Into::into).collect())
    }
}

/// Declares the shape of one positional argument.
#[derive(Debug, Clone)]
pub struct ArgSpec {
    name: String,
    description: String,
    required: bool,
    variadic: bool,
    validator: ArgValidator,
}

impl ArgSpec {
    /// A required argument.
    pub fn required(
        name: impl Into<String>,
        description: impl Into<String>,
        validator: ArgValidator,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required: true,
            variadic: false,
            validator,
        }
    }

    /// An optional argument. When the supplied token fails validation the
    /// matcher treats the argument as absent instead of failing.
    pub fn optional(
        name: impl Into<String>,
        description: impl Into<String>,
        validator: ArgValidator,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required: false,
            variadic: false,
            validator,
        }
    }

    /// Mark this argument variadic: it consumes every remaining token,
    /// joined with single spaces, and must be the last schema. Only valid
    /// on a [`ArgValidator::Text`] argument; enforced when the command is
    /// built.
    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// User-facing description. A one-of argument appends its allowed
    /// options so help text enumerates them.
    pub fn description(&self) -> String {
        match &self.validator {
            ArgValidator::OneOf(options) => {
                format!("{} - options: {}", self.description, options.join(", "))
            }
            _ => self.description.clone(),
        }
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_variadic(&self) -> bool {
        self.variadic
    }

    pub(crate) fn validator(&self) -> &ArgValidator {
        &self.validator
    }

    /// Validate one token against this schema.
    pub fn parse(&self, token: &str) -> Option<ArgValue> {
        self.validator.parse(token)
    }
}
