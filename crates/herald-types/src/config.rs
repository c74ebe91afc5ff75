//! Per-scope configuration and the provider boundary.
//!
//! Every chat scope (channel, server, group) carries its own configuration;
//! today that is the command prefix. The dispatcher consults a
//! [`ScopeConfigProvider`] on every message, so embedders can back the
//! lookup with whatever store they already have. [`StaticScopeConfig`] is
//! the built-in provider: a default config plus per-scope overrides,
//! loadable from TOML.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::ids::ScopeId;

/// Prefix used when a scope has no explicit configuration.
pub const DEFAULT_PREFIX: &str = "!";

/// Configuration for one chat scope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScopeConfig {
    /// The command prefix for this scope (e.g. `"!"`).
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
        }
    }
}

impl ScopeConfig {
    /// Config with the given prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

/// Resolves the configuration for a scope.
///
/// This is an external-collaborator boundary: the dispatcher performs no
/// caching or policy of its own, it asks the provider on every message.
pub trait ScopeConfigProvider: Send + Sync {
    /// Configuration for `scope`. Must always return something; scopes
    /// without explicit configuration get the provider's default.
    fn scope_config(&self, scope: &ScopeId) -> ScopeConfig;
}

/// On-disk shape of the scope configuration file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ScopeConfigFile {
    #[serde(default)]
    default: ScopeConfig,
    #[serde(default)]
    scopes: HashMap<ScopeId, ScopeConfig>,
}

/// In-memory provider: one default config plus per-scope overrides.
#[derive(Debug, Clone, Default)]
pub struct StaticScopeConfig {
    default: ScopeConfig,
    overrides: HashMap<ScopeId, ScopeConfig>,
}

impl StaticScopeConfig {
    /// Provider that answers `default` for every scope.
    pub fn new(default: ScopeConfig) -> Self {
        Self {
            default,
            overrides: HashMap::new(),
        }
    }

    /// Add (or replace) the configuration for one scope.
    pub fn set_override(&mut self, scope: impl Into<ScopeId>, config: ScopeConfig) {
        self.overrides.insert(scope.into(), config);
    }

    /// Parse a provider from a TOML string.
    ///
    /// ```toml
    /// [default]
    /// prefix = "!"
    ///
    /// [scopes."guild-1"]
    /// prefix = "?"
    /// ```
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let file: ScopeConfigFile =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Ok(Self {
            default: file.default,
            overrides: file.scopes,
        })
    }

    /// Load a provider from a TOML file on disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }
}

impl ScopeConfigProvider for StaticScopeConfig {
    fn scope_config(&self, scope: &ScopeId) -> ScopeConfig {
        self.overrides
            .get(scope)
            .cloned()
            .unwrap_or_else(|| self.default.clone())
    }
}
