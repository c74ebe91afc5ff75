//! Error types for the configuration layer.

use std::path::PathBuf;

/// Errors raised while loading or parsing scope configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse scope config: {0}")]
    Parse(String),

    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
