//! Settings errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when building or loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read settings from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Error marker must not be empty")]
    EmptyErrorMarker,

    #[error("History limit must be at least 1")]
    ZeroHistoryLimit,
}
