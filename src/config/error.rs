//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

use crate::scoring::ParseStrategyError;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Strategy name is not one of the known strategies.
    #[error("invalid {name}: {source}")]
    InvalidStrategy {
        name: &'static str,
        #[source]
        source: ParseStrategyError,
    },

    /// A numeric setting could not be parsed.
    #[error("failed to parse {name}='{value}': {source}")]
    NumberParseError {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// The TF-IDF vocabulary cap must allow at least one term.
    #[error("max_features must be greater than zero")]
    ZeroMaxFeatures,

    /// Path exists but is not a directory (when a directory was expected).
    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}
