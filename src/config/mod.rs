//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `SCREEN_*` environment variables;
//! command-line flags override both.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::PathBuf;

use crate::constants::{DEFAULT_MAX_FEATURES, DEFAULT_MODEL_DIR, DEFAULT_PREVIEW_ROWS};
use crate::scoring::Strategy;

/// Run configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Active scoring strategy. Default: `lexical`.
    pub strategy: Strategy,

    /// Directory holding `config.json`, `model.safetensors` and `tokenizer.json`
    /// of the sentence-embedding model. Default: `models/all-MiniLM-L6-v2`.
    pub model_path: PathBuf,

    /// TF-IDF vocabulary cap. Default: `20_000`.
    pub max_features: usize,

    /// Rows printed after a run. Default: `10`.
    pub preview_rows: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            model_path: PathBuf::from(DEFAULT_MODEL_DIR),
            max_features: DEFAULT_MAX_FEATURES,
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

impl Config {
    pub const ENV_STRATEGY: &'static str = "SCREEN_STRATEGY";
    pub const ENV_MODEL_PATH: &'static str = "SCREEN_MODEL_PATH";
    pub const ENV_MAX_FEATURES: &'static str = "SCREEN_MAX_FEATURES";
    pub const ENV_PREVIEW_ROWS: &'static str = "SCREEN_PREVIEW_ROWS";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let strategy = match Self::read_env(Self::ENV_STRATEGY) {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidStrategy {
                    name: Self::ENV_STRATEGY,
                    source,
                })?,
            None => defaults.strategy,
        };
        let model_path = Self::read_env(Self::ENV_MODEL_PATH)
            .map(PathBuf::from)
            .unwrap_or(defaults.model_path);
        let max_features = Self::parse_usize_from_env(Self::ENV_MAX_FEATURES, defaults.max_features)?;
        let preview_rows = Self::parse_usize_from_env(Self::ENV_PREVIEW_ROWS, defaults.preview_rows)?;

        Ok(Self {
            strategy,
            model_path,
            max_features,
            preview_rows,
        })
    }

    /// Checks basic invariants. A missing model directory is not an error here:
    /// it surfaces as a resource failure when the semantic scorer loads.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_features == 0 {
            return Err(ConfigError::ZeroMaxFeatures);
        }

        if self.strategy == Strategy::Semantic
            && self.model_path.exists()
            && !self.model_path.is_dir()
        {
            return Err(ConfigError::NotADirectory {
                path: self.model_path.clone(),
            });
        }

        Ok(())
    }

    fn read_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_usize_from_env(name: &'static str, default: usize) -> Result<usize, ConfigError> {
        match Self::read_env(name) {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::NumberParseError {
                    name,
                    value,
                    source,
                }),
            None => Ok(default),
        }
    }
}
