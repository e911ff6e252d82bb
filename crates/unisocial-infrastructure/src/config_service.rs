//! Configuration service implementation.
//!
//! Loads the root configuration from `config.toml` (by default
//! `~/.config/unisocial/config.toml`) and applies environment overrides.

use crate::paths::{PathError, UniSocialPaths};
use std::path::{Path, PathBuf};
use thiserror::Error;
use unisocial_core::config::RootConfig;

/// Environment variable that overrides `gemini.api_key`.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Resolves and loads [`RootConfig`].
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Uses the default config file location.
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            path: UniSocialPaths::config_file()?,
        })
    }

    /// Uses an explicit config file (e.g. from `--config`).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location unless `path` is given.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Ok(Self::with_path(path)),
            None => Self::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the file and applies the `GEMINI_API_KEY` override.
    pub fn load(&self) -> Result<RootConfig, ConfigError> {
        let config = self.load_file()?;
        Ok(apply_env_override(
            config,
            std::env::var(GEMINI_API_KEY_ENV).ok(),
        ))
    }

    /// Loads the file only. A missing file yields the defaults.
    pub fn load_file(&self) -> Result<RootConfig, ConfigError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "config file not found, using defaults");
                return Ok(RootConfig::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

/// Replaces the configured key with a non-blank environment value.
pub fn apply_env_override(mut config: RootConfig, env_key: Option<String>) -> RootConfig {
    if let Some(key) = env_key.filter(|key| !key.trim().is_empty()) {
        config.gemini.api_key = Some(key.trim().to_string());
    }
    config
}
