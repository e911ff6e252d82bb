//! Unified path management for UniSocial configuration files.
//!
//! ```text
//! ~/.config/unisocial/         # Config directory
//! ├── config.toml              # Application configuration
//! └── logs/                    # Rolling server logs
//!     └── unisocial-server.log.YYYY-MM-DD
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during path resolution.
#[derive(Debug, Error)]
pub enum PathError {
    /// Platform config directory could not be determined.
    #[error("Cannot find the user configuration directory")]
    ConfigDirNotFound,
}

pub struct UniSocialPaths;

impl UniSocialPaths {
    const APP_DIR: &'static str = "unisocial";

    /// Returns the UniSocial configuration directory (e.g. `~/.config/unisocial/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(Self::APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the directory that holds rolling log files.
    pub fn logs_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("logs"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_live_under_the_config_dir() {
        // Skipped on hosts without a resolvable config dir.
        let Ok(dir) = UniSocialPaths::config_dir() else {
            return;
        };
        assert!(dir.ends_with("unisocial"));
        assert_eq!(UniSocialPaths::config_file().unwrap(), dir.join("config.toml"));
        assert_eq!(UniSocialPaths::logs_dir().unwrap(), dir.join("logs"));
    }
}
