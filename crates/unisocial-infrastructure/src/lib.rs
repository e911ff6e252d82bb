//! Filesystem and environment adapters for UniSocial.

pub mod config_service;
pub mod paths;
pub mod secret_service;

pub use config_service::{ConfigError, ConfigService, GEMINI_API_KEY_ENV};
pub use paths::{PathError, UniSocialPaths};
pub use secret_service::SecretServiceImpl;
