//! Application configuration model.
//!
//! Loaded from `config.toml` by the infrastructure layer. Every section and
//! field has a default so a partial (or absent) file is always usable.

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_PRIMARY_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_FALLBACK_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Root configuration structure for config.toml
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct RootConfig {
    pub server: ServerConfig,
    pub models: ModelConfig,
    pub timeouts: TimeoutConfig,
    pub gemini: GeminiConfig,
}

/// HTTP server settings.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on
    pub bind: String,
    /// Maximum accepted request body size
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
            body_limit_bytes: 1024 * 1024,
        }
    }
}

/// Which upstream models to use.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ModelConfig {
    /// Model tried first for every request
    pub primary: String,
    /// Model tried once when the primary attempt fails
    pub fallback: String,
    pub temperature: f32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY_MODEL.to_string(),
            fallback: DEFAULT_FALLBACK_MODEL.to_string(),
            temperature: 0.9,
        }
    }
}

/// Per-attempt (server) and per-request (client) time budgets, in seconds.
///
/// A server request may spend two attempt budgets (primary, then fallback), so
/// each client budget must exceed twice the matching attempt budget or the
/// client gives up before the fallback can answer. See
/// [`TimeoutConfig::client_covers_fallback`].
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TimeoutConfig {
    pub reply_attempt_secs: u64,
    pub analysis_attempt_secs: u64,
    pub client_reply_secs: u64,
    pub client_analysis_secs: u64,
}

impl TimeoutConfig {
    pub fn reply_attempt(&self) -> Duration {
        Duration::from_secs(self.reply_attempt_secs)
    }

    pub fn analysis_attempt(&self) -> Duration {
        Duration::from_secs(self.analysis_attempt_secs)
    }

    pub fn client_reply(&self) -> Duration {
        Duration::from_secs(self.client_reply_secs)
    }

    pub fn client_analysis(&self) -> Duration {
        Duration::from_secs(self.client_analysis_secs)
    }

    /// True when both client budgets outlast a primary attempt plus a fallback attempt.
    pub fn client_covers_fallback(&self) -> bool {
        self.client_reply_secs > 2 * self.reply_attempt_secs
            && self.client_analysis_secs > 2 * self.analysis_attempt_secs
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            reply_attempt_secs: 30,
            analysis_attempt_secs: 30,
            client_reply_secs: 65,
            client_analysis_secs: 70,
        }
    }
}

/// Gemini API configuration
#[derive(Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct GeminiConfig {
    pub base_url: String,
    /// Usually supplied through `GEMINI_API_KEY` instead of the file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            api_key: None,
        }
    }
}

// Keeps the key out of `{:?}` output.
impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: RootConfig = toml::from_str(
            r#"
            [models]
            primary = "gemini-2.5-pro"

            [timeouts]
            client_analysis_secs = 60
            "#,
        )
        .unwrap();

        assert_eq!(config.models.primary, "gemini-2.5-pro");
        assert_eq!(config.models.fallback, DEFAULT_FALLBACK_MODEL);
        assert_eq!(config.timeouts.client_analysis(), Duration::from_secs(60));
        assert_eq!(config.timeouts.reply_attempt(), Duration::from_secs(30));
        assert_eq!(config.server, ServerConfig::default());
    }

    #[test]
    fn default_client_budgets_outlast_both_attempts() {
        let timeouts = TimeoutConfig::default();
        assert!(timeouts.client_covers_fallback());
        assert!(timeouts.client_reply() > timeouts.reply_attempt() * 2);
        assert!(timeouts.client_analysis() > timeouts.analysis_attempt() * 2);
    }

    #[test]
    fn client_budget_equal_to_one_attempt_is_flagged() {
        let timeouts = TimeoutConfig {
            client_reply_secs: 30,
            ..TimeoutConfig::default()
        };
        assert!(!timeouts.client_covers_fallback());
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let gemini = GeminiConfig {
            api_key: Some("AIza-secret".to_string()),
            ..GeminiConfig::default()
        };
        let rendered = format!("{gemini:?}");
        assert!(!rendered.contains("AIza-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
