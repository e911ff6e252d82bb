//! Secret service implementation.
//!
//! The Gemini key comes from the loaded configuration, which already has the
//! `GEMINI_API_KEY` override applied.

use unisocial_core::config::RootConfig;
use unisocial_core::secret::{SecretService, mask_secret};

#[derive(Clone, Default)]
pub struct SecretServiceImpl {
    gemini_api_key: Option<String>,
}

impl SecretServiceImpl {
    pub fn new(gemini_api_key: Option<String>) -> Self {
        Self {
            gemini_api_key: gemini_api_key.filter(|key| !key.trim().is_empty()),
        }
    }

    pub fn from_config(config: &RootConfig) -> Self {
        Self::new(config.gemini.api_key.clone())
    }
}

impl SecretService for SecretServiceImpl {
    fn gemini_api_key(&self) -> Option<String> {
        self.gemini_api_key.clone()
    }
}

impl std::fmt::Debug for SecretServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretServiceImpl")
            .field("gemini_api_key", &self.gemini_api_key.as_deref().map(mask_secret))
            .finish()
    }
}
