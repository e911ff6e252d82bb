//! Secret management service trait.
//!
//! Defines the interface for reading the upstream API key.
//!
//! # Security Note
//!
//! Implementations must never log or format the key itself. Use
//! [`mask_secret`] when a key needs to be identified in diagnostics.

/// Source of the upstream generation credential.
pub trait SecretService: Send + Sync {
    /// Returns the Gemini API key, or `None` when not configured.
    fn gemini_api_key(&self) -> Option<String>;

    /// Whether a non-blank key is available.
    fn credential_configured(&self) -> bool {
        self.gemini_api_key()
            .is_some_and(|key| !key.trim().is_empty())
    }
}

/// Renders a secret as its last four characters, e.g. `****abcd`.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{tail}")
}
