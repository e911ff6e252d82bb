//! Error types for the UniSocial domain layer.

use thiserror::Error;

/// A shared error type for the UniSocial domain crates.
///
/// Orchestration failures (upstream model errors) never surface here: they are
/// converted into domain values at the reply/analysis boundary. This type covers
/// caller mistakes and session misuse; config loading has its own error in the
/// infrastructure crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UniSocialError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Input rejected before any work was done
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Session lifecycle violation
    #[error("Session error: {0}")]
    Session(String),
}

impl UniSocialError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an InvalidInput error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Creates a Session error
    pub fn session(message: impl Into<String>) -> Self {
        Self::Session(message.into())
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an InvalidInput error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

/// A type alias for `Result<T, UniSocialError>`.
pub type Result<T> = std::result::Result<T, UniSocialError>;
