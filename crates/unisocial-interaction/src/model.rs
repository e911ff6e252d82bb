//! The seam between orchestration logic and a concrete generation backend.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Desired shape of the model's answer.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseFormat {
    /// Free-form text.
    Text,
    /// JSON conforming to the given schema (structured output mode).
    Json { schema: Value },
}

/// One self-contained generation request. Carries the whole prompt; no
/// conversational state lives on the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub temperature: f32,
    pub response_format: ResponseFormat,
}

impl GenerationRequest {
    pub fn text(prompt: impl Into<String>, temperature: f32) -> Self {
        Self {
            prompt: prompt.into(),
            temperature,
            response_format: ResponseFormat::Text,
        }
    }

    pub fn json(prompt: impl Into<String>, temperature: f32, schema: Value) -> Self {
        Self {
            prompt: prompt.into(),
            temperature,
            response_format: ResponseFormat::Json { schema },
        }
    }
}

/// Why a single model attempt failed.
///
/// Messages never contain the API key or the request URL.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// The attempt exceeded its time budget
    #[error("model request timed out")]
    Timeout,

    /// DNS, connect, TLS or other transport-level failure
    #[error("transport failure: {0}")]
    Transport(String),

    /// Upstream answered with a non-success status
    #[error("upstream returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Upstream answered 2xx but the body was not JSON
    #[error("malformed upstream payload: {0}")]
    Malformed(String),

    /// No API key is configured
    #[error("no upstream credential configured")]
    MissingCredential,

    /// The prompt could not be rendered
    #[error("prompt rendering failed: {0}")]
    Prompt(String),
}

impl From<minijinja::Error> for ModelError {
    fn from(err: minijinja::Error) -> Self {
        Self::Prompt(err.to_string())
    }
}

/// A generation backend addressed by model name.
///
/// Returns the raw JSON response; callers pull text out with an
/// [`ExtractionChain`](crate::extraction::ExtractionChain).
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    fn model_name(&self) -> &str;

    async fn generate(&self, request: &GenerationRequest) -> Result<Value, ModelError>;
}
