//! Pulling generated text out of loosely shaped responses.
//!
//! Upstream clients have returned text in several layouts over time. Each
//! layout is one [`ExtractionStrategy`]; an [`ExtractionChain`] tries them in
//! order and ends with a fixed default, so extraction itself never fails.

use serde_json::Value;

/// One way of locating text in a response payload.
pub trait ExtractionStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Returns the text, or `None` to let the next strategy try.
    fn extract(&self, payload: &Value) -> Option<String>;
}

/// `candidates[0].content.parts[*].text`, the native REST layout.
pub struct CandidateParts;

impl ExtractionStrategy for CandidateParts {
    fn name(&self) -> &'static str {
        "candidate_parts"
    }

    fn extract(&self, payload: &Value) -> Option<String> {
        let parts = payload
            .get("candidates")?
            .get(0)?
            .get("content")?
            .get("parts")?
            .as_array()?;

        let text: String = parts
            .iter()
            .filter_map(|part| part.get("text").and_then(Value::as_str))
            .collect();
        non_blank(text)
    }
}

/// `response.candidates[0]...`, the layout of SDK result wrappers.
pub struct WrappedCandidateParts;

impl ExtractionStrategy for WrappedCandidateParts {
    fn name(&self) -> &'static str {
        "wrapped_candidate_parts"
    }

    fn extract(&self, payload: &Value) -> Option<String> {
        CandidateParts.extract(payload.get("response")?)
    }
}

/// A flat top-level `text` field.
pub struct FlatText;

impl ExtractionStrategy for FlatText {
    fn name(&self) -> &'static str {
        "flat_text"
    }

    fn extract(&self, payload: &Value) -> Option<String> {
        payload
            .get("text")
            .and_then(Value::as_str)
            .and_then(|text| non_blank(text.to_string()))
    }
}

fn non_blank(text: String) -> Option<String> {
    if text.trim().is_empty() { None } else { Some(text) }
}

/// Ordered strategies followed by a fixed default.
pub struct ExtractionChain {
    strategies: Vec<Box<dyn ExtractionStrategy>>,
    default: String,
}

impl ExtractionChain {
    /// An empty chain that always yields `default`.
    pub fn new(default: impl Into<String>) -> Self {
        Self {
            strategies: Vec::new(),
            default: default.into(),
        }
    }

    /// The layouts known from Gemini clients, most specific first.
    pub fn standard(default: impl Into<String>) -> Self {
        Self::new(default)
            .with_strategy(CandidateParts)
            .with_strategy(WrappedCandidateParts)
            .with_strategy(FlatText)
    }

    pub fn with_strategy(mut self, strategy: impl ExtractionStrategy + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    pub fn extract(&self, payload: &Value) -> String {
        for strategy in &self.strategies {
            if let Some(text) = strategy.extract(payload) {
                tracing::trace!(strategy = strategy.name(), "extracted response text");
                return text;
            }
        }
        tracing::debug!("no strategy matched, using default text");
        self.default.clone()
    }
}
