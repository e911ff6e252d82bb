//! Wire types shared by the HTTP server and its clients.
//!
//! All bodies are camelCase JSON to match the browser front end.

use crate::analysis::AnalysisResult;
use crate::scenario::Category;
use crate::transcript::Message;
use serde::{Deserialize, Serialize};

pub const CHAT_COMPLETION_PATH: &str = "/chat-completion";
pub const CONVERSATION_ANALYSIS_PATH: &str = "/conversation-analysis";

/// Body of `POST /chat-completion`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatCompletionRequest {
    /// Full transcript including the just-sent user message
    #[serde(default)]
    pub messages: Option<Vec<Message>>,
    /// Persona instruction of the active scenario
    #[serde(default)]
    pub system_instruction: String,
}

/// Successful reply from `POST /chat-completion`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    pub text: String,
}

/// Body of `POST /conversation-analysis`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationAnalysisRequest {
    #[serde(default)]
    pub scenario_title: Option<String>,
    #[serde(default)]
    pub messages: Option<Vec<Message>>,
}

/// Error body returned with any non-2xx status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Short user-facing headline
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// RFC 3339 time the error was produced
    #[serde(default)]
    pub timestamp: String,
    /// Best-effort report for analysis failures; render this instead of the error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_analysis: Option<AnalysisResult>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
            fallback_analysis: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_fallback_analysis(mut self, analysis: AnalysisResult) -> Self {
        self.fallback_analysis = Some(analysis);
        self
    }
}

/// Body of `PATCH /scenarios/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDescriptionRequest {
    pub description: String,
}

/// Query string accepted by the catalog listing endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryQuery {
    #[serde(default)]
    pub category: Option<Category>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectivesResponse {
    pub category: Option<Category>,
    pub objectives: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub credential_configured: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_omits_empty_optionals() {
        let value = serde_json::to_value(ErrorResponse::new("boom")).unwrap();
        assert_eq!(value["error"], "boom");
        assert!(value.get("details").is_none());
        assert!(value.get("fallbackAnalysis").is_none());
    }

    #[test]
    fn analysis_request_tolerates_missing_fields() {
        let request: ConversationAnalysisRequest = serde_json::from_str("{}").unwrap();
        assert!(request.scenario_title.is_none());
        assert!(request.messages.is_none());
    }
}
