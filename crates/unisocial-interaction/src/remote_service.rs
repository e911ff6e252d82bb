//! HTTP client for a running UniSocial server.

use crate::failure::FailureKind;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tracing::warn;
use unisocial_core::analysis::{AnalysisResult, MIN_ANALYZABLE_MESSAGES};
use unisocial_core::api::{
    CHAT_COMPLETION_PATH, CONVERSATION_ANALYSIS_PATH, ChatCompletionRequest,
    ChatCompletionResponse, ConversationAnalysisRequest, ErrorResponse,
};
use unisocial_core::config::TimeoutConfig;
use unisocial_core::session::ConversationService;
use unisocial_core::transcript::Message;

const UNREACHABLE_TEXT: &str = "网络错误：无法连接到服务器，请检查网络或稍后重试。";
const MAX_DETAILS_CHARS: usize = 200;

/// Talks to `/chat-completion` and `/conversation-analysis`.
///
/// Applies its own per-request timeouts on top of the server's per-attempt
/// budget, and turns every failure into a displayable value.
#[derive(Clone)]
pub struct RemoteConversationService {
    client: Client,
    base_url: String,
    reply_timeout: Duration,
    analysis_timeout: Duration,
}

impl RemoteConversationService {
    pub fn new(base_url: impl Into<String>, timeouts: &TimeoutConfig) -> Self {
        if !timeouts.client_covers_fallback() {
            warn!(
                ?timeouts,
                "client timeouts do not cover two server attempts; fallback replies may be cut off"
            );
        }
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            reply_timeout: timeouts.client_reply(),
            analysis_timeout: timeouts.client_analysis(),
        }
    }

    pub fn with_timeouts(mut self, reply: Duration, analysis: Duration) -> Self {
        self.reply_timeout = reply;
        self.analysis_timeout = analysis;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_chat(
        &self,
        messages: &[Message],
        persona_instruction: &str,
    ) -> Result<Response, reqwest::Error> {
        let body = ChatCompletionRequest {
            messages: Some(messages.to_vec()),
            system_instruction: persona_instruction.to_string(),
        };
        self.client
            .post(self.url(CHAT_COMPLETION_PATH))
            .timeout(self.reply_timeout)
            .json(&body)
            .send()
            .await
    }

    async fn post_analysis(
        &self,
        scenario_title: &str,
        messages: &[Message],
    ) -> Result<Response, reqwest::Error> {
        let body = ConversationAnalysisRequest {
            scenario_title: Some(scenario_title.to_string()),
            messages: Some(messages.to_vec()),
        };
        self.client
            .post(self.url(CONVERSATION_ANALYSIS_PATH))
            .timeout(self.analysis_timeout)
            .json(&body)
            .send()
            .await
    }
}

#[async_trait]
impl ConversationService for RemoteConversationService {
    async fn reply(&self, messages: &[Message], persona_instruction: &str) -> Message {
        let text = match self.post_chat(messages, persona_instruction).await {
            Ok(response) if response.status().is_success() => {
                match response.json::<ChatCompletionResponse>().await {
                    Ok(body) => body.text,
                    Err(err) => {
                        warn!(error = %err.without_url(), "unreadable chat response");
                        FailureKind::Upstream.reply_text()
                    }
                }
            }
            Ok(response) => {
                let status = response.status();
                error_reply_text(status, read_error_body(response).await)
            }
            Err(err) if err.is_timeout() => FailureKind::Timeout.reply_text(),
            Err(err) => {
                warn!(error = %err.without_url(), "chat request failed");
                UNREACHABLE_TEXT.to_string()
            }
        };
        Message::character(text)
    }

    async fn analyze(&self, scenario_title: &str, messages: &[Message]) -> AnalysisResult {
        if messages.len() < MIN_ANALYZABLE_MESSAGES {
            return AnalysisResult::insufficient_sample();
        }

        match self.post_analysis(scenario_title, messages).await {
            Ok(response) if response.status().is_success() => {
                response.json::<AnalysisResult>().await.unwrap_or_else(|err| {
                    warn!(error = %err.without_url(), "unreadable analysis response");
                    AnalysisResult::malformed_payload()
                })
            }
            Ok(response) => {
                let status = response.status();
                error_analysis(status, read_error_body(response).await)
            }
            Err(err) if err.is_timeout() => {
                AnalysisResult::interrupted("分析请求超时，请稍后重试")
            }
            Err(err) => {
                warn!(error = %err.without_url(), "analysis request failed");
                AnalysisResult::interrupted("网络连接问题，无法完成分析")
            }
        }
    }
}

async fn read_error_body(response: Response) -> Option<ErrorResponse> {
    response.json::<ErrorResponse>().await.ok()
}

/// Character text for a non-2xx chat response.
fn error_reply_text(status: StatusCode, body: Option<ErrorResponse>) -> String {
    match body {
        Some(ErrorResponse {
            error,
            details: Some(details),
            ..
        }) => format!("{error}\n\n{}", truncate_chars(&details, MAX_DETAILS_CHARS)),
        Some(ErrorResponse { error, .. }) => error,
        None => format!("系统错误：HTTP {}", status.as_u16()),
    }
}

/// Report for a non-2xx analysis response.
fn error_analysis(status: StatusCode, body: Option<ErrorResponse>) -> AnalysisResult {
    match body {
        Some(ErrorResponse {
            fallback_analysis: Some(analysis),
            ..
        }) => analysis,
        Some(ErrorResponse { error, .. }) => {
            AnalysisResult::interrupted(format!("分析服务暂时不可用：{error}"))
        }
        None => AnalysisResult::interrupted(format!("分析服务暂时不可用：HTTP {}", status.as_u16())),
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_text_joins_headline_and_details() {
        let body = ErrorResponse::new("请求超时").with_details("稍后再试");
        assert_eq!(
            error_reply_text(StatusCode::GATEWAY_TIMEOUT, Some(body)),
            "请求超时\n\n稍后再试"
        );
    }

    #[test]
    fn unparsable_error_body_reports_status() {
        assert_eq!(
            error_reply_text(StatusCode::BAD_GATEWAY, None),
            "系统错误：HTTP 502"
        );
    }

    #[test]
    fn long_details_are_truncated() {
        let details = "长".repeat(500);
        let body = ErrorResponse::new("e").with_details(details);
        let text = error_reply_text(StatusCode::INTERNAL_SERVER_ERROR, Some(body));
        assert_eq!(text.chars().count(), "e\n\n".chars().count() + MAX_DETAILS_CHARS + 3);
    }

    #[test]
    fn fallback_analysis_is_preferred() {
        let body = ErrorResponse::new("x").with_fallback_analysis(AnalysisResult::service_unavailable());
        assert_eq!(
            error_analysis(StatusCode::SERVICE_UNAVAILABLE, Some(body)),
            AnalysisResult::service_unavailable()
        );
        let interrupted = error_analysis(StatusCode::SERVICE_UNAVAILABLE, None);
        assert_eq!(interrupted.summary, "分析服务暂时不可用：HTTP 503");
        assert_eq!(interrupted.score, 50);
    }

    #[tokio::test]
    async fn unreachable_server_becomes_character_text() {
        // Port 9 (discard) on localhost is expected to refuse connections.
        let service = RemoteConversationService::new("http://127.0.0.1:9", &TimeoutConfig::default());
        let reply = service.reply(&[Message::user("你好")], "p").await;
        assert!(!reply.is_user());
        assert!(!reply.text.is_empty());
    }
}
