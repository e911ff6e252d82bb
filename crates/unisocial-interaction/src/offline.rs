//! Canned-response backend for practicing without network access.

use async_trait::async_trait;
use std::time::Duration;
use unisocial_core::analysis::{AnalysisResult, MIN_ANALYZABLE_MESSAGES};
use unisocial_core::session::ConversationService;
use unisocial_core::transcript::Message;

/// Simulated network latency of the offline backend.
pub const OFFLINE_DELAY: Duration = Duration::from_millis(800);

const GREETING_REPLY: &str = "你好！我是一个AI助手。很高兴为您提供帮助。您有什么问题想要咨询吗？";
const WEATHER_REPLY: &str = "我无法直接获取当前天气信息，但我可以告诉你，保持良好的沟通是解决问题的关键。";
const HELP_REPLY: &str = "我可以帮助您解答各种问题，提供建议，或者协助您完成任务。请告诉我您需要什么帮助？";

/// Answers from a fixed keyword table and returns a fixed report.
#[derive(Debug, Clone)]
pub struct OfflineService {
    delay: Duration,
}

impl OfflineService {
    pub fn new() -> Self {
        Self {
            delay: OFFLINE_DELAY,
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for OfflineService {
    fn default() -> Self {
        Self::new()
    }
}

/// Picks the canned reply for the user's last line.
pub fn canned_reply(last_text: &str) -> String {
    let lower = last_text.to_lowercase();
    let has_any = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

    if has_any(&["hello", "hi", "你好", "嗨"]) {
        GREETING_REPLY.to_string()
    } else if has_any(&["weather", "天气"]) {
        WEATHER_REPLY.to_string()
    } else if has_any(&["help", "帮助", "怎么"]) {
        HELP_REPLY.to_string()
    } else {
        format!(
            "我收到了您的消息：\"{last_text}\"。这是一个离线模式下的模拟响应。要获取真实的AI回复，请确保您的网络连接正常并能够访问Gemini API服务。"
        )
    }
}

/// Fixed report for the offline backend.
pub fn canned_analysis(scenario_title: &str) -> AnalysisResult {
    AnalysisResult {
        score: 85,
        summary: format!(
            "这是针对\"{scenario_title}\"场景的模拟分析反馈。在离线模式下，无法提供真实的AI分析。"
        ),
        strengths: vec![
            "保持良好的沟通节奏".to_string(),
            "注意倾听对方需求".to_string(),
        ],
        improvements: vec![
            "离线模式下无法提供详细的改进建议".to_string(),
            "请连接网络以获取更准确的分析".to_string(),
        ],
        tone_analysis: "离线模式".to_string(),
    }
}

#[async_trait]
impl ConversationService for OfflineService {
    async fn reply(&self, messages: &[Message], _persona_instruction: &str) -> Message {
        tokio::time::sleep(self.delay).await;
        let last = messages.last().map_or("", |m| m.text.as_str());
        Message::character(canned_reply(last))
    }

    async fn analyze(&self, scenario_title: &str, messages: &[Message]) -> AnalysisResult {
        if messages.len() < MIN_ANALYZABLE_MESSAGES {
            return AnalysisResult::insufficient_sample();
        }
        tokio::time::sleep(self.delay).await;
        canned_analysis(scenario_title)
    }
}
