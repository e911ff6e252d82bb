use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Transcripts shorter than this are not worth sending upstream.
pub const MIN_ANALYZABLE_MESSAGES: usize = 3;

/// Scores live on a 0..=100 scale everywhere, including fallbacks.
pub const MAX_SCORE: u8 = 100;

/// Score used when the service could not judge the conversation at all.
pub const NEUTRAL_SCORE: u8 = 50;

pub const SUMMARY_PLACEHOLDER: &str = "解析结果为空";
pub const TONE_PLACEHOLDER: &str = "未知";

const STANDARD_STRENGTHS: [&str; 2] = ["您积极参与了对话", "您尝试了不同的表达方式"];
const STANDARD_IMPROVEMENTS: [&str; 2] = ["可以尝试更清晰地表达您的想法", "注意对话的连贯性和逻辑性"];

/// Scored self-improvement report for one completed session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Overall score in `0..=100`
    pub score: u8,
    pub summary: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub tone_analysis: String,
}

impl AnalysisResult {
    /// Result for transcripts too short to analyze. Never involves the network.
    pub fn insufficient_sample() -> Self {
        Self {
            score: 0,
            summary: "对话太短，无法进行有效分析。请尝试多交流几句。".to_string(),
            strengths: Vec::new(),
            improvements: strings(&["请尝试多说几句话。", "不要过早结束对话。"]),
            tone_analysis: "样本不足".to_string(),
        }
    }

    /// Result when the model answered but its payload was not valid JSON.
    pub fn malformed_payload() -> Self {
        Self {
            score: NEUTRAL_SCORE,
            summary: "分析服务返回格式异常，已使用备用分析结果".to_string(),
            strengths: strings(&STANDARD_STRENGTHS),
            improvements: strings(&STANDARD_IMPROVEMENTS),
            tone_analysis: "服务返回格式异常，无法提供详细分析".to_string(),
        }
    }

    /// Result when neither the primary nor the fallback model could be reached.
    pub fn service_unavailable() -> Self {
        Self {
            score: NEUTRAL_SCORE,
            summary: "分析服务暂时不可用，但我们仍可以提供一些基础建议。".to_string(),
            strengths: strings(&STANDARD_STRENGTHS),
            improvements: strings(&STANDARD_IMPROVEMENTS),
            tone_analysis: "服务不可用，无法提供详细分析".to_string(),
        }
    }

    /// Result when the analysis request was cut off before any report arrived.
    pub fn interrupted(summary: impl Into<String>) -> Self {
        Self {
            score: NEUTRAL_SCORE,
            summary: summary.into(),
            strengths: strings(&["对话已完成"]),
            improvements: strings(&["请稍后重新尝试分析功能"]),
            tone_analysis: "分析过程中断".to_string(),
        }
    }

    /// Coerces an arbitrary JSON value into a complete result.
    ///
    /// Each field is repaired on its own; a bad `score` does not discard a good
    /// `summary`. Non-object values are treated like `{}`.
    pub fn from_value(value: &Value) -> Self {
        let field = |name: &str| value.get(name).unwrap_or(&Value::Null);

        Self {
            score: coerce_score(field("score")),
            summary: coerce_text(field("summary"), SUMMARY_PLACEHOLDER),
            strengths: coerce_list(field("strengths")),
            improvements: coerce_list(field("improvements")),
            tone_analysis: coerce_text(field("toneAnalysis"), TONE_PLACEHOLDER),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn coerce_score(value: &Value) -> u8 {
    let raw = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match raw {
        Some(score) if score.is_finite() => score.round().clamp(0.0, f64::from(MAX_SCORE)) as u8,
        _ => 0,
    }
}

fn coerce_text(value: &Value, placeholder: &str) -> String {
    match value.as_str() {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => placeholder.to_string(),
    }
}

fn coerce_list(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
