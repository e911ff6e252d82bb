//! Failure taxonomy shared by the reply and analysis paths.
//!
//! Every upstream problem is reduced to a [`FailureKind`] which knows its
//! user-facing wording and the HTTP status the proxy endpoints report.

use crate::model::ModelError;

const TROUBLESHOOTING: &str = "可能的解决方案：
1. 检查防火墙设置，确保允许连接到Google API
2. 如果使用VPN，请尝试暂时断开
3. 检查网络代理设置
4. 稍后再试，服务可能暂时不可用";

/// Category of a failed reply or analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    Timeout,
    Network,
    Auth,
    Config,
    RateLimited,
    BadRequest,
    Upstream,
}

impl FailureKind {
    /// Maps a terminal model error to its category.
    pub fn classify(err: &ModelError) -> Self {
        match err {
            ModelError::Timeout => Self::Timeout,
            ModelError::Transport(_) => Self::Network,
            ModelError::MissingCredential => Self::Config,
            ModelError::Http { status: 401 | 403, .. } => Self::Auth,
            ModelError::Http { status: 429, .. } => Self::RateLimited,
            ModelError::Http {
                status: 400,
                message,
            } if message.to_lowercase().contains("api key") => Self::Config,
            ModelError::Http { .. } | ModelError::Malformed(_) | ModelError::Prompt(_) => {
                Self::Upstream
            }
        }
    }

    /// Best guess of the category behind a proxy status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => Self::BadRequest,
            401 | 403 => Self::Auth,
            429 => Self::RateLimited,
            503 => Self::Network,
            504 => Self::Timeout,
            _ => Self::Upstream,
        }
    }

    pub fn http_status(&self) -> u16 {
        match self {
            Self::Timeout => 504,
            Self::Network => 503,
            Self::Auth => 401,
            Self::Config => 500,
            Self::RateLimited => 429,
            Self::BadRequest => 400,
            Self::Upstream => 500,
        }
    }

    /// One-line message for the `error` field.
    pub fn headline(&self) -> &'static str {
        match self {
            Self::Timeout => "请求超时：服务器响应时间过长，请稍后重试。",
            Self::Network => "网络连接失败：无法连接到Gemini服务。",
            Self::Auth => "API密钥无效或权限不足",
            Self::Config => "服务器配置错误：API密钥未设置或无效",
            Self::RateLimited => "请求频率过高，请稍后再试",
            Self::BadRequest => "请求内容无效",
            Self::Upstream => "服务器处理请求时出错",
        }
    }

    /// Longer explanation for the `details` field.
    pub fn details(&self) -> &'static str {
        match self {
            Self::Timeout => "请求处理时间超过了超时限制，服务可能暂时繁忙。",
            Self::Network => TROUBLESHOOTING,
            Self::Auth => "提供的Gemini API密钥无效或者没有足够的权限访问指定的资源。",
            Self::Config => "服务器无法使用API密钥。请检查环境变量 GEMINI_API_KEY 的配置。",
            Self::RateLimited => "您已达到API请求限制。请减少请求频率或稍后再试。",
            Self::BadRequest => "请求体缺少必要字段或格式不正确。",
            Self::Upstream => "生成服务返回了错误，请稍后重试。",
        }
    }

    /// Text shown in place of the character's reply.
    pub fn reply_text(&self) -> String {
        format!("{}\n\n{}", self.headline(), self.details())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16, message: &str) -> ModelError {
        ModelError::Http {
            status,
            message: message.to_string(),
        }
    }

    #[test]
    fn classification_table() {
        assert_eq!(FailureKind::classify(&ModelError::Timeout), FailureKind::Timeout);
        assert_eq!(
            FailureKind::classify(&ModelError::Transport("connection refused".into())),
            FailureKind::Network
        );
        assert_eq!(FailureKind::classify(&http(403, "denied")), FailureKind::Auth);
        assert_eq!(FailureKind::classify(&http(429, "slow")), FailureKind::RateLimited);
        assert_eq!(
            FailureKind::classify(&http(400, "INVALID_ARGUMENT: API key not valid.")),
            FailureKind::Config
        );
        assert_eq!(FailureKind::classify(&http(400, "bad schema")), FailureKind::Upstream);
        assert_eq!(
            FailureKind::classify(&ModelError::MissingCredential),
            FailureKind::Config
        );
        assert_eq!(
            FailureKind::classify(&ModelError::Malformed("eof".into())),
            FailureKind::Upstream
        );
    }

    #[test]
    fn statuses_match_proxy_contract() {
        assert_eq!(FailureKind::Timeout.http_status(), 504);
        assert_eq!(FailureKind::Network.http_status(), 503);
        assert_eq!(FailureKind::Auth.http_status(), 401);
        assert_eq!(FailureKind::RateLimited.http_status(), 429);
        assert_eq!(FailureKind::BadRequest.http_status(), 400);
        assert_eq!(FailureKind::Config.http_status(), 500);
    }

    #[test]
    fn network_reply_text_suggests_causes() {
        let text = FailureKind::Network.reply_text();
        assert!(text.contains("防火墙"));
        assert!(text.contains("VPN"));
        assert!(text.contains("代理"));
    }

    #[test]
    fn from_status_round_trips_distinct_statuses() {
        for kind in [
            FailureKind::Timeout,
            FailureKind::Network,
            FailureKind::Auth,
            FailureKind::RateLimited,
            FailureKind::BadRequest,
        ] {
            assert_eq!(FailureKind::from_status(kind.http_status()), kind);
        }
    }
}
