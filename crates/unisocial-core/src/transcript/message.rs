//! Conversation message types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a message.
///
/// Serialized as `"user"` / `"model"` to match the browser client. `"character"`
/// and `"ai"` are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sender {
    /// The person practicing.
    #[serde(rename = "user")]
    User,
    /// The AI-played role-play partner.
    #[serde(rename = "model", alias = "character", alias = "ai")]
    Character,
}

impl Sender {
    /// Role label used when a transcript is rendered into a prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Sender::User => "用户",
            Sender::Character => "AI",
        }
    }
}

/// A single message in a transcript. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Opaque identifier, unique within a transcript
    #[serde(default = "new_message_id")]
    pub id: String,
    pub text: String,
    pub sender: Sender,
    #[serde(default = "chrono::Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: new_message_id(),
            text: text.into(),
            sender,
            timestamp: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    pub fn character(text: impl Into<String>) -> Self {
        Self::new(Sender::Character, text)
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

fn new_message_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sender_wire_names() {
        assert_eq!(serde_json::to_string(&Sender::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Sender::Character).unwrap(), "\"model\"");
        let aliased: Sender = serde_json::from_str("\"character\"").unwrap();
        assert_eq!(aliased, Sender::Character);
        assert!(serde_json::from_str::<Sender>("\"narrator\"").is_err());
    }

    #[test]
    fn browser_message_deserializes() {
        let json = r#"{"id":"init-1","text":"你好","sender":"model","timestamp":"2025-01-01T08:00:00.000Z"}"#;
        let message: Message = serde_json::from_str(json).unwrap();
        assert_eq!(message.id, "init-1");
        assert_eq!(message.sender, Sender::Character);
    }

    #[test]
    fn missing_id_and_timestamp_are_generated() {
        let message: Message = serde_json::from_str(r#"{"text":"hi","sender":"user"}"#).unwrap();
        assert!(!message.id.is_empty());
        assert!(message.is_user());
    }
}
