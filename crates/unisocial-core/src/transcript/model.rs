//! Append-only transcript for one role-play session.

use super::message::{Message, Sender};
use std::ops::Deref;
use std::sync::Arc;

/// Ordered log of the messages exchanged in one session.
///
/// Always starts with the scenario's opening line spoken by the character.
/// Messages are only ever appended.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Starts a transcript seeded with the character's opening line.
    pub fn open(opening_line: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::character(opening_line)],
        }
    }

    /// Appends a user message and returns it.
    pub fn push_user(&mut self, text: impl Into<String>) -> &Message {
        self.push(Message::user(text))
    }

    /// Appends an already-built message (typically a generated reply).
    pub fn push(&mut self, message: Message) -> &Message {
        self.messages.push(message);
        // Just pushed, never empty.
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last_sender(&self) -> Option<Sender> {
        self.messages.last().map(|m| m.sender)
    }

    /// Freezes the current contents. Later appends do not affect the snapshot.
    pub fn snapshot(&self) -> TranscriptSnapshot {
        TranscriptSnapshot(Arc::from(self.messages.as_slice()))
    }
}

/// Immutable, cheaply cloneable view of a transcript at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptSnapshot(Arc<[Message]>);

impl Deref for TranscriptSnapshot {
    type Target = [Message];

    fn deref(&self) -> &[Message] {
        &self.0
    }
}

impl From<Vec<Message>> for TranscriptSnapshot {
    fn from(messages: Vec<Message>) -> Self {
        Self(Arc::from(messages))
    }
}

/// Renders messages as `label: text` lines for prompting.
pub fn render_transcript(messages: &[Message]) -> String {
    messages
        .iter()
        .map(|m| format!("{}: {}", m.sender.label(), m.text))
        .collect::<Vec<_>>()
        .join("\n")
}
