//! Chat transcript models for the shopping assistant.

use chrono::{DateTime, Utc};
use serde::Serialize;

use lumina_core::{ChatMessageId, ChatRole};

/// Opening assistant turn every transcript starts with.
pub const GREETING: &str =
    "Hi! I'm Lumina, your AI shopping assistant. Looking for something specific?";

/// A single turn in the assistant conversation.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    /// Unique message ID.
    pub id: ChatMessageId,
    /// Role of the message sender.
    pub role: ChatRole,
    /// Message text.
    pub text: String,
    /// When the message was created.
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a message with a fresh id, stamped now.
    #[must_use]
    pub fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            id: ChatMessageId::generate(),
            role,
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}

/// Append-only transcript of the conversation, oldest first.
///
/// Messages are never mutated or deleted within a session.
#[derive(Debug)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// A transcript opening with the assistant greeting.
    #[must_use]
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::new(ChatRole::Assistant, GREETING)],
        }
    }

    /// Append a turn and return a copy of the stored message.
    pub fn push(&mut self, role: ChatRole, text: impl Into<String>) -> ChatMessage {
        let message = ChatMessage::new(role, text);
        self.messages.push(message.clone());
        message
    }

    /// All turns, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}
