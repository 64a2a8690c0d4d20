//! ChatEvent enum — broadcast from a Conversation to frontends via tokio::broadcast.

use serde::{Deserialize, Serialize};

use crate::types::{Message, SessionStatus, TypingData};

/// Events broadcast from a conversation task to all subscribers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum ChatEvent {
    /// A message was appended to the transcript (user or assistant).
    #[serde(rename = "message")]
    Message(Message),

    /// Typing indicator flipped (true while an assistant reply is pending).
    #[serde(rename = "typing")]
    Typing(TypingData),

    /// Session state changed (idle / awaiting_reply) with transcript length.
    #[serde(rename = "status")]
    Status(SessionStatus),
}

impl ChatEvent {
    /// Serialize to the JSON envelope frontends expect:
    /// `{"event": "...", "data": {...}}`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
