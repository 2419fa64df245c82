//! Chat exchanges with the canned assistant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored question/answer pair.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ChatEntry {
    pub id: String,
    pub message: String,
    pub reply: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatEntry {
    pub fn new(message: impl Into<String>, reply: impl Into<String>) -> Self {
        Self {
            id: format!("chat_{}", Uuid::new_v4()),
            message: message.into(),
            reply: reply.into(),
            timestamp: Utc::now(),
        }
    }

    /// The part returned to the client.
    pub fn reply(&self) -> ChatReply {
        ChatReply {
            reply: self.reply.clone(),
            timestamp: self.timestamp,
        }
    }
}

/// API view of a chat answer.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
    pub timestamp: DateTime<Utc>,
}
