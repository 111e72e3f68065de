use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::message::Message;

pub type SessionId = Uuid;

/// Titles derived from the first user message are cut at this many characters.
pub const TITLE_MAX_CHARS: usize = 50;

/// A single conversation thread with its own message history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: SessionId,
    pub title: String,
    /// Full text of the message that started the session
    pub preview: String,
    pub created_at: DateTime<Utc>,
    /// The session's stored transcript, restored verbatim on load
    pub messages: Vec<Message>,
}

impl ChatSession {
    /// Create a session from the first user message of a new conversation.
    pub fn from_seed(seed_text: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: derive_title(seed_text),
            preview: seed_text.to_string(),
            created_at: Utc::now(),
            messages: Vec::new(),
        }
    }

    /// Live message count; tracks the stored transcript.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            id: self.id,
            title: self.title.clone(),
            preview: self.preview.clone(),
            created_at: self.created_at,
            message_count: self.message_count(),
        }
    }
}

/// Summary of a session for the history sidebar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: SessionId,
    pub title: String,
    pub preview: String,
    pub created_at: DateTime<Utc>,
    pub message_count: usize,
}

/// First `TITLE_MAX_CHARS` characters of the seed text, with a `...`
/// marker when anything was cut off.
pub fn derive_title(seed_text: &str) -> String {
    let mut chars = seed_text.chars();
    let head: String = chars.by_ref().take(TITLE_MAX_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
