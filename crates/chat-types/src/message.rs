use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type MessageId = Uuid;

/// Role in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A citation attached to an assistant message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub url: String,
    pub domain: String,
}

/// A single message in a conversation. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// Citations; only assistant messages carry them
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub sources: Vec<Source>,
    /// True when this entry records a failed assistant turn
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub failed: bool,
}

impl Message {
    fn build(role: Role, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: text.into(),
            timestamp: Utc::now(),
            sources: Vec::new(),
            failed: false,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::build(Role::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::build(Role::Assistant, text)
    }

    pub fn assistant_with_sources(text: impl Into<String>, sources: Vec<Source>) -> Self {
        Self {
            sources,
            ..Self::build(Role::Assistant, text)
        }
    }

    /// An assistant turn that failed. Kept in the transcript so the user
    /// sees the failure instead of a silently dropped reply.
    pub fn failed_turn(text: impl Into<String>) -> Self {
        Self {
            failed: true,
            ..Self::build(Role::Assistant, text)
        }
    }
}
