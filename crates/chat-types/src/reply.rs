use serde::{Deserialize, Serialize};

use crate::message::{Message, Source};

/// What the conversation engine hands the assistant collaborator.
#[derive(Debug, Clone)]
pub struct AssistantRequest {
    /// The latest user message
    pub prompt: String,
    /// The full conversation so far, latest user message included
    pub history: Vec<Message>,
}

/// A successful reply from the assistant collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantReply {
    pub content: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub sources: Vec<Source>,
}

impl AssistantReply {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            sources: Vec::new(),
        }
    }
}
