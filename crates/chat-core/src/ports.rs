//! Port traits — the boundary between the conversation engine and the
//! outside world.
//!
//! The trait is defined here in `chat-core`; implementations live in
//! `chat-platform`. The engine never knows how replies are produced, so a
//! real backend can replace the stub without touching conversation logic.

use async_trait::async_trait;
use chat_types::reply::{AssistantReply, AssistantRequest};
use chat_types::Result;

/// The assistant collaborator: one async call per turn.
///
/// `Send + Sync` so the app can drive it on a background thread while the
/// UI keeps rendering. Failures map to `ChatError::Response`.
#[async_trait]
pub trait AssistantPort: Send + Sync {
    async fn respond(&self, request: AssistantRequest) -> Result<AssistantReply>;
}
