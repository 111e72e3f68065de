//! Mock assistant responder.
//!
//! Stands in for a real backend: waits a fixed delay, then answers with a
//! canned reply and two demo sources. A real integration replaces this by
//! implementing `AssistantPort` against an actual service.

use std::time::Duration;

use async_trait::async_trait;
use chat_core::ports::AssistantPort;
use chat_types::message::Source;
use chat_types::reply::{AssistantReply, AssistantRequest};
use chat_types::Result;

/// Default thinking delay before the canned reply arrives.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(2000);

pub struct MockResponder {
    delay: Duration,
}

impl MockResponder {
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_REPLY_DELAY)
    }

    /// A responder that answers immediately, for tests.
    pub fn instant() -> Self {
        Self::with_delay(Duration::ZERO)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockResponder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssistantPort for MockResponder {
    async fn respond(&self, request: AssistantRequest) -> Result<AssistantReply> {
        // Runs on the dispatch thread, never the UI thread, so a blocking
        // sleep models the delay well enough.
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }

        log::debug!(
            "mock reply for prompt ({} messages of context)",
            request.history.len()
        );
        Ok(AssistantReply {
            content: format!(
                "I understand you're asking about \"{}\". This is a demo response \
                 showing how the AI would typically provide a detailed, helpful \
                 answer with proper formatting and structure. The response would \
                 include relevant information, sources, and clear explanations.",
                request.prompt
            ),
            sources: vec![
                Source {
                    title: "Example Source 1".to_string(),
                    url: "#".to_string(),
                    domain: "example.com".to_string(),
                },
                Source {
                    title: "Example Source 2".to_string(),
                    url: "#".to_string(),
                    domain: "demo.org".to_string(),
                },
            ],
        })
    }
}
