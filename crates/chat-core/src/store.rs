//! Session store — every known chat session and which one is active.
//!
//! Sessions are kept newest-first; new sessions prepend. Each session
//! carries its own transcript so switching sessions restores the real
//! prior conversation rather than a placeholder.

use chat_types::message::Message;
use chat_types::session::{ChatSession, SessionId, SessionSummary};
use chat_types::{ChatError, Result};

#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Vec<ChatSession>,
    active: Option<SessionId>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with existing sessions (newest-first).
    pub fn with_sessions(sessions: Vec<ChatSession>) -> Self {
        Self {
            sessions,
            active: None,
        }
    }

    /// Create a session seeded by the first message of a new conversation
    /// and prepend it to the list. The caller trims and rejects empty text.
    pub fn create_session(&mut self, seed_text: &str) -> SessionId {
        let session = ChatSession::from_seed(seed_text);
        let id = session.id;
        self.sessions.insert(0, session);
        log::info!("created session {id}");
        id
    }

    /// Mark a session as active. Unknown ids are an error, not a silent
    /// no-op.
    pub fn set_active(&mut self, id: SessionId) -> Result<()> {
        if !self.sessions.iter().any(|s| s.id == id) {
            return Err(ChatError::SessionNotFound(id));
        }
        self.active = Some(id);
        Ok(())
    }

    /// Unset the active session (used when starting a new chat).
    pub fn clear_active(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<SessionId> {
        self.active
    }

    /// Sidebar listing, newest-first.
    pub fn summaries(&self) -> Vec<SessionSummary> {
        self.sessions.iter().map(ChatSession::summary).collect()
    }

    pub fn get(&self, id: SessionId) -> Result<&ChatSession> {
        self.sessions
            .iter()
            .find(|s| s.id == id)
            .ok_or(ChatError::SessionNotFound(id))
    }

    /// The stored transcript of a session, verbatim.
    pub fn messages(&self, id: SessionId) -> Result<&[Message]> {
        Ok(self.get(id)?.messages.as_slice())
    }

    /// Append a message to a session's stored transcript.
    pub fn append_message(&mut self, id: SessionId, message: Message) -> Result<()> {
        let session = self
            .sessions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(ChatError::SessionNotFound(id))?;
        session.messages.push(message);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
