//! Conversation controller — the live transcript and the turn state machine.
//!
//! One turn: `submit` appends the user message and moves to `Awaiting`;
//! `resolve` appends the assistant reply (or a surfaced failure) and moves
//! back to `Idle`. Every in-flight request is tagged with its request id
//! and the session it was issued for, so a reply can never land in a
//! conversation it wasn't requested for.

use chat_types::event::RequestId;
use chat_types::message::Message;
use chat_types::reply::{AssistantReply, AssistantRequest};
use chat_types::session::SessionId;
use chat_types::{ChatError, Result};

use crate::store::SessionStore;

/// Turn state. `Awaiting` means exactly one assistant request in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    Idle,
    Awaiting,
}

/// Tag recorded when a request is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingTurn {
    request_id: RequestId,
    session_id: SessionId,
}

/// A submitted turn, ready to hand to the assistant collaborator.
#[derive(Debug, Clone)]
pub struct TurnRequest {
    pub request_id: RequestId,
    pub session_id: SessionId,
    pub request: AssistantRequest,
}

pub struct ConversationController {
    messages: Vec<Message>,
    state: TurnState,
    pending: Option<PendingTurn>,
    next_request_id: RequestId,
}

impl ConversationController {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            state: TurnState::Idle,
            pending: None,
            next_request_id: 0,
        }
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn is_awaiting(&self) -> bool {
        self.state == TurnState::Awaiting
    }

    /// Transcript of the conversation currently in view.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Submit user input.
    ///
    /// Creates and activates a session when none is active, appends the
    /// user message to both the live transcript and the store, and returns
    /// the tagged request the caller dispatches to the collaborator.
    ///
    /// Errors: `EmptyInput` for whitespace-only text, `Busy` while a
    /// request is already in flight. Neither changes any state.
    pub fn submit(&mut self, store: &mut SessionStore, text: &str) -> Result<TurnRequest> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyInput);
        }
        if self.state == TurnState::Awaiting {
            return Err(ChatError::Busy);
        }

        let session_id = match store.active() {
            Some(id) => id,
            None => {
                let id = store.create_session(text);
                store.set_active(id)?;
                id
            }
        };

        let message = Message::user(text);
        store.append_message(session_id, message.clone())?;
        self.messages.push(message);

        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.pending = Some(PendingTurn {
            request_id,
            session_id,
        });
        self.state = TurnState::Awaiting;
        log::debug!("turn {request_id} submitted for session {session_id}");

        Ok(TurnRequest {
            request_id,
            session_id,
            request: AssistantRequest {
                prompt: text.to_string(),
                history: self.messages.clone(),
            },
        })
    }

    /// Apply the outcome of an assistant request.
    ///
    /// A result is stale when its id no longer matches the pending request
    /// or the tagged session is no longer active; stale results are
    /// discarded. Returns true when the reply was applied.
    pub fn resolve(
        &mut self,
        store: &mut SessionStore,
        request_id: RequestId,
        reply: Result<AssistantReply>,
    ) -> bool {
        let Some(pending) = self.pending else {
            log::debug!("discarding reply for request {request_id}: nothing pending");
            return false;
        };
        if pending.request_id != request_id || store.active() != Some(pending.session_id) {
            log::debug!("discarding stale reply for request {request_id}");
            return false;
        }

        self.pending = None;
        self.state = TurnState::Idle;

        let message = match reply {
            Ok(reply) => Message::assistant_with_sources(reply.content, reply.sources),
            Err(e) => {
                log::warn!("assistant request {request_id} failed: {e}");
                Message::failed_turn(e.to_string())
            }
        };
        if let Err(e) = store.append_message(pending.session_id, message.clone()) {
            // Tag matched the active session above, so this can only fire
            // if the session was removed between the checks.
            log::error!("failed to persist reply: {e}");
        }
        self.messages.push(message);
        true
    }

    /// Start a fresh conversation: empty transcript, no active session.
    ///
    /// Valid in any state. A reply still in flight loses its matching tag
    /// and will be discarded when it resolves.
    pub fn start_new_chat(&mut self, store: &mut SessionStore) {
        self.messages.clear();
        self.pending = None;
        self.state = TurnState::Idle;
        store.clear_active();
    }

    /// Switch to a stored session, restoring its transcript verbatim.
    ///
    /// A pending request keeps its tag only when it was issued for the
    /// session being loaded; its reply still belongs to this conversation.
    /// Otherwise the tag is dropped and the eventual reply is discarded as
    /// stale.
    pub fn load_session(&mut self, store: &mut SessionStore, id: SessionId) -> Result<()> {
        store.set_active(id)?;
        self.messages = store.messages(id)?.to_vec();
        if self.pending.map_or(true, |p| p.session_id != id) {
            self.pending = None;
            self.state = TurnState::Idle;
        }
        log::info!("loaded session {id}");
        Ok(())
    }
}

impl Default for ConversationController {
    fn default() -> Self {
        Self::new()
    }
}
