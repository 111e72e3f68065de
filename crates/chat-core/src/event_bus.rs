//! Simple event bus for decoupled communication between the dispatch
//! thread and the UI.
//!
//! Events are buffered and drained by the UI on each frame. Replies cross
//! a thread boundary, so the queue sits behind a Mutex.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use chat_types::event::ChatEvent;

/// Shared event bus — clone-cheap via Arc.
#[derive(Clone)]
pub struct EventBus {
    inner: Arc<Mutex<VecDeque<ChatEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Publish an event. Called from the dispatch thread.
    pub fn emit(&self, event: ChatEvent) {
        self.queue().push_back(event);
    }

    /// Drain all pending events. Called by the app on each frame.
    pub fn drain(&self) -> Vec<ChatEvent> {
        self.queue().drain(..).collect()
    }

    /// Check if there are pending events (useful for egui repaint triggers).
    pub fn has_pending(&self) -> bool {
        !self.queue().is_empty()
    }

    fn queue(&self) -> std::sync::MutexGuard<'_, VecDeque<ChatEvent>> {
        // A poisoned lock means a dispatch thread panicked mid-emit; the
        // queue itself is still a valid VecDeque.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
