//! Runs assistant requests off the UI thread.
//!
//! One thread per in-flight request: drive the port future to completion
//! and hand the tagged result back through the event bus. The controller's
//! stale-tag check decides whether the result still lands, so a thread
//! that outlives its conversation is harmless.

use std::sync::Arc;

use chat_core::controller::TurnRequest;
use chat_core::event_bus::EventBus;
use chat_core::ports::AssistantPort;
use chat_types::event::ChatEvent;

/// Send a submitted turn to the assistant collaborator in the background.
/// The reply arrives on the bus as `ChatEvent::ReplyReady`.
pub fn dispatch(port: Arc<dyn AssistantPort>, turn: TurnRequest, bus: EventBus) {
    std::thread::spawn(move || {
        let reply = futures::executor::block_on(port.respond(turn.request));
        bus.emit(ChatEvent::ReplyReady {
            request_id: turn.request_id,
            reply,
        });
    });
}
