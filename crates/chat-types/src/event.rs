use crate::error::ChatError;
use crate::reply::AssistantReply;

/// Identifier tagging one in-flight assistant request.
pub type RequestId = u64;

/// Events delivered back to the UI thread.
/// The app drains these from the event bus on each frame.
#[derive(Debug, Clone)]
pub enum ChatEvent {
    /// An assistant request finished, successfully or not.
    ReplyReady {
        request_id: RequestId,
        reply: Result<AssistantReply, ChatError>,
    },
}
