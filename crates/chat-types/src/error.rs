use thiserror::Error;

use crate::session::SessionId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// Submission was empty or whitespace-only
    #[error("Message is empty")]
    EmptyInput,

    /// A reply is already in flight for this conversation
    #[error("A response is already in progress")]
    Busy,

    #[error("Session not found: {0}")]
    SessionNotFound(SessionId),

    /// The assistant collaborator failed to produce a reply
    #[error("Response error: {0}")]
    Response(String),
}
