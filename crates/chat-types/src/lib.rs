pub mod error;
pub mod event;
pub mod message;
pub mod reply;
pub mod session;


pub use error::ChatError;
pub type Result<T> = std::result::Result<T, ChatError>;
