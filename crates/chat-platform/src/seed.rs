//! Demo chat history seeded at startup.
//!
//! Each session carries a real stored transcript, so picking one from the
//! sidebar restores an actual conversation.

use chat_types::message::Message;
use chat_types::session::ChatSession;
use chrono::{Duration, Utc};
use uuid::Uuid;

fn demo_session(title: &str, preview: &str, answer: &str, days_ago: i64) -> ChatSession {
    ChatSession {
        id: Uuid::new_v4(),
        title: title.to_string(),
        preview: preview.to_string(),
        created_at: Utc::now() - Duration::days(days_ago),
        messages: vec![Message::user(preview), Message::assistant(answer)],
    }
}

/// Three pre-existing conversations, newest-first.
pub fn demo_sessions() -> Vec<ChatSession> {
    vec![
        demo_session(
            "Python data analysis tips",
            "How can I analyze large datasets efficiently?",
            "For large datasets, read in chunks, store in columnar formats \
             like Parquet, and prefer vectorized operations over row-by-row \
             loops. If a single machine stops being enough, libraries such \
             as Polars or Dask parallelize the same workflows.",
            1,
        ),
        demo_session(
            "Machine Learning basics",
            "Explain neural networks in simple terms",
            "A neural network is layers of simple units, each taking a \
             weighted sum of its inputs and passing it through a nonlinearity. \
             Training nudges the weights so the network's outputs move closer \
             to the examples it is shown.",
            2,
        ),
        demo_session(
            "React best practices",
            "What are the latest React patterns?",
            "Current practice favors function components with hooks, \
             colocating state with the components that use it, and server \
             components for data-heavy pages. Reach for context sparingly \
             and derive state instead of duplicating it.",
            3,
        ),
    ]
}
