//! View-only state: the input draft and panel visibility.
//! Conversation data itself lives in chat-core; panels receive it by
//! reference and hand mutations back as `UiAction`s.

use chat_types::session::SessionId;

/// Rows the input editor shows, as a function of the draft content.
pub const INPUT_MIN_ROWS: usize = 1;
pub const INPUT_MAX_ROWS: usize = 5;

/// State owned by the view layer
pub struct UiState {
    /// Current draft text
    pub input_text: String,
    /// Whether the history sidebar is open
    pub history_open: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            input_text: String::new(),
            history_open: false,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

/// What a panel asks the app to do this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    /// Send the draft to the conversation controller
    Submit(String),
    /// Clear the conversation and deactivate the session
    NewChat,
    /// Switch to a stored session
    LoadSession(SessionId),
}

/// Editor height grows with the draft, clamped to the row band.
pub fn input_rows(draft: &str) -> usize {
    draft.lines().count().clamp(INPUT_MIN_ROWS, INPUT_MAX_ROWS)
}

/// Drop the newline the editor inserted just before `cursor` (a char
/// index), if any. Enter both edits the draft and submits it; this undoes
/// the edit wherever the cursor sits, not only at the end.
pub fn strip_submit_newline(draft: &str, cursor: usize) -> String {
    if cursor == 0 {
        return draft.to_string();
    }
    let mut chars: Vec<char> = draft.chars().collect();
    if cursor <= chars.len() && chars[cursor - 1] == '\n' {
        chars.remove(cursor - 1);
    }
    chars.into_iter().collect()
}
