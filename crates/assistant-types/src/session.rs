use serde::{Deserialize, Serialize};
use crate::message::Message;

/// One tab's conversation.
///
/// Lives only in memory; a page unload drops it and "new chat" resets it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatState {
    pub session_id: Option<String>,
    pub messages: Vec<Message>,
    pub is_loading: bool,
    pub selected_text: Option<String>,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
