//! Session state store: typed actions and a pure reducer.
//!
//! Every action is an `old state → new state` transition. Messages are only
//! ever appended; `ClearMessages` is the one action that removes any.

use assistant_types::{message::Message, session::ChatState};

#[derive(Debug, Clone, PartialEq)]
pub enum ChatAction {
    AddMessage(Message),
    SetLoading(bool),
    SetSessionId(Option<String>),
    SetSelectedText(Option<String>),
    ClearMessages,
}

pub fn reduce(mut state: ChatState, action: ChatAction) -> ChatState {
    match action {
        ChatAction::AddMessage(message) => state.messages.push(message),
        ChatAction::SetLoading(loading) => state.is_loading = loading,
        ChatAction::SetSessionId(id) => state.session_id = id,
        ChatAction::SetSelectedText(text) => state.selected_text = text,
        ChatAction::ClearMessages => state.messages.clear(),
    }
    state
}

/// Owner of the current `ChatState`; all mutation goes through `dispatch`.
#[derive(Debug, Default)]
pub struct ChatStore {
    state: ChatState,
}

impl ChatStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ChatState {
        &self.state
    }

    pub fn dispatch(&mut self, action: ChatAction) {
        log::trace!("dispatch {}", action_name(&action));
        let current = std::mem::take(&mut self.state);
        self.state = reduce(current, action);
    }
}

fn action_name(action: &ChatAction) -> &'static str {
    match action {
        ChatAction::AddMessage(_) => "AddMessage",
        ChatAction::SetLoading(_) => "SetLoading",
        ChatAction::SetSessionId(_) => "SetSessionId",
        ChatAction::SetSelectedText(_) => "SetSelectedText",
        ChatAction::ClearMessages => "ClearMessages",
    }
}
