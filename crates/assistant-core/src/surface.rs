//! Chat surface: the widget's state machine.
//!
//! `Idle → AwaitingResponse → Idle`. A submission is split in two halves so
//! the UI never blocks:
//! 1. `begin_submit` guards, appends the user message optimistically and
//!    returns the request to run;
//! 2. the request runs off-frame (`ChatClient::dispatch`), and its outcome
//!    comes back through `apply`.
//!
//! Each turn carries an id, and at most one is outstanding. "New chat"
//! during a turn abandons it: loading stays set until its outcome arrives,
//! and that outcome is then swallowed instead of landing in the fresh
//! conversation.

use assistant_types::{
    api::{BackendStatus, ChatRequest, ReplySource},
    event::ChatEvent,
    i18n::Language,
    message::Message,
    session::ChatState,
};

use crate::selection::normalize_selection;
use crate::store::{ChatAction, ChatStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfacePhase {
    Idle,
    AwaitingResponse { turn_id: u64 },
}

/// A submitted turn that still needs an answer
#[derive(Debug, Clone, PartialEq)]
pub struct PendingTurn {
    pub turn_id: u64,
    pub request: ChatRequest,
}

/// What `apply` did with an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// An assistant message was appended
    MessageAppended,
    /// State changed without a new message
    Updated,
    /// Stale or no-op event
    Ignored,
}

pub struct ChatSurface {
    store: ChatStore,
    language: Language,
    phase: SurfacePhase,
    status: BackendStatus,
    turn_counter: u64,
    /// Outstanding turn whose conversation was cleared
    abandoned_turn: Option<u64>,
}

impl ChatSurface {
    pub fn new(language: Language) -> Self {
        Self {
            store: ChatStore::new(),
            language,
            phase: SurfacePhase::Idle,
            status: BackendStatus::Checking,
            turn_counter: 0,
            abandoned_turn: None,
        }
    }

    pub fn state(&self) -> &ChatState {
        self.store.state()
    }

    pub fn phase(&self) -> SurfacePhase {
        self.phase
    }

    pub fn status(&self) -> BackendStatus {
        self.status
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn is_awaiting(&self) -> bool {
        matches!(self.phase, SurfacePhase::AwaitingResponse { .. })
    }

    /// Awaiting a turn that belongs to a cleared conversation
    pub fn is_abandoned(&self) -> bool {
        self.abandoned_turn.is_some()
    }

    /// Whether `input` would be accepted right now
    pub fn can_submit(&self, input: &str) -> bool {
        !input.trim().is_empty() && !self.is_awaiting() && !self.state().is_loading
    }

    /// Start a turn. Returns `None`, touching nothing, for blank input or
    /// while another turn is outstanding.
    pub fn begin_submit(&mut self, input: &str) -> Option<PendingTurn> {
        if !self.can_submit(input) {
            return None;
        }
        let text = input.trim().to_string();

        self.turn_counter += 1;
        let turn_id = self.turn_counter;

        let state = self.store.state();
        let request = ChatRequest::new(text.clone(), self.language)
            .with_session(state.session_id.clone())
            .with_selection(state.selected_text.clone());

        self.store.dispatch(ChatAction::AddMessage(Message::user(text)));
        self.store.dispatch(ChatAction::SetLoading(true));
        self.phase = SurfacePhase::AwaitingResponse { turn_id };
        log::debug!("Turn {} submitted", turn_id);

        Some(PendingTurn { turn_id, request })
    }

    /// Fold an async outcome into the session.
    pub fn apply(&mut self, event: ChatEvent) -> ApplyOutcome {
        match event {
            ChatEvent::ReplyReceived { turn_id, reply } => {
                if !self.is_outstanding(turn_id) {
                    log::debug!("Dropping reply for stale turn {}", turn_id);
                    return ApplyOutcome::Ignored;
                }
                self.status = match reply.source {
                    ReplySource::Backend => BackendStatus::Connected,
                    ReplySource::Mock => BackendStatus::Disconnected,
                };
                if self.abandoned_turn == Some(turn_id) {
                    log::debug!("Discarding reply for abandoned turn {}", turn_id);
                    self.finish_turn();
                    return ApplyOutcome::Updated;
                }
                self.store
                    .dispatch(ChatAction::AddMessage(Message::assistant(reply.response)));
                self.store
                    .dispatch(ChatAction::SetSessionId(Some(reply.session_id)));
                self.store.dispatch(ChatAction::SetSelectedText(None));
                self.finish_turn();
                ApplyOutcome::MessageAppended
            }
            ChatEvent::SendFailed { turn_id, message } => {
                if !self.is_outstanding(turn_id) {
                    log::debug!("Dropping failure for stale turn {}: {}", turn_id, message);
                    return ApplyOutcome::Ignored;
                }
                if self.abandoned_turn == Some(turn_id) {
                    log::debug!("Abandoned turn {} failed: {}", turn_id, message);
                    self.finish_turn();
                    return ApplyOutcome::Updated;
                }
                let error_text = self.language.strings().error;
                self.store
                    .dispatch(ChatAction::AddMessage(Message::assistant(error_text)));
                self.finish_turn();
                ApplyOutcome::MessageAppended
            }
            ChatEvent::StatusChanged { status } => {
                if status == self.status {
                    return ApplyOutcome::Ignored;
                }
                self.status = status;
                ApplyOutcome::Updated
            }
            ChatEvent::TextSelected { text } => {
                if self.capture_selection(&text) {
                    ApplyOutcome::Updated
                } else {
                    ApplyOutcome::Ignored
                }
            }
        }
    }

    /// Remember a page selection for the next submission. Blank selections
    /// leave the previous one in place.
    pub fn capture_selection(&mut self, raw: &str) -> bool {
        match normalize_selection(raw) {
            Some(text) => {
                self.store.dispatch(ChatAction::SetSelectedText(Some(text)));
                true
            }
            None => false,
        }
    }

    pub fn clear_selection(&mut self) {
        self.store.dispatch(ChatAction::SetSelectedText(None));
    }

    /// Drop the conversation and session id. An outstanding turn stays
    /// outstanding, so submissions remain blocked until it resolves, but
    /// its outcome will not be shown.
    pub fn new_chat(&mut self) {
        if let SurfacePhase::AwaitingResponse { turn_id } = self.phase {
            log::debug!("Abandoning turn {}", turn_id);
            self.abandoned_turn = Some(turn_id);
        }
        self.store.dispatch(ChatAction::ClearMessages);
        self.store.dispatch(ChatAction::SetSessionId(None));
    }

    fn is_outstanding(&self, turn_id: u64) -> bool {
        self.phase == SurfacePhase::AwaitingResponse { turn_id }
    }

    fn finish_turn(&mut self) {
        self.store.dispatch(ChatAction::SetLoading(false));
        self.phase = SurfacePhase::Idle;
        self.abandoned_turn = None;
    }
}
