//! Mailbox between async work and the UI frame loop.
//!
//! Single-threaded (WASM): request tasks, the health probe and DOM listeners
//! push `ChatEvent`s; the UI drains them once per frame. Draining coalesces
//! events where only the newest value matters (status, selection), while
//! turn outcomes are always delivered in order.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use assistant_types::event::ChatEvent;

/// Shared event bus, clone-cheap via Rc.
#[derive(Clone, Default)]
pub struct EventBus {
    queue: Rc<RefCell<VecDeque<ChatEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&self, event: ChatEvent) {
        self.queue.borrow_mut().push_back(event);
    }

    /// Take everything queued since the last frame.
    ///
    /// Superseded `StatusChanged` and `TextSelected` events are dropped; the
    /// survivor keeps the position of the newest one.
    pub fn drain(&self) -> Vec<ChatEvent> {
        let pending: Vec<ChatEvent> = self.queue.borrow_mut().drain(..).collect();
        let last_status = pending
            .iter()
            .rposition(|e| matches!(e, ChatEvent::StatusChanged { .. }));
        let last_selection = pending
            .iter()
            .rposition(|e| matches!(e, ChatEvent::TextSelected { .. }));

        pending
            .into_iter()
            .enumerate()
            .filter(|(i, e)| match e {
                ChatEvent::StatusChanged { .. } => Some(*i) == last_status,
                ChatEvent::TextSelected { .. } => Some(*i) == last_selection,
                _ => true,
            })
            .map(|(_, e)| e)
            .collect()
    }

    pub fn has_pending(&self) -> bool {
        !self.queue.borrow().is_empty()
    }
}
