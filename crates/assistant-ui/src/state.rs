//! UI-level state that drives rendering.
//!
//! Wraps the core `ChatSurface` with the bits only the widget cares about:
//! the input buffer, message-list following, the launcher and the current
//! route. Async outcomes are folded in each frame by draining the EventBus.

use assistant_core::follow::ScrollFollow;
use assistant_core::launcher::{Launcher, PageContext};
use assistant_core::selection::preview;
use assistant_core::surface::{ApplyOutcome, ChatSurface, PendingTurn};
use assistant_types::{
    config::{AssistantConfig, RoutesConfig},
    event::ChatEvent,
    i18n::{Language, UiStrings},
};

/// State visible to UI panels
pub struct UiState {
    pub surface: ChatSurface,
    /// Input field content
    pub input_text: String,
    pub follow: ScrollFollow,
    pub launcher: Launcher,
    pub page: PageContext,
    /// Compact mode only: whether the body is shown under the header
    pub expanded: bool,
    compact: bool,
    preview_chars: usize,
}

impl UiState {
    pub fn new(config: &AssistantConfig, language: Language, pathname: &str) -> Self {
        Self {
            surface: ChatSurface::new(language),
            input_text: String::new(),
            follow: ScrollFollow::new(config.chat.follow_threshold_px),
            launcher: Launcher::new(false),
            page: PageContext::new(&config.routes, pathname),
            expanded: !config.chat.compact,
            compact: config.chat.compact,
            preview_chars: config.chat.selection_preview_chars,
        }
    }

    pub fn strings(&self) -> &'static UiStrings {
        self.surface.language().strings()
    }

    pub fn is_compact(&self) -> bool {
        self.compact
    }

    pub fn is_busy(&self) -> bool {
        self.surface.is_awaiting()
    }

    /// Fold drained events into the surface. Returns `true` if anything
    /// visible changed.
    pub fn process_events(&mut self, events: Vec<ChatEvent>) -> bool {
        let mut changed = false;
        for event in events {
            match self.surface.apply(event) {
                ApplyOutcome::MessageAppended => {
                    self.follow.on_message_appended();
                    self.launcher.notice_reply();
                    changed = true;
                }
                ApplyOutcome::Updated => changed = true,
                ApplyOutcome::Ignored => {}
            }
        }
        changed
    }

    /// Take the input buffer as a new turn. The buffer is only cleared if
    /// the surface accepted it.
    pub fn take_submission(&mut self) -> Option<PendingTurn> {
        let turn = self.surface.begin_submit(&self.input_text)?;
        self.input_text.clear();
        self.follow.on_message_appended();
        Some(turn)
    }

    pub fn new_chat(&mut self) {
        self.surface.new_chat();
        self.follow.reset();
    }

    /// Truncated captured selection, for the preview strip
    pub fn selection_preview(&self) -> Option<String> {
        self.surface
            .state()
            .selected_text
            .as_deref()
            .map(|text| preview(text, self.preview_chars))
    }

    /// Route changed under us. Returns `true` if it actually moved.
    pub fn navigate(&mut self, routes: &RoutesConfig, pathname: &str) -> bool {
        if !self.page.update(routes, pathname) {
            return false;
        }
        if !self.page.launcher_visible {
            self.launcher.close();
        }
        true
    }
}
