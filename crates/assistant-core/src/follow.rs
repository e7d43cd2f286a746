//! Message-list scroll following.
//!
//! New messages scroll into view only if the reader was already near the
//! bottom; someone reading older history keeps their position and gets a
//! "scroll to bottom" button instead.

/// Geometry of the message list, in px
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ListMetrics {
    pub scroll_top: f32,
    pub scroll_height: f32,
    pub client_height: f32,
}

impl ListMetrics {
    fn hidden_below(&self) -> f32 {
        self.scroll_height - self.client_height - self.scroll_top
    }
}

#[derive(Debug, Clone)]
pub struct ScrollFollow {
    threshold: f32,
    near_bottom: bool,
    show_jump: bool,
    scroll_requested: bool,
}

impl ScrollFollow {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            near_bottom: true,
            show_jump: false,
            scroll_requested: false,
        }
    }

    /// Record where the list is; call on every scroll or frame.
    pub fn observe(&mut self, metrics: ListMetrics) {
        let hidden = metrics.hidden_below();
        self.near_bottom = hidden <= self.threshold;
        self.show_jump = hidden > self.threshold;
    }

    /// A message was appended after the last `observe`.
    pub fn on_message_appended(&mut self) {
        if self.near_bottom {
            self.scroll_requested = true;
        } else {
            self.show_jump = true;
        }
    }

    /// The "scroll to bottom" button was pressed.
    pub fn jump_to_bottom(&mut self) {
        self.scroll_requested = true;
        self.show_jump = false;
    }

    /// The list was cleared; the next message starts at the top again.
    pub fn reset(&mut self) {
        self.near_bottom = true;
        self.show_jump = false;
        self.scroll_requested = false;
    }

    /// Consume a pending scroll request.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_requested)
    }

    pub fn is_near_bottom(&self) -> bool {
        self.near_bottom
    }

    pub fn show_jump_button(&self) -> bool {
        self.show_jump
    }
}
