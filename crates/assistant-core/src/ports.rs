//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `assistant-core` (pure Rust).
//! Implementations live in `assistant-platform` (browser adapters) and in
//! the core itself for the offline responder.
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use assistant_types::{
    Result,
    api::{ChatRequest, ChatResponse},
};

// ─── Chat Backend Port ───────────────────────────────────────

#[async_trait(?Send)]
pub trait ChatBackendPort {
    /// Answer one chat turn
    async fn chat(&self, req: &ChatRequest) -> Result<ChatResponse>;

    /// Cheap connectivity check; `Ok` means the backend answered 2xx
    async fn health(&self) -> Result<()>;

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}

// ─── Clock Port ──────────────────────────────────────────────

/// Time and jitter source
#[async_trait(?Send)]
pub trait ClockPort {
    /// Wall-clock milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;

    /// Monotonic high-resolution milliseconds (page-relative)
    fn monotonic_ms(&self) -> f64;

    /// Uniform sample in `[0, 1)`
    fn random_unit(&self) -> f64;

    /// Resolve after `ms` without blocking the event loop
    async fn sleep(&self, ms: u64);
}

// ─── Viewport Port ───────────────────────────────────────────

/// Scroll geometry of the host document, in CSS px
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageMetrics {
    pub scroll_top: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl PageMetrics {
    pub fn distance_to_bottom(&self) -> f64 {
        self.document_height - (self.scroll_top + self.viewport_height)
    }
}

/// The browser globals the widget touches: location, window scroll,
/// text selection and clipboard.
pub trait ViewportPort {
    fn pathname(&self) -> String;

    fn page_metrics(&self) -> PageMetrics;

    fn scroll_by(&self, dy: f64);

    fn scroll_to_top(&self);

    /// Current document selection as text, if any
    fn selection_text(&self) -> Option<String>;

    /// Fire-and-forget clipboard write
    fn copy_to_clipboard(&self, text: &str);
}
