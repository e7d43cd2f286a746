//! `ViewportPort` over the real `window`/`document`.

use wasm_bindgen_futures::JsFuture;
use web_sys::{ScrollBehavior, ScrollToOptions, Window};

use assistant_core::ports::{PageMetrics, ViewportPort};
use assistant_types::{AssistantError, Result};

pub struct BrowserViewport {
    window: Window,
}

impl BrowserViewport {
    pub fn new() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| AssistantError::JsInterop("No window object".to_string()))?;
        Ok(Self { window })
    }

    fn document_height(&self) -> f64 {
        self.window
            .document()
            .and_then(|d| d.document_element())
            .map(|el| el.scroll_height() as f64)
            .unwrap_or(0.0)
    }
}

impl ViewportPort for BrowserViewport {
    fn pathname(&self) -> String {
        self.window.location().pathname().unwrap_or_else(|e| {
            log::warn!("location.pathname unavailable: {:?}", e);
            "/".to_string()
        })
    }

    fn page_metrics(&self) -> PageMetrics {
        PageMetrics {
            scroll_top: self.window.scroll_y().unwrap_or(0.0),
            viewport_height: self
                .window
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or(0.0),
            document_height: self.document_height(),
        }
    }

    fn scroll_by(&self, dy: f64) {
        self.window.scroll_by_with_x_and_y(0.0, dy);
    }

    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn selection_text(&self) -> Option<String> {
        let selection = self.window.get_selection().ok().flatten()?;
        let text: String = selection.to_string().into();
        Some(text)
    }

    fn copy_to_clipboard(&self, text: &str) {
        let promise = self.window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("Clipboard write failed: {:?}", e);
            }
        });
    }
}
