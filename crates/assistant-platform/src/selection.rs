//! Document mouse-up listener that reports text selections on the bus.
//!
//! The listener is attached for as long as the returned handle lives.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, MouseEvent};

use assistant_core::event_bus::EventBus;
use assistant_core::ports::ViewportPort;
use assistant_core::selection::normalize_selection;
use assistant_types::{AssistantError, Result, event::ChatEvent};

const EVENT: &str = "mouseup";

pub struct SelectionListener {
    document: Document,
    callback: Closure<dyn FnMut(MouseEvent)>,
}

impl SelectionListener {
    pub fn attach(viewport: Rc<dyn ViewportPort>, bus: EventBus) -> Result<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| AssistantError::JsInterop("No document".to_string()))?;

        let callback = Closure::wrap(Box::new(move |_event: MouseEvent| {
            let Some(raw) = viewport.selection_text() else {
                return;
            };
            if let Some(text) = normalize_selection(&raw) {
                bus.emit(ChatEvent::TextSelected { text });
            }
        }) as Box<dyn FnMut(MouseEvent)>);

        document
            .add_event_listener_with_callback(EVENT, callback.as_ref().unchecked_ref())
            .map_err(|e| AssistantError::JsInterop(format!("{:?}", e)))?;
        log::debug!("Selection listener attached");

        Ok(Self { document, callback })
    }
}

impl Drop for SelectionListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .document
            .remove_event_listener_with_callback(EVENT, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("Failed to detach selection listener: {:?}", e);
        }
    }
}
