//! Textbook Assistant — WASM entry point.
//!
//! This crate is the composition root (DI wiring layer).
//! It assembles the browser adapters and hands them to the egui UI.

mod app;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use assistant_types::{AssistantError, Result};

const CANVAS_ID: &str = "assistant_canvas";

/// WASM entry point, called from the host page
#[wasm_bindgen(start)]
pub async fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Textbook assistant starting...");

    let canvas = match find_canvas() {
        Ok(canvas) => canvas,
        Err(e) => {
            log::error!("Cannot mount assistant: {}", e);
            return;
        }
    };

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async move {
        let started = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(app::AssistantApp::new(cc)))),
            )
            .await;
        if let Err(e) = started {
            log::error!("Failed to start eframe: {:?}", e);
        }
    });
}

fn find_canvas() -> Result<HtmlCanvasElement> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| AssistantError::JsInterop("No document".to_string()))?;
    document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| {
            AssistantError::JsInterop(format!("No canvas element with id '{}'", CANVAS_ID))
        })?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| AssistantError::JsInterop(format!("#{} is not a canvas", CANVAS_ID)))
}
