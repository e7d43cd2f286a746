//! Host-page configuration.
//!
//! The embedding page may carry
//! `<meta name="assistant-config" content="{...json...}">` with a partial
//! `AssistantConfig`. Language comes from the config if set, else from
//! `<html lang>`, else English.

use wasm_bindgen::JsCast;
use web_sys::HtmlMetaElement;

use assistant_types::{config::AssistantConfig, i18n::Language};

pub const META_SELECTOR: &str = "meta[name=\"assistant-config\"]";

#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub config: AssistantConfig,
    pub language: Language,
}

/// Read configuration from the current document.
pub fn load_page_config() -> PageConfig {
    let document = gloo_utils::document();

    let meta = document
        .query_selector(META_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlMetaElement>().ok())
        .map(|meta| meta.content());

    let html_lang = document
        .document_element()
        .and_then(|el| el.get_attribute("lang"));

    resolve_config(meta.as_deref(), html_lang.as_deref())
}

/// Combine the raw meta content and `<html lang>` into a usable config.
/// Invalid JSON is logged and replaced by defaults.
pub fn resolve_config(meta: Option<&str>, html_lang: Option<&str>) -> PageConfig {
    let config = match meta.map(str::trim).filter(|s| !s.is_empty()) {
        Some(json) => match AssistantConfig::from_json(json) {
            Ok(config) => {
                log::info!("Config loaded from host page");
                config
            }
            Err(e) => {
                log::warn!("Ignoring host-page config ({}), using defaults", e);
                AssistantConfig::default()
            }
        },
        None => {
            log::info!("No host-page config, using defaults");
            AssistantConfig::default()
        }
    };

    let language = config
        .language
        .or_else(|| html_lang.and_then(Language::from_code))
        .unwrap_or_default();

    PageConfig { config, language }
}
