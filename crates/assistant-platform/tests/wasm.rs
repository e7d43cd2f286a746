//! WASM-target tests for assistant-platform (Node.js runtime).
//!
//! Covers the pieces that do not need a DOM: response decoding, endpoint
//! URLs, host-config resolution and the clock, under
//! wasm32-unknown-unknown via `wasm-pack test --node`.
//!
//! Viewport, selection and auto-scroll adapters need a browser page.

use wasm_bindgen_test::*;

use assistant_core::ports::ClockPort;
use assistant_platform::config::resolve_config;
use assistant_platform::http::{parse_chat_response, HttpChatBackend};
use assistant_platform::BrowserClock;
use assistant_types::config::BackendConfig;
use assistant_types::i18n::Language;
use assistant_types::AssistantError;

// ─── Response Decoding Tests ─────────────────────────────

#[wasm_bindgen_test]
fn parse_minimal_chat_response() {
    let resp = parse_chat_response(r#"{"response":"hi","session_id":"s-1"}"#).unwrap();
    assert_eq!(resp.response, "hi");
    assert_eq!(resp.session_id, "s-1");
    assert!(resp.sources.is_empty());
}

#[wasm_bindgen_test]
fn parse_full_chat_response() {
    let body = r#"{
        "response": "ZMP keeps the robot upright",
        "session_id": "abc",
        "timestamp": "2024-01-01T00:00:00",
        "sources": [{"title": "Balance"}]
    }"#;
    let resp = parse_chat_response(body).unwrap();
    assert_eq!(resp.timestamp.as_deref(), Some("2024-01-01T00:00:00"));
    assert_eq!(resp.sources.len(), 1);
}

#[wasm_bindgen_test]
fn parse_rejects_missing_fields() {
    let err = parse_chat_response(r#"{"answer":"hi"}"#).unwrap_err();
    assert!(matches!(err, AssistantError::MalformedResponse(_)));
}

#[wasm_bindgen_test]
fn parse_rejects_non_json() {
    let err = parse_chat_response("<html>502 Bad Gateway</html>").unwrap_err();
    assert!(matches!(err, AssistantError::MalformedResponse(_)));
    assert!(!err.is_unreachable());
}

// ─── Endpoint Tests ──────────────────────────────────────

#[wasm_bindgen_test]
fn http_backend_default_urls() {
    let backend = HttpChatBackend::new(&BackendConfig::default());
    assert_eq!(backend.chat_url(), "http://localhost:8000/api/v1/chat");
    assert_eq!(backend.health_url(), "http://localhost:8000/api/v1/chat/health");
}

#[wasm_bindgen_test]
fn http_backend_custom_base_with_trailing_slash() {
    let config = BackendConfig {
        base_url: "https://book.example.org/api/v1/".to_string(),
        ..BackendConfig::default()
    };
    let backend = HttpChatBackend::new(&config);
    assert_eq!(backend.chat_url(), "https://book.example.org/api/v1/chat");
}

// ─── Host Config Tests ───────────────────────────────────

#[wasm_bindgen_test]
fn config_defaults_without_meta() {
    let page = resolve_config(None, None);
    assert_eq!(page.language, Language::En);
    assert_eq!(page.config.auto_scroll.default_speed, 50);
}

#[wasm_bindgen_test]
fn config_language_from_html_lang() {
    let page = resolve_config(None, Some("ur-PK"));
    assert_eq!(page.language, Language::Ur);
}

#[wasm_bindgen_test]
fn config_language_from_meta_wins() {
    let page = resolve_config(Some(r#"{"language":"en"}"#), Some("ur"));
    assert_eq!(page.language, Language::En);
}

#[wasm_bindgen_test]
fn config_partial_override() {
    let page = resolve_config(
        Some(r#"{"backend":{"base_url":"https://api.example.org"},"chat":{"compact":true}}"#),
        Some("en"),
    );
    assert_eq!(page.config.backend.base_url, "https://api.example.org");
    assert_eq!(page.config.backend.chat_path, "/chat");
    assert!(page.config.chat.compact);
}

#[wasm_bindgen_test]
fn config_invalid_json_falls_back() {
    let page = resolve_config(Some("{not json"), Some("ur"));
    assert_eq!(page.config, Default::default());
    assert_eq!(page.language, Language::Ur);
}

#[wasm_bindgen_test]
fn config_invalid_values_fall_back() {
    let page = resolve_config(Some(r#"{"auto_scroll":{"tick_ms":0}}"#), None);
    assert_eq!(page.config.auto_scroll.tick_ms, 16);
}

// ─── Clock Tests ─────────────────────────────────────────

#[wasm_bindgen_test]
fn clock_random_unit_in_range() {
    let clock = BrowserClock::new();
    for _ in 0..100 {
        let unit = clock.random_unit();
        assert!((0.0..1.0).contains(&unit));
    }
}

#[wasm_bindgen_test]
fn clock_now_millis_is_after_2020() {
    assert!(BrowserClock::new().now_millis() > 1_577_836_800_000);
}
