//! WASM-target tests for assistant-types.
//!
//! Runs the type-level checks under wasm32-unknown-unknown
//! via `wasm-pack test --node`, where uuid and chrono use their JS backends.

use wasm_bindgen_test::*;

use assistant_types::api::*;
use assistant_types::config::*;
use assistant_types::i18n::*;
use assistant_types::message::*;

#[wasm_bindgen_test]
fn message_has_uuid_id() {
    let msg = Message::user("Hello");
    assert_eq!(msg.id.len(), 36);
    assert_eq!(msg.role, Role::User);
}

#[wasm_bindgen_test]
fn message_timestamp_is_recent() {
    let before = chrono::Utc::now();
    let msg = Message::assistant("hi");
    assert!(msg.timestamp >= before);
}

#[wasm_bindgen_test]
fn request_serializes_language_tag() {
    let req = ChatRequest::new("q", Language::Ur);
    let json = serde_json::to_string(&req).unwrap();
    assert_eq!(json, r#"{"message":"q","language":"ur"}"#);
}

#[wasm_bindgen_test]
fn config_defaults_validate() {
    assert!(AssistantConfig::default().validate().is_ok());
}

#[wasm_bindgen_test]
fn config_override_from_json() {
    let config = AssistantConfig::from_json(r#"{"routes":{"chat_page":"/ask"}}"#).unwrap();
    assert!(config.routes.is_chat_page("/ask"));
    assert!(!config.routes.is_chat_page("/chat"));
}
