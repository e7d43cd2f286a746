//! Wire types for the chat backend and the normalized client result.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::i18n::Language;

/// Body of `POST /chat`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub selected_text: Option<String>,
    pub language: Language,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, language: Language) -> Self {
        Self {
            message: message.into(),
            session_id: None,
            selected_text: None,
            language,
        }
    }

    pub fn with_session(mut self, session_id: Option<String>) -> Self {
        self.session_id = session_id;
        self
    }

    pub fn with_selection(mut self, selected_text: Option<String>) -> Self {
        self.selected_text = selected_text;
        self
    }
}

/// Body returned by `POST /chat`.
///
/// Only `response` and `session_id` are required; the backend also sends a
/// timestamp and (currently always empty) source list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub session_id: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub sources: Vec<Value>,
}

impl ChatResponse {
    pub fn new(response: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            session_id: session_id.into(),
            timestamp: None,
            sources: Vec::new(),
        }
    }
}

/// Which path produced a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplySource {
    Backend,
    Mock,
}

/// What the chat client hands back, regardless of which path answered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    pub session_id: String,
    pub source: ReplySource,
}

impl ChatReply {
    pub fn from_response(resp: ChatResponse, source: ReplySource) -> Self {
        Self {
            response: resp.response,
            session_id: resp.session_id,
            source,
        }
    }
}

/// Connectivity of the chat backend, as shown in the chat header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendStatus {
    Checking,
    Connected,
    Disconnected,
    Error,
}

impl Default for BackendStatus {
    fn default() -> Self {
        BackendStatus::Checking
    }
}
