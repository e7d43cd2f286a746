//! HTTP chat backend.
//!
//! Talks to the textbook service's `/chat` and `/chat/health` endpoints
//! through browser `fetch()` via gloo-net.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};

use assistant_core::ports::ChatBackendPort;
use assistant_types::{
    AssistantError, Result,
    api::{ChatRequest, ChatResponse},
    config::BackendConfig,
};

pub struct HttpChatBackend {
    chat_url: String,
    health_url: String,
}

impl HttpChatBackend {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            chat_url: config.chat_url(),
            health_url: config.health_url(),
        }
    }

    pub fn chat_url(&self) -> &str {
        &self.chat_url
    }

    pub fn health_url(&self) -> &str {
        &self.health_url
    }
}

#[async_trait(?Send)]
impl ChatBackendPort for HttpChatBackend {
    async fn chat(&self, req: &ChatRequest) -> Result<ChatResponse> {
        log::debug!("POST {} ({} chars)", self.chat_url, req.message.len());

        let response = Request::post(&self.chat_url)
            .header("Content-Type", "application/json")
            .json(req)
            .map_err(|e| AssistantError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| AssistantError::Network(e.to_string()))?;

        let response = ensure_ok(response).await?;

        let body = response
            .text()
            .await
            .map_err(|e| AssistantError::Network(e.to_string()))?;
        parse_chat_response(&body)
    }

    async fn health(&self) -> Result<()> {
        let response = Request::get(&self.health_url)
            .send()
            .await
            .map_err(|e| AssistantError::Network(e.to_string()))?;
        ensure_ok(response).await.map(|_| ())
    }

    fn backend_name(&self) -> &str {
        "http"
    }
}

async fn ensure_ok(response: Response) -> Result<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());
    Err(AssistantError::Http { status, body })
}

/// Decode a `/chat` body. Anything without a `response` and `session_id`
/// string counts as malformed.
pub fn parse_chat_response(body: &str) -> Result<ChatResponse> {
    serde_json::from_str(body).map_err(|e| AssistantError::MalformedResponse(e.to_string()))
}
