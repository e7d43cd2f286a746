use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssistantError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),

    #[error("{0}")]
    Other(String),
}

impl AssistantError {
    /// True when the backend could not be reached at all, as opposed to
    /// answering with a failure.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, AssistantError::Network(_))
    }
}

impl From<serde_json::Error> for AssistantError {
    fn from(e: serde_json::Error) -> Self {
        AssistantError::Serialization(e.to_string())
    }
}
