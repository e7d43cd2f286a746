use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// Top-level assistant configuration.
///
/// Every section defaults, so a host page only has to spell out the fields
/// it wants to override.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub backend: BackendConfig,
    pub mock: MockConfig,
    pub chat: ChatConfig,
    pub auto_scroll: AutoScrollConfig,
    pub routes: RoutesConfig,
    /// `None` means "take it from the page"
    pub language: Option<Language>,
}

impl AssistantConfig {
    /// Parse a (possibly partial) JSON override
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let config: AssistantConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> crate::Result<()> {
        let scroll = &self.auto_scroll;
        if scroll.min_speed == 0 || scroll.min_speed > scroll.max_speed {
            return Err(crate::AssistantError::Config(format!(
                "auto_scroll speed range {}..={} is empty",
                scroll.min_speed, scroll.max_speed
            )));
        }
        if scroll.tick_ms == 0 {
            return Err(crate::AssistantError::Config(
                "auto_scroll.tick_ms must be positive".to_string(),
            ));
        }
        if self.backend.base_url.trim().is_empty() {
            return Err(crate::AssistantError::Config(
                "backend.base_url is empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
    pub chat_path: String,
    pub health_path: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api/v1".to_string(),
            chat_path: "/chat".to_string(),
            health_path: "/chat/health".to_string(),
        }
    }
}

impl BackendConfig {
    pub fn chat_url(&self) -> String {
        join_url(&self.base_url, &self.chat_path)
    }

    pub fn health_url(&self) -> String {
        join_url(&self.base_url, &self.health_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Simulated latency of the offline responder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MockConfig {
    pub min_latency_ms: u64,
    pub latency_spread_ms: u64,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            min_latency_ms: 500,
            latency_spread_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Distance from the bottom of the message list, in px, within which
    /// new messages scroll into view automatically
    pub follow_threshold_px: f32,
    /// Characters of the captured selection shown in the preview
    pub selection_preview_chars: usize,
    /// Start the widget collapsed to its header
    pub compact: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            follow_threshold_px: 100.0,
            selection_preview_chars: 100,
            compact: false,
        }
    }
}

/// Reading-aid page scroller. Speeds are in px per second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoScrollConfig {
    pub default_speed: u32,
    pub min_speed: u32,
    pub max_speed: u32,
    pub tick_ms: u32,
    pub bottom_margin_px: f64,
}

impl Default for AutoScrollConfig {
    fn default() -> Self {
        Self {
            default_speed: 50,
            min_speed: 1,
            max_speed: 200,
            tick_ms: 16,
            bottom_margin_px: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    /// The dedicated chat page; the floating launcher hides there
    pub chat_page: String,
    /// Substring identifying textbook content pages
    pub docs_marker: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            chat_page: "/chat".to_string(),
            docs_marker: "/docs/".to_string(),
        }
    }
}

impl RoutesConfig {
    pub fn is_chat_page(&self, pathname: &str) -> bool {
        pathname == self.chat_page
    }

    pub fn is_content_page(&self, pathname: &str) -> bool {
        pathname.contains(&self.docs_marker)
    }
}
