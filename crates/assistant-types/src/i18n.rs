//! Site languages and the widget's localized strings.

use serde::{Deserialize, Serialize};

use crate::api::BackendStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ur,
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ur => "ur",
        }
    }

    /// Accepts bare codes and region-tagged ones (`ur-PK`, `en_US`)
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code
            .split(|c| c == '-' || c == '_')
            .next()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Language::En),
            "ur" => Some(Language::Ur),
            _ => None,
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Ur)
    }

    pub fn strings(&self) -> &'static UiStrings {
        match self {
            Language::En => &EN,
            Language::Ur => &UR,
        }
    }
}

/// Every user-facing string of the widget
#[derive(Debug)]
pub struct UiStrings {
    pub title: &'static str,
    pub compact_title: &'static str,
    pub welcome: &'static str,
    pub instructions: &'static str,
    pub placeholder: &'static str,
    pub send: &'static str,
    pub error: &'static str,
    pub selected_text: &'static str,
    pub copy: &'static str,
    pub new_chat: &'static str,
    pub scroll_to_bottom: &'static str,
    pub open_chat: &'static str,
    pub close_chat: &'static str,
    pub status_checking: &'static str,
    pub status_connected: &'static str,
    pub status_disconnected: &'static str,
    pub status_error: &'static str,
    pub auto_scroll_start: &'static str,
    pub auto_scroll_pause: &'static str,
    pub auto_scroll_reset: &'static str,
}

impl UiStrings {
    pub fn status(&self, status: BackendStatus) -> &'static str {
        match status {
            BackendStatus::Checking => self.status_checking,
            BackendStatus::Connected => self.status_connected,
            BackendStatus::Disconnected => self.status_disconnected,
            BackendStatus::Error => self.status_error,
        }
    }
}

static EN: UiStrings = UiStrings {
    title: "AI Textbook Assistant",
    compact_title: "AI Assistant",
    welcome: "Welcome! I am your AI assistant for the Physical AI & Humanoid Robotics textbook.",
    instructions: "Select text on the page and ask questions about it, or ask general questions about the content.",
    placeholder: "Ask a question about the textbook...",
    send: "Send",
    error: "Sorry, I encountered an error. Please try again.",
    selected_text: "Selected text:",
    copy: "Copy message",
    new_chat: "New Chat",
    scroll_to_bottom: "Scroll to bottom",
    open_chat: "Open AI Assistant",
    close_chat: "Close chat",
    status_checking: "Checking backend...",
    status_connected: "Connected",
    status_disconnected: "Offline mode",
    status_error: "Backend error",
    auto_scroll_start: "Start auto-scroll",
    auto_scroll_pause: "Pause auto-scroll",
    auto_scroll_reset: "Reset scroll position",
};

static UR: UiStrings = UiStrings {
    title: "اے آئی نصابی معاون",
    compact_title: "اے آئی معاون",
    welcome: "خوش آمدید! میں فزیکل اے آئی اور ہیومنائیڈ روبوٹکس کی نصابی کتاب کے لیے آپ کا اے آئی معاون ہوں۔",
    instructions: "صفحے پر متن منتخب کریں اور اس کے بارے میں سوال پوچھیں، یا مواد کے بارے میں عمومی سوالات پوچھیں۔",
    placeholder: "نصابی کتاب کے بارے میں سوال پوچھیں...",
    send: "بھیجیں",
    error: "معذرت، ایک خرابی پیش آئی۔ براہ کرم دوبارہ کوشش کریں۔",
    selected_text: "منتخب متن:",
    copy: "پیغام کاپی کریں",
    new_chat: "نئی گفتگو",
    scroll_to_bottom: "نیچے جائیں",
    open_chat: "اے آئی معاون کھولیں",
    close_chat: "گفتگو بند کریں",
    status_checking: "بیک اینڈ کی جانچ ہو رہی ہے...",
    status_connected: "منسلک",
    status_disconnected: "آف لائن موڈ",
    status_error: "بیک اینڈ میں خرابی",
    auto_scroll_start: "خودکار اسکرول شروع کریں",
    auto_scroll_pause: "خودکار اسکرول روکیں",
    auto_scroll_reset: "اسکرول کی پوزیشن ری سیٹ کریں",
};
