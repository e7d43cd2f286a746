#[cfg(test)]
mod tests {
    use crate::api::*;
    use crate::config::*;
    use crate::error::AssistantError;
    use crate::event::ChatEvent;
    use crate::i18n::Language;
    use crate::message::*;
    use crate::session::ChatState;

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_user() {
        let msg = Message::user("Hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Hello");
        assert!(!msg.id.is_empty());
    }

    #[test]
    fn test_message_assistant() {
        let msg = Message::assistant("I can help");
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.content, "I can help");
    }

    #[test]
    fn test_message_ids_are_unique() {
        let a = Message::user("same");
        let b = Message::user("same");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_message_time_label_format() {
        let label = Message::user("x").time_label();
        assert_eq!(label.len(), 5);
        assert_eq!(&label[2..3], ":");
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), r#""assistant""#);
        assert_eq!(Role::Assistant.as_str(), "assistant");
    }

    // ─── Wire Tests ──────────────────────────────────────────

    #[test]
    fn test_chat_request_omits_absent_fields() {
        let req = ChatRequest::new("what is physical ai", Language::En);
        let json: serde_json::Value = serde_json::to_value(&req).unwrap();
        assert_eq!(json["message"], "what is physical ai");
        assert_eq!(json["language"], "en");
        assert!(json.get("session_id").is_none());
        assert!(json.get("selected_text").is_none());
    }

    #[test]
    fn test_chat_request_includes_session_and_selection() {
        let req = ChatRequest::new("explain", Language::Ur)
            .with_session(Some("s-1".to_string()))
            .with_selection(Some("Zero Moment Point".to_string()));
        let json: serde_json::Value = serde_json::to_value(&req).unwrap();
        assert_eq!(json["session_id"], "s-1");
        assert_eq!(json["selected_text"], "Zero Moment Point");
        assert_eq!(json["language"], "ur");
    }

    #[test]
    fn test_chat_response_minimal_body() {
        let resp: ChatResponse =
            serde_json::from_str(r#"{"response":"hi","session_id":"abc"}"#).unwrap();
        assert_eq!(resp.response, "hi");
        assert_eq!(resp.session_id, "abc");
        assert!(resp.timestamp.is_none());
        assert!(resp.sources.is_empty());
    }

    #[test]
    fn test_chat_response_full_backend_body() {
        let body = r#"{
            "response": "Physical AI is...",
            "session_id": "0b7c",
            "timestamp": "2024-05-01T10:00:00",
            "sources": []
        }"#;
        let resp: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.timestamp.as_deref(), Some("2024-05-01T10:00:00"));
    }

    #[test]
    fn test_chat_response_missing_session_is_error() {
        let result = serde_json::from_str::<ChatResponse>(r#"{"response":"hi"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_chat_reply_from_response() {
        let reply = ChatReply::from_response(ChatResponse::new("r", "s"), ReplySource::Mock);
        assert_eq!(reply.response, "r");
        assert_eq!(reply.session_id, "s");
        assert_eq!(reply.source, ReplySource::Mock);
    }

    #[test]
    fn test_backend_status_default_is_checking() {
        assert_eq!(BackendStatus::default(), BackendStatus::Checking);
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_config_defaults() {
        let config = AssistantConfig::default();
        assert_eq!(config.backend.chat_url(), "http://localhost:8000/api/v1/chat");
        assert_eq!(
            config.backend.health_url(),
            "http://localhost:8000/api/v1/chat/health"
        );
        assert_eq!(config.mock.min_latency_ms, 500);
        assert_eq!(config.mock.latency_spread_ms, 1000);
        assert_eq!(config.chat.follow_threshold_px, 100.0);
        assert_eq!(config.auto_scroll.default_speed, 50);
        assert_eq!(config.auto_scroll.tick_ms, 16);
        assert!(config.language.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_url_join_handles_slashes() {
        let backend = BackendConfig {
            base_url: "https://api.example.org/v1/".to_string(),
            chat_path: "chat".to_string(),
            health_path: "/chat/health".to_string(),
        };
        assert_eq!(backend.chat_url(), "https://api.example.org/v1/chat");
        assert_eq!(backend.health_url(), "https://api.example.org/v1/chat/health");
    }

    #[test]
    fn test_config_partial_override() {
        let config = AssistantConfig::from_json(
            r#"{"backend":{"base_url":"https://tutor.example.org/api"},"language":"ur"}"#,
        )
        .unwrap();
        assert_eq!(config.backend.base_url, "https://tutor.example.org/api");
        assert_eq!(config.backend.chat_path, "/chat");
        assert_eq!(config.language, Some(Language::Ur));
        assert_eq!(config.auto_scroll.max_speed, 200);
    }

    #[test]
    fn test_config_rejects_empty_speed_range() {
        let result =
            AssistantConfig::from_json(r#"{"auto_scroll":{"min_speed":300,"max_speed":200}}"#);
        assert!(matches!(result, Err(AssistantError::Config(_))));
    }

    #[test]
    fn test_config_rejects_invalid_json() {
        let result = AssistantConfig::from_json("{not json");
        assert!(matches!(result, Err(AssistantError::Serialization(_))));
    }

    #[test]
    fn test_routes() {
        let routes = RoutesConfig::default();
        assert!(routes.is_chat_page("/chat"));
        assert!(!routes.is_chat_page("/chat/history"));
        assert!(routes.is_content_page("/docs/intro"));
        assert!(routes.is_content_page("/ur/docs/chapter-1/overview"));
        assert!(!routes.is_content_page("/features"));
    }

    // ─── i18n Tests ──────────────────────────────────────────

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("en"), Some(Language::En));
        assert_eq!(Language::from_code("ur-PK"), Some(Language::Ur));
        assert_eq!(Language::from_code("EN_us"), Some(Language::En));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::Ur.code(), "ur");
        assert!(Language::Ur.is_rtl());
        assert!(!Language::En.is_rtl());
    }

    #[test]
    fn test_strings_per_language() {
        let en = Language::En.strings();
        let ur = Language::Ur.strings();
        assert_eq!(en.error, "Sorry, I encountered an error. Please try again.");
        assert_ne!(en.error, ur.error);
        assert_eq!(en.status(BackendStatus::Connected), "Connected");
    }

    // ─── Event / Session / Error Tests ───────────────────────

    #[test]
    fn test_event_serialization() {
        let event = ChatEvent::SendFailed {
            turn_id: 3,
            message: "boom".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("SendFailed"));
        let back: ChatEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_chat_state_new_is_empty() {
        let state = ChatState::new();
        assert!(state.is_empty());
        assert!(state.session_id.is_none());
        assert!(!state.is_loading);
        assert!(state.selected_text.is_none());
        assert!(state.messages.is_empty());
    }

    #[test]
    fn test_error_display() {
        let err = AssistantError::Http {
            status: 503,
            body: "unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503: unavailable");
        assert!(!err.is_unreachable());
        assert!(AssistantError::Network("refused".to_string()).is_unreachable());
    }

    #[test]
    fn test_error_from_serde() {
        let err: AssistantError = serde_json::from_str::<ChatResponse>("[]")
            .unwrap_err()
            .into();
        assert!(matches!(err, AssistantError::Serialization(_)));
    }
}
