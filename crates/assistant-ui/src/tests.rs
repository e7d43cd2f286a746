#[cfg(test)]
mod tests {
    use assistant_core::follow::ListMetrics;
    use assistant_types::api::{BackendStatus, ChatReply, ReplySource};
    use assistant_types::config::AssistantConfig;
    use assistant_types::event::ChatEvent;
    use assistant_types::i18n::Language;
    use assistant_types::message::Role;

    use crate::state::*;
    use crate::theme;

    fn state_at(path: &str) -> UiState {
        UiState::new(&AssistantConfig::default(), Language::En, path)
    }

    fn reply(turn_id: u64, text: &str) -> ChatEvent {
        ChatEvent::ReplyReceived {
            turn_id,
            reply: ChatReply {
                response: text.to_string(),
                session_id: "srv-1".to_string(),
                source: ReplySource::Backend,
            },
        }
    }

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = state_at("/docs/intro");
        assert!(state.surface.state().is_empty());
        assert!(state.input_text.is_empty());
        assert!(!state.launcher.is_open());
        assert!(!state.is_compact());
        assert!(state.expanded);
        assert!(!state.is_busy());
        assert_eq!(state.surface.status(), BackendStatus::Checking);
        assert!(state.page.launcher_visible);
        assert!(state.page.auto_scroll_available);
    }

    #[test]
    fn test_ui_state_compact_starts_collapsed() {
        let mut config = AssistantConfig::default();
        config.chat.compact = true;
        let state = UiState::new(&config, Language::En, "/");
        assert!(state.is_compact());
        assert!(!state.expanded);
    }

    #[test]
    fn test_ui_state_strings_follow_language() {
        let state = UiState::new(&AssistantConfig::default(), Language::Ur, "/");
        assert_eq!(state.strings().send, Language::Ur.strings().send);
    }

    #[test]
    fn test_take_submission_clears_input() {
        let mut state = state_at("/");
        state.input_text = "  What is Physical AI?  ".to_string();

        let turn = state.take_submission().unwrap();

        assert_eq!(turn.request.message, "What is Physical AI?");
        assert!(state.input_text.is_empty());
        assert!(state.is_busy());
        assert!(state.follow.take_scroll_request());
    }

    #[test]
    fn test_take_submission_rejected_keeps_input() {
        let mut state = state_at("/");
        state.input_text = "   ".to_string();
        assert!(state.take_submission().is_none());
        assert_eq!(state.input_text, "   ");

        state.input_text = "first".to_string();
        state.take_submission().unwrap();
        state.input_text = "second".to_string();
        assert!(state.take_submission().is_none());
        assert_eq!(state.input_text, "second");
    }

    #[test]
    fn test_process_reply_appends_and_marks_unread() {
        let mut state = state_at("/");
        state.input_text = "q".to_string();
        state.take_submission().unwrap();
        state.follow.take_scroll_request();

        assert!(state.process_events(vec![reply(1, "answer")]));

        let messages = &state.surface.state().messages;
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].role, Role::Assistant);
        assert!(state.launcher.has_unread());
        assert!(state.follow.take_scroll_request());
        assert!(!state.is_busy());
    }

    #[test]
    fn test_process_reply_while_open_is_not_unread() {
        let mut state = state_at("/");
        state.launcher.open();
        state.input_text = "q".to_string();
        state.take_submission().unwrap();
        state.process_events(vec![reply(1, "answer")]);
        assert!(!state.launcher.has_unread());
    }

    #[test]
    fn test_process_reply_while_reading_history_shows_jump() {
        let mut state = state_at("/");
        state.input_text = "q".to_string();
        state.take_submission().unwrap();
        state.follow.take_scroll_request();
        state.follow.observe(ListMetrics {
            scroll_top: 0.0,
            scroll_height: 2000.0,
            client_height: 400.0,
        });

        state.process_events(vec![reply(1, "answer")]);

        assert!(!state.follow.take_scroll_request());
        assert!(state.follow.show_jump_button());
    }

    #[test]
    fn test_process_stale_events_report_no_change() {
        let mut state = state_at("/");
        assert!(!state.process_events(vec![reply(5, "late")]));
        assert!(!state.launcher.has_unread());
    }

    #[test]
    fn test_process_status_and_selection() {
        let mut state = state_at("/");
        let changed = state.process_events(vec![
            ChatEvent::StatusChanged {
                status: BackendStatus::Disconnected,
            },
            ChatEvent::TextSelected {
                text: "inverted pendulum".to_string(),
            },
        ]);
        assert!(changed);
        assert_eq!(state.surface.status(), BackendStatus::Disconnected);
        assert_eq!(state.selection_preview().as_deref(), Some("inverted pendulum"));
    }

    #[test]
    fn test_selection_preview_truncates() {
        let mut state = state_at("/");
        state.surface.capture_selection(&"x".repeat(250));
        let preview = state.selection_preview().unwrap();
        assert_eq!(preview, format!("{}...", "x".repeat(100)));
    }

    #[test]
    fn test_new_chat_resets_list() {
        let mut state = state_at("/");
        state.input_text = "q".to_string();
        state.take_submission().unwrap();
        state.follow.observe(ListMetrics {
            scroll_top: 0.0,
            scroll_height: 2000.0,
            client_height: 400.0,
        });

        state.new_chat();

        assert!(state.surface.state().is_empty());
        assert!(state.is_busy());
        assert!(state.follow.is_near_bottom());
        assert!(!state.follow.show_jump_button());

        state.input_text = "again".to_string();
        assert!(state.take_submission().is_none());
        assert_eq!(state.input_text, "again");

        // The abandoned turn's reply only releases the input.
        assert!(state.process_events(vec![reply(1, "late")]));
        assert!(state.surface.state().is_empty());
        assert!(!state.is_busy());
        assert!(!state.launcher.has_unread());
        assert!(state.take_submission().is_some());
    }

    #[test]
    fn test_navigate_to_chat_page_closes_launcher() {
        let config = AssistantConfig::default();
        let mut state = state_at("/docs/intro");
        state.launcher.open();

        assert!(state.navigate(&config.routes, "/chat"));
        assert!(!state.page.launcher_visible);
        assert!(!state.page.auto_scroll_available);
        assert!(!state.launcher.is_open());
        assert!(!state.navigate(&config.routes, "/chat"));
    }

    // ─── Theme Tests ─────────────────────────────────────────

    #[test]
    fn test_status_colors_distinct() {
        let colors = [
            theme::status_color(BackendStatus::Checking),
            theme::status_color(BackendStatus::Connected),
            theme::status_color(BackendStatus::Disconnected),
            theme::status_color(BackendStatus::Error),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_apply_theme_installs_palette() {
        let ctx = egui::Context::default();
        theme::apply_theme(&ctx);

        let style = ctx.style();
        assert!(style.visuals.dark_mode);
        assert_eq!(style.visuals.panel_fill, theme::PAGE_BG);
        assert_eq!(style.visuals.window_fill, theme::CARD_BG);
        assert_eq!(style.visuals.widgets.active.bg_fill, theme::BRAND);
        assert_eq!(style.spacing.item_spacing, egui::Vec2::new(8.0, 6.0));
    }
}
