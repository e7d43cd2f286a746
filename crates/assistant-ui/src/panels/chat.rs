//! Chat panel — header with backend status, message history, selection
//! preview and input field.

use egui::{self, Align, Key, Layout, Modifiers, RichText, ScrollArea, Sense, Vec2};

use assistant_core::follow::ListMetrics;
use assistant_core::surface::PendingTurn;
use assistant_types::i18n::UiStrings;
use assistant_types::message::{Message, Role};

use crate::state::UiState;
use crate::theme::*;

/// What the caller has to act on after this frame
#[derive(Default)]
pub struct ChatPanelOutput {
    /// A turn to run off-frame
    pub submitted: Option<PendingTurn>,
    /// Message text the user asked to copy
    pub copy_requested: Option<String>,
}

/// Render the chat panel.
pub fn chat_panel(ui: &mut egui::Ui, state: &mut UiState) -> ChatPanelOutput {
    let mut output = ChatPanelOutput::default();
    let strings = state.strings();

    egui::Frame::default()
        .fill(PAGE_BG)
        .inner_margin(CARD_MARGIN)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                header(ui, state, strings);
                if state.is_compact() && !state.expanded {
                    return;
                }
                ui.separator();

                let preview = state.selection_preview();
                let mut reserved = 80.0;
                if preview.is_some() {
                    reserved += 48.0;
                }
                if state.follow.show_jump_button() {
                    reserved += 28.0;
                }

                message_list(ui, state, strings, reserved, &mut output);

                if state.follow.show_jump_button()
                    && ui
                        .button(RichText::new(strings.scroll_to_bottom).small())
                        .clicked()
                {
                    state.follow.jump_to_bottom();
                }

                if let Some(preview) = preview {
                    selection_strip(ui, state, strings, &preview);
                }

                ui.add_space(6.0);
                output.submitted = input_row(ui, state, strings);
            });
        });

    output
}

fn header(ui: &mut egui::Ui, state: &mut UiState, strings: &UiStrings) {
    ui.horizontal(|ui| {
        let title = if state.is_compact() {
            strings.compact_title
        } else {
            strings.title
        };
        ui.heading(RichText::new(title).color(INK).strong());

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if state.is_compact() {
                let icon = if state.expanded { "▾" } else { "▴" };
                if ui.small_button(icon).clicked() {
                    state.expanded = !state.expanded;
                }
            }
            if ui.small_button(strings.new_chat).clicked() {
                state.new_chat();
            }

            let status = state.surface.status();
            ui.label(
                RichText::new(strings.status(status))
                    .color(INK_MUTED)
                    .small(),
            );
            let (rect, _) = ui.allocate_exact_size(Vec2::splat(8.0), Sense::hover());
            ui.painter()
                .circle_filled(rect.center(), 4.0, status_color(status));
        });
    });
}

fn message_list(
    ui: &mut egui::Ui,
    state: &mut UiState,
    strings: &UiStrings,
    reserved: f32,
    output: &mut ChatPanelOutput,
) {
    let rtl = state.surface.language().is_rtl();
    let scroll_to_end = state.follow.take_scroll_request();
    let awaiting = state.surface.is_awaiting() && !state.surface.is_abandoned();

    let scroll = ScrollArea::vertical()
        .id_salt("chat_messages")
        .max_height((ui.available_height() - reserved).max(80.0))
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let chat = state.surface.state();
            if chat.is_empty() {
                ui.add_space(12.0);
                ui.label(RichText::new(strings.welcome).color(INK));
                ui.label(RichText::new(strings.instructions).color(INK_MUTED).small());
            }

            for msg in &chat.messages {
                if let Some(text) = render_message(ui, msg, strings, rtl) {
                    output.copy_requested = Some(text);
                }
                ui.add_space(4.0);
            }

            if awaiting {
                let dots = ((ui.input(|i| i.time) * 3.0) as usize % 3) + 1;
                ui.label(RichText::new("•".repeat(dots)).color(BRAND).strong());
            }

            if scroll_to_end {
                ui.scroll_to_cursor(Some(Align::BOTTOM));
            }
        });

    state.follow.observe(ListMetrics {
        scroll_top: scroll.state.offset.y,
        scroll_height: scroll.content_size.y,
        client_height: scroll.inner_rect.height(),
    });
}

/// Returns the message text when its copy button was clicked.
fn render_message(
    ui: &mut egui::Ui,
    msg: &Message,
    strings: &UiStrings,
    rtl: bool,
) -> Option<String> {
    let is_user = msg.role == Role::User;
    // User turns hug the trailing edge, which flips for right-to-left text.
    let align = if is_user != rtl { Align::Max } else { Align::Min };
    let bg = if is_user { USER_BUBBLE } else { CARD_BG };
    let mut copied = None;

    ui.with_layout(Layout::top_down(align), |ui| {
        egui::Frame::default()
            .fill(bg)
            .corner_radius(BUBBLE_RADIUS)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.set_max_width(ui.available_width() * 0.85);
                ui.label(RichText::new(&msg.content).color(INK));
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(msg.time_label())
                            .color(INK_MUTED)
                            .small(),
                    );
                    if !is_user && ui.small_button(strings.copy).clicked() {
                        copied = Some(msg.content.clone());
                    }
                });
            });
    });

    copied
}

fn selection_strip(ui: &mut egui::Ui, state: &mut UiState, strings: &UiStrings, preview: &str) {
    egui::Frame::default()
        .fill(SELECTION_BG)
        .corner_radius(CARD_RADIUS)
        .inner_margin(6.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(strings.selected_text).color(BRAND).small());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.small_button("✕").clicked() {
                        state.surface.clear_selection();
                    }
                });
            });
            ui.label(RichText::new(preview).color(INK_MUTED).italics());
        });
}

fn input_row(ui: &mut egui::Ui, state: &mut UiState, strings: &UiStrings) -> Option<PendingTurn> {
    let mut submitted = None;
    let input_id = ui.make_persistent_id("chat_input");

    // Plain Enter sends; Shift+Enter falls through to the text edit as a
    // newline.
    let enter_pressed = ui.memory(|m| m.has_focus(input_id))
        && ui.input(|i| i.key_pressed(Key::Enter) && !i.modifiers.shift);
    if enter_pressed {
        ui.input_mut(|i| i.consume_key(Modifiers::NONE, Key::Enter));
    }

    ui.horizontal(|ui| {
        let input = egui::TextEdit::multiline(&mut state.input_text)
            .id(input_id)
            .hint_text(strings.placeholder)
            .desired_rows(2)
            .desired_width(ui.available_width() - 70.0)
            .font(egui::FontId::proportional(14.0));
        let response = ui.add(input);

        let send_enabled = state.surface.can_submit(&state.input_text);
        let send_btn = ui.add_enabled(
            send_enabled,
            egui::Button::new(RichText::new(strings.send).color(INK))
                .fill(if send_enabled { BRAND } else { CONTROL_BG })
                .corner_radius(CARD_RADIUS)
                .min_size(Vec2::new(60.0, 0.0)),
        );

        if send_enabled && (enter_pressed || send_btn.clicked()) {
            submitted = state.take_submission();
            response.request_focus();
        }
    });

    submitted
}
