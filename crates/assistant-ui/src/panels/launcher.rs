//! Floating launcher button and the chat overlay it opens.

use egui::{self, Align2, CornerRadius, Id, RichText, Vec2};

use assistant_core::launcher::Launcher;
use assistant_types::i18n::UiStrings;

use super::chat::{chat_panel, ChatPanelOutput};
use crate::state::UiState;
use crate::theme::*;

const EDGE_OFFSET: Vec2 = Vec2::new(-20.0, -20.0);

/// Round button in the bottom-right corner. Returns `true` when clicked.
pub fn launcher_button(ctx: &egui::Context, launcher: &mut Launcher, strings: &UiStrings) -> bool {
    let mut clicked = false;

    egui::Area::new(Id::new("assistant_launcher"))
        .anchor(Align2::RIGHT_BOTTOM, EDGE_OFFSET)
        .show(ctx, |ui| {
            let (icon, hover) = if launcher.is_open() {
                ("✕", strings.close_chat)
            } else {
                ("💬", strings.open_chat)
            };
            let button = egui::Button::new(RichText::new(icon).size(22.0).color(INK))
                .fill(BRAND)
                .corner_radius(CornerRadius::same((LAUNCHER_SIZE / 2.0) as u8))
                .min_size(Vec2::splat(LAUNCHER_SIZE));
            let response = ui.add(button).on_hover_text(hover);

            if launcher.has_unread() {
                let dot = response.rect.right_top() + Vec2::new(-8.0, 8.0);
                ui.painter().circle_filled(dot, 6.0, ALERT);
            }

            if response.clicked() {
                launcher.toggle();
                clicked = true;
            }
        });

    clicked
}

/// The chat panel floating above the launcher. Renders nothing while the
/// launcher is closed.
pub fn chat_overlay(ctx: &egui::Context, state: &mut UiState) -> ChatPanelOutput {
    if !state.launcher.is_open() {
        return ChatPanelOutput::default();
    }

    let offset = EDGE_OFFSET - Vec2::new(0.0, LAUNCHER_SIZE + 12.0);
    egui::Area::new(Id::new("assistant_overlay"))
        .anchor(Align2::RIGHT_BOTTOM, offset)
        .show(ctx, |ui| {
            egui::Frame::default()
                .fill(CARD_BG)
                .corner_radius(CARD_RADIUS)
                .show(ui, |ui| {
                    let size = Vec2::new(
                        OVERLAY_SIZE.x.min(ctx.available_rect().width() - 40.0),
                        OVERLAY_SIZE.y,
                    );
                    ui.allocate_ui(size, |ui| {
                        ui.set_min_size(size);
                        chat_panel(ui, state)
                    })
                    .inner
                })
                .inner
        })
        .inner
}
