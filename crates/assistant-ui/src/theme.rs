//! Palette and metrics for the reading companion.
//!
//! Dark slate surfaces with a teal brand colour, so the widget sits quietly
//! on top of the textbook pages.

use egui::{Color32, CornerRadius, Stroke, Vec2, Visuals};

use assistant_types::api::BackendStatus;

pub const PAGE_BG: Color32 = Color32::from_rgb(17, 24, 32);
pub const CARD_BG: Color32 = Color32::from_rgb(27, 36, 48);
pub const CONTROL_BG: Color32 = Color32::from_rgb(41, 53, 68);
pub const INK: Color32 = Color32::from_rgb(226, 232, 240);
pub const INK_MUTED: Color32 = Color32::from_rgb(148, 163, 184);
pub const BRAND: Color32 = Color32::from_rgb(37, 194, 160);
pub const USER_BUBBLE: Color32 = Color32::from_rgb(28, 110, 94);
pub const SELECTION_BG: Color32 = Color32::from_rgb(45, 55, 72);
pub const ALERT: Color32 = Color32::from_rgb(244, 96, 84);
pub const PENDING: Color32 = Color32::from_rgb(245, 180, 60);

pub const CARD_RADIUS: CornerRadius = CornerRadius::same(8);
pub const BUBBLE_RADIUS: CornerRadius = CornerRadius::same(12);
pub const CARD_MARGIN: Vec2 = Vec2::new(12.0, 10.0);

pub const LAUNCHER_SIZE: f32 = 56.0;
pub const OVERLAY_SIZE: Vec2 = Vec2::new(380.0, 520.0);

/// Colour of the backend status dot
pub fn status_color(status: BackendStatus) -> Color32 {
    match status {
        BackendStatus::Checking => PENDING,
        BackendStatus::Connected => BRAND,
        BackendStatus::Disconnected => INK_MUTED,
        BackendStatus::Error => ALERT,
    }
}

/// Install the companion's visuals on an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();
    visuals.panel_fill = PAGE_BG;
    visuals.window_fill = CARD_BG;
    visuals.extreme_bg_color = PAGE_BG;
    visuals.window_corner_radius = CARD_RADIUS;
    visuals.hyperlink_color = BRAND;

    let widgets = &mut visuals.widgets;
    for state in [&mut widgets.inactive, &mut widgets.hovered] {
        state.bg_fill = CONTROL_BG;
        state.weak_bg_fill = CONTROL_BG;
    }
    widgets.inactive.fg_stroke = Stroke::new(1.0, INK_MUTED);
    widgets.hovered.fg_stroke = Stroke::new(1.0, INK);
    widgets.active.bg_fill = BRAND;
    widgets.active.fg_stroke = Stroke::new(1.0, INK);

    visuals.selection.bg_fill = SELECTION_BG;
    visuals.selection.stroke = Stroke::new(1.0, BRAND);

    ctx.set_visuals(visuals);
    ctx.style_mut(|style| {
        style.spacing.item_spacing = Vec2::new(8.0, 6.0);
        style.spacing.button_padding = Vec2::new(10.0, 4.0);
    });
}
