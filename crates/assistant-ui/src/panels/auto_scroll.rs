//! Reading-aid control: play/pause, reset and a speed slider.

use std::ops::RangeInclusive;

use egui::{self, Align2, Id, RichText, Vec2};

use assistant_types::i18n::UiStrings;

use crate::theme::*;

/// Snapshot of the auto-scroll driver for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct AutoScrollView {
    pub playing: bool,
    pub speed: u32,
    pub range: RangeInclusive<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoScrollAction {
    None,
    Toggle,
    Reset,
    SetSpeed(u32),
}

/// Small floating control in the bottom-left corner.
pub fn auto_scroll_control(
    ctx: &egui::Context,
    view: &AutoScrollView,
    strings: &UiStrings,
) -> AutoScrollAction {
    let mut action = AutoScrollAction::None;

    egui::Area::new(Id::new("auto_scroll_control"))
        .anchor(Align2::LEFT_BOTTOM, Vec2::new(20.0, -20.0))
        .show(ctx, |ui| {
            egui::Frame::default()
                .fill(CARD_BG)
                .corner_radius(CARD_RADIUS)
                .inner_margin(CARD_MARGIN)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        let label = if view.playing {
                            strings.auto_scroll_pause
                        } else {
                            strings.auto_scroll_start
                        };
                        let play = egui::Button::new(RichText::new(label).color(INK))
                            .fill(if view.playing { PENDING } else { BRAND })
                            .corner_radius(CARD_RADIUS);
                        if ui.add(play).clicked() {
                            action = AutoScrollAction::Toggle;
                        }
                        if ui.button(strings.auto_scroll_reset).clicked() {
                            action = AutoScrollAction::Reset;
                        }

                        let mut speed = view.speed;
                        let slider = egui::Slider::new(&mut speed, view.range.clone())
                            .suffix(" px/s");
                        if ui.add(slider).changed() && speed != view.speed {
                            action = AutoScrollAction::SetSpeed(speed);
                        }
                    });
                });
        });

    action
}
