//! Rotation lock badge in the top-right corner of the viewport

use egui::{Color32, Ui};

use crate::i18n::t;

const LOCKED: Color32 = Color32::from_rgb(239, 68, 68);
const UNLOCKED: Color32 = Color32::from_rgb(34, 197, 94);

pub fn show(ui: &mut Ui, locked: bool) {
    let (fill, status) = if locked {
        (LOCKED, t("rot.locked"))
    } else {
        (UNLOCKED, t("rot.unlocked"))
    };

    egui::Area::new(egui::Id::new("rotation_indicator"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-10.0, 10.0))
        .interactable(false)
        .show(ui.ctx(), |ui| {
            egui::Frame::NONE
                .fill(fill)
                .inner_margin(egui::Margin::symmetric(10, 5))
                .corner_radius(egui::CornerRadius::same(5))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(format!("{}: {status}", t("rot.label")))
                            .color(Color32::WHITE)
                            .strong(),
                    );
                });
        });
}
