//! "Info" toggle and usage hints in the bottom-left corner of the viewport

use egui::Ui;

use crate::i18n::{t, HELP_KEYS};

pub fn show(ui: &mut Ui, open: &mut bool) {
    let rect = ui.max_rect();

    egui::Area::new(egui::Id::new("instructions"))
        .fixed_pos(rect.left_bottom() + egui::vec2(10.0, -10.0))
        .pivot(egui::Align2::LEFT_BOTTOM)
        .show(ui.ctx(), |ui| {
            if *open {
                egui::Frame::popup(ui.style())
                    .inner_margin(egui::Margin::same(10))
                    .show(ui, |ui| {
                        ui.set_max_width(360.0);
                        ui.strong(t("help.title"));
                        for key in HELP_KEYS {
                            ui.label(format!("• {}", t(key)));
                        }
                    });
                ui.add_space(6.0);
            }
            if ui.selectable_label(*open, t("ctl.info")).clicked() {
                *open = !*open;
            }
        });
}
