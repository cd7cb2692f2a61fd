use egui::Ui;

use crate::i18n::t;
use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let cube_count = state.cubes().len();
        ui.weak(format!("{}: {cube_count}", t("status.cubes")));

        ui.separator();

        match state.selected() {
            Some(index) => ui.label(format!("{}: #{}", t("status.selected"), index + 1)),
            None => ui.weak(format!("{}: {}", t("status.selected"), t("status.none"))),
        };

        if state.debug_mode() {
            ui.separator();
            ui.colored_label(egui::Color32::from_rgb(255, 200, 100), t("status.debug"));
        }

        ui.separator();
        ui.weak(t("status.nav_hint"));

        // Right-aligned version
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(concat!("cubes-editor v", env!("CARGO_PKG_VERSION")));
        });
    });
}
