//! Control panel: debug toggle, add/delete/save and the edit panel

use egui::Ui;

use crate::i18n::t;
use crate::state::AppState;

use super::edit_panel;

// ── Public actions (callable from menus too) ─────────────────

pub fn action_add_cube(state: &mut AppState) {
    state.add_cube(&mut rand::rng());
}

pub fn action_delete_cube(state: &mut AppState) {
    if state.delete_selected().is_none() {
        tracing::warn!("Delete: no cube selected");
    }
}

/// Ask for a destination and write the project JSON there
pub fn action_save_project(state: &AppState) {
    let Some(path) = rfd::FileDialog::new()
        .set_title(t("ctl.save_title"))
        .add_filter("JSON", &["json"])
        .set_file_name(shared::PROJECT_FILE_NAME)
        .save_file()
    else {
        return;
    };
    if let Err(e) = state.save_project(&path) {
        tracing::error!("{e}");
    }
}

// ── Panel ────────────────────────────────────────────────────

pub fn show(ui: &mut Ui, state: &mut AppState) {
    let mut debug_mode = state.debug_mode();
    if ui.checkbox(&mut debug_mode, t("ctl.debug_mode")).changed() {
        state.set_debug_mode(debug_mode);
    }

    ui.add_space(4.0);
    let full_width = egui::vec2(ui.available_width(), 0.0);

    if ui
        .add_sized(full_width, egui::Button::new(t("ctl.add_cube")))
        .clicked()
    {
        action_add_cube(state);
    }

    if state.can_edit_selection() {
        let delete = egui::Button::new(
            egui::RichText::new(t("ctl.delete_cube")).color(egui::Color32::WHITE),
        )
        .fill(egui::Color32::from_rgb(185, 28, 28));
        if ui.add_sized(full_width, delete).clicked() {
            action_delete_cube(state);
        }
    }

    if ui
        .add_sized(full_width, egui::Button::new(t("ctl.save_project")))
        .clicked()
    {
        action_save_project(state);
    }

    if let Some(index) = state.selected().filter(|_| state.can_edit_selection()) {
        ui.add_space(8.0);
        ui.separator();
        edit_panel::show(ui, state, index);
    }
}
