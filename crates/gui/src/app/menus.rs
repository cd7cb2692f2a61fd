//! Application menu bar and settings window

use eframe::egui;

use crate::i18n::{lang, set_lang, t, Lang};
use crate::state::{AppSettings, AppState};
use crate::ui::controls;
use crate::viewport::ViewportPanel;

/// Show the file menu
pub fn file_menu(ui: &mut egui::Ui, state: &AppState) {
    ui.menu_button(t("menu.file"), |ui| {
        if ui.button(t("menu.save")).clicked() {
            ui.close_menu();
            controls::action_save_project(state);
        }
        ui.separator();
        if ui.button(t("menu.quit")).clicked() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

/// Show the view menu
pub fn view_menu(ui: &mut egui::Ui, state: &mut AppState, viewport: &mut ViewportPanel) {
    ui.menu_button(t("menu.view"), |ui| {
        ui.checkbox(&mut state.panels.instructions, t("menu.instructions"));
        ui.separator();
        if ui.button(t("menu.reset_camera")).clicked() {
            viewport.reset_camera();
            ui.close_menu();
        }
        ui.separator();
        ui.menu_button(t("menu.language"), |ui| {
            for (l, name) in [(Lang::Es, "Español"), (Lang::En, "English")] {
                if ui.selectable_label(lang() == l, name).clicked() {
                    set_language(state, l);
                    ui.close_menu();
                }
            }
        });
    });
}

fn set_language(state: &mut AppState, l: Lang) {
    set_lang(l);
    if state.settings.ui.language != l {
        state.settings.ui.language = l;
        state.settings.save();
    }
}

/// Show the settings menu
pub fn settings_menu(ui: &mut egui::Ui, state: &mut AppState) {
    if ui.button(t("menu.settings")).clicked() {
        state.panels.settings_window = true;
    }
}

/// Show the settings window. Every change is written to disk immediately.
pub fn settings_window(ctx: &egui::Context, state: &mut AppState) {
    let mut open = state.panels.settings_window;
    let mut changed = false;
    egui::Window::new(t("settings.title"))
        .open(&mut open)
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            changed |= show_viewport_settings(ui, state);
            changed |= show_ui_settings(ui, state);
            changed |= show_settings_buttons(ui, state);
        });
    if changed {
        set_lang(state.settings.ui.language);
        state.settings.save();
    }
    state.panels.settings_window &= open;
}

fn color_row(ui: &mut egui::Ui, label: &str, rgb: &mut [u8; 3]) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.color_edit_button_srgb(rgb).changed()
    })
    .inner
}

fn show_viewport_settings(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    ui.heading(t("settings.viewport"));
    let viewport = &mut state.settings.viewport;
    let mut changed = color_row(ui, t("settings.background"), &mut viewport.background_color);
    changed |= color_row(ui, t("settings.selection"), &mut viewport.selection_color);
    changed |= ui
        .checkbox(&mut viewport.axis_labels, t("settings.axis_labels"))
        .changed();
    ui.add_space(10.0);
    changed
}

fn show_ui_settings(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    ui.heading(t("settings.ui"));
    let mut changed = ui
        .horizontal(|ui| {
            ui.label(t("settings.font_size"));
            ui.add(
                egui::DragValue::new(&mut state.settings.ui.font_size)
                    .speed(0.5)
                    .range(8.0..=24.0)
                    .suffix(" pt"),
            )
            .changed()
        })
        .inner;

    ui.horizontal(|ui| {
        ui.label(t("menu.language"));
        for (l, name) in [(Lang::Es, "Español"), (Lang::En, "English")] {
            changed |= ui
                .radio_value(&mut state.settings.ui.language, l, name)
                .changed();
        }
    });
    ui.add_space(10.0);
    changed
}

fn show_settings_buttons(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    ui.separator();
    ui.horizontal(|ui| {
        let reset = ui.button(t("settings.reset")).clicked();
        if reset {
            state.settings = AppSettings::default();
        }
        if ui.button(t("settings.close")).clicked() {
            state.panels.settings_window = false;
        }
        reset
    })
    .inner
}
