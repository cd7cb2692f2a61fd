//! Edit panel for the selected cube
//!
//! Fields write into the draft; nothing reaches the scene until "Apply".

use egui::Ui;

use crate::i18n::t;
use crate::state::{AppState, Dimension};

const AXIS_LABELS: [&str; 3] = ["X", "Y", "Z"];

pub fn show(ui: &mut Ui, state: &mut AppState, index: usize) {
    ui.heading(format!("{} {}", t("edit.title"), index + 1));
    ui.add_space(4.0);

    egui::Grid::new("edit_cube_grid")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            let draft = state.draft_mut();
            for dim in Dimension::ALL {
                ui.label(t(dim.label_key()));
                let field = egui::TextEdit::singleline(draft.dimension_text_mut(dim));
                if ui.add(field).changed() {
                    draft.reparse_dimension(dim);
                }
                ui.end_row();
            }

            ui.label(t("edit.color"));
            let mut rgb = draft.cube().rgb();
            if ui.color_edit_button_srgb(&mut rgb).changed() {
                draft.set_color_rgb(rgb);
            }
            ui.end_row();
        });

    ui.add_space(4.0);
    ui.label(t("edit.position"));
    ui.horizontal(|ui| {
        let draft = state.draft_mut();
        for (axis, label) in AXIS_LABELS.iter().enumerate() {
            ui.weak(*label);
            let field = egui::TextEdit::singleline(draft.position_text_mut(axis)).desired_width(48.0);
            if ui.add(field).changed() {
                draft.reparse_position(axis);
            }
        }
    });

    ui.add_space(6.0);
    if ui
        .add_sized(
            egui::vec2(ui.available_width(), 0.0),
            egui::Button::new(t("edit.apply")).fill(egui::Color32::from_rgb(22, 101, 52)),
        )
        .clicked()
    {
        state.apply_draft();
    }
}
