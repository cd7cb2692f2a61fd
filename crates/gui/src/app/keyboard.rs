//! Keyboard shortcut handling

use eframe::egui;

use crate::shortcuts::RotationLockShortcut;
use crate::state::AppState;

/// Handle keyboard shortcuts for the application.
///
/// The rotation lock key is taken out of the input queue before any widget
/// runs, so it never scrolls a panel or activates a focused button.
pub fn handle_keyboard(
    ctx: &egui::Context,
    state: &mut AppState,
    shortcut: &RotationLockShortcut,
) {
    let toggles = ctx.input_mut(|i| shortcut.process(&mut i.events));
    for _ in 0..toggles {
        state.toggle_rotation_lock();
    }

    // Don't handle the remaining shortcuts when a text field is focused
    if ctx.memory(|m| m.focused().is_some()) {
        return;
    }

    // Delete — remove selected cube
    if ctx.input(|i| i.key_pressed(egui::Key::Delete)) && state.can_edit_selection() {
        state.delete_selected();
    }
}
