//! Headless test harness driving the editor the way the UI does.
//!
//! Wires an [`AppState`] to a [`SceneComposer`] with a seeded RNG so
//! integration tests can click, drag, edit and save without a window.

use glam::DVec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::Cube;

use crate::fixtures;
use crate::shortcuts::{RotationLockShortcut, ROTATION_LOCK_KEY};
use crate::state::{AppState, Dimension, EditDraft};
use crate::viewport::composer::{SceneComposer, SceneProps};
use crate::viewport::gizmo::GizmoAxis;

/// Headless editor: state, composed scene and keyboard shortcut
pub struct EditorHarness {
    state: AppState,
    composer: SceneComposer,
    shortcut: RotationLockShortcut,
    rng: StdRng,
}

impl EditorHarness {
    /// Editor with the six default cubes.
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_state(fixtures::default_app_state(), seed)
    }

    pub fn with_cubes(cubes: Vec<Cube>) -> Self {
        Self::from_state(fixtures::app_state(cubes), 0)
    }

    fn from_state(state: AppState, seed: u64) -> Self {
        let mut harness = Self {
            state,
            composer: SceneComposer::new(),
            shortcut: RotationLockShortcut::install(),
            rng: StdRng::seed_from_u64(seed),
        };
        harness.render();
        harness
    }

    /// Re-compose the scene from the current state
    pub fn render(&mut self) {
        self.composer.compose(SceneProps {
            cubes: self.state.cubes(),
            selected: self.state.selected(),
            debug_mode: self.state.debug_mode(),
            rotation_locked: self.state.rotation_locked(),
        });
    }

    // ── Controls panel ────────────────────────────────────────

    pub fn set_debug_mode(&mut self, enabled: bool) {
        self.state.set_debug_mode(enabled);
        self.render();
    }

    pub fn add_cube(&mut self) -> usize {
        let index = self.state.add_cube(&mut self.rng);
        self.render();
        index
    }

    pub fn delete_selected(&mut self) -> Option<Cube> {
        let removed = self.state.delete_selected();
        self.render();
        removed
    }

    pub fn set_dimension_text(&mut self, dim: Dimension, text: &str) {
        self.state.draft_mut().set_dimension_text(dim, text);
    }

    pub fn set_position_text(&mut self, axis: usize, text: &str) {
        self.state.draft_mut().set_position_text(axis, text);
    }

    pub fn set_color_rgb(&mut self, rgb: [u8; 3]) {
        self.state.draft_mut().set_color_rgb(rgb);
    }

    pub fn apply(&mut self) -> bool {
        let applied = self.state.apply_draft();
        self.render();
        applied
    }

    pub fn save_json(&self) -> Result<String, String> {
        self.state.project_json()
    }

    // ── Viewport gestures ─────────────────────────────────────

    /// Click cube `index`. Returns false if there is no such cube.
    pub fn click_cube(&mut self, index: usize) -> bool {
        let event = self.composer.click_cube(
            index,
            self.state.cubes(),
            self.state.debug_mode(),
            &mut self.rng,
        );
        let Some(event) = event else {
            return false;
        };
        self.state.handle_cube_event(event);
        self.render();
        true
    }

    /// Click empty space: nothing is selected or deselected
    pub fn click_background(&mut self) {
        self.render();
    }

    /// Drag cube `index` to a raw position and release.
    /// Returns false when the cube carries no drag handle.
    pub fn drag_cube_to(&mut self, index: usize, raw: [f64; 3]) -> bool {
        self.drag(index, |controller| {
            controller.drag_to(DVec3::from_array(raw));
        })
    }

    /// Drag cube `index` along one gizmo axis and release.
    pub fn drag_cube_along(&mut self, index: usize, axis: GizmoAxis, delta: f64) -> bool {
        self.drag(index, |controller| controller.drag_along(axis, delta))
    }

    fn drag(
        &mut self,
        index: usize,
        gesture: impl FnOnce(&mut crate::viewport::controller::CubeController),
    ) -> bool {
        let Some(cube) = self.state.cubes().get(index).cloned() else {
            return false;
        };
        let Some(controller) = self.composer.controller_mut(index) else {
            return false;
        };
        if !controller.begin_drag(None) {
            return false;
        }
        gesture(controller);
        if let Some(event) = controller.end_drag(&cube) {
            self.state.handle_cube_event(event);
        }
        self.render();
        true
    }

    // ── Keyboard ──────────────────────────────────────────────

    /// Deliver raw egui events through the rotation lock shortcut.
    /// Returns the events left for the rest of the UI.
    pub fn send_events(&mut self, mut events: Vec<egui::Event>) -> Vec<egui::Event> {
        let toggles = self.shortcut.process(&mut events);
        for _ in 0..toggles {
            self.state.toggle_rotation_lock();
        }
        self.render();
        events
    }

    /// One press and release of the rotation lock key
    pub fn press_rotation_key(&mut self) -> Vec<egui::Event> {
        let key = |pressed| egui::Event::Key {
            key: ROTATION_LOCK_KEY,
            physical_key: Some(ROTATION_LOCK_KEY),
            pressed,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        };
        self.send_events(vec![key(true), egui::Event::Text(" ".into()), key(false)])
    }

    // ── Inspection ────────────────────────────────────────────

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn composer(&self) -> &SceneComposer {
        &self.composer
    }

    pub fn cubes(&self) -> &[Cube] {
        self.state.cubes()
    }

    pub fn cube_count(&self) -> usize {
        self.state.cubes().len()
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn draft(&self) -> &EditDraft {
        self.state.draft()
    }

    pub fn rotation_locked(&self) -> bool {
        self.state.rotation_locked()
    }
}

impl Default for EditorHarness {
    fn default() -> Self {
        Self::new()
    }
}
