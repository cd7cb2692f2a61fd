//! Editor actions: selection lifecycle, mode flags and cube mutations

use std::path::Path;

use rand::Rng;
use shared::Cube;

use super::{AppState, CubeEvent, EditDraft};

impl AppState {
    /// Route a gesture reported by a cube controller
    pub fn handle_cube_event(&mut self, event: CubeEvent) {
        match event {
            CubeEvent::Select(index) => self.select_cube(index),
            CubeEvent::Commit { index, cube } => {
                self.commit_cube(index, cube);
            }
        }
    }

    /// Select a cube and load it into the draft
    pub fn select_cube(&mut self, index: usize) {
        if !self.debug_mode {
            tracing::debug!("Ignoring selection of cube {index} outside debug mode");
            return;
        }
        let Some(cube) = self.scene.get(index) else {
            tracing::warn!("Ignoring selection of missing cube {index}");
            return;
        };
        self.draft = EditDraft::from_cube(cube);
        if self.selection.primary() != Some(index) {
            tracing::info!("Selected cube {index}");
        }
        self.selection.select(index);
    }

    /// Replace one cube. A commit to the selected cube also refreshes the draft,
    /// so the edit fields always show what was stored.
    pub fn commit_cube(&mut self, index: usize, cube: Cube) -> bool {
        if !self.scene.replace_cube(index, cube) {
            return false;
        }
        tracing::debug!("Committed cube {index}");
        if self.selection.is_selected(index) {
            if let Some(committed) = self.scene.get(index) {
                self.draft = EditDraft::from_cube(committed);
            }
        }
        true
    }

    pub fn set_debug_mode(&mut self, enabled: bool) {
        if self.debug_mode != enabled {
            tracing::info!("Debug mode {}", if enabled { "on" } else { "off" });
        }
        self.debug_mode = enabled;
        if !enabled {
            self.selection.clear();
        }
    }

    /// Flip the rotation lock and return the new value
    pub fn toggle_rotation_lock(&mut self) -> bool {
        self.rotation_locked = !self.rotation_locked;
        tracing::info!(
            "Camera rotation {}",
            if self.rotation_locked { "locked" } else { "unlocked" }
        );
        self.rotation_locked
    }

    /// Append a random unit cube and return its index
    pub fn add_cube<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let cube = Cube::random(rng);
        tracing::info!("Adding cube {} at {:?}", cube.color, cube.position);
        self.scene.push_cube(cube)
    }

    /// Remove the selected cube. Returns it, or `None` when nothing is selected.
    pub fn delete_selected(&mut self) -> Option<Cube> {
        let index = self.selection.primary()?;
        let removed = self.scene.remove_cube(index);
        self.selection.on_removed(index);
        if removed.is_some() {
            tracing::info!("Deleted cube {index}");
        }
        removed
    }

    /// Overwrite the selected cube with the draft, position included as typed
    pub fn apply_draft(&mut self) -> bool {
        let Some(index) = self.selection.primary() else {
            return false;
        };
        let cube = self.draft.cube().clone();
        tracing::info!("Applying draft to cube {index}");
        self.commit_cube(index, cube)
    }

    pub fn project_json(&self) -> Result<String, String> {
        self.scene.project_json()
    }

    pub fn save_project(&self, path: &Path) -> Result<(), String> {
        self.scene.save_project(path)
    }
}
