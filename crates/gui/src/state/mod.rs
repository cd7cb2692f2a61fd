pub mod draft;
pub mod scene;
pub mod selection;
pub mod settings;

mod editor_ops;

use shared::Cube;

pub use draft::{Dimension, EditDraft};
pub use scene::SceneState;
use selection::SelectionState;
pub use settings::{AppSettings, UiSettings, ViewportSettings};

/// Gesture reported upward by a cube controller
#[derive(Debug, Clone, PartialEq)]
pub enum CubeEvent {
    /// Select the cube at this index (debug mode only)
    Select(usize),
    /// Replace the cube at `index` with `cube`
    Commit { index: usize, cube: Cube },
}

/// Panel visibility flags
#[derive(Debug, Clone, Default)]
pub struct PanelVisibility {
    pub instructions: bool,
    pub settings_window: bool,
}

/// Combined application state.
///
/// The only owner of the cube list, the selection, the mode flags and the
/// edit draft. Everything else reads it and reports gestures back through
/// `handle_cube_event` and the action methods.
pub struct AppState {
    scene: SceneState,
    selection: SelectionState,
    draft: EditDraft,
    debug_mode: bool,
    rotation_locked: bool,
    pub panels: PanelVisibility,
    pub settings: AppSettings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(AppSettings::load())
    }
}

impl AppState {
    /// Fresh editor with the six default cubes
    pub fn with_settings(settings: AppSettings) -> Self {
        Self::with_cubes(shared::default_cubes(), settings)
    }

    pub fn with_cubes(cubes: Vec<Cube>, settings: AppSettings) -> Self {
        Self {
            scene: SceneState::new(cubes),
            selection: SelectionState::default(),
            draft: EditDraft::default(),
            debug_mode: false,
            rotation_locked: false,
            panels: PanelVisibility::default(),
            settings,
        }
    }

    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    pub fn cubes(&self) -> &[Cube] {
        self.scene.cubes()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selected(&self) -> Option<usize> {
        self.selection.primary()
    }

    pub fn draft(&self) -> &EditDraft {
        &self.draft
    }

    /// The edit panel writes its fields straight into the draft
    pub fn draft_mut(&mut self) -> &mut EditDraft {
        &mut self.draft
    }

    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    pub fn rotation_locked(&self) -> bool {
        self.rotation_locked
    }

    /// Delete button and edit panel are shown only in this state
    pub fn can_edit_selection(&self) -> bool {
        self.debug_mode && self.selection.has_selection()
    }
}
