// Library crate: exposes testable modules for integration tests.
// GUI-specific modules (app, ui, viewport rendering) remain in the binary crate.

pub mod fixtures;
pub mod harness;
pub mod i18n;
pub mod shortcuts;
pub mod state;

/// Headless part of the viewport: scene composition, per-cube controllers,
/// camera, gizmo, picking and mesh generation.
/// Rendering (GL, software fallback, overlays) stays in the binary crate.
pub mod viewport {
    pub mod camera;
    pub mod composer;
    pub mod controller;
    pub mod gizmo;
    pub mod mesh;
    pub mod picking;
    pub mod scene_graph;
}
