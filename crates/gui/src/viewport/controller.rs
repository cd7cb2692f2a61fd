//! Per-cube interaction: click and drag gestures in, [`CubeEvent`]s out

use glam::DVec3;
use rand::Rng;
use shared::{rgb_to_f32, Cube, POSITION_LIMITS};

use super::gizmo::{GizmoAxis, TranslateHandle, TRANSLATION_SNAP};
use super::picking::Aabb;
use super::scene_graph::{MeshInstance, MeshNode};
use crate::state::CubeEvent;

/// Per-frame inputs a controller is synced with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerProps {
    pub selected: bool,
    pub debug_mode: bool,
}

/// Renders one cube and turns gestures on it into events.
///
/// The mesh is a projection of the committed [`Cube`]; it is only read back
/// at drag-end.
#[derive(Debug, Clone)]
pub struct CubeController {
    index: usize,
    node: MeshNode,
    selected: bool,
    /// Dimensions last projected onto the mesh scale
    applied_dimensions: Option<[f64; 3]>,
    handle: Option<TranslateHandle>,
}

impl CubeController {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            node: MeshNode::default(),
            selected: false,
            applied_dimensions: None,
            handle: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn node(&self) -> &MeshNode {
        &self.node
    }

    /// Project the committed cube onto the mesh and attach or detach the handle
    pub fn sync(&mut self, cube: &Cube, props: ControllerProps) {
        let dimensions = cube.dimensions();
        if self.applied_dimensions != Some(dimensions) {
            self.node.scale = DVec3::from_array(dimensions);
            self.applied_dimensions = Some(dimensions);
        }
        self.node.color = rgb_to_f32(cube.rgb());
        self.selected = props.selected;

        let committed = DVec3::from_array(cube.position);
        if !self.is_dragging() {
            self.node.position = committed;
        }

        if props.debug_mode && props.selected {
            let handle = self
                .handle
                .get_or_insert_with(|| TranslateHandle::new(TRANSLATION_SNAP, committed));
            handle.attach_to(self.node.position);
        } else if let Some(mut handle) = self.handle.take() {
            handle.cancel();
            self.node.position = committed;
        }
    }

    /// Click on the mesh: select in debug mode, recolour otherwise
    pub fn click<R: Rng + ?Sized>(&self, cube: &Cube, debug_mode: bool, rng: &mut R) -> CubeEvent {
        if debug_mode {
            return CubeEvent::Select(self.index);
        }
        let color = shared::random_palette_color(rng);
        tracing::debug!("Recolouring cube {} to {color}", self.index);
        CubeEvent::Commit {
            index: self.index,
            cube: Cube {
                color,
                ..cube.clone()
            },
        }
    }

    pub fn has_handle(&self) -> bool {
        self.handle.is_some()
    }

    pub fn handle(&self) -> Option<&TranslateHandle> {
        self.handle.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| h.dragging)
    }

    /// Start dragging. Fails when no handle is attached.
    pub fn begin_drag(&mut self, axis: Option<GizmoAxis>) -> bool {
        let Some(handle) = self.handle.as_mut() else {
            return false;
        };
        handle.begin(axis);
        true
    }

    pub fn drag_along(&mut self, axis: GizmoAxis, delta: f64) {
        if let Some(handle) = self.handle.as_mut() {
            handle.drag_along(axis, delta);
            self.node.position = handle.live();
        }
    }

    /// Move the live mesh to a raw (unclamped) position
    pub fn drag_to(&mut self, raw: DVec3) {
        if let Some(handle) = self.handle.as_mut() {
            handle.drag_to(raw);
            self.node.position = handle.live();
        }
    }

    /// Finish the drag: clamp, write the clamped value back onto the mesh and
    /// report a commit if the position actually changed.
    pub fn end_drag(&mut self, cube: &Cube) -> Option<CubeEvent> {
        let live = self.handle.as_mut()?.finish()?;
        let clamped = POSITION_LIMITS.clamp_position(live.to_array());
        self.node.position = DVec3::from_array(clamped);
        if let Some(handle) = self.handle.as_mut() {
            handle.attach_to(self.node.position);
        }

        if clamped == cube.position {
            return None;
        }
        tracing::info!("Cube {} dragged to {:?}", self.index, clamped);
        Some(CubeEvent::Commit {
            index: self.index,
            cube: Cube {
                position: clamped,
                ..cube.clone()
            },
        })
    }

    /// World-space box of the live mesh
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_scale(self.node.position, self.node.scale)
    }

    pub fn live_position(&self) -> DVec3 {
        self.node.position
    }

    pub fn instance(&self) -> MeshInstance {
        MeshInstance {
            position: self.node.position.as_vec3(),
            scale: self.node.scale.as_vec3(),
            color: self.node.color,
            selected: self.selected,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    const SELECTED_DEBUG: ControllerProps = ControllerProps {
        selected: true,
        debug_mode: true,
    };

    fn cube() -> Cube {
        Cube::unit("#ff0000", [-2.0, 0.5, -1.0])
    }

    #[test]
    fn test_sync_projects_cube() {
        let mut c = CubeController::new(0);
        let mut cube = cube();
        cube.width = 2.0;
        c.sync(&cube, ControllerProps { selected: false, debug_mode: false });
        assert_eq!(c.node().position, DVec3::new(-2.0, 0.5, -1.0));
        assert_eq!(c.node().scale, DVec3::new(2.0, 1.0, 1.0));
        assert_eq!(c.node().color, [1.0, 0.0, 0.0]);
        assert!(!c.has_handle());
    }

    #[test]
    fn test_handle_only_when_selected_in_debug() {
        let mut c = CubeController::new(0);
        c.sync(&cube(), ControllerProps { selected: true, debug_mode: false });
        assert!(!c.has_handle());
        c.sync(&cube(), ControllerProps { selected: false, debug_mode: true });
        assert!(!c.has_handle());
        c.sync(&cube(), SELECTED_DEBUG);
        assert!(c.has_handle());
        assert_eq!(c.handle().unwrap().snap, 0.1);
    }

    #[test]
    fn test_click_in_debug_selects() {
        let c = CubeController::new(4);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(c.click(&cube(), true, &mut rng), CubeEvent::Select(4));
    }

    #[test]
    fn test_click_outside_debug_recolours_only() {
        let c = CubeController::new(2);
        let mut rng = StdRng::seed_from_u64(3);
        let original = cube();
        match c.click(&original, false, &mut rng) {
            CubeEvent::Commit { index, cube } => {
                assert_eq!(index, 2);
                assert!(shared::PALETTE.contains(&cube.color.as_str()));
                assert_eq!(cube.position, original.position);
                assert_eq!(cube.dimensions(), original.dimensions());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_drag_out_of_bounds_clamps_and_snaps_back() {
        let mut c = CubeController::new(0);
        let cube = cube();
        c.sync(&cube, SELECTED_DEBUG);
        assert!(c.begin_drag(None));
        c.drag_to(DVec3::new(8.0, 0.5, -1.0));
        assert_eq!(c.live_position().x, 8.0);

        let event = c.end_drag(&cube).unwrap();
        let CubeEvent::Commit { index, cube: moved } = event else {
            panic!("expected commit");
        };
        assert_eq!(index, 0);
        assert_eq!(moved.position, [5.0, 0.5, -1.0]);
        assert_eq!(moved.color, cube.color);
        assert_eq!(c.live_position(), DVec3::new(5.0, 0.5, -1.0));
    }

    #[test]
    fn test_drag_without_change_commits_nothing() {
        let mut c = CubeController::new(0);
        let cube = cube();
        c.sync(&cube, SELECTED_DEBUG);
        c.begin_drag(Some(GizmoAxis::Y));
        c.drag_along(GizmoAxis::Y, 0.02);
        assert!(c.end_drag(&cube).is_none());
    }

    #[test]
    fn test_drag_below_ground_is_clamped() {
        let mut c = CubeController::new(0);
        let cube = cube();
        c.sync(&cube, SELECTED_DEBUG);
        c.begin_drag(Some(GizmoAxis::Y));
        c.drag_along(GizmoAxis::Y, -3.0);
        let Some(CubeEvent::Commit { cube: moved, .. }) = c.end_drag(&cube) else {
            panic!("expected commit");
        };
        assert_eq!(moved.position, [-2.0, 0.0, -1.0]);
    }

    #[test]
    fn test_begin_drag_needs_handle() {
        let mut c = CubeController::new(0);
        c.sync(&cube(), ControllerProps { selected: false, debug_mode: true });
        assert!(!c.begin_drag(None));
        assert!(c.end_drag(&cube()).is_none());
    }

    #[test]
    fn test_deselect_mid_drag_restores_committed_position() {
        let mut c = CubeController::new(0);
        let cube = cube();
        c.sync(&cube, SELECTED_DEBUG);
        c.begin_drag(None);
        c.drag_to(DVec3::new(1.0, 1.0, 1.0));
        c.sync(&cube, ControllerProps { selected: false, debug_mode: false });
        assert!(!c.is_dragging());
        assert_eq!(c.live_position(), DVec3::new(-2.0, 0.5, -1.0));
    }

    #[test]
    fn test_position_not_resynced_while_dragging() {
        let mut c = CubeController::new(0);
        let cube = cube();
        c.sync(&cube, SELECTED_DEBUG);
        c.begin_drag(None);
        c.drag_to(DVec3::new(0.0, 2.0, 0.0));
        c.sync(&cube, SELECTED_DEBUG);
        assert_eq!(c.live_position(), DVec3::new(0.0, 2.0, 0.0));
    }
}
