//! Static scene plus one controller per cube, reacting to the mode flags

use rand::Rng;
use shared::Cube;

use super::camera::OrbitCamera;
use super::controller::{ControllerProps, CubeController};
use super::picking::{pick_nearest, Aabb, Ray};
use super::scene_graph::{GroundPlane, HelperNode, Lighting, NodeId, RenderList, SceneGraph};
use crate::state::CubeEvent;

/// Size of the axis indicator shown in debug mode
pub const AXES_HELPER_SIZE: f32 = 5.0;

/// Everything the composer reads from the editor state each frame
#[derive(Debug, Clone, Copy)]
pub struct SceneProps<'a> {
    pub cubes: &'a [Cube],
    pub selected: Option<usize>,
    pub debug_mode: bool,
    pub rotation_locked: bool,
}

pub struct SceneComposer {
    graph: SceneGraph,
    camera: OrbitCamera,
    lighting: Lighting,
    ground: GroundPlane,
    controllers: Vec<CubeController>,
    axes_helper: Option<NodeId>,
}

impl Default for SceneComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneComposer {
    pub fn new() -> Self {
        Self {
            graph: SceneGraph::new(),
            camera: OrbitCamera::new(),
            lighting: Lighting::default(),
            ground: GroundPlane::default(),
            controllers: Vec::new(),
            axes_helper: None,
        }
    }

    /// Bring the scene in line with the editor state
    pub fn compose(&mut self, props: SceneProps<'_>) {
        self.set_debug_helpers(props.debug_mode);
        self.camera.controls.enable_rotate = !props.rotation_locked;
        self.camera.controls.enable_pan = true;
        self.camera.controls.enable_zoom = true;

        self.controllers.truncate(props.cubes.len());
        let start = self.controllers.len();
        self.controllers
            .extend((start..props.cubes.len()).map(CubeController::new));

        for (controller, cube) in self.controllers.iter_mut().zip(props.cubes) {
            controller.sync(
                cube,
                ControllerProps {
                    selected: props.selected == Some(controller.index()),
                    debug_mode: props.debug_mode,
                },
            );
        }
    }

    fn set_debug_helpers(&mut self, enabled: bool) {
        match (enabled, self.axes_helper) {
            (true, None) => {
                let id = self.graph.add_helper(HelperNode::Axes {
                    size: AXES_HELPER_SIZE,
                });
                self.axes_helper = Some(id);
            }
            (false, Some(id)) => {
                self.graph.remove_helper(id);
                self.axes_helper = None;
            }
            _ => {}
        }
    }

    /// Remove every auxiliary node this composer added
    pub fn teardown(&mut self) {
        if let Some(id) = self.axes_helper.take() {
            self.graph.remove_helper(id);
        }
    }

    /// Click on cube `index`; `None` when the index has no controller
    pub fn click_cube<R: Rng + ?Sized>(
        &self,
        index: usize,
        cubes: &[Cube],
        debug_mode: bool,
        rng: &mut R,
    ) -> Option<CubeEvent> {
        let controller = self.controllers.get(index)?;
        let cube = cubes.get(index)?;
        Some(controller.click(cube, debug_mode, rng))
    }

    /// Index of the nearest cube hit by `ray`
    pub fn pick(&self, ray: &Ray) -> Option<usize> {
        let boxes: Vec<Aabb> = self.controllers.iter().map(|c| c.aabb()).collect();
        pick_nearest(ray, &boxes)
    }

    pub fn controller(&self, index: usize) -> Option<&CubeController> {
        self.controllers.get(index)
    }

    pub fn controller_mut(&mut self, index: usize) -> Option<&mut CubeController> {
        self.controllers.get_mut(index)
    }

    pub fn controllers(&self) -> &[CubeController] {
        &self.controllers
    }

    /// The controller currently carrying a drag handle
    pub fn handle_owner(&self) -> Option<usize> {
        self.controllers.iter().position(|c| c.has_handle())
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    pub fn reset_camera(&mut self) {
        let controls = self.camera.controls;
        self.camera = OrbitCamera::new();
        self.camera.controls = controls;
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn render_list(&self) -> RenderList {
        let gizmo = self.controllers.iter().find_map(|c| {
            c.handle()
                .map(|h| (c.live_position().as_vec3(), h.active_axis))
        });
        RenderList {
            meshes: self.controllers.iter().map(|c| c.instance()).collect(),
            ground: self.ground,
            helpers: self.graph.helpers().copied().collect(),
            gizmo,
            lighting: self.lighting,
        }
    }
}

impl Drop for SceneComposer {
    fn drop(&mut self) {
        self.teardown();
    }
}
