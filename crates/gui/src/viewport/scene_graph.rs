//! Retained scene description handed to the renderers

use glam::{DVec3, Vec3};

/// Handle of an auxiliary node in the [`SceneGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

/// Auxiliary, non-cube scene nodes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HelperNode {
    /// RGB axis indicator rooted at the origin
    Axes { size: f32 },
}

/// Auxiliary nodes added on top of the static scene
#[derive(Debug, Default)]
pub struct SceneGraph {
    next_id: u64,
    helpers: Vec<(NodeId, HelperNode)>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_helper(&mut self, node: HelperNode) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.helpers.push((id, node));
        tracing::debug!("Scene graph: added {:?} as {:?}", node, id);
        id
    }

    /// Returns false if the node was already gone
    pub fn remove_helper(&mut self, id: NodeId) -> bool {
        let before = self.helpers.len();
        self.helpers.retain(|(node_id, _)| *node_id != id);
        let removed = self.helpers.len() != before;
        if removed {
            tracing::debug!("Scene graph: removed {:?}", id);
        }
        removed
    }

    pub fn helpers(&self) -> impl Iterator<Item = &HelperNode> {
        self.helpers.iter().map(|(_, node)| node)
    }

    pub fn helper_count(&self) -> usize {
        self.helpers.len()
    }
}

/// Transform and material of one rendered cube
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshNode {
    pub position: DVec3,
    pub scale: DVec3,
    pub color: [f32; 3],
}

impl Default for MeshNode {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            scale: DVec3::ONE,
            color: [1.0, 1.0, 1.0],
        }
    }
}

/// Ambient light plus a single point light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    pub ambient: f32,
    pub point_light: Vec3,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: 0.5,
            point_light: Vec3::new(10.0, 10.0, 10.0),
        }
    }
}

/// Square ground plane lying on y = 0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundPlane {
    pub size: f32,
    pub color: [f32; 3],
}

impl Default for GroundPlane {
    fn default() -> Self {
        Self {
            size: 10.0,
            color: [0.8, 0.8, 0.8],
        }
    }
}

/// One cube as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshInstance {
    pub position: Vec3,
    pub scale: Vec3,
    pub color: [f32; 3],
    pub selected: bool,
}

/// Snapshot of everything the renderers draw in one frame
#[derive(Debug, Clone)]
pub struct RenderList {
    pub meshes: Vec<MeshInstance>,
    pub ground: GroundPlane,
    pub helpers: Vec<HelperNode>,
    /// Center of the translation gizmo and its active axis, if a handle is attached
    pub gizmo: Option<(Vec3, Option<super::gizmo::GizmoAxis>)>,
    pub lighting: Lighting,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_remove_helper() {
        let mut graph = SceneGraph::new();
        let a = graph.add_helper(HelperNode::Axes { size: 5.0 });
        let b = graph.add_helper(HelperNode::Axes { size: 1.0 });
        assert_ne!(a, b);
        assert_eq!(graph.helper_count(), 2);

        assert!(graph.remove_helper(a));
        assert!(!graph.remove_helper(a));
        assert_eq!(graph.helpers().collect::<Vec<_>>(), vec![&HelperNode::Axes { size: 1.0 }]);
    }

    #[test]
    fn test_static_scene_defaults() {
        let ground = GroundPlane::default();
        assert_eq!(ground.size, 10.0);
        let light = Lighting::default();
        assert_eq!(light.ambient, 0.5);
        assert_eq!(light.point_light, Vec3::splat(10.0));
    }
}
