use glam::{DVec3, Vec3};

use super::camera::OrbitCamera;
use super::mesh::{push_line_vert, LineMeshData};
use super::picking::Ray;

/// Translation quantisation step of the drag handle, in world units
pub const TRANSLATION_SNAP: f64 = 0.1;

/// Length of the drawn gizmo arrows
pub const GIZMO_LENGTH: f32 = 1.5;

/// Which axis a gizmo handle belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GizmoAxis {
    X,
    Y,
    Z,
}

impl GizmoAxis {
    pub const ALL: [GizmoAxis; 3] = [GizmoAxis::X, GizmoAxis::Y, GizmoAxis::Z];

    pub fn index(self) -> usize {
        match self {
            GizmoAxis::X => 0,
            GizmoAxis::Y => 1,
            GizmoAxis::Z => 2,
        }
    }

    pub fn dir(self) -> Vec3 {
        match self {
            GizmoAxis::X => Vec3::X,
            GizmoAxis::Y => Vec3::Y,
            GizmoAxis::Z => Vec3::Z,
        }
    }
}

/// Round `value` to the nearest multiple of `step`
pub fn snap_value(value: f64, step: f64) -> f64 {
    if step <= 0.0 {
        return value;
    }
    // Dividing by the reciprocal keeps e.g. 3 * 0.1 at exactly 0.3
    (value / step).round() / step.recip()
}

/// Translation-only drag handle attached to one mesh.
///
/// The handle moves freely while dragging; nothing leaves it until
/// [`TranslateHandle::finish`] hands the live position back to the owner.
#[derive(Debug, Clone)]
pub struct TranslateHandle {
    pub snap: f64,
    /// Currently dragged axis
    pub active_axis: Option<GizmoAxis>,
    /// Whether a gizmo drag is in progress
    pub dragging: bool,
    /// Position the drag started from
    origin: DVec3,
    /// Unsnapped accumulated movement since the drag started
    offset: DVec3,
    /// Position shown on the mesh while dragging
    live: DVec3,
}

impl TranslateHandle {
    pub fn new(snap: f64, position: DVec3) -> Self {
        Self {
            snap,
            active_axis: None,
            dragging: false,
            origin: position,
            offset: DVec3::ZERO,
            live: position,
        }
    }

    pub fn live(&self) -> DVec3 {
        self.live
    }

    /// Re-anchor an idle handle on the mesh's current position
    pub fn attach_to(&mut self, position: DVec3) {
        if !self.dragging {
            self.origin = position;
            self.offset = DVec3::ZERO;
            self.live = position;
        }
    }

    pub fn begin(&mut self, axis: Option<GizmoAxis>) {
        self.active_axis = axis;
        self.dragging = true;
        self.origin = self.live;
        self.offset = DVec3::ZERO;
    }

    /// Move along one axis by an unsnapped world delta
    pub fn drag_along(&mut self, axis: GizmoAxis, delta: f64) {
        if !self.dragging {
            return;
        }
        let i = axis.index();
        self.offset[i] += delta;
        self.live[i] = snap_value(self.origin[i] + self.offset[i], self.snap);
    }

    /// Move to an arbitrary raw position, snapping every axis
    pub fn drag_to(&mut self, raw: DVec3) {
        if !self.dragging {
            return;
        }
        self.offset = raw - self.origin;
        for i in 0..3 {
            self.live[i] = snap_value(raw[i], self.snap);
        }
    }

    /// End the drag and return the live position
    pub fn finish(&mut self) -> Option<DVec3> {
        if !self.dragging {
            return None;
        }
        self.active_axis = None;
        self.dragging = false;
        self.offset = DVec3::ZERO;
        self.origin = self.live;
        Some(self.live)
    }

    /// Abandon the drag, returning to where it started
    pub fn cancel(&mut self) {
        if self.dragging {
            self.live = self.origin;
        }
        self.active_axis = None;
        self.dragging = false;
        self.offset = DVec3::ZERO;
    }
}

/// Test if a ray hits one of the gizmo axes.
/// Returns the axis if the ray passes within `threshold` distance of an axis line.
pub fn gizmo_hit_test(ray: &Ray, center: Vec3, axis_length: f32) -> Option<GizmoAxis> {
    let threshold = 0.15;
    let mut best: Option<(GizmoAxis, f32)> = None;

    for axis in GizmoAxis::ALL {
        let line_start = center;
        let line_end = center + axis.dir() * axis_length;

        let dist = ray_line_distance(ray, line_start, line_end);

        if dist < threshold && best.as_ref().is_none_or(|(_, d)| dist < *d) {
            best = Some((axis, dist));
        }
    }

    best.map(|(axis, _)| axis)
}

/// Compute the world-space translation along `axis` for a screen-space drag.
/// Projects the drag onto the axis as it appears on screen.
pub fn compute_drag_delta(
    camera: &OrbitCamera,
    center: Vec3,
    axis: GizmoAxis,
    screen_delta: egui::Vec2,
    rect: egui::Rect,
) -> f32 {
    let p0 = camera.project(center.to_array(), rect);
    let p1 = camera.project((center + axis.dir()).to_array(), rect);

    let (Some(screen_p0), Some(screen_p1)) = (p0, p1) else {
        return 0.0;
    };

    let screen_axis = screen_p1 - screen_p0;
    let screen_axis_len = screen_axis.length();

    if screen_axis_len < 1.0 {
        return 0.0;
    }

    let projected = screen_delta.dot(screen_axis / screen_axis_len);

    // 1 world unit = screen_axis_len pixels
    projected / screen_axis_len
}

/// Build gizmo line mesh at the given center point.
/// The active axis is drawn in yellow.
pub fn build_gizmo_lines(center: Vec3, length: f32, active: Option<GizmoAxis>) -> LineMeshData {
    let mut vertices = Vec::new();
    let arrow = length * 0.15;

    for axis in GizmoAxis::ALL {
        let color = if active == Some(axis) {
            [1.0_f32, 0.9, 0.1, 1.0]
        } else {
            match axis {
                GizmoAxis::X => [0.9, 0.2, 0.2, 1.0],
                GizmoAxis::Y => [0.2, 0.8, 0.2, 1.0],
                GizmoAxis::Z => [0.2, 0.3, 0.9, 1.0],
            }
        };
        let dir = axis.dir();
        // Any axis orthogonal to `dir` works for the arrowhead barbs
        let side = if axis == GizmoAxis::Y { Vec3::X } else { Vec3::Y };
        let tip = center + dir * length;

        let segments = [
            (center, tip),
            (tip, tip - dir * arrow + side * arrow * 0.5),
            (tip, tip - dir * arrow - side * arrow * 0.5),
        ];
        for (a, b) in segments {
            push_line_vert(&mut vertices, a.x, a.y, a.z, color);
            push_line_vert(&mut vertices, b.x, b.y, b.z, color);
        }
    }

    LineMeshData { vertices }
}

/// Minimum distance between a ray and a line segment.
fn ray_line_distance(ray: &Ray, line_start: Vec3, line_end: Vec3) -> f32 {
    let u = ray.direction;
    let v = line_end - line_start;
    let w = ray.origin - line_start;

    let a = u.dot(u); // always >= 0
    let b = u.dot(v);
    let c = v.dot(v); // always >= 0
    let d = u.dot(w);
    let e = v.dot(w);

    let denom = a * c - b * b;

    let (sc, tc);

    if denom < 1e-7 {
        // Nearly parallel
        sc = 0.0;
        tc = if b > c { d / b } else { e / c };
    } else {
        sc = (b * e - c * d) / denom;
        tc = (a * e - b * d) / denom;
    }

    // Clamp tc to [0,1] (line segment)
    let tc = tc.clamp(0.0, 1.0);
    // Only consider positive ray parameter
    let sc = sc.max(0.0);

    let closest_ray = ray.origin + u * sc;
    let closest_line = line_start + v * tc;

    (closest_ray - closest_line).length()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_value() {
        assert_eq!(snap_value(0.34, 0.1), 0.3);
        assert_eq!(snap_value(0.36, 0.1), 0.4);
        assert_eq!(snap_value(-1.04, 0.1), -1.0);
        assert_eq!(snap_value(8.0, 0.1), 8.0);
        assert_eq!(snap_value(1.234, 0.0), 1.234);
    }

    #[test]
    fn test_drag_along_snaps_only_dragged_axis() {
        let mut h = TranslateHandle::new(TRANSLATION_SNAP, DVec3::new(-2.0, 0.5, -1.0));
        h.begin(Some(GizmoAxis::X));
        h.drag_along(GizmoAxis::X, 0.27);
        assert_eq!(h.live(), DVec3::new(-1.7, 0.5, -1.0));
        // Small moves accumulate until they cross a snap step
        h.drag_along(GizmoAxis::X, 0.02);
        assert_eq!(h.live().x, -1.7);
        h.drag_along(GizmoAxis::X, 0.04);
        assert_eq!(h.live().x, -1.7);
        h.drag_along(GizmoAxis::X, 0.05);
        assert_eq!(h.live().x, -1.6);
        assert_eq!(h.finish(), Some(h.live()));
        assert!(!h.dragging);
    }

    #[test]
    fn test_idle_handle_ignores_moves() {
        let mut h = TranslateHandle::new(TRANSLATION_SNAP, DVec3::ZERO);
        h.drag_along(GizmoAxis::Y, 3.0);
        h.drag_to(DVec3::splat(2.0));
        assert_eq!(h.live(), DVec3::ZERO);
        assert_eq!(h.finish(), None);
    }

    #[test]
    fn test_cancel_restores_origin() {
        let mut h = TranslateHandle::new(TRANSLATION_SNAP, DVec3::new(1.0, 1.0, 1.0));
        h.begin(None);
        h.drag_to(DVec3::new(4.0, 1.0, 1.0));
        h.cancel();
        assert_eq!(h.live(), DVec3::new(1.0, 1.0, 1.0));
        assert!(!h.dragging);
    }

    #[test]
    fn test_hit_test_picks_axis() {
        // Ray straight down onto the middle of the X arrow
        let ray = Ray {
            origin: Vec3::new(0.75, 10.0, 0.0),
            direction: Vec3::NEG_Y,
        };
        assert_eq!(gizmo_hit_test(&ray, Vec3::ZERO, GIZMO_LENGTH), Some(GizmoAxis::X));

        let miss = Ray {
            origin: Vec3::new(0.75, 10.0, 1.0),
            direction: Vec3::NEG_Y,
        };
        assert_eq!(gizmo_hit_test(&miss, Vec3::ZERO, GIZMO_LENGTH), None);
    }

    #[test]
    fn test_gizmo_lines_vertex_count() {
        let lines = build_gizmo_lines(Vec3::ZERO, 1.0, Some(GizmoAxis::Z));
        // 3 axes × (shaft + 2 barbs) × 2 endpoints
        assert_eq!(lines.vertex_count(), 18);
    }
}
