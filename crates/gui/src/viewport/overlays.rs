//! Viewport overlay drawing (axis labels, drag readout)

use egui::Painter;

use super::camera::OrbitCamera;
use super::scene_graph::{HelperNode, RenderList};

/// Label the tips of every axes helper in the scene
pub fn draw_axis_labels(painter: &Painter, rect: egui::Rect, camera: &OrbitCamera, list: &RenderList) {
    for helper in &list.helpers {
        let HelperNode::Axes { size } = *helper;
        let tip = size + 0.3;
        let labels = [
            ([tip, 0.0, 0.0], "X", egui::Color32::from_rgb(220, 70, 70)),
            ([0.0, tip, 0.0], "Y", egui::Color32::from_rgb(70, 200, 70)),
            ([0.0, 0.0, tip], "Z", egui::Color32::from_rgb(70, 110, 220)),
        ];

        for (pos, label, color) in labels {
            if let Some(screen) = camera.project(pos, rect) {
                if rect.contains(screen) {
                    painter.text(
                        screen,
                        egui::Align2::CENTER_CENTER,
                        label,
                        egui::FontId::monospace(14.0),
                        color,
                    );
                }
            }
        }
    }
}

/// Live (snapped, not yet clamped) position next to a cube being dragged
pub fn draw_drag_readout(
    painter: &Painter,
    rect: egui::Rect,
    camera: &OrbitCamera,
    position: glam::DVec3,
) {
    let Some(screen) = camera.project(position.as_vec3().to_array(), rect) else {
        return;
    };
    let in_bounds = shared::POSITION_LIMITS.contains(position.to_array());
    let color = if in_bounds {
        egui::Color32::from_rgb(230, 230, 230)
    } else {
        egui::Color32::from_rgb(255, 140, 60)
    };
    painter.text(
        screen + egui::vec2(14.0, -14.0),
        egui::Align2::LEFT_BOTTOM,
        format!("({:.1}, {:.1}, {:.1})", position.x, position.y, position.z),
        egui::FontId::monospace(12.0),
        color,
    );
}
