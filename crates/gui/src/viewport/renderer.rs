//! Wireframe rendering for the viewport, used when no GL context exists

use egui::{Color32, Rect, Stroke, Ui};
use glam::Vec3;

use super::camera::OrbitCamera;
use super::gizmo::{build_gizmo_lines, GIZMO_LENGTH};
use super::mesh::{box_edges, LineMeshData};
use super::scene_graph::{HelperNode, RenderList};
use crate::state::ViewportSettings;

/// Paint the 3D viewport using egui's painter (wireframe rendering)
pub fn paint_viewport(
    ui: &Ui,
    rect: Rect,
    camera: &OrbitCamera,
    list: &RenderList,
    settings: &ViewportSettings,
) {
    let painter = ui.painter_at(rect);

    // Background
    let bg = settings.background_color;
    painter.rect_filled(rect, 0.0, Color32::from_rgb(bg[0], bg[1], bg[2]));

    draw_ground(&painter, rect, camera, list.ground.size);

    for helper in &list.helpers {
        match helper {
            HelperNode::Axes { size } => draw_axes(&painter, rect, camera, *size),
        }
    }

    let sel = settings.selection_color;
    for instance in &list.meshes {
        let [r, g, b] = instance.color.map(|c| (c * 255.0) as u8);
        let stroke = if instance.selected {
            Stroke::new(2.0, Color32::from_rgb(sel[0], sel[1], sel[2]))
        } else {
            Stroke::new(1.0, Color32::from_rgb(r, g, b))
        };
        let half = instance.scale * 0.5;
        for [a, b] in box_edges(instance.position - half, instance.position + half) {
            draw_line_3d(&painter, rect, camera, a, b, stroke);
        }
    }

    if let Some((center, active)) = list.gizmo {
        draw_colored_lines(&painter, rect, camera, &build_gizmo_lines(center, GIZMO_LENGTH, active), 2.5);
    }
}

fn draw_ground(painter: &egui::Painter, rect: Rect, camera: &OrbitCamera, size: f32) {
    let stroke = Stroke::new(0.5, Color32::from_gray(90));
    let half = size * 0.5;
    let steps = size.round().max(1.0) as i32;

    for i in 0..=steps {
        let f = -half + i as f32 * size / steps as f32;
        // Lines along Z, then along X
        draw_line_3d(painter, rect, camera, Vec3::new(f, 0.0, -half), Vec3::new(f, 0.0, half), stroke);
        draw_line_3d(painter, rect, camera, Vec3::new(-half, 0.0, f), Vec3::new(half, 0.0, f), stroke);
    }
}

fn draw_axes(painter: &egui::Painter, rect: Rect, camera: &OrbitCamera, len: f32) {
    let axes = [
        (Vec3::X, Color32::from_rgb(220, 50, 50)),
        (Vec3::Y, Color32::from_rgb(50, 200, 50)),
        (Vec3::Z, Color32::from_rgb(50, 100, 220)),
    ];
    for (dir, color) in axes {
        draw_line_3d(painter, rect, camera, Vec3::ZERO, dir * len, Stroke::new(2.0, color));
    }
}

fn draw_colored_lines(
    painter: &egui::Painter,
    rect: Rect,
    camera: &OrbitCamera,
    lines: &LineMeshData,
    width: f32,
) {
    for seg in lines.vertices.chunks_exact(14) {
        let a = Vec3::new(seg[0], seg[1], seg[2]);
        let b = Vec3::new(seg[7], seg[8], seg[9]);
        let color = Color32::from_rgba_unmultiplied(
            (seg[3] * 255.0) as u8,
            (seg[4] * 255.0) as u8,
            (seg[5] * 255.0) as u8,
            (seg[6] * 255.0) as u8,
        );
        draw_line_3d(painter, rect, camera, a, b, Stroke::new(width, color));
    }
}

fn draw_line_3d(
    painter: &egui::Painter,
    rect: Rect,
    camera: &OrbitCamera,
    a: Vec3,
    b: Vec3,
    stroke: Stroke,
) {
    if let (Some(pa), Some(pb)) = (
        camera.project(a.to_array(), rect),
        camera.project(b.to_array(), rect),
    ) {
        painter.line_segment([pa, pb], stroke);
    }
}
