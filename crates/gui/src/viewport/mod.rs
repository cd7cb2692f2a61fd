//! 3D viewport panel with OpenGL rendering

pub use cubes_editor_lib::viewport::{camera, composer, controller, gizmo, mesh, picking, scene_graph};
mod gl_renderer;
mod overlays;
mod renderer;

use std::sync::{Arc, Mutex};

use egui::Ui;

use crate::state::AppState;
use composer::{SceneComposer, SceneProps};
use gizmo::{compute_drag_delta, gizmo_hit_test, GizmoAxis, GIZMO_LENGTH};
use gl_renderer::GlRenderer;

/// Gizmo drag in progress
#[derive(Debug, Clone, Copy)]
struct ActiveDrag {
    index: usize,
    axis: GizmoAxis,
}

/// 3D viewport panel with OpenGL rendering
pub struct ViewportPanel {
    composer: SceneComposer,
    gl_renderer: Option<Arc<Mutex<GlRenderer>>>,
    drag: Option<ActiveDrag>,
}

impl ViewportPanel {
    pub fn new() -> Self {
        Self {
            composer: SceneComposer::new(),
            gl_renderer: None,
            drag: None,
        }
    }

    /// Initialize GL renderer (must be called with a GL context)
    pub fn init_gl(&mut self, gl: &glow::Context) {
        let renderer = GlRenderer::new(gl);
        self.gl_renderer = Some(Arc::new(Mutex::new(renderer)));
    }

    /// Release GPU objects; the panel falls back to wireframe afterwards
    pub fn destroy_gl(&mut self, gl: &glow::Context) {
        if let Some(renderer) = self.gl_renderer.take() {
            if let Ok(mut r) = renderer.lock() {
                r.destroy(gl);
            }
        }
    }

    pub fn reset_camera(&mut self) {
        self.composer.reset_camera();
    }

    fn compose(&mut self, state: &AppState) {
        self.composer.compose(SceneProps {
            cubes: state.cubes(),
            selected: state.selected(),
            debug_mode: state.debug_mode(),
            rotation_locked: state.rotation_locked(),
        });
        if let Some(drag) = self.drag {
            let still_dragging = self
                .composer
                .controller(drag.index)
                .is_some_and(|c| c.is_dragging());
            if !still_dragging {
                self.drag = None;
            }
        }
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut AppState) {
        let (rect, response) = ui.allocate_exact_size(
            ui.available_size(),
            egui::Sense::click_and_drag(),
        );

        self.compose(state);

        // ── Gizmo and camera controls ─────────────────────────────
        self.handle_gizmo_and_camera(&response, ui, rect, state);

        // ── Scroll zoom ─────────────────────────────
        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll.abs() > 0.1 {
                self.composer.camera_mut().zoom(scroll * 0.01);
            }
        }

        // ── Cube clicks ──────────────────────────
        self.handle_click(&response, rect, state);

        if !ui.is_rect_visible(rect) {
            return;
        }

        // ── Rendering ────────────────────────────────────────
        self.render(ui, rect, state);

        // ── Overlays ─────────────────────────────────────
        self.draw_overlays(ui, rect, state);
    }

    fn handle_gizmo_and_camera(
        &mut self,
        response: &egui::Response,
        ui: &Ui,
        rect: egui::Rect,
        state: &mut AppState,
    ) {
        // ── Gizmo drag handling ─────────────────────────────────
        if let Some(drag) = self.drag {
            if response.dragged_by(egui::PointerButton::Primary) {
                let delta = response.drag_delta();
                let camera = *self.composer.camera();
                if let Some(controller) = self.composer.controller_mut(drag.index) {
                    let center = controller.live_position().as_vec3();
                    let world_delta = compute_drag_delta(&camera, center, drag.axis, delta, rect);
                    controller.drag_along(drag.axis, world_delta as f64);
                }
            }
            // End drag when button released
            if response.drag_stopped() || !response.dragged_by(egui::PointerButton::Primary) {
                self.finish_drag(state);
            }
            return;
        }

        // ── Gizmo drag start on LMB drag ───────────────────
        if response.drag_started_by(egui::PointerButton::Primary) {
            let pointer_pos = ui
                .input(|i| i.pointer.press_origin())
                .or_else(|| response.interact_pointer_pos());
            if let (Some(pos), Some(index)) = (pointer_pos, self.composer.handle_owner()) {
                let ray = self.composer.camera().screen_ray(pos, rect);
                if let Some(controller) = self.composer.controller_mut(index) {
                    let center = controller.live_position().as_vec3();
                    if let Some(axis) = gizmo_hit_test(&ray, center, GIZMO_LENGTH) {
                        if controller.begin_drag(Some(axis)) {
                            tracing::debug!("Dragging cube {index} along {axis:?}");
                            self.drag = Some(ActiveDrag { index, axis });
                            return;
                        }
                    }
                }
            }
        }

        // ── Camera controls (only when not dragging gizmo) ──
        if response.dragged_by(egui::PointerButton::Primary)
            || response.dragged_by(egui::PointerButton::Middle)
        {
            let delta = response.drag_delta();
            // Locked rotation is a no-op, pan and zoom stay live
            self.composer
                .camera_mut()
                .rotate(-delta.x * 0.5, delta.y * 0.5);
        }

        if response.dragged_by(egui::PointerButton::Secondary) {
            let delta = response.drag_delta();
            let scale = self.composer.camera().distance * 0.002;
            self.composer
                .camera_mut()
                .pan(-delta.x * scale, delta.y * scale);
        }
    }

    fn finish_drag(&mut self, state: &mut AppState) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        let Some(cube) = state.cubes().get(drag.index).cloned() else {
            return;
        };
        let event = self
            .composer
            .controller_mut(drag.index)
            .and_then(|c| c.end_drag(&cube));
        if let Some(event) = event {
            state.handle_cube_event(event);
        }
        self.compose(state);
    }

    fn handle_click(&mut self, response: &egui::Response, rect: egui::Rect, state: &mut AppState) {
        if !response.clicked() || self.drag.is_some() {
            return;
        }
        let Some(pos) = response.interact_pointer_pos() else {
            return;
        };

        let ray = self.composer.camera().screen_ray(pos, rect);

        // A click on the gizmo never picks the cube behind it
        let gizmo_hit = self.composer.handle_owner().is_some_and(|index| {
            self.composer.controller(index).is_some_and(|c| {
                gizmo_hit_test(&ray, c.live_position().as_vec3(), GIZMO_LENGTH).is_some()
            })
        });
        if gizmo_hit {
            return;
        }

        // Empty space: selection is left untouched
        let Some(index) = self.composer.pick(&ray) else {
            return;
        };
        let event = self.composer.click_cube(
            index,
            state.cubes(),
            state.debug_mode(),
            &mut rand::rng(),
        );
        if let Some(event) = event {
            state.handle_cube_event(event);
            self.compose(state);
        }
    }

    fn render(&self, ui: &mut Ui, rect: egui::Rect, state: &AppState) {
        let list = self.composer.render_list();
        let camera = *self.composer.camera();
        let settings = state.settings.viewport.clone();

        let Some(gl_renderer) = &self.gl_renderer else {
            // Fallback: software wireframe rendering
            renderer::paint_viewport(ui, rect, &camera, &list, &settings);
            return;
        };

        let renderer_clone = gl_renderer.clone();
        let callback = egui::PaintCallback {
            rect,
            callback: Arc::new(eframe::egui_glow::CallbackFn::new(
                move |info, painter| {
                    let gl = painter.gl();

                    let clip = info.clip_rect_in_pixels();
                    let viewport = [
                        clip.left_px as f32,
                        clip.from_bottom_px as f32,
                        clip.width_px as f32,
                        clip.height_px as f32,
                    ];

                    if let Ok(mut r) = renderer_clone.lock() {
                        r.sync(gl, &list, settings.selection_color);
                        let render_params = gl_renderer::RenderParams {
                            viewport,
                            bg_color: settings.background_color,
                        };
                        r.paint(gl, &camera, &list, &render_params);
                    }
                },
            )),
        };

        ui.painter().add(callback);
    }

    fn draw_overlays(&self, ui: &mut Ui, rect: egui::Rect, state: &AppState) {
        let painter = ui.painter_at(rect);
        let camera = self.composer.camera();

        if state.settings.viewport.axis_labels {
            overlays::draw_axis_labels(&painter, rect, camera, &self.composer.render_list());
        }

        if let Some(drag) = self.drag {
            if let Some(controller) = self.composer.controller(drag.index) {
                overlays::draw_drag_readout(&painter, rect, camera, controller.live_position());
            }
        }
    }
}
