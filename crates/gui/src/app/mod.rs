//! Main application module

mod keyboard;
mod menus;
mod styles;

use eframe::egui;

use crate::i18n::set_lang;
use crate::shortcuts::RotationLockShortcut;
use crate::state::AppState;
use crate::ui::{controls, instructions, rotation_indicator, status_bar};
use crate::viewport::ViewportPanel;

/// Main application
pub struct EditorApp {
    state: AppState,
    viewport: ViewportPanel,
    /// Space toggles the rotation lock while the editor is alive
    shortcut: RotationLockShortcut,
    /// Last applied font size (to detect changes)
    last_font_size: f32,
}

impl EditorApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let state = AppState::default();
        set_lang(state.settings.ui.language);

        // Apply initial styles with font size from settings
        styles::configure_styles(&cc.egui_ctx, state.settings.ui.font_size);

        let mut viewport = ViewportPanel::new();

        // Initialize GL renderer if glow context is available
        if let Some(gl) = cc.gl.as_ref() {
            viewport.init_gl(gl);
        } else {
            tracing::warn!("No GL context, using software wireframe renderer");
        }

        let last_font_size = state.settings.ui.font_size;

        Self {
            state,
            viewport,
            shortcut: RotationLockShortcut::install(),
            last_font_size,
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply font size if changed
        if self.state.settings.ui.font_size != self.last_font_size {
            styles::apply_font_size(ctx, self.state.settings.ui.font_size);
            self.last_font_size = self.state.settings.ui.font_size;
        }

        keyboard::handle_keyboard(ctx, &mut self.state, &self.shortcut);

        // ── Menu bar ──────────────────────────────────────────
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                menus::file_menu(ui, &self.state);
                menus::view_menu(ui, &mut self.state, &mut self.viewport);
                menus::settings_menu(ui, &mut self.state);
            });
        });

        // ── Settings window ──────────────────────────────────
        menus::settings_window(ctx, &mut self.state);

        // ── Status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 2)),
            )
            .show(ctx, |ui| {
                status_bar::show(ui, &self.state);
            });

        // ── Left panel: controls and edit panel ──────────────
        egui::SidePanel::left("controls")
            .default_width(230.0)
            .width_range(180.0..=360.0)
            .resizable(true)
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(8)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    controls::show(ui, &mut self.state);
                });
            });

        // ── Central panel: 3D viewport ───────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.viewport.show(ui, &mut self.state);
                rotation_indicator::show(ui, self.state.rotation_locked());
                instructions::show(ui, &mut self.state.panels.instructions);
            });
    }

    fn on_exit(&mut self, gl: Option<&glow::Context>) {
        if let Some(gl) = gl {
            self.viewport.destroy_gl(gl);
        }
    }
}
