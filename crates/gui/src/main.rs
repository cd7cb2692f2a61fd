mod app;
mod ui;
mod viewport;

// Re-export library modules so that `crate::state`, `crate::i18n`, etc.
// resolve to the lib crate types everywhere in the binary.
pub use cubes_editor_lib::i18n;
pub use cubes_editor_lib::shortcuts;
pub use cubes_editor_lib::state;

use app::EditorApp;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cubes_editor=info,cubes_editor_lib=info".into()),
        )
        .init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Cubes — 3D Scene Editor")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "cubes-editor",
        native_options,
        Box::new(|cc| Ok(Box::new(EditorApp::new(cc)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}
