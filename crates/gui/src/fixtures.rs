//! Factory functions for creating test data.

use shared::Cube;

use crate::state::{AppSettings, AppState};

/// Unit cube with the given colour at `pos`.
pub fn cube_at(color: &str, pos: [f64; 3]) -> Cube {
    Cube::unit(color, pos)
}

/// Cube with explicit dimensions.
pub fn sized_cube(w: f64, h: f64, d: f64, pos: [f64; 3]) -> Cube {
    Cube {
        width: w,
        height: h,
        depth: d,
        color: "#ffffff".to_string(),
        position: pos,
    }
}

/// `n` unit cubes in a row along x, palette colours in order.
pub fn cube_row(n: usize) -> Vec<Cube> {
    (0..n)
        .map(|i| {
            let color = shared::PALETTE[i % shared::PALETTE.len()];
            let x = -4.0 + (i as f64 * 1.5) % 9.0;
            cube_at(color, [x, shared::SPAWN_HEIGHT, 0.0])
        })
        .collect()
}

/// Editor state with default settings (never touches the settings file).
pub fn app_state(cubes: Vec<Cube>) -> AppState {
    AppState::with_cubes(cubes, AppSettings::default())
}

/// Editor state with the six default cubes.
pub fn default_app_state() -> AppState {
    AppState::with_settings(AppSettings::default())
}
