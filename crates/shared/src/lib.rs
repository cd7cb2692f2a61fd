//! Data model shared by the cube editor: the `Cube` entity, position limits
//! and the project file format.

mod color;
mod limits;

use rand::Rng;
use serde::{Deserialize, Serialize};

pub use color::{format_hex_color, parse_hex_color, rgb_to_f32};
pub use limits::{clamp, AxisRange, PositionLimits, POSITION_LIMITS};

/// Colours a cube can be recoloured to by a click or created with
pub const PALETTE: [&str; 6] = [
    "#ff0000", "#00ff00", "#0000ff", "#ffff00", "#ff00ff", "#00ffff",
];

/// Height at which new cubes are placed
pub const SPAWN_HEIGHT: f64 = 0.5;

/// Fixed file name offered when saving a project
pub const PROJECT_FILE_NAME: &str = "cube_project.json";

/// One editable cuboid. Dimensions are scale factors applied to a unit box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cube {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub color: String,
    pub position: [f64; 3],
}

impl Default for Cube {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            depth: 1.0,
            color: "#ffffff".to_string(),
            position: [0.0, 0.0, 0.0],
        }
    }
}

impl Cube {
    /// Unit cube with the given colour and position
    pub fn unit(color: impl Into<String>, position: [f64; 3]) -> Self {
        Self {
            color: color.into(),
            position,
            ..Self::default()
        }
    }

    /// Cube created by the "add" action: unit size, random palette colour,
    /// x and z sampled inside their limits, y at the spawn height.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let limits = POSITION_LIMITS;
        let x = rng.random_range(limits.x.min..limits.x.max);
        let z = rng.random_range(limits.z.min..limits.z.max);
        Self::unit(
            random_palette_color(rng),
            [
                limits.x.clamp(x),
                limits.y.clamp(SPAWN_HEIGHT),
                limits.z.clamp(z),
            ],
        )
    }

    /// `[width, height, depth]`
    pub fn dimensions(&self) -> [f64; 3] {
        [self.width, self.height, self.depth]
    }

    /// Colour as RGB bytes; unparsable strings render white
    pub fn rgb(&self) -> [u8; 3] {
        parse_hex_color(&self.color).unwrap_or([255, 255, 255])
    }
}

/// Uniform pick from `PALETTE`
pub fn random_palette_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    PALETTE[rng.random_range(0..PALETTE.len())].to_string()
}

/// Starting scene: one unit cube per palette colour laid out on a 3×2 grid
pub fn default_cubes() -> Vec<Cube> {
    PALETTE
        .iter()
        .enumerate()
        .map(|(i, color)| {
            let x = (i % 3) as f64 * 2.0 - 2.0;
            let z = (i / 3) as f64 * 2.0 - 1.0;
            Cube::unit(*color, [x, SPAWN_HEIGHT, z])
        })
        .collect()
}

/// Pretty-printed JSON array written by "save project"
pub fn project_json(cubes: &[Cube]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(cubes)
}

/// Parse a saved project back into cubes
pub fn parse_project_json(json: &str) -> serde_json::Result<Vec<Cube>> {
    serde_json::from_str(json)
}
