//! Position bounds for cubes in the editor scene.

use serde::{Deserialize, Serialize};

/// Bound `value` to `[min, max]`.
///
/// Unlike `f64::clamp` this never panics; a NaN `value` comes back as `min`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Closed range for a single axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        clamp(value, self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Per-axis movement limits for cube positions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionLimits {
    pub x: AxisRange,
    pub y: AxisRange,
    pub z: AxisRange,
}

/// Limits applied whenever a dragged position is committed
pub const POSITION_LIMITS: PositionLimits = PositionLimits {
    x: AxisRange::new(-5.0, 5.0),
    y: AxisRange::new(0.0, 5.0),
    z: AxisRange::new(-5.0, 5.0),
};

impl PositionLimits {
    /// Range for axis index 0 (x), 1 (y) or 2 (z). Indices past 2 map to z.
    pub fn axis(&self, index: usize) -> AxisRange {
        match index {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    /// Clamp each axis independently
    pub fn clamp_position(&self, position: [f64; 3]) -> [f64; 3] {
        std::array::from_fn(|i| self.axis(i).clamp(position[i]))
    }

    pub fn contains(&self, position: [f64; 3]) -> bool {
        position.iter().enumerate().all(|(i, v)| self.axis(i).contains(*v))
    }
}
