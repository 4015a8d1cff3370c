use serde::{Deserialize, Serialize};

/// Per-tick movement request: translation along x/y plus a heading increment.
///
/// Produced by input resolution, consumed by the ship update. Values are
/// already scaled by the configured increments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoveDelta {
    pub x: f32,
    pub y: f32,
    /// Heading increment in degrees.
    pub rotation: f32,
}

impl MoveDelta {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        rotation: 0.0,
    };

    pub fn new(x: f32, y: f32, rotation: f32) -> Self {
        Self { x, y, rotation }
    }
}

impl Default for MoveDelta {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Symmetric per-axis movement limits. A position at or beyond the limit
/// counts as out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self { x: 45.0, y: 30.0 }
    }
}
