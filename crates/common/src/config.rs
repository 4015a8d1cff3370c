use crate::types::Bounds;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors from loading configuration files.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Ship movement tuning.
///
/// Defaults reproduce the demo's stock feel: a 45x30 playfield, 0.2 units of
/// travel and 1 degree of spin per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Symmetric limit on x travel.
    pub x_bound: f32,
    /// Symmetric limit on y travel.
    pub y_bound: f32,
    /// Translation applied per tick per held direction.
    pub move_increment: f32,
    /// Heading degrees added per tick while spinning.
    pub spin_increment: f32,
    /// Movement tick interval in milliseconds. Independent of the redraw rate.
    pub tick_interval_ms: u64,
    /// Ship spawn position. z stays fixed for the lifetime of the ship.
    pub start_position: Vec3,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            x_bound: 45.0,
            y_bound: 30.0,
            move_increment: 0.2,
            spin_increment: 1.0,
            tick_interval_ms: 5,
            start_position: Vec3::ZERO,
        }
    }
}

impl SimConfig {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x_bound, self.y_bound)
    }

    pub fn tick_interval_secs(&self) -> f64 {
        self.tick_interval_ms as f64 / 1000.0
    }
}

/// Camera placement and projection parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub eye: Vec3,
    pub target: Vec3,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, -80.0),
            target: Vec3::ZERO,
            fov_degrees: 45.0,
            near: 0.05,
            far: 350.0,
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sim: SimConfig,
    pub camera: CameraConfig,
    /// OBJ resource the ship mesh is loaded from at startup.
    pub mesh_path: String,
    /// Shader program used for the ship draw.
    pub shader: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            camera: CameraConfig::default(),
            mesh_path: "models/SpaceShip.obj".into(),
            shader: "phong".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file. Missing keys fall back to defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&text)?)
    }
}
