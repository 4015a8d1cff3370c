//! wgpu render backend for the shipspace demo.
//!
//! Draws a single OBJ ship mesh under a Phong shading pass. Camera orbits a
//! fixed target with mouse drag; the ship pose comes from the sim.
//!
//! # Invariants
//! - The renderer never mutates ship state.
//! - Mesh and pipelines are created once at startup; per-frame work is
//!   uniform upload and one draw.
//! - The movement tick is separate from the render frame rate.

mod camera;
mod gpu;
mod mesh;
mod shaders;

pub use camera::OrbitCamera;
pub use gpu::{RenderError, ShipRenderer};
pub use mesh::{MeshData, MeshError, MeshVertex, ShipMesh};
