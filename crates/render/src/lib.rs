//! Renderer-agnostic interface.
//!
//! # Invariants
//! - Renderers read ship state; they never mutate it.
//! - The model transform is rebuilt from current state on every submission,
//!   never cached across frames.

mod renderer;

pub use renderer::{DebugTextRenderer, Renderer, SceneCamera};

pub fn crate_info() -> &'static str {
    "shipspace-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
