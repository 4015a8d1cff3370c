use glam::Mat4;
use shipspace_sim::Ship;

/// Camera matrices for one frame, supplied by the windowing layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneCamera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl SceneCamera {
    pub fn new(view: Mat4, projection: Mat4) -> Self {
        Self { view, projection }
    }

    /// Combined transform for a model matrix: projection * view * model.
    pub fn mvp(&self, model: Mat4) -> Mat4 {
        self.projection * self.view * model
    }
}

impl Default for SceneCamera {
    fn default() -> Self {
        Self {
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer reads the ship and a camera, then produces output. Ship truth
/// is sim-owned; the renderer never writes back.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Submit one frame for the current ship state.
    fn render(&self, ship: &Ship, camera: &SceneCamera) -> Self::Output;
}

/// Text renderer for headless use.
///
/// Produces a human-readable description of the submitted frame. Used by the
/// CLI and as a stand-in backend in tests.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, ship: &Ship, camera: &SceneCamera) -> String {
        let p = ship.position();
        let mvp = camera.mvp(ship.model_matrix());
        let t = mvp.w_axis;
        let mut out = String::new();
        out.push_str(&format!(
            "=== Frame (tick={}) ===\n",
            ship.ticks()
        ));
        out.push_str(&format!(
            "Ship: pos=({:.2}, {:.2}, {:.2}) heading={:.1} deg\n",
            p.x, p.y, p.z, ship.heading()
        ));
        out.push_str(&format!(
            "MVP translation column: ({:.3}, {:.3}, {:.3}, {:.3})\n",
            t.x, t.y, t.z, t.w
        ));
        out
    }
}
