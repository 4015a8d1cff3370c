use glam::{Mat4, Vec3};
use shipspace_common::CameraConfig;

/// Orbit camera around a fixed target.
///
/// Left-drag orbits, right-drag pans the target, wheel zooms. Camera motion
/// lives outside the sim boundary; it only feeds view/projection matrices to
/// the renderer.
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    /// Azimuth in radians.
    pub yaw: f32,
    /// Elevation in radians, clamped short of the poles.
    pub pitch: f32,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub orbit_sensitivity: f32,
    pub pan_sensitivity: f32,
    pub zoom_step: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

impl OrbitCamera {
    /// Build the orbit state from a configured eye/target pair.
    pub fn from_config(cfg: &CameraConfig) -> Self {
        let offset = cfg.eye - cfg.target;
        let distance = offset.length().max(cfg.near);
        let pitch = (offset.y / distance).asin();
        let yaw = offset.z.atan2(offset.x);
        Self {
            target: cfg.target,
            distance,
            yaw,
            pitch,
            fov: cfg.fov_degrees.to_radians(),
            aspect: 16.0 / 9.0,
            near: cfg.near,
            far: cfg.far,
            orbit_sensitivity: 0.005,
            pan_sensitivity: 0.05,
            zoom_step: 2.0,
        }
    }

    /// Eye position derived from target, distance, yaw, and pitch.
    pub fn eye(&self) -> Vec3 {
        self.target
            + self.distance
                * Vec3::new(
                    self.pitch.cos() * self.yaw.cos(),
                    self.pitch.sin(),
                    self.pitch.cos() * self.yaw.sin(),
                )
    }

    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.orbit_sensitivity;
        self.pitch = (self.pitch + dy * self.orbit_sensitivity)
            .clamp(-89.0_f32.to_radians(), 89.0_f32.to_radians());
    }

    /// Slide the orbit target in the view plane.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let forward = (self.target - self.eye()).normalize();
        let right = forward.cross(Vec3::Y).normalize();
        let up = right.cross(forward);
        self.target += (right * -dx + up * dy) * self.pan_sensitivity;
    }

    /// Positive steps move the eye toward the target.
    pub fn zoom(&mut self, steps: f32) {
        self.distance = (self.distance - steps * self.zoom_step).max(self.near * 2.0);
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_eye_matches_config() {
        let cam = OrbitCamera::default();
        let eye = cam.eye();
        assert!((eye - Vec3::new(0.0, 0.0, -80.0)).length() < 1e-3);
        assert_eq!(cam.target, Vec3::ZERO);
    }

    #[test]
    fn from_config_recovers_arbitrary_eye() {
        let cfg = CameraConfig {
            eye: Vec3::new(10.0, 20.0, -30.0),
            target: Vec3::new(1.0, 2.0, 3.0),
            ..CameraConfig::default()
        };
        let cam = OrbitCamera::from_config(&cfg);
        assert!((cam.eye() - cfg.eye).length() < 1e-3);
    }

    #[test]
    fn orbit_moves_the_eye() {
        let mut cam = OrbitCamera::default();
        let before = cam.eye();
        cam.orbit(100.0, 0.0);
        assert!((cam.eye() - before).length() > 0.1);
        // Distance to target is preserved while orbiting.
        assert!((cam.eye().distance(cam.target) - cam.distance).abs() < 1e-3);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut cam = OrbitCamera::default();
        cam.orbit(0.0, 1.0e6);
        assert!(cam.pitch <= 89.0_f32.to_radians() + 1e-6);
        cam.orbit(0.0, -1.0e6);
        assert!(cam.pitch >= -89.0_f32.to_radians() - 1e-6);
    }

    #[test]
    fn zoom_never_reaches_target() {
        let mut cam = OrbitCamera::default();
        cam.zoom(1.0e6);
        assert!(cam.distance >= cam.near * 2.0);
    }

    #[test]
    fn pan_moves_target_not_distance() {
        let mut cam = OrbitCamera::default();
        let before = cam.target;
        cam.pan(10.0, -5.0);
        assert_ne!(cam.target, before);
        assert!((cam.eye().distance(cam.target) - cam.distance).abs() < 1e-3);
    }

    #[test]
    fn resize_changes_projection_only() {
        let mut cam = OrbitCamera::default();
        let view_before = cam.view_matrix().to_cols_array();
        let proj_before = cam.projection_matrix().to_cols_array();
        cam.set_aspect(1000, 500);
        assert_eq!(cam.view_matrix().to_cols_array(), view_before);
        assert_ne!(cam.projection_matrix().to_cols_array(), proj_before);
    }

    #[test]
    fn view_matrix_is_valid() {
        let cam = OrbitCamera::default();
        let vp = cam.projection_matrix() * cam.view_matrix();
        assert!(!vp.col(0).x.is_nan());
    }
}
