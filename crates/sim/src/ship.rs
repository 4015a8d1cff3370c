use glam::{Mat4, Vec3};
use shipspace_common::{Bounds, MoveDelta, SimConfig};

/// The steerable ship.
///
/// The ship owns its kinematic state only. Renderers read position and
/// heading every frame and never mutate them; GPU resources for the hull
/// mesh live on the renderer side of the boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    position: Vec3,
    /// Rotation about the vertical axis in degrees. Unbounded.
    heading: f32,
    bounds: Bounds,
    ticks: u64,
}

impl Ship {
    /// Create a ship at the given position. z is fixed from here on.
    pub fn new(position: Vec3, bounds: Bounds) -> Self {
        Self {
            position,
            heading: 0.0,
            bounds,
            ticks: 0,
        }
    }

    pub fn from_config(cfg: &SimConfig) -> Self {
        Self::new(cfg.start_position, cfg.bounds())
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn heading(&self) -> f32 {
        self.heading
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of movement updates applied so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Apply one movement tick.
    ///
    /// Translation is tentative per axis: if the new x (respectively y) lands
    /// at or beyond its bound, that axis rolls back to its previous value.
    /// The axes are independent, so a diagonal move can succeed on one axis
    /// and be rejected on the other. Rotation is added unconditionally.
    pub fn update(&mut self, delta: MoveDelta) {
        let prev_x = self.position.x;
        let prev_y = self.position.y;
        self.position.x += delta.x;
        self.position.y += delta.y;

        if self.position.x <= -self.bounds.x || self.position.x >= self.bounds.x {
            self.position.x = prev_x;
            tracing::debug!(x = prev_x, "x move rejected at bound");
        }
        if self.position.y <= -self.bounds.y || self.position.y >= self.bounds.y {
            self.position.y = prev_y;
            tracing::debug!(y = prev_y, "y move rejected at bound");
        }

        self.heading += delta.rotation;
        self.ticks += 1;
    }

    /// Model transform for the current state: translation composed with
    /// rotation about the vertical axis. Rebuilt from current state on every
    /// call; never cached.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position) * Mat4::from_rotation_y(self.heading.to_radians())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_ship() -> Ship {
        Ship::new(Vec3::ZERO, Bounds::new(45.0, 30.0))
    }

    #[test]
    fn starts_at_given_position() {
        let ship = Ship::new(Vec3::new(1.0, 2.0, 3.0), Bounds::default());
        assert_eq!(ship.position(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(ship.heading(), 0.0);
        assert_eq!(ship.ticks(), 0);
    }

    #[test]
    fn plain_move_applies_delta() {
        let mut ship = test_ship();
        ship.update(MoveDelta::new(0.2, -0.2, 1.0));
        assert_eq!(ship.position().x, 0.2);
        assert_eq!(ship.position().y, -0.2);
        assert_eq!(ship.heading(), 1.0);
    }

    #[test]
    fn zero_delta_changes_nothing() {
        let mut ship = test_ship();
        ship.update(MoveDelta::new(0.3, 0.1, 5.0));
        let pos = ship.position();
        let heading = ship.heading();
        ship.update(MoveDelta::ZERO);
        assert_eq!(ship.position(), pos);
        assert_eq!(ship.heading(), heading);
    }

    #[test]
    fn x_move_rolls_back_at_bound() {
        let mut ship = Ship::new(Vec3::new(44.9, 0.0, 0.0), Bounds::new(45.0, 30.0));
        ship.update(MoveDelta::new(0.2, 0.0, 0.0));
        // 45.1 >= 45 rejects the x move
        assert_eq!(ship.position().x, 44.9);
    }

    #[test]
    fn landing_exactly_on_bound_is_rejected() {
        // 44.75 and 0.25 are exact in f32, so the sum lands exactly on 45.
        let mut ship = Ship::new(Vec3::new(44.75, 0.0, 0.0), Bounds::new(45.0, 30.0));
        ship.update(MoveDelta::new(0.25, 0.0, 0.0));
        assert_eq!(ship.position().x, 44.75);
    }

    #[test]
    fn negative_bound_is_symmetric() {
        let mut ship = Ship::new(Vec3::new(0.0, -29.9, 0.0), Bounds::new(45.0, 30.0));
        ship.update(MoveDelta::new(0.0, -0.2, 0.0));
        assert_eq!(ship.position().y, -29.9);
    }

    #[test]
    fn axes_roll_back_independently() {
        let mut ship = Ship::new(Vec3::new(44.9, 10.0, 0.0), Bounds::new(45.0, 30.0));
        ship.update(MoveDelta::new(0.2, -0.2, 0.0));
        assert_eq!(ship.position().x, 44.9);
        assert_eq!(ship.position().y, 9.8);
    }

    #[test]
    fn rotation_applies_even_when_move_rejected() {
        let mut ship = Ship::new(Vec3::new(44.9, 0.0, 0.0), Bounds::new(45.0, 30.0));
        ship.update(MoveDelta::new(0.2, 0.0, 2.5));
        assert_eq!(ship.position().x, 44.9);
        assert_eq!(ship.heading(), 2.5);
    }

    #[test]
    fn heading_accumulates_without_wrap() {
        let mut ship = test_ship();
        for _ in 0..400 {
            ship.update(MoveDelta::new(0.0, 0.0, 1.0));
        }
        assert_eq!(ship.heading(), 400.0);
        ship.update(MoveDelta::new(0.0, 0.0, -500.5));
        assert_eq!(ship.heading(), -100.5);
    }

    #[test]
    fn z_never_changes() {
        let mut ship = Ship::new(Vec3::new(0.0, 0.0, 7.0), Bounds::default());
        for _ in 0..10 {
            ship.update(MoveDelta::new(0.5, 0.5, 1.0));
        }
        assert_eq!(ship.position().z, 7.0);
    }

    #[test]
    fn ticks_count_updates() {
        let mut ship = test_ship();
        ship.update(MoveDelta::ZERO);
        ship.update(MoveDelta::new(0.1, 0.0, 0.0));
        assert_eq!(ship.ticks(), 2);
    }

    #[test]
    fn small_bounds_from_config() {
        let cfg = SimConfig {
            x_bound: 1.0,
            y_bound: 1.0,
            ..SimConfig::default()
        };
        let mut ship = Ship::from_config(&cfg);
        for _ in 0..20 {
            ship.update(MoveDelta::new(0.3, 0.0, 0.0));
        }
        // walks to ~0.9, then ~1.2 >= 1.0 rejects every further step
        assert!(ship.position().x < 1.0);
        assert!((ship.position().x - 0.9).abs() < 1e-6);
    }

    #[test]
    fn model_matrix_encodes_translation_and_yaw() {
        let mut ship = Ship::new(Vec3::new(1.0, 2.0, 0.0), Bounds::default());
        ship.update(MoveDelta::new(0.0, 0.0, 90.0));

        let m = ship.model_matrix();
        // Translation column carries the position untouched by rotation order.
        let t = m.w_axis.truncate();
        assert!((t - Vec3::new(1.0, 2.0, 0.0)).length() < 1e-6);
        // A 90 degree yaw maps +X to -Z and leaves +Y fixed.
        let x_image = m.transform_vector3(Vec3::X);
        assert!((x_image - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
        let y_image = m.transform_vector3(Vec3::Y);
        assert!((y_image - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn model_matrix_is_stable_for_unchanged_state() {
        let mut ship = test_ship();
        ship.update(MoveDelta::new(0.2, 0.1, 33.3));
        let a = ship.model_matrix().to_cols_array();
        let b = ship.model_matrix().to_cols_array();
        assert_eq!(a, b);
    }
}
