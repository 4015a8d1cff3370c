use shipspace_sim::Ship;

/// Read-only queries against the sim state for debugging and the overlay.
pub struct ShipInspector;

impl ShipInspector {
    /// Produce a summary of the current ship state.
    pub fn summary(ship: &Ship) -> ShipSummary {
        let p = ship.position();
        let b = ship.bounds();
        ShipSummary {
            position: [p.x, p.y, p.z],
            heading: ship.heading(),
            ticks: ship.ticks(),
            bounds: [b.x, b.y],
        }
    }
}

/// Snapshot of ship state for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ShipSummary {
    pub position: [f32; 3],
    /// Heading in degrees, unbounded. `heading_wrapped` folds it for display.
    pub heading: f32,
    pub ticks: u64,
    pub bounds: [f32; 2],
}

impl ShipSummary {
    /// Heading folded into [0, 360) for display. The stored value keeps
    /// accumulating; only the presentation wraps.
    pub fn heading_wrapped(&self) -> f32 {
        self.heading.rem_euclid(360.0)
    }
}

impl std::fmt::Display for ShipSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Ship: pos=({:.2}, {:.2}, {:.2}) heading={:.1} ticks={} bounds={}x{}",
            self.position[0],
            self.position[1],
            self.position[2],
            self.heading,
            self.ticks,
            self.bounds[0],
            self.bounds[1],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use shipspace_common::{Bounds, MoveDelta};

    #[test]
    fn summary_reflects_state() {
        let mut ship = Ship::new(Vec3::new(1.0, 2.0, 0.0), Bounds::new(45.0, 30.0));
        ship.update(MoveDelta::new(0.0, 0.0, 90.0));

        let summary = ShipInspector::summary(&ship);
        assert_eq!(summary.position, [1.0, 2.0, 0.0]);
        assert_eq!(summary.heading, 90.0);
        assert_eq!(summary.ticks, 1);
        assert_eq!(summary.bounds, [45.0, 30.0]);
    }

    #[test]
    fn heading_wraps_for_display_only() {
        let mut ship = Ship::new(Vec3::ZERO, Bounds::default());
        for _ in 0..400 {
            ship.update(MoveDelta::new(0.0, 0.0, 1.0));
        }
        let summary = ShipInspector::summary(&ship);
        assert_eq!(summary.heading, 400.0);
        assert!((summary.heading_wrapped() - 40.0).abs() < 1e-3);
    }

    #[test]
    fn negative_heading_wraps_positive() {
        let mut ship = Ship::new(Vec3::ZERO, Bounds::default());
        ship.update(MoveDelta::new(0.0, 0.0, -90.0));
        let summary = ShipInspector::summary(&ship);
        assert!((summary.heading_wrapped() - 270.0).abs() < 1e-3);
    }

    #[test]
    fn summary_display() {
        let ship = Ship::new(Vec3::ZERO, Bounds::default());
        let s = format!("{}", ShipInspector::summary(&ship));
        assert!(s.contains("ticks=0"));
        assert!(s.contains("bounds=45x30"));
    }
}
