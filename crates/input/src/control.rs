use shipspace_common::{MoveDelta, SimConfig};
use std::collections::BTreeSet;

/// A steering control the user can hold down.
///
/// Window glue maps physical keys to controls; the sim never sees key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Control {
    Left,
    Right,
    Up,
    Down,
    Spin,
}

/// The set of controls currently held.
///
/// Key-down inserts, key-up removes. Read once per movement tick via
/// `resolve`, which turns the whole set into a single combined delta.
#[derive(Debug, Clone, Default)]
pub struct ControlSet {
    held: BTreeSet<Control>,
}

impl ControlSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, control: Control) {
        if self.held.insert(control) {
            tracing::trace!(?control, "control pressed");
        }
    }

    pub fn release(&mut self, control: Control) {
        if self.held.remove(&control) {
            tracing::trace!(?control, "control released");
        }
    }

    pub fn is_held(&self, control: Control) -> bool {
        self.held.contains(&control)
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }

    /// Combine all held controls into one movement delta.
    ///
    /// Returns `None` when nothing is held so the caller can skip the ship
    /// update entirely. Contributions are additive, so Left+Right (or
    /// Up+Down) net to zero on that axis while still counting as active
    /// input. Diagonals combine both axes.
    pub fn resolve(&self, cfg: &SimConfig) -> Option<MoveDelta> {
        if self.held.is_empty() {
            return None;
        }
        let mut delta = MoveDelta::ZERO;
        for control in &self.held {
            match control {
                Control::Left => delta.x += cfg.move_increment,
                Control::Right => delta.x -= cfg.move_increment,
                Control::Up => delta.y += cfg.move_increment,
                Control::Down => delta.y -= cfg.move_increment,
                Control::Spin => delta.rotation += cfg.spin_increment,
            }
        }
        Some(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> SimConfig {
        SimConfig::default()
    }

    #[test]
    fn empty_set_resolves_to_none() {
        let controls = ControlSet::new();
        assert!(controls.is_empty());
        assert_eq!(controls.resolve(&cfg()), None);
    }

    #[test]
    fn single_direction() {
        let mut controls = ControlSet::new();
        controls.press(Control::Left);
        let delta = controls.resolve(&cfg()).unwrap();
        assert_eq!(delta, MoveDelta::new(0.2, 0.0, 0.0));
    }

    #[test]
    fn diagonal_combines_axes() {
        let mut controls = ControlSet::new();
        controls.press(Control::Right);
        controls.press(Control::Up);
        let delta = controls.resolve(&cfg()).unwrap();
        assert_eq!(delta, MoveDelta::new(-0.2, 0.2, 0.0));
    }

    #[test]
    fn opposing_controls_cancel() {
        let mut controls = ControlSet::new();
        controls.press(Control::Left);
        controls.press(Control::Right);
        // Non-empty set: still Some, but the axis nets to zero.
        let delta = controls.resolve(&cfg()).unwrap();
        assert_eq!(delta, MoveDelta::ZERO);
    }

    #[test]
    fn spin_contributes_rotation_only() {
        let mut controls = ControlSet::new();
        controls.press(Control::Spin);
        let delta = controls.resolve(&cfg()).unwrap();
        assert_eq!(delta, MoveDelta::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn release_removes_control() {
        let mut controls = ControlSet::new();
        controls.press(Control::Down);
        controls.press(Control::Spin);
        controls.release(Control::Down);
        assert!(!controls.is_held(Control::Down));
        let delta = controls.resolve(&cfg()).unwrap();
        assert_eq!(delta, MoveDelta::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn repeated_press_is_idempotent() {
        let mut controls = ControlSet::new();
        controls.press(Control::Up);
        controls.press(Control::Up);
        let delta = controls.resolve(&cfg()).unwrap();
        assert_eq!(delta, MoveDelta::new(0.0, 0.2, 0.0));
    }

    #[test]
    fn resolve_uses_configured_increments() {
        let custom = SimConfig {
            move_increment: 1.5,
            spin_increment: 10.0,
            ..SimConfig::default()
        };
        let mut controls = ControlSet::new();
        controls.press(Control::Left);
        controls.press(Control::Spin);
        let delta = controls.resolve(&custom).unwrap();
        assert_eq!(delta, MoveDelta::new(1.5, 0.0, 10.0));
    }

    #[test]
    fn clear_empties_the_set() {
        let mut controls = ControlSet::new();
        controls.press(Control::Left);
        controls.clear();
        assert!(controls.resolve(&cfg()).is_none());
    }
}
