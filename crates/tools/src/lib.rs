//! Developer tooling: read-only ship state inspection for the overlay and CLI.
//!
//! # Invariants
//! - Inspection never mutates sim state.

mod inspector;

pub use inspector::{ShipInspector, ShipSummary};

pub fn crate_info() -> &'static str {
    "shipspace-tools v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("tools"));
    }
}
