//! Steering input: held controls resolved into per-tick movement deltas.
//!
//! # Invariants
//! - The sim consumes resolved deltas, never raw key events.
//! - Control state is an owned object, not ambient global state.
//! - Opposing controls held together cancel additively.

pub mod control;

pub use control::{Control, ControlSet};

pub fn crate_info() -> &'static str {
    "shipspace-input v0.1.0"
}
