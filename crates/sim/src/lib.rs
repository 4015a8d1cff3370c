//! Ship kinematics: bounded incremental translation, unbounded heading.
//!
//! # Invariants
//! - All state mutations flow through `Ship::update`.
//! - An axis that would land at or beyond its bound rolls back; the other
//!   axis is unaffected.
//! - Heading accumulates without wraparound or normalization.
//! - z never changes after construction.

pub mod ship;

pub use ship::Ship;
