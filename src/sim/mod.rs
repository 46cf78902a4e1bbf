//! Pure simulation module
//!
//! Everything here is a function of (Ball, Viewport, SimParams):
//! - No terminal or platform dependencies
//! - Fixed timestep only, no wall-clock reads
//! - Exercised directly by the tests

pub mod state;
pub mod tick;

pub use state::{Ball, SimParams, Viewport};
pub use tick::{Impulse, apply_impulse, tick};
