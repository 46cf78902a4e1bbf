//! Term Bounce - a bouncing ball in your terminal
//!
//! Core modules:
//! - `sim`: Fixed-timestep simulation (ball state, physics rules, impulses)
//! - `term`: Terminal backend (raw mode guard, drawing, non-blocking input)
//! - `cli`: Command-line flag parsing

pub mod cli;
pub mod sim;
pub mod term;

pub use sim::{Ball, SimParams, Viewport};

/// Run configuration constants
pub mod consts {
    use std::time::Duration;

    /// Fixed tick interval; nominal 20 Hz simulation/render rate.
    pub const TICK: Duration = Duration::from_millis(50);

    /// Ball spawn cell.
    pub const START_X: f32 = 10.0;
    pub const START_Y: f32 = 10.0;

    /// Tuning defaults, overridable from the command line.
    pub const DEFAULT_GRAVITY: f32 = 0.25;
    pub const DEFAULT_Y_DAMPING: f32 = 0.95;
    pub const DEFAULT_X_DAMPING: f32 = 0.95;
    pub const DEFAULT_PUSH: f32 = 1.0;
}
