//! Ball state and simulation parameters

use glam::Vec2;

use crate::consts::*;

/// The sole simulated entity.
///
/// Position is in character cells (y grows downward), velocity in cells per
/// tick. Position may transiently leave the viewport; the recovery clamps in
/// [`tick`](super::tick::tick) pull it back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// Spawn at the fixed start cell with the configured initial push.
    pub fn spawn(params: &SimParams) -> Self {
        Self {
            pos: Vec2::new(START_X, START_Y),
            vel: Vec2::new(params.push_x, params.push_y),
        }
    }
}

/// Tuning fixed for the lifetime of a run.
///
/// Built once by [`cli::parse`](crate::cli::parse) and passed by reference
/// into the updater and the loop; never mutated after startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimParams {
    /// Added to `vel.y` each tick while the ball is airborne.
    pub gravity: f32,
    /// Per-tick decay on downward vertical velocity.
    pub y_damping: f32,
    /// Per-tick decay on horizontal velocity, both directions.
    pub x_damping: f32,
    /// Initial horizontal velocity.
    pub push_x: f32,
    /// Initial vertical velocity.
    pub push_y: f32,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            y_damping: DEFAULT_Y_DAMPING,
            x_damping: DEFAULT_X_DAMPING,
            push_x: DEFAULT_PUSH,
            push_y: DEFAULT_PUSH,
        }
    }
}

/// Terminal dimensions in cells, captured once at startup.
///
/// Resizes during a run are ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            width: cols as f32,
            height: rows as f32,
        }
    }
}
