//! Fixed timestep ball update
//!
//! Advances the ball by one tick. Rule order matters: the bounce and
//! recovery checks read the freshly integrated position, and gravity runs
//! after them so a bounce tick still accelerates the ball.

use super::state::{Ball, SimParams, Viewport};

/// One keyboard impulse, applied by the loop between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impulse {
    /// Reflect off a vertical wall if touching one, then kick upward.
    Jump,
    Left,
    Right,
}

/// Advance the ball by one fixed timestep.
pub fn tick(ball: &mut Ball, vp: &Viewport, params: &SimParams) {
    ball.pos += ball.vel;

    if ball.pos.x > vp.width - 2.0 || ball.pos.x < 1.0 {
        ball.vel.x = -ball.vel.x;
    }

    // A fast ball can overshoot the bounce check in a single tick and end up
    // outside the screen; the recovery clamps reinsert it at half speed.
    if ball.pos.x < -2.0 {
        ball.vel.x *= 0.5;
        ball.pos.x = 2.0;
    }
    if ball.pos.x > vp.width + 2.0 {
        ball.vel.x *= 0.5;
        ball.pos.x = vp.width - 3.0;
    }

    if ball.pos.y > vp.height - 2.0 || ball.pos.y < 1.0 {
        ball.vel.y = -ball.vel.y;
    }
    // Only the top edge has a recovery clamp; there is no high-y twin.
    if ball.pos.y < -10.0 {
        ball.vel.y *= 0.5;
        ball.pos.y = 2.0;
    }

    // Gravity skips a ball resting at the floor. The second arm is the odd
    // one out: near the ceiling it only fires while vel.y < 2. Asymmetric on
    // purpose; keep the grouping exactly as written.
    if ball.pos.y + 0.4 < vp.height - 2.0 || (ball.pos.y + 0.4 < 2.0 && ball.vel.y < 2.0) {
        ball.vel.y += params.gravity;
    }

    // Only downward motion is damped, so the ball settles toward the floor.
    if ball.vel.y > 0.0 {
        ball.vel.y *= params.y_damping;
    }
    if ball.vel.x != 0.0 {
        ball.vel.x *= params.x_damping;
    }
}

/// Apply one keyboard impulse directly to the ball, bypassing `tick`.
pub fn apply_impulse(ball: &mut Ball, impulse: Impulse, vp: &Viewport) {
    match impulse {
        Impulse::Jump => {
            if ball.pos.y > vp.height - 2.0 || ball.pos.y < 2.0 {
                ball.vel.y = -ball.vel.y;
            }
            if ball.pos.y > 2.0 {
                ball.vel.y -= 2.0;
            }
        }
        Impulse::Left => {
            if ball.pos.x > 1.0 && ball.pos.x < vp.width - 1.0 {
                ball.vel.x -= 2.0;
            }
        }
        Impulse::Right => {
            if ball.pos.x > 1.0 && ball.pos.x < vp.width - 1.0 {
                ball.vel.x += 2.0;
            }
        }
    }
}
