//! Collision resolution math
//!
//! Pure functions over rectangles and velocities; the scene decides when to
//! call them, these decide where the ball ends up. Keeping entity types out
//! makes the edge cases testable in isolation.

use glam::Vec2;
use rand::Rng;

use crate::consts::{COLLISION_NUDGE, DEFLECT_DEGREES, PADDLE_STILL_EPSILON};

use super::rect::Rect;

/// Axis a brick bounce reflects the ball across
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BounceAxis {
    Horizontal,
    Vertical,
}

/// Outcome of separating a ball from a brick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrickBounce {
    /// Which velocity component to negate
    pub axis: BounceAxis,
    /// Corrected top-left ball position, pushed clear of the brick
    pub position: Vec2,
}

/// Separate an intersecting ball from a brick.
///
/// The axis with the shallower overlap wins; a tie resolves vertically. The
/// ball is placed on the side it came from, one unit past the brick edge so
/// the same pair cannot re-trigger on the next test.
pub fn resolve_ball_brick(ball: &Rect, brick: &Rect) -> BrickBounce {
    let overlap = ball.overlap_extents(brick);
    if overlap.x < overlap.y {
        let x = if ball.x < brick.x {
            brick.x - ball.w - COLLISION_NUDGE
        } else {
            brick.right() + COLLISION_NUDGE
        };
        BrickBounce {
            axis: BounceAxis::Horizontal,
            position: Vec2::new(x, ball.y),
        }
    } else {
        let y = if ball.y < brick.y {
            brick.y - ball.h - COLLISION_NUDGE
        } else {
            brick.bottom() + COLLISION_NUDGE
        };
        BrickBounce {
            axis: BounceAxis::Vertical,
            position: Vec2::new(ball.x, y),
        }
    }
}

/// Pick the deflection direction for a paddle hit.
///
/// A moving paddle throws the ball its own way; a paddle that is effectively
/// still flips a coin.
pub fn deflection_sign<R: Rng>(paddle_velocity: f32, rng: &mut R) -> f32 {
    if paddle_velocity.abs() < PADDLE_STILL_EPSILON {
        if rng.random_range(0..2) == 0 { 1.0 } else { -1.0 }
    } else if paddle_velocity > 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// Rotate a velocity by the fixed deflection angle, preserving speed
#[inline]
pub fn deflect_velocity(velocity: Vec2, sign: f32) -> Vec2 {
    let speed = velocity.length();
    let angle = velocity.y.atan2(velocity.x) + sign * DEFLECT_DEGREES.to_radians();
    Vec2::new(speed * angle.cos(), speed * angle.sin())
}
