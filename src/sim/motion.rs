//! Ball motion and bounce resolution
//!
//! The ball moves one axis at a time. After each single-axis step every
//! obstacle is tested; on contact the step is undone and the velocity on that
//! axis is flipped (or steered, for the paddle). Obstacles never move the
//! ball's position forward, so the ball cannot end a tick embedded in a wall.

use serde::{Deserialize, Serialize};

use super::body::{Body, BodyKind};
use super::collision::intersects;
use crate::consts::{PADDLE_ZONE_OFFSET, SERVE_X_SPEED};

/// Axis of a single-axis step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// One processed ball/obstacle contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub axis: Axis,
    pub kind: BodyKind,
    /// Index into the obstacle slice passed to [`resolve`]
    pub index: usize,
    /// The obstacle was breakable and has been deactivated
    pub broke: bool,
}

/// Advance `ball` by its velocity, bouncing off `obstacles`
///
/// Breakable obstacles hit by the ball are deactivated. Inactive obstacles
/// are ignored, including blocks broken earlier in the same call.
pub fn resolve(ball: &mut Body, obstacles: &mut [&mut Body]) -> Vec<Contact> {
    let mut contacts = Vec::new();

    // X phase
    let step = ball.vel.x;
    ball.pos.x += step;
    let mut reverted = false;
    for (index, obstacle) in obstacles.iter_mut().enumerate() {
        if !is_solid(obstacle) || !intersects(ball, obstacle) {
            continue;
        }
        if !reverted {
            ball.pos.x -= step;
            reverted = true;
        }
        let broke = break_if_breakable(obstacle);
        if obstacle.kind == BodyKind::Paddle {
            paddle_zone_bounce(ball, obstacle);
        } else {
            ball.vel.x = -ball.vel.x;
        }
        log::trace!("x contact with {:?} #{index}", obstacle.kind);
        contacts.push(Contact {
            axis: Axis::X,
            kind: obstacle.kind,
            index,
            broke,
        });
    }

    // Y phase
    let step = ball.vel.y;
    ball.pos.y += step;
    let mut reverted = false;
    for (index, obstacle) in obstacles.iter_mut().enumerate() {
        if !is_solid(obstacle) || !intersects(ball, obstacle) {
            continue;
        }
        // Serve: a ball dropped straight down picks up sideways motion
        if ball.vel.x == 0.0 {
            ball.vel.x = SERVE_X_SPEED;
        }
        if !reverted {
            ball.pos.y -= step;
            reverted = true;
        }
        let broke = break_if_breakable(obstacle);
        if obstacle.kind == BodyKind::Paddle {
            paddle_zone_bounce(ball, obstacle);
        }
        ball.vel.y = -ball.vel.y;
        log::trace!("y contact with {:?} #{index}", obstacle.kind);
        contacts.push(Contact {
            axis: Axis::Y,
            kind: obstacle.kind,
            index,
            broke,
        });
    }

    contacts
}

/// Steer the ball by where it meets the paddle
///
/// Left of the zone split the ball is sent left, otherwise right, whatever
/// direction it arrived from. The split sits a fixed distance from the
/// paddle's left edge.
pub fn paddle_zone_bounce(ball: &mut Body, paddle: &Body) {
    if ball.left() < paddle.left() + PADDLE_ZONE_OFFSET {
        if ball.vel.x > 0.0 {
            ball.vel.x = -ball.vel.x;
        }
    } else {
        ball.vel.x = ball.vel.x.abs();
    }
}

#[inline]
fn is_solid(obstacle: &Body) -> bool {
    obstacle.is_active() && obstacle.kind != BodyKind::Ball
}

fn break_if_breakable(obstacle: &mut Body) -> bool {
    if obstacle.is_breakable() {
        obstacle.deactivate();
        true
    } else {
        false
    }
}
