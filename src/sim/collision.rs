//! Axis-aligned overlap tests
//!
//! Intervals are half-open, so bodies whose edges are flush do not collide.
//! A ball resting exactly against a wall must not bounce.

use super::body::Body;

/// Whether `[a0, a1)` and `[b0, b1)` overlap
///
/// Orders the pair by lower bound, then compares the lower interval's upper
/// bound against the other's lower bound with a strict `>`.
#[inline]
pub fn intervals_overlap(a: (f32, f32), b: (f32, f32)) -> bool {
    let (lower, upper) = if a.0 > b.0 { (b, a) } else { (a, b) };
    lower.1 > upper.0
}

/// Whether two bodies overlap on both axes
#[inline]
pub fn intersects(a: &Body, b: &Body) -> bool {
    intervals_overlap(a.x_interval(), b.x_interval())
        && intervals_overlap(a.y_interval(), b.y_interval())
}
