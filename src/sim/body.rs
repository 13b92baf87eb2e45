//! Rectangular bodies
//!
//! Every object in the arena is an axis-aligned rectangle anchored at its
//! top-left corner. Its role decides how the resolver treats a contact.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// What a body is in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    Ball,
    Paddle,
    /// Breakable, removed from play on first contact
    Block,
    /// Canvas edge, rebuilt every tick
    Boundary,
}

impl BodyKind {
    #[inline]
    pub fn is_breakable(self) -> bool {
        self == BodyKind::Block
    }
}

/// 8-bit RGB color (cosmetic only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const SILVER: Rgb = Rgb::new(192, 192, 192);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Independent uniform draw per channel
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::new(rng.random(), rng.random(), rng.random())
    }

    /// Normalized RGBA for rendering
    pub fn to_rgba_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }
}

/// An axis-aligned rectangle with velocity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub kind: BodyKind,
    /// Top-left corner (min x, min y)
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    pub color: Rgb,
    /// Inactive bodies take no part in collisions or rendering
    pub active: bool,
    size: Vec2,
}

impl Body {
    pub fn new(kind: BodyKind, pos: Vec2, size: Vec2, vel: Vec2, color: Rgb) -> Self {
        debug_assert!(
            size.x > 0.0 && size.y > 0.0,
            "body size must be positive, got {size}"
        );
        Self {
            kind,
            pos,
            vel,
            color,
            active: true,
            size,
        }
    }

    /// A motionless body
    pub fn fixed(kind: BodyKind, pos: Vec2, size: Vec2, color: Rgb) -> Self {
        Self::new(kind, pos, size, Vec2::ZERO, color)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Half-open x extent `[left, right)`
    #[inline]
    pub fn x_interval(&self) -> (f32, f32) {
        (self.left(), self.right())
    }

    /// Half-open y extent `[top, bottom)`
    #[inline]
    pub fn y_interval(&self) -> (f32, f32) {
        (self.top(), self.bottom())
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    pub fn set_velocity(&mut self, vel: Vec2) {
        self.vel = vel;
    }

    pub fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    pub fn randomize_color(&mut self, rng: &mut impl Rng) {
        self.color = Rgb::random(rng);
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn is_breakable(&self) -> bool {
        self.kind.is_breakable()
    }

    /// Strict AABB overlap, see [`super::collision::intersects`]
    #[inline]
    pub fn intersects(&self, other: &Body) -> bool {
        super::collision::intersects(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_edges() {
        let body = Body::fixed(
            BodyKind::Block,
            Vec2::new(10.0, 45.0),
            Vec2::new(60.0, 25.0),
            Rgb::WHITE,
        );
        assert_eq!(body.left(), 10.0);
        assert_eq!(body.right(), 70.0);
        assert_eq!(body.top(), 45.0);
        assert_eq!(body.bottom(), 70.0);
        assert_eq!(body.center(), Vec2::new(40.0, 57.5));
    }

    #[test]
    fn test_only_blocks_are_breakable() {
        assert!(BodyKind::Block.is_breakable());
        assert!(!BodyKind::Ball.is_breakable());
        assert!(!BodyKind::Paddle.is_breakable());
        assert!(!BodyKind::Boundary.is_breakable());
    }

    #[test]
    fn test_deactivate_and_reactivate() {
        let mut body = Body::fixed(BodyKind::Block, Vec2::ZERO, Vec2::ONE, Rgb::WHITE);
        assert!(body.is_active());
        body.deactivate();
        assert!(!body.is_active());
        body.activate();
        assert!(body.is_active());
    }

    #[test]
    fn test_randomize_color_is_seeded() {
        let mut a = Body::fixed(BodyKind::Block, Vec2::ZERO, Vec2::ONE, Rgb::WHITE);
        let mut b = a.clone();
        a.randomize_color(&mut Pcg32::seed_from_u64(7));
        b.randomize_color(&mut Pcg32::seed_from_u64(7));
        assert_eq!(a.color, b.color);

        // Enough draws that at least one differs from white
        let mut rng = Pcg32::seed_from_u64(7);
        let colors: Vec<Rgb> = (0..8).map(|_| Rgb::random(&mut rng)).collect();
        assert!(colors.iter().any(|c| *c != Rgb::WHITE));
    }

    #[test]
    fn test_setters() {
        let mut ball = Body::fixed(BodyKind::Ball, Vec2::ZERO, Vec2::splat(15.0), Rgb::SILVER);
        ball.set_position(Vec2::new(320.0, 200.0));
        ball.set_velocity(Vec2::new(0.0, 4.0));
        assert_eq!(ball.pos, Vec2::new(320.0, 200.0));
        assert_eq!(ball.vel, Vec2::new(0.0, 4.0));
        assert_eq!(ball.size(), Vec2::splat(15.0));
    }
}
