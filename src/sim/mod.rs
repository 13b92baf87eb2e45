//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per accepted frame, fixed pixel steps
//! - Seeded RNG only
//! - Stable iteration order (ball, paddle, blocks in grid order, walls)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod motion;
pub mod state;
pub mod tick;

pub use body::{Body, BodyKind, Rgb};
pub use collision::{intersects, intervals_overlap};
pub use motion::{Axis, Contact, paddle_zone_bounce, resolve};
pub use state::{GameEvent, GamePhase, GameState, Outcome, boundaries};
pub use tick::{TickInput, tick};
