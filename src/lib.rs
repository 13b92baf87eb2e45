//! Breakout - a single-screen brick breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, collisions, game state)
//! - `frame`: Frame-rate gated scheduler the host drives once per render
//! - `snapshot`: Read-only view of the session for rendering
//! - `config`: Data-driven game layout and tuning

pub mod config;
pub mod error;
pub mod frame;
pub mod sim;
pub mod snapshot;

pub use config::GameConfig;
pub use error::ConfigError;
pub use frame::{Clock, FrameScheduler, ManualClock, MonotonicClock};
pub use snapshot::{RectInstance, RenderSnapshot};

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions
    pub const CANVAS_WIDTH: u32 = 640;
    pub const CANVAS_HEIGHT: u32 = 480;

    /// Logic + render rate cap (frames per second)
    pub const FRAME_RATE_CAP: u32 = 60;

    /// Ball defaults (pixels, pixels per tick)
    pub const BALL_SIZE: f32 = 15.0;
    pub const BALL_START_Y: f32 = 200.0;
    pub const BALL_START_Y_VEL: f32 = 4.0;
    /// Horizontal speed given to a resting ball on its first vertical contact
    pub const SERVE_X_SPEED: f32 = 4.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 120.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Distance from the paddle's top edge to the canvas bottom
    pub const PADDLE_BOTTOM_MARGIN: f32 = 50.0;
    pub const PADDLE_SPEED: f32 = 6.0;
    /// Bounce-zone split measured from the paddle's left edge.
    /// Fixed, not derived from the paddle's actual width.
    pub const PADDLE_ZONE_OFFSET: f32 = 55.0;
    /// Paddle spawns with its left edge this far left of the canvas center
    pub const PADDLE_START_OFFSET: f32 = 55.0;

    /// Block grid defaults
    pub const BLOCK_ROWS: u32 = 4;
    pub const BLOCK_COLS: u32 = 10;
    pub const BLOCK_WIDTH: f32 = 60.0;
    pub const BLOCK_HEIGHT: f32 = 25.0;
    pub const GRID_ORIGIN_X: f32 = 10.0;
    pub const GRID_ORIGIN_Y: f32 = 45.0;
    pub const GRID_STRIDE_X: f32 = 62.0;
    pub const GRID_STRIDE_Y: f32 = 35.0;

    /// Thickness of the off-canvas wall bodies
    pub const WALL_THICKNESS: f32 = 10.0;

    pub const STARTING_LIVES: u8 = 3;
}
