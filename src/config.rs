//! Game configuration
//!
//! Layout and tuning for a session. Every field has a default, so a JSON file
//! only needs the values it overrides.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Canvas size in pixels, fixed for the lifetime of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleConfig {
    pub width: f32,
    pub height: f32,
    /// Gap between the paddle's top edge and the canvas bottom
    pub bottom_margin: f32,
    /// Pixels moved per tick while a direction key is held
    pub speed: f32,
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            bottom_margin: PADDLE_BOTTOM_MARGIN,
            speed: PADDLE_SPEED,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub size: f32,
    pub start_y: f32,
    /// Initial vertical velocity; the ball starts with no horizontal motion
    pub start_y_vel: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            size: BALL_SIZE,
            start_y: BALL_START_Y,
            start_y_vel: BALL_START_Y_VEL,
        }
    }
}

/// Block grid layout (row-major)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub rows: u32,
    pub cols: u32,
    pub block_width: f32,
    pub block_height: f32,
    pub origin_x: f32,
    pub origin_y: f32,
    pub stride_x: f32,
    pub stride_y: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: BLOCK_ROWS,
            cols: BLOCK_COLS,
            block_width: BLOCK_WIDTH,
            block_height: BLOCK_HEIGHT,
            origin_x: GRID_ORIGIN_X,
            origin_y: GRID_ORIGIN_Y,
            stride_x: GRID_STRIDE_X,
            stride_y: GRID_STRIDE_Y,
        }
    }
}

impl GridConfig {
    pub fn block_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }
}

/// Host key identifiers for each game action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub left: String,
    pub right: String,
    pub pause: String,
    pub restart: String,
    pub start: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: "ArrowLeft".to_string(),
            right: "ArrowRight".to_string(),
            pause: "p".to_string(),
            restart: "r".to_string(),
            start: "q".to_string(),
        }
    }
}

/// Complete session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub canvas: CanvasConfig,
    pub paddle: PaddleConfig,
    pub ball: BallConfig,
    pub grid: GridConfig,
    pub keys: KeyBindings,
    /// Lives at the start of each round
    pub lives: u8,
    /// Maximum ticks per second; faster host frames are skipped
    pub frame_rate_cap: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            paddle: PaddleConfig::default(),
            ball: BallConfig::default(),
            grid: GridConfig::default(),
            keys: KeyBindings::default(),
            lives: STARTING_LIVES,
            frame_rate_cap: FRAME_RATE_CAP,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Minimum wall-clock time between two ticks
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frame_rate_cap.max(1) as f64)
    }

    /// Reject layouts that would make collision behavior undefined
    pub fn validate(&self) -> Result<(), ConfigError> {
        let CanvasConfig { width, height } = self.canvas;
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidCanvas { width, height });
        }

        if self.grid.block_count() == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.grid.rows,
                cols: self.grid.cols,
            });
        }

        let sizes = [
            ("paddle", self.paddle.width, self.paddle.height),
            ("ball", self.ball.size, self.ball.size),
            ("block", self.grid.block_width, self.grid.block_height),
        ];
        for (what, width, height) in sizes {
            // `!(x > 0.0)` also catches NaN
            if !(width > 0.0) || !(height > 0.0) {
                return Err(ConfigError::NonPositiveSize {
                    what,
                    width,
                    height,
                });
            }
        }

        if !(self.paddle.speed > 0.0) {
            return Err(ConfigError::InvalidPaddleSpeed(self.paddle.speed));
        }

        if self.paddle.width > width as f32 {
            return Err(ConfigError::PaddleTooWide {
                paddle: self.paddle.width,
                canvas: width,
            });
        }

        self.validate_spawns()?;

        if self.lives == 0 {
            return Err(ConfigError::NoLives);
        }

        if self.frame_rate_cap == 0 {
            return Err(ConfigError::InvalidFrameRate);
        }

        Ok(())
    }

    /// Ball, paddle and every block must start fully on the canvas
    fn validate_spawns(&self) -> Result<(), ConfigError> {
        let CanvasConfig { width, height } = self.canvas;
        let (w, h) = (width as f32, height as f32);

        let ball = &self.ball;
        let x = w / 2.0;
        let (right, bottom) = (x + ball.size, ball.start_y + ball.size);
        // Negated comparisons reject NaN as well
        if !(ball.start_y >= 0.0) || !(bottom <= h) || !(right <= w) {
            return Err(ConfigError::BallOutOfCanvas {
                x,
                y: ball.start_y,
                right,
                bottom,
                width,
                height,
            });
        }

        let paddle = &self.paddle;
        if !(paddle.bottom_margin > 0.0)
            || !(paddle.bottom_margin >= paddle.height)
            || !(paddle.bottom_margin <= h)
        {
            return Err(ConfigError::PaddleOutOfCanvas {
                margin: paddle.bottom_margin,
                paddle_height: paddle.height,
                canvas_height: height,
            });
        }

        // First and last cells bound the grid whatever the stride sign
        let grid = &self.grid;
        let last_x = grid.origin_x + (grid.cols - 1) as f32 * grid.stride_x;
        let last_y = grid.origin_y + (grid.rows - 1) as f32 * grid.stride_y;
        let left = grid.origin_x.min(last_x);
        let top = grid.origin_y.min(last_y);
        let right = grid.origin_x.max(last_x) + grid.block_width;
        let bottom = grid.origin_y.max(last_y) + grid.block_height;
        if !(left >= 0.0) || !(top >= 0.0) || !(right <= w) || !(bottom <= h) {
            return Err(ConfigError::GridOutOfCanvas {
                left,
                top,
                right,
                bottom,
                width,
                height,
            });
        }

        Ok(())
    }
}
