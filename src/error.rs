//! Configuration errors
//!
//! The simulation itself never fails once constructed; everything that could
//! produce undefined collision behavior is rejected here instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("canvas must have positive dimensions, got {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },

    #[error("block grid is empty ({rows} rows x {cols} cols)")]
    EmptyGrid { rows: u32, cols: u32 },

    #[error("{what} must have a positive width and height, got {width}x{height}")]
    NonPositiveSize {
        what: &'static str,
        width: f32,
        height: f32,
    },

    #[error("paddle speed must be positive, got {0}")]
    InvalidPaddleSpeed(f32),

    #[error("paddle width {paddle} does not fit a {canvas}px wide canvas")]
    PaddleTooWide { paddle: f32, canvas: u32 },

    #[error("ball spawn {x}..{right} x {y}..{bottom} lies outside the {width}x{height} canvas")]
    BallOutOfCanvas {
        x: f32,
        y: f32,
        right: f32,
        bottom: f32,
        width: u32,
        height: u32,
    },

    #[error(
        "paddle bottom margin {margin} must be at least the paddle height {paddle_height} and at most the canvas height {canvas_height}"
    )]
    PaddleOutOfCanvas {
        margin: f32,
        paddle_height: f32,
        canvas_height: u32,
    },

    #[error("block grid spans {left}..{right} x {top}..{bottom}, outside the {width}x{height} canvas")]
    GridOutOfCanvas {
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
        width: u32,
        height: u32,
    },

    #[error("starting lives must be at least 1")]
    NoLives,

    #[error("frame rate cap must be at least 1")]
    InvalidFrameRate,

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}
