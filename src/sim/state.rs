//! Game state and core simulation types
//!
//! The session owns every body. Boundaries are not stored; they are rebuilt
//! from the canvas size each tick.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::{Body, BodyKind, Rgb};
use crate::config::GameConfig;
use crate::consts::WALL_THICKNESS;
use crate::error::ConfigError;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title and help overlay, waiting for the start key
    Loading,
    /// Active gameplay
    Playing,
    /// Frozen until the pause key is pressed again
    Paused,
    /// Round over (won or lost), waiting for the restart key
    Replay,
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost,
}

/// Something that happened during a tick, for sound and HUD hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Paused,
    Resumed,
    /// Ball bounced off a body
    Bounce { kind: BodyKind },
    /// Block at this index of [`GameState::blocks`] was destroyed
    BlockBroken { index: usize },
    LifeLost { remaining: u8 },
    RoundOver { outcome: Outcome },
    Restarted,
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub seed: u64,
    /// Color source for blocks
    pub rng: Pcg32,
    pub ball: Body,
    pub paddle: Body,
    /// Grid blocks, row-major
    pub blocks: Vec<Body>,
    pub lives: u8,
    /// Blocks broken this round
    pub score: u32,
    pub phase: GamePhase,
    /// Result of the last finished round, cleared on restart
    pub outcome: Option<Outcome>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Pause key state on the previous tick (toggle on press, not hold)
    pub(crate) pause_held: bool,
    /// Events raised by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session in the `Loading` phase
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = spawn_ball(&config);
        let paddle = spawn_paddle(&config);
        let blocks = layout_blocks(&config, &mut rng);
        let lives = config.lives;

        log::info!(
            "Session created: {}x{} canvas, {} blocks, seed {}",
            config.canvas.width,
            config.canvas.height,
            blocks.len(),
            seed
        );

        Ok(Self {
            config,
            seed,
            rng,
            ball,
            paddle,
            blocks,
            lives,
            score: 0,
            phase: GamePhase::Loading,
            outcome: None,
            time_ticks: 0,
            pause_held: false,
            events: Vec::new(),
        })
    }

    /// Put ball and paddle back at their starting spots
    pub fn reset_ball(&mut self) {
        self.ball = spawn_ball(&self.config);
        self.paddle = spawn_paddle(&self.config);
    }

    /// Restore the full board: ball, paddle, lives, score and every block
    /// (position, fresh color, active)
    pub fn reset_board(&mut self) {
        self.reset_ball();
        for (index, block) in self.blocks.iter_mut().enumerate() {
            block.set_position(grid_position(&self.config, index));
            block.randomize_color(&mut self.rng);
            block.activate();
        }
        self.lives = self.config.lives;
        self.score = 0;
    }

    pub fn active_blocks(&self) -> impl Iterator<Item = &Body> {
        self.blocks.iter().filter(|b| b.is_active())
    }

    pub fn broken_block_count(&self) -> usize {
        self.blocks.iter().filter(|b| !b.is_active()).count()
    }

    pub fn all_blocks_broken(&self) -> bool {
        self.blocks.iter().all(|b| !b.is_active())
    }

    /// Bodies to draw, in order: ball, paddle, active blocks
    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        [&self.ball, &self.paddle]
            .into_iter()
            .chain(self.active_blocks())
    }

    /// The ball has dropped past the bottom of the canvas
    pub fn ball_missed(&self) -> bool {
        self.ball.bottom() > self.config.canvas.height as f32
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

/// Top, left and right walls just outside the canvas
///
/// The bottom stays open: a ball leaving through it costs a life.
pub fn boundaries(config: &GameConfig) -> [Body; 3] {
    let w = config.canvas.width as f32;
    let h = config.canvas.height as f32;
    let wall = |x, y, width, height| {
        Body::fixed(
            BodyKind::Boundary,
            Vec2::new(x, y),
            Vec2::new(width, height),
            Rgb::default(),
        )
    };
    [
        wall(0.0, -WALL_THICKNESS, w, WALL_THICKNESS),
        wall(-WALL_THICKNESS, 0.0, WALL_THICKNESS, h),
        wall(w, 0.0, WALL_THICKNESS, h),
    ]
}

fn spawn_ball(config: &GameConfig) -> Body {
    Body::new(
        BodyKind::Ball,
        Vec2::new(config.canvas.width as f32 / 2.0, config.ball.start_y),
        Vec2::splat(config.ball.size),
        Vec2::new(0.0, config.ball.start_y_vel),
        Rgb::SILVER,
    )
}

fn spawn_paddle(config: &GameConfig) -> Body {
    let canvas = config.canvas;
    let x = (canvas.width as f32 / 2.0 - crate::consts::PADDLE_START_OFFSET)
        .clamp(0.0, canvas.width as f32 - config.paddle.width);
    Body::fixed(
        BodyKind::Paddle,
        Vec2::new(x, canvas.height as f32 - config.paddle.bottom_margin),
        Vec2::new(config.paddle.width, config.paddle.height),
        Rgb::WHITE,
    )
}

/// Top-left corner of the block at `index` (row-major)
fn grid_position(config: &GameConfig, index: usize) -> Vec2 {
    let grid = &config.grid;
    let cols = grid.cols as usize;
    let (row, col) = (index / cols, index % cols);
    Vec2::new(
        grid.origin_x + col as f32 * grid.stride_x,
        grid.origin_y + row as f32 * grid.stride_y,
    )
}

fn layout_blocks(config: &GameConfig, rng: &mut Pcg32) -> Vec<Body> {
    let size = Vec2::new(config.grid.block_width, config.grid.block_height);
    (0..config.grid.block_count())
        .map(|index| {
            Body::fixed(
                BodyKind::Block,
                grid_position(config, index),
                size,
                Rgb::random(rng),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_state() -> GameState {
        GameState::new(GameConfig::default(), 12345).unwrap()
    }

    #[test]
    fn test_new_session_layout() {
        let state = new_state();
        assert_eq!(state.phase, GamePhase::Loading);
        assert_eq!(state.lives, 3);
        assert_eq!(state.blocks.len(), 40);
        assert_eq!(state.ball.pos, Vec2::new(320.0, 200.0));
        assert_eq!(state.ball.vel, Vec2::new(0.0, 4.0));
        assert_eq!(state.paddle.pos, Vec2::new(265.0, 430.0));
        assert_eq!(state.blocks[0].pos, Vec2::new(10.0, 45.0));
        assert_eq!(state.blocks[11].pos, Vec2::new(72.0, 80.0));
        assert_eq!(state.blocks[39].pos, Vec2::new(568.0, 150.0));
        assert!(state.blocks.iter().all(|b| b.is_active()));
        assert!(state.blocks.iter().all(|b| b.kind == BodyKind::Block));
    }

    #[test]
    fn test_paddle_spawn_ignores_width() {
        let mut config = GameConfig::default();
        config.paddle.width = 200.0;
        let state = GameState::new(config, 1).unwrap();
        assert_eq!(
            state.paddle.pos.x,
            320.0 - crate::consts::PADDLE_START_OFFSET
        );

        // Clamped so a paddle wider than the space right of the spawn fits
        let mut config = GameConfig::default();
        config.paddle.width = 600.0;
        let state = GameState::new(config, 1).unwrap();
        assert_eq!(state.paddle.pos.x, 40.0);
        assert_eq!(state.paddle.right(), 640.0);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = GameConfig::default();
        config.grid.rows = 0;
        assert!(matches!(
            GameState::new(config, 1),
            Err(ConfigError::EmptyGrid { .. })
        ));
    }

    #[test]
    fn test_same_seed_same_colors() {
        let a = new_state();
        let b = new_state();
        let colors = |s: &GameState| s.blocks.iter().map(|b| b.color).collect::<Vec<_>>();
        assert_eq!(colors(&a), colors(&b));
    }

    #[test]
    fn test_boundaries_surround_canvas() {
        let config = GameConfig::default();
        let [top, left, right] = boundaries(&config);
        assert!(top.kind == BodyKind::Boundary && !top.is_breakable());
        assert_eq!(top.bottom(), 0.0);
        assert_eq!(top.width(), 640.0);
        assert_eq!(left.right(), 0.0);
        assert_eq!(left.height(), 480.0);
        assert_eq!(right.left(), 640.0);
    }

    #[test]
    fn test_reset_board_restores_blocks() {
        let mut state = new_state();
        let before: Vec<_> = state.blocks.iter().map(|b| b.color).collect();
        for block in &mut state.blocks {
            block.deactivate();
        }
        state.blocks[3].set_position(Vec2::new(-1000.0, -1000.0));
        state.lives = 1;
        state.score = 40;
        state.ball.set_position(Vec2::new(5.0, 5.0));

        state.reset_board();

        assert!(state.blocks.iter().all(|b| b.is_active()));
        assert_eq!(state.blocks[3].pos, Vec2::new(196.0, 45.0));
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.ball.pos, Vec2::new(320.0, 200.0));
        let after: Vec<_> = state.blocks.iter().map(|b| b.color).collect();
        assert_ne!(before, after);
    }

    #[test]
    fn test_bodies_skip_broken_blocks() {
        let mut state = new_state();
        state.blocks[0].deactivate();
        state.blocks[5].deactivate();
        let bodies: Vec<_> = state.bodies().collect();
        assert_eq!(bodies.len(), 2 + 38);
        assert_eq!(bodies[0].kind, BodyKind::Ball);
        assert_eq!(bodies[1].kind, BodyKind::Paddle);
        assert_eq!(state.broken_block_count(), 2);
        assert!(!state.all_blocks_broken());
    }

    #[test]
    fn test_ball_missed() {
        let mut state = new_state();
        assert!(!state.ball_missed());
        // Bottom edge flush with the canvas is still in play
        state.ball.set_position(Vec2::new(100.0, 465.0));
        assert!(!state.ball_missed());
        state.ball.set_position(Vec2::new(100.0, 466.0));
        assert!(state.ball_missed());
    }
}
