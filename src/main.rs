//! Breakout entry point
//!
//! Runs a headless session on the native clock with a simple autopilot that
//! keeps the paddle under the ball. Useful for watching the state machine in
//! the logs (`RUST_LOG=debug`); drawing is left to a real host.

use std::process::ExitCode;
use std::time::Duration;

use breakout::sim::{GameEvent, GamePhase, GameState, TickInput};
use breakout::{Clock, FrameScheduler, GameConfig, MonotonicClock};

/// Give up after this many accepted frames (~5 minutes at 60 fps)
const FRAME_BUDGET: u64 = 60 * 60 * 5;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Breakout (headless) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => match GameConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => GameConfig::default(),
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();

    let mut state = match GameState::new(config, seed) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Invalid config: {e}");
            return ExitCode::FAILURE;
        }
    };

    let clock = MonotonicClock::new();
    let mut scheduler = FrameScheduler::for_state(&state);

    while scheduler.frames_run() < FRAME_BUDGET {
        let input = autopilot(&state);
        if let Some(snapshot) = scheduler.poll(&mut state, &clock, &input) {
            for event in &snapshot.events {
                match event {
                    GameEvent::LifeLost { remaining } => {
                        log::info!("{} (score {})", snapshot.hud_line(), snapshot.score);
                        log::debug!("{remaining} lives remaining");
                    }
                    GameEvent::RoundOver { .. } => {
                        for line in snapshot.overlay_lines() {
                            log::info!("{line}");
                        }
                    }
                    _ => {}
                }
            }
            if snapshot.phase == GamePhase::Replay {
                break;
            }
        }
        std::thread::sleep(Duration::from_millis(1));
    }

    log::info!(
        "Stopped after {} frames ({} skipped), {:.1} fps",
        scheduler.frames_run(),
        scheduler.frames_skipped(),
        scheduler.fps(clock.now())
    );
    ExitCode::SUCCESS
}

/// Start the game, then chase the ball's center with the paddle's center
fn autopilot(state: &GameState) -> TickInput {
    if state.phase == GamePhase::Loading {
        return TickInput {
            start: true,
            ..Default::default()
        };
    }

    let target = state.ball.center().x;
    let paddle = state.paddle.center().x;
    let dead_zone = state.config.paddle.speed;
    TickInput {
        left: paddle - target > dead_zone,
        right: target - paddle > dead_zone,
        ..Default::default()
    }
}
