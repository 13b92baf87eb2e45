//! Per-frame simulation tick
//!
//! Reads one input snapshot, advances the state machine, and moves the ball
//! at most once.

use std::collections::HashMap;

use super::body::Body;
use super::motion::resolve;
use super::state::{GameEvent, GamePhase, GameState, Outcome, boundaries};
use crate::config::KeyBindings;

/// Held-key snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Pause toggle, acts on press
    pub pause: bool,
    /// Leave the round-over overlay
    pub restart: bool,
    /// Leave the title overlay
    pub start: bool,
}

impl TickInput {
    /// Sample a host key map (key identifier -> currently held)
    pub fn from_key_map(keys: &HashMap<String, bool>, bindings: &KeyBindings) -> Self {
        let held = |key: &str| keys.get(key).copied().unwrap_or(false);
        Self {
            left: held(&bindings.left),
            right: held(&bindings.right),
            pause: held(&bindings.pause),
            restart: held(&bindings.restart),
            start: held(&bindings.start),
        }
    }
}

/// Advance the session by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    // Toggle pause on the press edge only
    let pause_pressed = input.pause && !state.pause_held;
    state.pause_held = input.pause;
    if pause_pressed {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                state.push_event(GameEvent::Paused);
                log::info!("Paused");
                return;
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Playing;
                state.push_event(GameEvent::Resumed);
                log::info!("Resumed");
            }
            // No pause over the title or round-over overlays; the press is
            // consumed, so holding the key through start does not pause
            GamePhase::Loading | GamePhase::Replay => {}
        }
    }

    match state.phase {
        GamePhase::Loading => {
            if input.start {
                state.phase = GamePhase::Playing;
                state.push_event(GameEvent::Started);
                log::info!("Game started");
            }
        }
        GamePhase::Replay => {
            if input.restart {
                state.phase = GamePhase::Playing;
                state.outcome = None;
                state.push_event(GameEvent::Restarted);
                log::info!("Round restarted");
            }
        }
        GamePhase::Paused => {}
        GamePhase::Playing => step_playing(state, input),
    }
}

fn step_playing(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    move_paddle(state, input);

    let mut walls = boundaries(&state.config);
    let GameState {
        ball,
        paddle,
        blocks,
        ..
    } = &mut *state;
    // Obstacle order: paddle, active blocks, walls
    let block_slots: Vec<usize> = blocks
        .iter()
        .enumerate()
        .filter(|(_, b)| b.is_active())
        .map(|(index, _)| index)
        .collect();
    let mut obstacles: Vec<&mut Body> = std::iter::once(paddle)
        .chain(blocks.iter_mut().filter(|b| b.is_active()))
        .chain(walls.iter_mut())
        .collect();
    let contacts = resolve(ball, &mut obstacles);
    drop(obstacles);

    for contact in &contacts {
        state.push_event(GameEvent::Bounce { kind: contact.kind });
        if contact.broke {
            let index = block_slots[contact.index - 1];
            state.score += 1;
            state.push_event(GameEvent::BlockBroken { index });
            log::debug!("Block {index} broken, score {}", state.score);
        }
    }

    if state.ball_missed() {
        state.lives = state.lives.saturating_sub(1);
        state.push_event(GameEvent::LifeLost {
            remaining: state.lives,
        });
        log::debug!("Ball lost, {} lives left", state.lives);
        if state.lives == 0 {
            end_round(state, Outcome::Lost);
            return;
        }
        state.reset_ball();
    }

    if state.all_blocks_broken() {
        end_round(state, Outcome::Won);
    }
}

/// Shift the paddle by its speed per held key, kept inside the canvas
fn move_paddle(state: &mut GameState, input: &TickInput) {
    let speed = state.config.paddle.speed;
    let max_x = state.config.canvas.width as f32 - state.paddle.width();
    let paddle = &mut state.paddle;
    if input.left {
        paddle.pos.x = (paddle.pos.x - speed).max(0.0);
    }
    if input.right {
        paddle.pos.x = (paddle.pos.x + speed).min(max_x);
    }
}

fn end_round(state: &mut GameState, outcome: Outcome) {
    log::info!(
        "Round over: {:?} after {} ticks, score {}",
        outcome,
        state.time_ticks,
        state.score
    );
    state.outcome = Some(outcome);
    state.push_event(GameEvent::RoundOver { outcome });
    state.reset_board();
    state.phase = GamePhase::Replay;
}
