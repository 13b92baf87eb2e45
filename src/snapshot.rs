//! Render snapshot handed to the host after each accepted frame
//!
//! The host draws `rects` as filled rectangles and the overlay/HUD text; it
//! never touches the simulation directly.

use bytemuck::{Pod, Zeroable};
use serde::Serialize;

use crate::sim::{Body, GameEvent, GamePhase, GameState, Outcome};

/// One filled rectangle, laid out for direct upload to an instance buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable, Serialize)]
pub struct RectInstance {
    /// Top-left corner in canvas pixels
    pub position: [f32; 2],
    pub size: [f32; 2],
    pub color: [f32; 4],
}

impl RectInstance {
    pub fn from_body(body: &Body) -> Self {
        Self {
            position: body.pos.to_array(),
            size: body.size().to_array(),
            color: body.color.to_rgba_f32(),
        }
    }
}

/// Read-only copy of what the host needs to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct RenderSnapshot {
    /// Ball, paddle, then active blocks
    pub rects: Vec<RectInstance>,
    pub lives: u8,
    pub score: u32,
    pub phase: GamePhase,
    pub outcome: Option<Outcome>,
    pub events: Vec<GameEvent>,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            rects: state.bodies().map(RectInstance::from_body).collect(),
            lives: state.lives,
            score: state.score,
            phase: state.phase,
            outcome: state.outcome,
            events: state.events.clone(),
        }
    }

    /// Raw bytes of `rects` for a GPU instance buffer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.rects)
    }

    pub fn hud_line(&self) -> String {
        format!("LIVES: {}", self.lives)
    }

    /// Centered overlay text for the current phase, top to bottom
    pub fn overlay_lines(&self) -> Vec<&'static str> {
        match self.phase {
            GamePhase::Loading => vec![
                "BREAKOUT",
                "Use the left and right arrow keys to control the paddle",
                "Press 'P' to pause the game",
                "Press 'Q' to play the game",
            ],
            GamePhase::Paused => vec!["PAUSED", "PRESS 'P' TO RESUME"],
            GamePhase::Replay => {
                let verdict = match self.outcome {
                    Some(Outcome::Won) => "YOU WIN",
                    _ => "YOU LOSE",
                };
                vec![verdict, "PRESS 'R' TO RESTART"]
            }
            GamePhase::Playing => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::{TickInput, tick};

    fn new_state() -> GameState {
        GameState::new(GameConfig::default(), 42).unwrap()
    }

    #[test]
    fn test_capture_orders_bodies() {
        let mut state = new_state();
        state.blocks[0].deactivate();
        let snapshot = RenderSnapshot::capture(&state);
        assert_eq!(snapshot.rects.len(), 1 + 1 + 39);
        assert_eq!(snapshot.rects[0].position, [320.0, 200.0]);
        assert_eq!(snapshot.rects[0].size, [15.0, 15.0]);
        assert_eq!(snapshot.rects[1].position, [265.0, 430.0]);
        // First drawn block is the second in the grid
        assert_eq!(snapshot.rects[2].position, [72.0, 45.0]);
        assert_eq!(snapshot.lives, 3);
        assert_eq!(snapshot.hud_line(), "LIVES: 3");
    }

    #[test]
    fn test_instance_bytes() {
        let snapshot = RenderSnapshot::capture(&new_state());
        assert_eq!(std::mem::size_of::<RectInstance>(), 32);
        assert_eq!(snapshot.as_bytes().len(), snapshot.rects.len() * 32);
    }

    #[test]
    fn test_overlay_follows_phase() {
        let mut state = new_state();
        let snapshot = RenderSnapshot::capture(&state);
        assert_eq!(snapshot.overlay_lines()[0], "BREAKOUT");

        tick(&mut state, &TickInput { start: true, ..Default::default() });
        assert!(RenderSnapshot::capture(&state).overlay_lines().is_empty());

        tick(&mut state, &TickInput { pause: true, ..Default::default() });
        assert_eq!(
            RenderSnapshot::capture(&state).overlay_lines(),
            vec!["PAUSED", "PRESS 'P' TO RESUME"]
        );

        state.phase = GamePhase::Replay;
        state.outcome = Some(Outcome::Won);
        assert_eq!(RenderSnapshot::capture(&state).overlay_lines()[0], "YOU WIN");
        state.outcome = Some(Outcome::Lost);
        assert_eq!(RenderSnapshot::capture(&state).overlay_lines()[0], "YOU LOSE");
    }

    #[test]
    fn test_snapshot_serializes() {
        let snapshot = RenderSnapshot::capture(&new_state());
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["phase"], "Loading");
        assert_eq!(json["rects"].as_array().unwrap().len(), 42);
    }
}
