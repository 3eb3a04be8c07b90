//! A simple heuristic player used by the headless simulator and the
//! terminal app's demo mode.
//!
//! It looks at the nearest obstacle the runner has not cleared yet and jumps
//! over ground obstacles once they come within a speed-scaled lead distance.
//! Flyers only threaten an airborne runner, so it stays grounded for them.

use super::game_state::{GamePhase, GameState};
use super::obstacle::{Obstacle, ObstacleKind};
use super::tick::GameInput;

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Jump this many ticks before the obstacle reaches the runner.
    pub lead_ticks: f64,
    /// Press primary on the title and game-over screens.
    pub auto_restart: bool,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            lead_ticks: 6.0,
            auto_restart: true,
        }
    }
}

impl Autopilot {
    /// Nearest obstacle whose trailing edge is still right of the runner.
    pub fn next_threat(state: &GameState) -> Option<&Obstacle> {
        let player_x = state.player.x;
        state
            .obstacles
            .iter()
            .filter(|o| o.x + o.width > player_x)
            .min_by(|a, b| a.x.total_cmp(&b.x))
    }

    /// Input to feed before the next tick, if any.
    pub fn decide(&self, state: &GameState) -> Option<GameInput> {
        match state.phase {
            GamePhase::NotStarted | GamePhase::GameOver => {
                return self.auto_restart.then_some(GameInput::Primary);
            }
            GamePhase::Running => {}
        }

        let player = &state.player;
        if player.is_jumping {
            return None;
        }
        if player.is_ducking {
            return Some(GameInput::DuckReleased);
        }

        let threat = Self::next_threat(state)?;
        if threat.kind == ObstacleKind::Flying {
            return None;
        }
        let gap = threat.x - player.hitbox().right();
        if gap <= self.lead_ticks * state.speed() {
            Some(GameInput::Primary)
        } else {
            None
        }
    }
}
