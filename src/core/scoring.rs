//! Score awards and the speed step function.

use super::obstacle::Obstacle;
use super::tuning::Tuning;

/// Award points for every obstacle whose trailing edge has just passed
/// `player_x`. Obstacles about to leave the playfield count as passed even
/// when they are too wide for their trailing edge to get past the player
/// first. Each obstacle pays out at most once. Returns points awarded.
pub fn award_passed_obstacles(obstacles: &mut [Obstacle], player_x: f64, points: u32) -> u32 {
    let mut awarded: u32 = 0;
    for obstacle in obstacles.iter_mut() {
        if !obstacle.scored && (obstacle.has_passed(player_x) || obstacle.is_off_screen()) {
            obstacle.scored = true;
            awarded = awarded.saturating_add(points);
        }
    }
    awarded
}

/// Speed tracking for one run.
///
/// Speed steps up once per milestone the score reaches (200, 400, ...).
/// Reaching a milestone applies its step exactly once even if the score
/// rests on it for many ticks; a score of zero is never a milestone.
#[derive(Debug, Clone, PartialEq)]
pub struct Difficulty {
    pub speed: f64,
    /// Highest milestone index already applied (score / milestone).
    pub milestones_reached: u32,
}

impl Difficulty {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            speed: tuning.initial_speed,
            milestones_reached: 0,
        }
    }

    /// Apply any milestones the score has newly crossed. Returns true if
    /// the speed changed.
    pub fn update(&mut self, score: u32, tuning: &Tuning) -> bool {
        let milestone = score / tuning.speed_milestone;
        if milestone <= self.milestones_reached {
            return false;
        }

        let steps = milestone - self.milestones_reached;
        self.milestones_reached = milestone;

        let before = self.speed;
        self.speed = (self.speed + tuning.speed_increment * steps as f64).min(tuning.max_speed);
        if self.speed > before {
            log::debug!("speed {:.1} -> {:.1} at score {}", before, self.speed, score);
            true
        } else {
            false
        }
    }

    pub fn is_capped(&self, tuning: &Tuning) -> bool {
        self.speed >= tuning.max_speed
    }
}
