//! Obstacles: ground cacti to jump over and flyers to stay under.

use super::collision::Hitbox;
use super::constants::*;
use super::tuning::Tuning;
use rand::Rng;

/// Obstacle variants. Size and altitude generation differ per variant; the
/// movement, scoring and removal contract is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    /// Rests on the ground line; randomized width and height.
    Ground,
    /// Fixed size, floating at a randomized altitude above the ground line.
    Flying,
}

impl ObstacleKind {
    /// Pick a variant for a new spawn. Flyers only appear once the score is
    /// past the threshold so the opening stretch is ground-only.
    pub fn choose<R: Rng>(rng: &mut R, score: u32, tuning: &Tuning) -> Self {
        // Always draw so the RNG stream does not depend on the score
        let roll = rng.gen::<f64>();
        if score > tuning.flying_score_threshold && roll < tuning.flying_chance {
            Self::Flying
        } else {
            Self::Ground
        }
    }

    /// Generate `(y, width, height)` for a fresh obstacle of this kind.
    fn generate_shape<R: Rng>(self, rng: &mut R) -> (f64, f64, f64) {
        match self {
            Self::Ground => {
                let width =
                    GROUND_OBSTACLE_MIN_WIDTH + rng.gen::<f64>() * GROUND_OBSTACLE_WIDTH_SPREAD;
                let height =
                    GROUND_OBSTACLE_MIN_HEIGHT + rng.gen::<f64>() * GROUND_OBSTACLE_HEIGHT_SPREAD;
                (GROUND_Y - height, width, height)
            }
            Self::Flying => {
                let y =
                    GROUND_Y - FLYING_MIN_ALTITUDE - rng.gen::<f64>() * FLYING_ALTITUDE_SPREAD;
                (y, FLYING_OBSTACLE_WIDTH, FLYING_OBSTACLE_HEIGHT)
            }
        }
    }

    pub fn is_flying(self) -> bool {
        matches!(self, Self::Flying)
    }
}

/// A single obstacle in the playfield.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    /// Left edge; decreases every tick by the current speed.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Set once the player has been awarded points for this obstacle.
    pub scored: bool,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            kind,
            x,
            y,
            width,
            height,
            scored: false,
        }
    }

    /// Create an obstacle of `kind` just off the right edge of the playfield.
    pub fn spawn<R: Rng>(kind: ObstacleKind, rng: &mut R) -> Self {
        let (y, width, height) = kind.generate_shape(rng);
        Self::new(kind, PLAYFIELD_WIDTH, y, width, height)
    }

    pub fn advance(&mut self, speed: f64) {
        self.x -= speed;
    }

    /// True once the trailing edge is strictly left of `player_x`.
    pub fn has_passed(&self, player_x: f64) -> bool {
        self.x + self.width < player_x
    }

    /// True once the obstacle has reached the left edge of the playfield.
    pub fn is_off_screen(&self) -> bool {
        self.x <= 0.0
    }

    pub fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.x, self.y, self.width, self.height)
    }

    /// Two-frame wing flap for flyers.
    pub fn wing_frame(tick: u64) -> u64 {
        (tick / WING_FRAME_TICKS) % 2
    }
}
