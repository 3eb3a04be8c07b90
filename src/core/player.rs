//! The runner: vertical physics and posture.

use super::collision::Hitbox;
use super::constants::*;
use super::ports::{AudioSink, SoundEffect};

/// Player-controlled figure. `x` is fixed; `y` is the top edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Vertical velocity (negative = upward).
    pub velocity_y: f64,
    pub is_jumping: bool,
    pub is_ducking: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// A standing player resting on the ground.
    pub fn new() -> Self {
        Self {
            x: PLAYER_X,
            y: GROUND_Y - PLAYER_HEIGHT,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            velocity_y: 0.0,
            is_jumping: false,
            is_ducking: false,
        }
    }

    /// One physics step. Position integrates the pre-step velocity, then
    /// gravity is added, then the player is clamped to the ground.
    pub fn update(&mut self, gravity: f64) {
        if self.is_jumping {
            self.y += self.velocity_y;
            self.velocity_y += gravity;
        }
        if self.y + self.height > GROUND_Y {
            self.y = GROUND_Y - self.height;
            self.velocity_y = 0.0;
            self.is_jumping = false;
        }
    }

    /// Start a jump if standing on the ground. Returns whether it happened.
    pub fn jump<A: AudioSink + ?Sized>(&mut self, strength: f64, audio: &mut A) -> bool {
        if self.is_jumping || self.is_ducking {
            return false;
        }
        self.velocity_y = -strength;
        self.is_jumping = true;
        audio.play(SoundEffect::Jump);
        true
    }

    /// Switch posture. Ignored while airborne.
    pub fn set_ducking(&mut self, ducking: bool) {
        if self.is_jumping {
            return;
        }
        self.is_ducking = ducking;
        if ducking {
            self.width = PLAYER_DUCK_WIDTH;
            self.height = PLAYER_DUCK_HEIGHT;
        } else {
            self.width = PLAYER_WIDTH;
            self.height = PLAYER_HEIGHT;
        }
        self.y = GROUND_Y - self.height;
    }

    /// Back to standing on the ground with no velocity, whatever the
    /// previous run left behind.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.x, self.y, self.width, self.height)
    }

    pub fn is_on_ground(&self) -> bool {
        !self.is_jumping
    }

    /// Two-frame running animation.
    pub fn leg_frame(tick: u64) -> u64 {
        (tick / LEG_FRAME_TICKS) % 2
    }
}
