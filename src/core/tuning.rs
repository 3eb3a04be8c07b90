//! Gameplay tuning: every constant the simulation reads at runtime.
//!
//! Defaults reproduce the classic feel. A JSON file can override any subset
//! of fields; missing fields fall back to the defaults.

use super::constants::*;
use serde::{Deserialize, Serialize};
use std::io;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration added to the player's velocity each airborne tick.
    pub gravity: f64,
    /// Upward velocity applied on jump.
    pub jump_strength: f64,
    pub initial_speed: f64,
    pub max_speed: f64,
    pub speed_increment: f64,
    /// Score interval at which speed steps up.
    pub speed_milestone: u32,
    pub points_per_obstacle: u32,
    pub initial_spawn_interval: u32,
    pub spawn_interval_jitter: u32,
    pub spawn_interval_base: u32,
    pub spawn_interval_speed_factor: f64,
    pub min_spawn_interval: u32,
    pub flying_chance: f64,
    /// Flying obstacles only appear once the score is strictly above this.
    pub flying_score_threshold: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,
            initial_speed: INITIAL_SPEED,
            max_speed: MAX_SPEED,
            speed_increment: SPEED_INCREMENT,
            speed_milestone: SPEED_MILESTONE,
            points_per_obstacle: POINTS_PER_OBSTACLE,
            initial_spawn_interval: INITIAL_SPAWN_INTERVAL,
            spawn_interval_jitter: SPAWN_INTERVAL_JITTER,
            spawn_interval_base: SPAWN_INTERVAL_BASE,
            spawn_interval_speed_factor: SPAWN_INTERVAL_SPEED_FACTOR,
            min_spawn_interval: MIN_SPAWN_INTERVAL,
            flying_chance: FLYING_CHANCE,
            flying_score_threshold: FLYING_SCORE_THRESHOLD,
        }
    }
}

fn invalid(field: &str, reason: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("invalid tuning: {} {}", field, reason),
    )
}

fn positive(field: &str, value: f64) -> io::Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, "must be a positive number"))
    }
}

impl Tuning {
    /// Reject values that would break the simulation's invariants.
    pub fn validate(&self) -> io::Result<()> {
        positive("gravity", self.gravity)?;
        positive("jump_strength", self.jump_strength)?;
        positive("initial_speed", self.initial_speed)?;
        positive("max_speed", self.max_speed)?;
        if self.max_speed < self.initial_speed {
            return Err(invalid("max_speed", "must be >= initial_speed"));
        }
        if !self.speed_increment.is_finite() || self.speed_increment < 0.0 {
            return Err(invalid("speed_increment", "must be >= 0"));
        }
        if self.speed_milestone == 0 {
            return Err(invalid("speed_milestone", "must be > 0"));
        }
        if self.points_per_obstacle == 0 {
            return Err(invalid("points_per_obstacle", "must be > 0"));
        }
        if self.min_spawn_interval == 0 {
            return Err(invalid("min_spawn_interval", "must be > 0"));
        }
        if !self.spawn_interval_speed_factor.is_finite() || self.spawn_interval_speed_factor < 0.0
        {
            return Err(invalid("spawn_interval_speed_factor", "must be >= 0"));
        }
        if !(0.0..=1.0).contains(&self.flying_chance) {
            return Err(invalid("flying_chance", "must be within 0..=1"));
        }
        Ok(())
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> io::Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        tuning.validate()?;
        Ok(tuning)
    }
}
