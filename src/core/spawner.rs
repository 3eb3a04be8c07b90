//! Countdown that decides when the next obstacle appears.

use super::obstacle::{Obstacle, ObstacleKind};
use super::tuning::Tuning;
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnScheduler {
    /// Ticks since the last spawn.
    pub frame_count: u32,
    /// A spawn happens once `frame_count` exceeds this.
    pub interval: u32,
}

impl SpawnScheduler {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            frame_count: 0,
            interval: tuning.initial_spawn_interval,
        }
    }

    /// Advance by one tick. Returns a new obstacle when the interval elapses.
    pub fn tick<R: Rng>(
        &mut self,
        rng: &mut R,
        score: u32,
        speed: f64,
        tuning: &Tuning,
    ) -> Option<Obstacle> {
        self.frame_count = self.frame_count.saturating_add(1);
        if self.frame_count <= self.interval {
            return None;
        }

        let kind = ObstacleKind::choose(rng, score, tuning);
        let obstacle = Obstacle::spawn(kind, rng);
        self.frame_count = 0;
        self.interval = next_interval(rng, speed, tuning);
        log::trace!(
            "spawned {:?} at y={:.1}, next in {} ticks",
            kind,
            obstacle.y,
            self.interval
        );
        Some(obstacle)
    }
}

/// Randomized gap that shrinks as speed grows, never below the floor.
pub fn next_interval<R: Rng>(rng: &mut R, speed: f64, tuning: &Tuning) -> u32 {
    let jitter = if tuning.spawn_interval_jitter > 0 {
        rng.gen_range(0..tuning.spawn_interval_jitter)
    } else {
        0
    };
    let raw = jitter.saturating_add(tuning.spawn_interval_base) as f64
        - (speed * tuning.spawn_interval_speed_factor).floor();
    if raw < tuning.min_spawn_interval as f64 {
        tuning.min_spawn_interval
    } else {
        raw as u32
    }
}
