//! Plays seeded runs with the autopilot. Statistics are collected from the
//! `TickEvent`s each tick reports, so the simulator never reaches into
//! game internals.

use super::config::SimConfig;
use super::report::SimReport;
use crate::audio::Silent;
use crate::core::game_state::GameState;
use crate::core::tick::{apply_input, tick, TickEvent};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Outcome of one simulated run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunStats {
    pub seed: u64,
    pub score: u32,
    pub ticks: u64,
    pub obstacles_spawned: u32,
    pub flyers_spawned: u32,
    pub obstacles_cleared: u32,
    pub speed_ups: u32,
    pub final_speed: f64,
    /// Cut off at `max_ticks_per_run` while still alive.
    pub timed_out: bool,
}

/// Run the whole batch and aggregate the results.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let seed = match config.seed {
            Some(seed) => seed.wrapping_add(run_idx as u64),
            None => rand::thread_rng().gen(),
        };
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let stats = simulate_single_run(config, seed, &mut rng);

        if config.verbosity >= 2 {
            log::info!(
                "run {}/{} seed {}: score {}, {} ticks, speed {:.1}{}",
                run_idx + 1,
                config.num_runs,
                stats.seed,
                stats.score,
                stats.ticks,
                stats.final_speed,
                if stats.timed_out { " (timed out)" } else { "" }
            );
        }
        runs.push(stats);
    }

    SimReport::from_runs(runs, config.max_ticks_per_run, config.tuning.max_speed)
}

/// Play one run from a fresh state until game over or the tick limit.
pub fn simulate_single_run<R: Rng>(config: &SimConfig, seed: u64, rng: &mut R) -> RunStats {
    let mut state = GameState::new(config.tuning.clone());
    let mut audio = Silent;
    let mut stats = RunStats {
        seed,
        ..Default::default()
    };
    let points = config.tuning.points_per_obstacle.max(1);

    state.start_run();
    while state.is_running() && state.ticks < config.max_ticks_per_run {
        if let Some(input) = config.autopilot.decide(&state) {
            apply_input(&mut state, input, &mut audio);
        }
        let result = tick(&mut state, rng, &mut audio);
        for event in &result.events {
            match event {
                TickEvent::ObstacleSpawned { flying } => {
                    stats.obstacles_spawned += 1;
                    if *flying {
                        stats.flyers_spawned += 1;
                    }
                }
                TickEvent::Scored { points: awarded, .. } => {
                    stats.obstacles_cleared += awarded / points;
                }
                TickEvent::SpeedUp { .. } => stats.speed_ups += 1,
                TickEvent::GameOver { .. } => {}
            }
        }
    }

    stats.score = state.score;
    stats.ticks = state.ticks;
    stats.final_speed = state.speed();
    stats.timed_out = state.is_running();
    stats
}
