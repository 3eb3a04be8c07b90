//! Simulation configuration.

use crate::core::autopilot::Autopilot;
use crate::core::tuning::Tuning;

/// Configuration for a simulation batch.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of runs to play
    pub num_runs: u32,

    /// Base seed; run `i` uses `seed + i` (None = entropy)
    pub seed: Option<u64>,

    /// Ticks after which a run is cut off as timed out
    pub max_ticks_per_run: u64,

    /// Gameplay tuning every run uses
    pub tuning: Tuning,

    /// Input policy
    pub autopilot: Autopilot,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: Some(42),
            max_ticks_per_run: 100_000,
            tuning: Tuning::default(),
            autopilot: Autopilot {
                auto_restart: false,
                ..Autopilot::default()
            },
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small deterministic batch for tests.
    pub fn quick(num_runs: u32, seed: u64) -> Self {
        Self {
            num_runs,
            seed: Some(seed),
            max_ticks_per_run: 20_000,
            verbosity: 0,
            ..Default::default()
        }
    }
}
