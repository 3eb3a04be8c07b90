//! Headless balance simulator.
//!
//! Plays many seeded runs with the autopilot through the same `tick`
//! function the terminal app uses and aggregates how far they get:
//! - Score and survival time distribution
//! - How often the speed cap is reached
//! - Where runs end relative to the flyer threshold

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{run_simulation, simulate_single_run, RunStats};
