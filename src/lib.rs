//! Dino Runner - single-lane endless runner for the terminal.
//!
//! The simulation lives in [`core`] and runs headless; the terminal front
//! end and the balance simulator are thin drivers around it.

pub mod app;
pub mod audio;
pub mod core;
pub mod input;
pub mod simulator;
pub mod ui;
pub mod utils;
