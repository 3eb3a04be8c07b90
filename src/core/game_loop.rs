//! Fixed-timestep driver shared by the terminal app and the simulator.
//!
//! Wall-clock time is accumulated and converted into whole simulation
//! ticks so the game plays at the same pace regardless of how often the
//! host manages to render.

use super::constants::{MAX_FRAME_MS, TICK_MS};
use super::game_state::GameState;
use super::ports::AudioSink;
use super::tick::{tick, TickResult};
use rand::Rng;

#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    /// Milliseconds not yet consumed by a tick.
    pub accumulated_ms: u64,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed elapsed time and return how many ticks are due. Elapsed time is
    /// clamped so a long stall (suspended terminal, debugger) does not
    /// replay seconds of gameplay at once.
    pub fn advance(&mut self, dt_ms: u64) -> u32 {
        self.accumulated_ms += dt_ms.min(MAX_FRAME_MS);
        let steps = self.accumulated_ms / TICK_MS;
        self.accumulated_ms %= TICK_MS;
        steps as u32
    }

    pub fn reset(&mut self) {
        self.accumulated_ms = 0;
    }
}

/// Run every tick due for `dt_ms` of wall-clock time. Stops early once the
/// run ends so no tick executes past game over.
pub fn run_frame<R: Rng, A: AudioSink + ?Sized>(
    state: &mut GameState,
    clock: &mut FixedStep,
    dt_ms: u64,
    rng: &mut R,
    audio: &mut A,
) -> Vec<TickResult> {
    if !state.is_running() {
        clock.reset();
        return Vec::new();
    }

    let mut results = Vec::new();
    for _ in 0..clock.advance(dt_ms) {
        let result = tick(state, rng, audio);
        let over = result.game_over();
        results.push(result);
        if over {
            clock.reset();
            break;
        }
    }
    results
}
