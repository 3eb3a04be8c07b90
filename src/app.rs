//! Terminal session state: the game plus everything the front end needs
//! around it (clock, key tracking, demo mode).
//!
//! Kept out of `main.rs` so the frame logic can be driven from tests with
//! synthetic timestamps.

use crate::core::autopilot::Autopilot;
use crate::core::game_loop::{run_frame, FixedStep};
use crate::core::game_state::GameState;
use crate::core::ports::AudioSink;
use crate::core::tick::{apply_input, tick};
use crate::core::tuning::Tuning;
use crate::input::{handle_key, AppAction, DuckHold};
use crossterm::event::KeyEvent;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// How long the demo lingers on the game-over screen before restarting.
pub const DEMO_RESTART_DELAY_MS: u64 = 1_500;

pub struct App<A: AudioSink> {
    pub state: GameState,
    pub clock: FixedStep,
    pub audio: A,
    pub duck: DuckHold,
    /// Autopilot plays while set.
    pub demo: Option<Autopilot>,
    rng: ChaCha8Rng,
    game_over_at_ms: Option<u64>,
}

impl<A: AudioSink> App<A> {
    pub fn new(tuning: Tuning, seed: u64, audio: A, release_events: bool) -> Self {
        Self {
            state: GameState::new(tuning),
            clock: FixedStep::new(),
            audio,
            duck: DuckHold::new(release_events),
            demo: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
            game_over_at_ms: None,
        }
    }

    pub fn is_demo(&self) -> bool {
        self.demo.is_some()
    }

    /// Feed one key event. Game inputs and the demo toggle are handled here;
    /// the action is returned so the caller can react to the rest.
    pub fn on_key(&mut self, key: KeyEvent, now_ms: u64) -> Option<AppAction> {
        let action = handle_key(key, &mut self.duck, now_ms)?;
        match action {
            // Manual play is ignored while the autopilot has the controls
            AppAction::Game(input) if !self.is_demo() => {
                apply_input(&mut self.state, input, &mut self.audio);
            }
            AppAction::ToggleDemo => self.toggle_demo(),
            _ => {}
        }
        Some(action)
    }

    pub fn toggle_demo(&mut self) {
        if self.demo.take().is_none() {
            self.demo = Some(Autopilot::default());
            log::info!("demo mode on");
        } else {
            log::info!("demo mode off");
        }
    }

    /// Advance the session by `dt_ms` of wall-clock time.
    pub fn update(&mut self, now_ms: u64, dt_ms: u64) {
        if let Some(input) = self.duck.expire(now_ms) {
            if !self.is_demo() {
                apply_input(&mut self.state, input, &mut self.audio);
            }
        }

        let was_running = self.state.is_running();
        match self.demo.clone() {
            Some(pilot) => self.update_demo(&pilot, now_ms, dt_ms),
            None => {
                run_frame(
                    &mut self.state,
                    &mut self.clock,
                    dt_ms,
                    &mut self.rng,
                    &mut self.audio,
                );
            }
        }
        if was_running && self.state.is_game_over() {
            self.game_over_at_ms = Some(now_ms);
        }
    }

    /// Tick-by-tick so the autopilot sees every state it has to react to.
    fn update_demo(&mut self, pilot: &Autopilot, now_ms: u64, dt_ms: u64) {
        if !self.state.is_running() {
            let waited = self
                .game_over_at_ms
                .map_or(true, |at| now_ms.saturating_sub(at) >= DEMO_RESTART_DELAY_MS);
            if waited || !self.state.has_started() {
                if let Some(input) = pilot.decide(&self.state) {
                    apply_input(&mut self.state, input, &mut self.audio);
                }
                self.clock.reset();
            }
            return;
        }

        for _ in 0..self.clock.advance(dt_ms) {
            if let Some(input) = pilot.decide(&self.state) {
                apply_input(&mut self.state, input, &mut self.audio);
            }
            if tick(&mut self.state, &mut self.rng, &mut self.audio).game_over() {
                self.clock.reset();
                break;
            }
        }
    }
}
