//! Audio sinks for the terminal front end.

use crate::core::ports::{AudioSink, SoundEffect};
use std::io::{self, Write};

/// Rings the terminal bell on game over. Jumps are too frequent for a bell
/// and stay silent.
pub struct TerminalBell<W: Write = io::Stdout> {
    out: W,
    pub muted: bool,
}

impl TerminalBell {
    pub fn stdout(muted: bool) -> Self {
        Self::new(io::stdout(), muted)
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W, muted: bool) -> Self {
        Self { out, muted }
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, effect: SoundEffect) {
        if self.muted || effect != SoundEffect::GameOver {
            return;
        }
        // Audio is fire-and-forget; a failed write is not worth stopping for
        if let Err(e) = self.out.write_all(b"\x07").and_then(|_| self.out.flush()) {
            log::debug!("bell failed: {}", e);
        }
    }
}

/// Discards every effect.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl AudioSink for Silent {
    fn play(&mut self, _effect: SoundEffect) {}
}
