//! Capability traits the simulation talks to: audio and drawing.
//!
//! The core never knows which backend sits behind these. The terminal app
//! plugs in a bell and a cell canvas; tests plug in recorders.

/// Fire-and-forget sound triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    Jump,
    GameOver,
}

/// Receives sound triggers. Implementations must not block.
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// RGBA color; alpha 255 is opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Composite `self` over `below` using straight alpha.
    pub fn over(self, below: Rgba) -> Rgba {
        let a = self.a as u32;
        let mix = |top: u8, bottom: u8| ((top as u32 * a + bottom as u32 * (255 - a)) / 255) as u8;
        Rgba::rgb(
            mix(self.r, below.r),
            mix(self.g, below.g),
            mix(self.b, below.b),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// How a piece of text should be drawn. `size` is a nominal point size that
/// backends may ignore; `bold` distinguishes headings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Rgba,
    pub size: f64,
    pub bold: bool,
    pub align: TextAlign,
}

/// Drawing surface in logical playfield coordinates (origin top-left).
pub trait Canvas {
    fn clear(&mut self);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba);
    fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Rgba);
    /// `x` is interpreted according to `style.align`; `y` is the baseline.
    fn text(&mut self, x: f64, y: f64, text: &str, style: TextStyle);
}

/// Audio sink that records every trigger. Useful for headless runs and tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingAudio {
    pub played: Vec<SoundEffect>,
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, effect: SoundEffect) {
        self.played.push(effect);
    }
}

impl RecordingAudio {
    pub fn count(&self, effect: SoundEffect) -> usize {
        self.played.iter().filter(|e| **e == effect).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_over_replaces() {
        let top = Rgba::rgb(10, 20, 30);
        assert_eq!(top.over(Rgba::rgb(200, 200, 200)), top);
    }

    #[test]
    fn test_transparent_over_keeps_below() {
        let below = Rgba::rgb(200, 100, 50);
        assert_eq!(Rgba::rgba(0, 0, 0, 0).over(below), below);
    }

    #[test]
    fn test_translucent_black_darkens() {
        let out = Rgba::rgba(0, 0, 0, 153).over(Rgba::rgb(255, 255, 255));
        assert_eq!(out, Rgba::rgb(102, 102, 102));
    }

    #[test]
    fn test_recording_audio_counts() {
        let mut audio = RecordingAudio::default();
        audio.play(SoundEffect::Jump);
        audio.play(SoundEffect::Jump);
        audio.play(SoundEffect::GameOver);
        assert_eq!(audio.count(SoundEffect::Jump), 2);
        assert_eq!(audio.count(SoundEffect::GameOver), 1);
    }
}
