//! Terminal key handling.
//!
//! Maps crossterm key events onto the game's logical inputs and tracks the
//! duck key. Terminals that report key releases (keyboard enhancement) give
//! us press/release directly; everywhere else the duck is held while the
//! terminal auto-repeats the key and let go once the repeats stop.

use crate::core::tick::GameInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Before the terminal starts auto-repeating a held key there is a delay,
/// typically 250-600ms. A single press keeps the duck held this long.
pub const DUCK_FIRST_HOLD_MS: u64 = 600;

/// Once repeats are flowing they arrive every ~30ms; a gap this long means
/// the key was released.
pub const DUCK_REPEAT_HOLD_MS: u64 = 120;

/// What the app should do in response to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Game(GameInput),
    ToggleMute,
    ToggleDemo,
    Quit,
}

/// Logical meaning of a key, before duck hold tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyRole {
    Primary,
    Duck,
    Mute,
    Demo,
    Quit,
}

fn key_role(key: &KeyEvent) -> Option<KeyRole> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        let ctrl_c = matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'));
        return ctrl_c.then_some(KeyRole::Quit);
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(KeyRole::Primary)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(KeyRole::Duck),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(KeyRole::Mute),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(KeyRole::Demo),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(KeyRole::Quit),
        _ => None,
    }
}

/// Hold state of the duck key.
#[derive(Debug, Clone, Default)]
pub struct DuckHold {
    /// Whether the terminal reports key release events.
    pub release_events: bool,
    held: bool,
    /// When the last press or repeat arrived.
    last_seen_ms: u64,
    repeats: u32,
}

impl DuckHold {
    pub fn new(release_events: bool) -> Self {
        Self {
            release_events,
            ..Self::default()
        }
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// A press or auto-repeat of the duck key. Only the first one of a hold
    /// produces an input.
    pub fn press(&mut self, now_ms: u64) -> Option<GameInput> {
        self.last_seen_ms = now_ms;
        if self.held {
            self.repeats += 1;
            return None;
        }
        self.held = true;
        self.repeats = 0;
        Some(GameInput::DuckPressed)
    }

    pub fn release(&mut self) -> Option<GameInput> {
        if !self.held {
            return None;
        }
        self.held = false;
        self.repeats = 0;
        Some(GameInput::DuckReleased)
    }

    /// Release the duck if the terminal has gone quiet. No-op when real
    /// release events are available.
    pub fn expire(&mut self, now_ms: u64) -> Option<GameInput> {
        if self.release_events || !self.held {
            return None;
        }
        let timeout = if self.repeats == 0 {
            DUCK_FIRST_HOLD_MS
        } else {
            DUCK_REPEAT_HOLD_MS
        };
        if now_ms.saturating_sub(self.last_seen_ms) > timeout {
            self.release()
        } else {
            None
        }
    }
}

/// Translate a key event into an app action, updating the duck hold.
pub fn handle_key(key: KeyEvent, duck: &mut DuckHold, now_ms: u64) -> Option<AppAction> {
    let role = key_role(&key)?;

    if key.kind == KeyEventKind::Release {
        return match role {
            KeyRole::Duck => duck.release().map(AppAction::Game),
            _ => None,
        };
    }
    // Repeats only matter for keeping the duck alive
    if key.kind == KeyEventKind::Repeat && role != KeyRole::Duck {
        return None;
    }

    match role {
        KeyRole::Primary => Some(AppAction::Game(GameInput::Primary)),
        KeyRole::Duck => duck.press(now_ms).map(AppAction::Game),
        KeyRole::Mute => Some(AppAction::ToggleMute),
        KeyRole::Demo => Some(AppAction::ToggleDemo),
        KeyRole::Quit => Some(AppAction::Quit),
    }
}
