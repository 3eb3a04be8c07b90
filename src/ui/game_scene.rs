//! The game screen: rasterized playfield, status bar and info panel.

use super::cell_canvas::{fit_rows, CellCanvas};
use super::game_common::{render_side_panel, render_status, render_too_small, Chrome, KeyHint};
use crate::core::game_state::{GamePhase, GameState};
use crate::core::ports::Rgba;
use crate::core::scene::{self, BACKGROUND, CACTUS_COLOR, FLYER_COLOR, PLAYER_COLOR};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

const INFO_PANEL_WIDTH: u16 = 20;
const MIN_WIDTH: u16 = 60;
const MIN_HEIGHT: u16 = 14;

/// Front-end toggles shown alongside the game.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hud {
    pub muted: bool,
    pub demo: bool,
}

/// Draw the whole game screen.
pub fn render_game_scene(frame: &mut Frame, area: Rect, state: &GameState, hud: Hud) {
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_too_small(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    let chrome = Chrome {
        title: " Dino Runner ",
        accent: Color::LightYellow,
        field_min_rows: 6,
        side_width: INFO_PANEL_WIDTH,
    };
    let areas = chrome.render(frame, area);

    render_play_field(frame, areas.field, state);
    let (message, color) = status_for(state, hud);
    render_status(frame, areas.status, &message, color, &hints_for(state, hud));
    render_side_panel(frame, areas.side, info_lines(state, hud));
}

/// Area the playfield occupies inside `content`: full width, vertically
/// centered, tall enough for square pixels.
pub fn play_field_area(content: Rect) -> Rect {
    let rows = fit_rows(content.width, content.height);
    let y = content.y + content.height.saturating_sub(rows) / 2;
    Rect::new(content.x, y, content.width, rows)
}

fn render_play_field(frame: &mut Frame, content: Rect, state: &GameState) {
    if content.width == 0 || content.height == 0 {
        return;
    }
    let field = play_field_area(content);
    let mut canvas = CellCanvas::new(field.width, field.height, BACKGROUND);
    scene::draw(state, &mut canvas);
    canvas.render(frame, field);
}

fn status_for(state: &GameState, hud: Hud) -> (String, Color) {
    match state.phase {
        GamePhase::NotStarted => ("Ready".to_string(), Color::LightYellow),
        GamePhase::Running if hud.demo => ("Demo".to_string(), Color::Cyan),
        GamePhase::Running => ("Run!".to_string(), Color::LightYellow),
        GamePhase::GameOver => (format!("Game over - score {}", state.score), Color::Red),
    }
}

fn hints_for(state: &GameState, hud: Hud) -> Vec<KeyHint> {
    let demo = KeyHint::new("[A]", if hud.demo { "Stop demo" } else { "Demo" });
    let quit = KeyHint::new("[Esc]", "Quit");
    match state.phase {
        GamePhase::NotStarted => vec![KeyHint::new("[Space/Up]", "Start"), demo, quit],
        GamePhase::Running => vec![
            KeyHint::new("[Space/Up]", "Jump"),
            KeyHint::new("[Down]", "Duck"),
            KeyHint::new("[M]", if hud.muted { "Unmute" } else { "Mute" }),
            quit,
        ],
        GamePhase::GameOver => vec![KeyHint::new("[Space/Up]", "Restart"), demo, quit],
    }
}

/// Progress from the starting speed to the cap, 0-100.
pub fn speed_percent(state: &GameState) -> u32 {
    let tuning = &state.tuning;
    if tuning.max_speed > tuning.initial_speed {
        ((state.speed() - tuning.initial_speed) / (tuning.max_speed - tuning.initial_speed)
            * 100.0)
            .round()
            .clamp(0.0, 100.0) as u32
    } else {
        0
    }
}

fn swatch(color: Rgba) -> Style {
    Style::default().fg(Color::Rgb(color.r, color.g, color.b))
}

fn info_lines(state: &GameState, hud: Hud) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);

    vec![
        Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(
                state.score.to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Best:  ", label),
            Span::styled(state.best_score.to_string(), value),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Speed: ", label),
            Span::styled(format!("{}%", speed_percent(state)), value),
        ]),
        Line::from(vec![
            Span::styled("Runs:  ", label),
            Span::styled(state.runs.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Sound: ", label),
            Span::styled(if hud.muted { "off" } else { "on" }, value),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(" \u{2588} ", swatch(PLAYER_COLOR)),
            Span::styled("Runner", label),
        ]),
        Line::from(vec![
            Span::styled(" \u{2588} ", swatch(CACTUS_COLOR)),
            Span::styled("Cactus", label),
        ]),
        Line::from(vec![
            Span::styled(" \u{2588} ", swatch(FLYER_COLOR)),
            Span::styled("Flyer", label),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer.get(x, y).symbol());
            }
            out.push('\n');
        }
        out
    }

    fn render(state: &GameState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| render_game_scene(f, f.size(), state, Hud::default()))
            .unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn test_speed_percent() {
        let mut state = GameState::default();
        assert_eq!(speed_percent(&state), 0);
        state.difficulty.speed = 11.5;
        assert_eq!(speed_percent(&state), 50);
        state.difficulty.speed = state.tuning.max_speed;
        assert_eq!(speed_percent(&state), 100);
    }

    #[test]
    fn test_play_field_area_centered() {
        let field = play_field_area(Rect::new(1, 1, 80, 20));
        assert_eq!(field.height, 13);
        assert_eq!(field.y, 1 + 3);
        assert_eq!(field.width, 80);
    }

    #[test]
    fn test_title_screen_renders() {
        let text = render(&GameState::default(), 120, 30);
        assert!(text.contains("Dino Runner"));
        assert!(text.contains("Press Space to Start"));
        assert!(text.contains("Ready"));
        assert!(text.contains("Legend:"));
    }

    #[test]
    fn test_game_over_renders_scores() {
        let mut state = GameState::default();
        state.start_run();
        state.score = 350;
        state.end_run();
        let text = render(&state, 120, 30);
        assert!(text.contains("Game Over"));
        assert!(text.contains("Game over - score 350"));
        assert!(text.contains("Restart"));
    }

    #[test]
    fn test_small_terminal_message() {
        let text = render(&GameState::default(), 40, 10);
        assert!(text.contains("too small"));
    }

    #[test]
    fn test_hints_follow_phase() {
        let mut state = GameState::default();
        let hud = Hud {
            muted: true,
            demo: false,
        };
        assert_eq!(hints_for(&state, hud)[0].action, "Start");
        state.start_run();
        assert!(hints_for(&state, hud).contains(&KeyHint::new("[M]", "Unmute")));
        assert_eq!(status_for(&state, Hud { demo: true, ..hud }).0, "Demo");
    }
}
