//! Screen chrome around the playfield: outer frame, status lines and the
//! side panel.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Status area height: message line plus key hints.
const STATUS_ROWS: u16 = 2;

/// Where each part of the screen goes.
///
/// ```text
/// ┌─ Title ─────────────────────────┬─ Info ──────┐
/// │                                 │             │
/// │   field                         │  side       │
/// │                                 │             │
/// │ status (message + key hints)    │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub field: Rect,
    pub status: Rect,
    pub side: Rect,
}

/// Outer frame settings.
#[derive(Debug, Clone, Copy)]
pub struct Chrome<'a> {
    pub title: &'a str,
    pub accent: Color,
    pub field_min_rows: u16,
    pub side_width: u16,
}

impl Chrome<'_> {
    fn outer_block(&self) -> Block<'_> {
        Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.accent))
    }

    /// Split `area` without drawing anything.
    pub fn areas(&self, area: Rect) -> ScreenAreas {
        let inner = self.outer_block().inner(area);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(self.side_width)])
            .split(inner);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(self.field_min_rows),
                Constraint::Length(STATUS_ROWS),
            ])
            .split(columns[0]);

        ScreenAreas {
            field: rows[0],
            status: rows[1],
            side: columns[1],
        }
    }

    /// Clear `area`, draw the outer frame and return the inner areas.
    pub fn render(&self, frame: &mut Frame, area: Rect) -> ScreenAreas {
        frame.render_widget(Clear, area);
        frame.render_widget(self.outer_block(), area);
        self.areas(area)
    }
}

/// A key and what it does right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// `[Space] Jump  [Esc] Quit`, keys bright and actions dim.
pub fn hint_line(hints: &[KeyHint]) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", hint.action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// Centered message on the first status row, key hints on the second.
pub fn render_status(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    color: Color,
    hints: &[KeyHint],
) {
    if area.height == 0 {
        return;
    }
    let row = |offset: u16| Rect::new(area.x, area.y + offset, area.width, 1);

    frame.render_widget(
        Paragraph::new(message)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center),
        row(0),
    );
    if area.height >= STATUS_ROWS && !hints.is_empty() {
        frame.render_widget(
            Paragraph::new(hint_line(hints)).alignment(Alignment::Center),
            row(1),
        );
    }
}

/// Bordered " Info " panel filled with `lines`.
pub fn render_side_panel(frame: &mut Frame, area: Rect, lines: Vec<Line<'_>>) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Centered notice for terminals too small to play in.
pub fn render_too_small(frame: &mut Frame, area: Rect, min_width: u16, min_height: u16) {
    frame.render_widget(Clear, area);
    if area.height == 0 {
        return;
    }
    let text = format!(
        "Terminal too small: need {}x{}, have {}x{}",
        min_width, min_height, area.width, area.height
    );
    frame.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center),
        Rect::new(area.x, area.y + area.height / 2, area.width, 1),
    );
}
