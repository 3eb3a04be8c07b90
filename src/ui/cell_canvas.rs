//! Terminal rasterizer for the drawing port.
//!
//! The playfield is sampled onto a grid of half-block "pixels": every
//! terminal cell shows two of them stacked, drawn as `▀` with the top pixel
//! as foreground and the bottom one as background. Text is stamped per cell
//! on top of the pixels and rendered row-by-row as Paragraph widgets.

use crate::core::constants::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use crate::core::ports::{Canvas, Rgba, TextAlign, TextStyle};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const HALF_BLOCK: char = '\u{2580}'; // ▀

#[derive(Debug, Clone, Copy, PartialEq)]
struct Glyph {
    ch: char,
    color: Rgba,
    bold: bool,
}

/// One rendered terminal cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgba,
    pub bg: Rgba,
    pub bold: bool,
}

pub struct CellCanvas {
    cols: usize,
    rows: usize,
    background: Rgba,
    /// `cols * rows * 2` pixels, row-major.
    pixels: Vec<Rgba>,
    glyphs: Vec<Option<Glyph>>,
}

/// Rows needed to show the playfield at `cols` columns with square pixels,
/// limited to `max_rows`.
pub fn fit_rows(cols: u16, max_rows: u16) -> u16 {
    let ideal = (cols as f64 * PLAYFIELD_HEIGHT / PLAYFIELD_WIDTH / 2.0).round() as u16;
    ideal.clamp(1, max_rows.max(1))
}

fn to_color(c: Rgba) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

fn average(a: Rgba, b: Rgba) -> Rgba {
    let mid = |x: u8, y: u8| ((x as u16 + y as u16) / 2) as u8;
    Rgba::rgb(mid(a.r, b.r), mid(a.g, b.g), mid(a.b, b.b))
}

impl CellCanvas {
    pub fn new(cols: u16, rows: u16, background: Rgba) -> Self {
        let cols = cols.max(1) as usize;
        let rows = rows.max(1) as usize;
        Self {
            cols,
            rows,
            background,
            pixels: vec![background; cols * rows * 2],
            glyphs: vec![None; cols * rows],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    fn pixel_rows(&self) -> usize {
        self.rows * 2
    }

    fn pixel_width(&self) -> f64 {
        PLAYFIELD_WIDTH / self.cols as f64
    }

    fn pixel_height(&self) -> f64 {
        PLAYFIELD_HEIGHT / self.pixel_rows() as f64
    }

    fn cell_height(&self) -> f64 {
        PLAYFIELD_HEIGHT / self.rows as f64
    }

    /// Map a logical span onto pixel indices `[start, end)`, clipped to
    /// `0..limit`. Anything with positive extent covers at least one pixel.
    fn span(start: f64, extent: f64, scale: f64, limit: usize) -> Option<(usize, usize)> {
        if extent <= 0.0 {
            return None;
        }
        let a = (start / scale).round();
        let mut b = ((start + extent) / scale).round();
        if b <= a {
            b = a + 1.0;
        }
        let a = a.max(0.0);
        let b = b.min(limit as f64);
        if a >= b {
            return None;
        }
        Some((a as usize, b as usize))
    }

    fn paint(&mut self, px: usize, py: usize, color: Rgba) {
        let idx = py * self.cols + px;
        self.pixels[idx] = if color.a == 255 {
            color
        } else {
            color.over(self.pixels[idx])
        };
    }

    /// The pixel at `(px, py)` in half-block coordinates.
    pub fn pixel(&self, px: usize, py: usize) -> Rgba {
        self.pixels[py * self.cols + px]
    }

    pub fn cell(&self, col: usize, row: usize) -> Cell {
        let top = self.pixel(col, row * 2);
        let bottom = self.pixel(col, row * 2 + 1);
        match self.glyphs[row * self.cols + col] {
            Some(g) => Cell {
                ch: g.ch,
                fg: g.color,
                bg: average(top, bottom),
                bold: g.bold,
            },
            None => Cell {
                ch: HALF_BLOCK,
                fg: top,
                bg: bottom,
                bold: false,
            },
        }
    }

    /// Text stamped on a row, with pixel-only cells as spaces.
    pub fn row_text(&self, row: usize) -> String {
        (0..self.cols)
            .map(|col| match self.glyphs[row * self.cols + col] {
                Some(g) => g.ch,
                None => ' ',
            })
            .collect()
    }

    /// One styled line per terminal row. Adjacent cells with the same
    /// style are merged into a single span.
    pub fn to_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(self.rows);
        for row in 0..self.rows {
            let mut spans: Vec<Span<'static>> = Vec::new();
            let mut current: Option<Style> = None;
            let mut text = String::new();

            for col in 0..self.cols {
                let cell = self.cell(col, row);
                let mut style = Style::default().fg(to_color(cell.fg)).bg(to_color(cell.bg));
                if cell.bold {
                    style = style.add_modifier(Modifier::BOLD);
                }
                if let Some(prev) = current {
                    if prev != style && !text.is_empty() {
                        spans.push(Span::styled(std::mem::take(&mut text), prev));
                    }
                }
                current = Some(style);
                text.push(cell.ch);
            }
            if let Some(style) = current {
                if !text.is_empty() {
                    spans.push(Span::styled(text, style));
                }
            }
            lines.push(Line::from(spans));
        }
        lines
    }

    /// Stamp the canvas into `area`, one Paragraph per row.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let width = area.width.min(self.cols as u16);
        for (row_idx, line) in self.to_lines().into_iter().enumerate() {
            let y = area.y + row_idx as u16;
            if y >= area.y + area.height {
                break;
            }
            frame.render_widget(Paragraph::new(line), Rect::new(area.x, y, width, 1));
        }
    }
}

impl Canvas for CellCanvas {
    fn clear(&mut self) {
        self.pixels.fill(self.background);
        self.glyphs.fill(None);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba) {
        let Some((x0, x1)) = Self::span(x, width, self.pixel_width(), self.cols) else {
            return;
        };
        let Some((y0, y1)) = Self::span(y, height, self.pixel_height(), self.pixel_rows()) else {
            return;
        };
        for py in y0..y1 {
            for px in x0..x1 {
                self.paint(px, py, color);
            }
        }

        // Text under the rect is covered or tinted along with the pixels
        for row in y0 / 2..=(y1 - 1) / 2 {
            for col in x0..x1 {
                let slot = &mut self.glyphs[row * self.cols + col];
                if color.a == 255 {
                    *slot = None;
                } else if let Some(glyph) = slot {
                    glyph.color = color.over(glyph.color);
                }
            }
        }
    }

    fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Rgba) {
        let (pw, ph) = (self.pixel_width(), self.pixel_height());
        let (ax, ay) = (x0 / pw, y0 / ph);
        let (bx, by) = (x1 / pw, y1 / ph);
        let steps = (bx - ax).abs().max((by - ay).abs()).ceil().max(1.0) as usize;

        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let px = (ax + (bx - ax) * t).floor();
            let py = (ay + (by - ay) * t).floor();
            // The far endpoint of a span sits just outside the grid
            let px = px.min(self.cols as f64 - 1.0);
            let py = py.min(self.pixel_rows() as f64 - 1.0);
            if px >= 0.0 && py >= 0.0 {
                self.paint(px as usize, py as usize, color);
            }
        }
    }

    fn text(&mut self, x: f64, y: f64, text: &str, style: TextStyle) {
        let len = text.chars().count() as i64;
        let anchor = (x / self.pixel_width()).round() as i64;
        let start = match style.align {
            TextAlign::Left => anchor,
            TextAlign::Center => anchor - len / 2,
            TextAlign::Right => anchor - len,
        };
        let row = ((y - 1.0) / self.cell_height()).floor();
        if row < 0.0 || row >= self.rows as f64 {
            return;
        }
        let row = row as usize;

        for (i, ch) in text.chars().enumerate() {
            let col = start + i as i64;
            if col < 0 || col >= self.cols as i64 {
                continue;
            }
            self.glyphs[row * self.cols + col as usize] = Some(Glyph {
                ch,
                color: style.color,
                bold: style.bold,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Rgba = Rgba::rgb(247, 247, 247);
    const RED: Rgba = Rgba::rgb(200, 0, 0);

    fn canvas() -> CellCanvas {
        // Pixels are 10 units wide and 250/24 units tall
        CellCanvas::new(80, 12, BG)
    }

    fn style(align: TextAlign) -> TextStyle {
        TextStyle {
            color: RED,
            size: 20.0,
            bold: false,
            align,
        }
    }

    #[test]
    fn test_fit_rows_keeps_pixels_square() {
        assert_eq!(fit_rows(80, 40), 13);
        assert_eq!(fit_rows(160, 40), 25);
        assert_eq!(fit_rows(160, 10), 10);
        assert_eq!(fit_rows(0, 0), 1);
    }

    #[test]
    fn test_clear_fills_background() {
        let mut c = canvas();
        c.fill_rect(0.0, 0.0, 800.0, 250.0, RED);
        c.text(400.0, 30.0, "hi", style(TextAlign::Center));
        c.clear();
        assert_eq!(c.pixel(0, 0), BG);
        assert_eq!(c.pixel(79, 23), BG);
        assert!(c.row_text(1).trim().is_empty());
    }

    #[test]
    fn test_fill_rect_covers_expected_pixels() {
        let mut c = canvas();
        // x 100..140 → px 10..14
        c.fill_rect(100.0, 0.0, 40.0, 250.0, RED);
        assert_eq!(c.pixel(9, 5), BG);
        assert_eq!(c.pixel(10, 5), RED);
        assert_eq!(c.pixel(13, 5), RED);
        assert_eq!(c.pixel(14, 5), BG);
    }

    #[test]
    fn test_thin_rect_still_visible() {
        let mut c = canvas();
        c.fill_rect(203.0, 100.0, 2.0, 2.0, RED);
        let painted = (0..80)
            .flat_map(|px| (0..24).map(move |py| (px, py)))
            .filter(|&(px, py)| c.pixel(px, py) == RED)
            .count();
        assert_eq!(painted, 1);
    }

    #[test]
    fn test_rect_clipped_at_edges() {
        let mut c = canvas();
        c.fill_rect(-50.0, -50.0, 100.0, 100.0, RED);
        c.fill_rect(780.0, 240.0, 100.0, 100.0, RED);
        assert_eq!(c.pixel(0, 0), RED);
        assert_eq!(c.pixel(79, 23), RED);
        // Entirely outside
        c.fill_rect(900.0, 0.0, 10.0, 10.0, RED);
    }

    #[test]
    fn test_translucent_rect_dims() {
        let mut c = canvas();
        c.fill_rect(0.0, 0.0, 800.0, 250.0, Rgba::rgba(0, 0, 0, 153));
        assert_eq!(c.pixel(40, 12), Rgba::rgb(98, 98, 98));
    }

    #[test]
    fn test_horizontal_line_spans_width() {
        let mut c = canvas();
        c.line(0.0, 200.0, 800.0, 200.0, RED);
        assert!((0..80).all(|px| c.pixel(px, 19) == RED));
        assert!((0..80).all(|px| c.pixel(px, 18) == BG));
    }

    #[test]
    fn test_text_alignment() {
        let mut c = canvas();
        c.text(400.0, 30.0, "abcd", style(TextAlign::Center));
        assert_eq!(&c.row_text(1)[38..42], "abcd");

        c.text(780.0, 30.0, "xy", style(TextAlign::Right));
        assert_eq!(&c.row_text(1)[76..78], "xy");

        c.text(0.0, 245.0, "left", style(TextAlign::Left));
        assert!(c.row_text(11).starts_with("left"));
    }

    #[test]
    fn test_text_clipped_not_wrapped() {
        let mut c = canvas();
        c.text(790.0, 30.0, "overflow", style(TextAlign::Left));
        assert!(c.row_text(1).ends_with("o"));
        c.text(400.0, 500.0, "gone", style(TextAlign::Center));
    }

    #[test]
    fn test_overlay_tints_text_and_opaque_rect_hides_it() {
        let mut c = canvas();
        c.text(400.0, 30.0, "Score", style(TextAlign::Center));
        c.fill_rect(0.0, 0.0, 800.0, 250.0, Rgba::rgba(0, 0, 0, 153));
        let cell = c.cell(38, 1);
        assert_eq!(cell.ch, 'S');
        assert_eq!(cell.fg, Rgba::rgb(80, 0, 0));

        c.fill_rect(0.0, 0.0, 800.0, 250.0, RED);
        assert_eq!(c.cell(38, 1).ch, HALF_BLOCK);
    }

    #[test]
    fn test_half_block_cells() {
        let mut c = canvas();
        // Paint only the lower pixel of row 0
        c.fill_rect(0.0, 10.0, 10.0, 10.0, RED);
        let cell = c.cell(0, 0);
        assert_eq!(cell.ch, HALF_BLOCK);
        assert_eq!(cell.fg, BG);
        assert_eq!(cell.bg, RED);
    }

    #[test]
    fn test_lines_merge_runs() {
        let mut c = canvas();
        c.fill_rect(0.0, 0.0, 400.0, 250.0, RED);
        let lines = c.to_lines();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0].spans.len(), 2);
        let width: usize = lines[0].spans.iter().map(|s| s.content.chars().count()).sum();
        assert_eq!(width, 80);
    }
}
