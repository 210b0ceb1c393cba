use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::scene::{DrawCommand, Scene};
use super::surface::{PixelRect, TextStyle};

/// Replays a recorded scene into terminal cells.
///
/// One tile maps to two columns and one row so tiles look square.
pub struct SceneView<'a> {
    scene: &'a Scene,
    px_per_col: f64,
    px_per_row: f64,
}

impl<'a> SceneView<'a> {
    pub fn new(scene: &'a Scene, tile_size: u32) -> Self {
        Self {
            scene,
            px_per_col: f64::from(tile_size) / 2.0,
            px_per_row: f64::from(tile_size),
        }
    }

    /// Terminal size needed to show the whole scene
    pub fn cell_size(&self) -> (u16, u16) {
        let area = self.scene.area();
        let cols = (f64::from(area.width) / self.px_per_col).ceil() as u16;
        let rows = (f64::from(area.height) / self.px_per_row).ceil() as u16;
        (cols, rows)
    }

    fn fill(&self, rect: PixelRect, area: Rect, buf: &mut Buffer, style: Style, symbol: &str) {
        let Some((col0, col1)) = cell_span(rect.x, rect.width, self.px_per_col, area.width) else {
            return;
        };
        let Some((row0, row1)) = cell_span(rect.y, rect.height, self.px_per_row, area.height)
        else {
            return;
        };

        for row in row0..row1 {
            for col in col0..col1 {
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_symbol(symbol).set_style(style);
                }
            }
        }
    }

    fn text(&self, message: &str, (x, y): (i32, i32), style: &TextStyle, area: Rect, buf: &mut Buffer) {
        let mut cell_style = Style::default().fg(style.color);
        if style.bold {
            cell_style = cell_style.add_modifier(Modifier::BOLD);
        }

        let row = (f64::from(y) / self.px_per_row).floor() as i32;
        if row < 0 || row >= i32::from(area.height) {
            return;
        }

        let len = message.chars().count() as i32;
        let anchor = (f64::from(x) / self.px_per_col).round() as i32;
        let start = anchor - len / 2;

        for (i, ch) in message.chars().enumerate() {
            let col = start + i as i32;
            if col < 0 || col >= i32::from(area.width) {
                continue;
            }
            if let Some(cell) = buf.cell_mut((area.x + col as u16, area.y + row as u16)) {
                cell.set_char(ch).set_style(cell_style);
            }
        }
    }
}

impl Widget for SceneView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for command in self.scene.commands() {
            match command {
                DrawCommand::Clear { area: rect, color } => {
                    self.fill(*rect, area, buf, Style::default().bg(*color), " ");
                }
                DrawCommand::Tile { rect, color } => {
                    self.fill(*rect, area, buf, Style::default().fg(*color), "█");
                }
                DrawCommand::Text {
                    message,
                    x,
                    y,
                    style,
                } => self.text(message, (*x, *y), style, area, buf),
            }
        }
    }
}

/// Cells covered by `[start, start + len)` pixels, clipped to `[0, cells)`
fn cell_span(start: i32, len: u32, px_per_cell: f64, cells: u16) -> Option<(u16, u16)> {
    let first = (f64::from(start) / px_per_cell).floor().max(0.0);
    let last = ((f64::from(start) + f64::from(len)) / px_per_cell)
        .ceil()
        .min(f64::from(cells));

    if first < last {
        Some((first as u16, last as u16))
    } else {
        None
    }
}

pub struct Renderer {
    tile_size: u32,
}

impl Renderer {
    pub fn new(tile_size: u32) -> Self {
        Self { tile_size }
    }

    pub fn render(&self, frame: &mut Frame, scene: &Scene) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Game area
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        let view = SceneView::new(scene, self.tile_size);
        let board = centered(chunks[0], view.cell_size());

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::White))
            .title(" Snake ");
        let inner = block.inner(board);
        frame.render_widget(block, board);
        frame.render_widget(view, inner);

        frame.render_widget(self.render_controls(), chunks[1]);
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

/// Bordered rect of `cells` centered in `area`, shrunk to fit
fn centered(area: Rect, cells: (u16, u16)) -> Rect {
    let width = cells.0.saturating_add(2).min(area.width);
    let height = cells.1.saturating_add(2).min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::surface::Surface;

    fn symbol_at(buf: &Buffer, x: u16, y: u16) -> &str {
        buf.cell((x, y)).map(|c| c.symbol()).unwrap_or("")
    }

    #[test]
    fn test_cell_span_clips() {
        assert_eq!(cell_span(0, 18, 10.0, 20), Some((0, 2)));
        assert_eq!(cell_span(60, 18, 10.0, 20), Some((6, 8)));
        assert_eq!(cell_span(-20, 18, 10.0, 20), None);
        assert_eq!(cell_span(200, 18, 10.0, 20), None);
        assert_eq!(cell_span(190, 18, 10.0, 20), Some((19, 20)));
    }

    #[test]
    fn test_scene_cell_size() {
        let scene = Scene::new(200, 100);
        assert_eq!(SceneView::new(&scene, 20).cell_size(), (20, 5));
    }

    #[test]
    fn test_tiles_and_text_land_in_cells() {
        let mut scene = Scene::new(100, 100);
        let area = scene.area();
        scene.clear(area, Color::Black);
        scene.draw_tile(PixelRect::new(20, 40, 18, 18), Color::LightGreen);
        scene.draw_tile(PixelRect::new(-20, 40, 18, 18), Color::LightGreen);
        scene.draw_text(
            "Hi",
            50,
            80,
            TextStyle {
                color: Color::White,
                bold: false,
            },
        );

        let rect = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(rect);
        SceneView::new(&scene, 20).render(rect, &mut buf);

        assert_eq!(symbol_at(&buf, 2, 2), "█");
        assert_eq!(symbol_at(&buf, 3, 2), "█");
        assert_eq!(symbol_at(&buf, 1, 2), " ");
        assert_eq!(symbol_at(&buf, 0, 2), " ");
        assert_eq!(symbol_at(&buf, 4, 4), "H");
        assert_eq!(symbol_at(&buf, 5, 4), "i");
        assert_eq!(buf.cell((0, 0)).map(|c| c.bg), Some(Color::Black));
    }

    #[test]
    fn test_centered_shrinks_to_fit() {
        let area = Rect::new(0, 0, 30, 10);
        assert_eq!(centered(area, (20, 5)), Rect::new(4, 1, 22, 7));
        assert_eq!(centered(area, (40, 20)), Rect::new(0, 0, 30, 10));
    }
}
