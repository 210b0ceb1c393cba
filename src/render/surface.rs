use ratatui::style::Color;

/// Axis-aligned rectangle in surface pixels. May lie partly off the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// True if `other` lies entirely inside `self`
    pub fn contains(&self, other: &PixelRect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub color: Color,
    pub bold: bool,
}

/// Drawing operations the game needs from a display.
///
/// Coordinates are in pixels; anything outside the surface is clipped by
/// the implementation.
pub trait Surface {
    fn clear(&mut self, area: PixelRect, color: Color);

    fn draw_tile(&mut self, rect: PixelRect, color: Color);

    /// Draw `message` horizontally centered on `x`, on the line holding `y`
    fn draw_text(&mut self, message: &str, x: i32, y: i32, style: TextStyle);
}
