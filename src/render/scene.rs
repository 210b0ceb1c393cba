use ratatui::style::Color;

use super::surface::{PixelRect, Surface, TextStyle};

/// One recorded drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        area: PixelRect,
        color: Color,
    },
    Tile {
        rect: PixelRect,
        color: Color,
    },
    Text {
        message: String,
        x: i32,
        y: i32,
        style: TextStyle,
    },
}

/// A surface that records draw calls so they can be replayed on every redraw.
///
/// A clear covering the whole scene discards everything recorded before it,
/// so the scene only ever holds the current picture.
#[derive(Debug, Clone)]
pub struct Scene {
    area: PixelRect,
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            area: PixelRect::new(0, 0, width, height),
            commands: Vec::new(),
        }
    }

    pub fn area(&self) -> PixelRect {
        self.area
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

impl Surface for Scene {
    fn clear(&mut self, area: PixelRect, color: Color) {
        if area.contains(&self.area) {
            self.commands.clear();
        }
        self.commands.push(DrawCommand::Clear { area, color });
    }

    fn draw_tile(&mut self, rect: PixelRect, color: Color) {
        self.commands.push(DrawCommand::Tile { rect, color });
    }

    fn draw_text(&mut self, message: &str, x: i32, y: i32, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            message: message.to_string(),
            x,
            y,
            style,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_call_order() {
        let mut scene = Scene::new(100, 100);
        scene.clear(scene.area(), Color::Black);
        scene.draw_tile(PixelRect::new(0, 0, 8, 8), Color::Red);
        scene.draw_text(
            "hi",
            50,
            50,
            TextStyle {
                color: Color::White,
                bold: false,
            },
        );

        let commands = scene.commands();
        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], DrawCommand::Clear { .. }));
        assert!(matches!(commands[1], DrawCommand::Tile { color: Color::Red, .. }));
        assert!(matches!(&commands[2], DrawCommand::Text { message, .. } if message == "hi"));
    }

    #[test]
    fn test_full_clear_discards_history() {
        let mut scene = Scene::new(100, 100);
        scene.draw_tile(PixelRect::new(0, 0, 8, 8), Color::Red);
        scene.clear(PixelRect::new(0, 0, 100, 100), Color::Black);

        assert_eq!(
            scene.commands(),
            &[DrawCommand::Clear {
                area: PixelRect::new(0, 0, 100, 100),
                color: Color::Black,
            }]
        );
    }

    #[test]
    fn test_partial_clear_is_layered() {
        let mut scene = Scene::new(100, 100);
        scene.draw_tile(PixelRect::new(0, 0, 8, 8), Color::Red);
        scene.clear(PixelRect::new(0, 0, 10, 10), Color::Black);

        assert_eq!(scene.commands().len(), 2);
    }
}
