use ratatui::style::Color;

use super::surface::{PixelRect, Surface, TextStyle};
use crate::game::{GameConfig, GameState, Position};

const BACKGROUND: Color = Color::Black;
const SNAKE: Color = Color::LightGreen;
const FOOD: Color = Color::Red;
const MESSAGE: Color = Color::White;

pub const GAME_OVER_TEXT: &str = "Game Over!";

/// Turns game state into surface calls, scaling tile coordinates to pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePainter {
    tile_size: u32,
    tile_gap: u32,
    area_width: u32,
    area_height: u32,
}

impl FramePainter {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            tile_size: config.tile_size,
            tile_gap: config.tile_gap,
            area_width: config.tile_count_x() * config.tile_size,
            area_height: config.tile_count_y() * config.tile_size,
        }
    }

    /// Pixel size of the drawn board
    pub fn area(&self) -> PixelRect {
        PixelRect::new(0, 0, self.area_width, self.area_height)
    }

    /// Pixel rectangle for a tile, inset by the gap on the right and bottom
    pub fn tile_rect(&self, pos: Position) -> PixelRect {
        let size = self.tile_size as i32;
        let inset = self.tile_size - self.tile_gap;
        PixelRect::new(pos.x * size, pos.y * size, inset, inset)
    }

    /// Background, every snake segment, then the food
    pub fn paint_frame<S: Surface + ?Sized>(&self, surface: &mut S, state: &GameState) {
        surface.clear(self.area(), BACKGROUND);

        for segment in &state.snake.body {
            surface.draw_tile(self.tile_rect(*segment), SNAKE);
        }

        surface.draw_tile(self.tile_rect(state.food), FOOD);
    }

    /// Terminal message centered over whatever was last painted
    pub fn paint_game_over<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.draw_text(
            GAME_OVER_TEXT,
            (self.area_width / 2) as i32,
            (self.area_height / 2) as i32,
            TextStyle {
                color: MESSAGE,
                bold: true,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Snake, Velocity};
    use crate::render::scene::{DrawCommand, Scene};

    fn painter() -> FramePainter {
        FramePainter::new(&GameConfig::small())
    }

    #[test]
    fn test_tile_rect_scaling() {
        let painter = painter();
        assert_eq!(painter.tile_rect(Position::new(0, 0)), PixelRect::new(0, 0, 18, 18));
        assert_eq!(painter.tile_rect(Position::new(3, 2)), PixelRect::new(60, 40, 18, 18));
        assert_eq!(painter.tile_rect(Position::new(-1, 0)), PixelRect::new(-20, 0, 18, 18));
    }

    #[test]
    fn test_area_drops_partial_tiles() {
        let config = GameConfig {
            area_width: 210,
            area_height: 95,
            ..GameConfig::default()
        };
        assert_eq!(FramePainter::new(&config).area(), PixelRect::new(0, 0, 200, 80));
    }

    #[test]
    fn test_frame_order() {
        let painter = painter();
        let state = GameState::new(
            Snake::from_segments(vec![Position::new(2, 2), Position::new(1, 2)]).unwrap(),
            Position::new(7, 7),
            Velocity::new(1, 0),
            10,
            10,
        );
        let mut scene = Scene::new(200, 200);

        painter.paint_frame(&mut scene, &state);

        assert_eq!(
            scene.commands(),
            &[
                DrawCommand::Clear {
                    area: PixelRect::new(0, 0, 200, 200),
                    color: BACKGROUND,
                },
                DrawCommand::Tile {
                    rect: PixelRect::new(40, 40, 18, 18),
                    color: SNAKE,
                },
                DrawCommand::Tile {
                    rect: PixelRect::new(20, 40, 18, 18),
                    color: SNAKE,
                },
                DrawCommand::Tile {
                    rect: PixelRect::new(140, 140, 18, 18),
                    color: FOOD,
                },
            ]
        );
    }

    #[test]
    fn test_game_over_centered() {
        let mut scene = Scene::new(200, 200);
        painter().paint_game_over(&mut scene);

        match &scene.commands()[0] {
            DrawCommand::Text { message, x, y, style } => {
                assert_eq!(message, GAME_OVER_TEXT);
                assert_eq!((*x, *y), (100, 100));
                assert!(style.bold);
            }
            other => panic!("expected text, got {other:?}"),
        }
    }
}
