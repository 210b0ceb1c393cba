//! Drawing: the `Surface` boundary, the frame painter, and the terminal view

pub mod painter;
pub mod renderer;
pub mod scene;
pub mod surface;

pub use painter::{FramePainter, GAME_OVER_TEXT};
pub use renderer::{Renderer, SceneView};
pub use scene::{DrawCommand, Scene};
pub use surface::{PixelRect, Surface, TextStyle};
