//! Grid Snake - a tile-based snake game for the terminal
//!
//! This library provides:
//! - Core game logic (game module)
//! - Drawing boundary and terminal view (render module)
//! - Keyboard mapping (input module)
//! - The interactive session loop (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod modes;
pub mod render;
