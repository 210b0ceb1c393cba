//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The play session drives it tick by tick and hands the state to a renderer.

pub mod config;
pub mod direction;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::{Direction, Velocity};
pub use engine::{GameEngine, StepResult};
pub use state::{CollisionType, GameState, GameStatus, Position, Snake};
