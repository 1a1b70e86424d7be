//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! One call to [`GameEngine::step`] advances the playfield by exactly one frame.

pub mod action;
pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod food;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use color::Rgb;
pub use config::GameConfig;
pub use engine::{GameEngine, StepInfo, StepResult};
pub use error::GameError;
pub use food::{Food, FoodKind, FoodPool, SpawnTimer};
pub use snake::{Meal, Snake};
pub use state::{GameState, Position, Score, CELL_SIZE};
