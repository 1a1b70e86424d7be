//! SSnake - a wrap-around Snake arcade game
//!
//! This library provides:
//! - Core grid simulation (game module): movement, border wrap, self-collision
//!   trimming, food spawning and scoring
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - The interactive frame driver (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
