use thiserror::Error;

use super::state::Position;

/// Errors raised by the simulation core
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// A food position was removed that is not live
    #[error("no food at ({}, {})", position.x, position.y)]
    InvalidRemoval { position: Position },

    /// The configuration cannot describe a playable grid
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
