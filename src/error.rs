//! Error types for game construction.
//!
//! The reducer itself never fails: rejected transitions come back as a
//! [`GameStatus`](crate::GameStatus) on the returned state. Building a game
//! is the only fallible operation.

use thiserror::Error;

/// Errors that can occur when creating a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NewGameError {
    /// No players were given.
    #[error("no players were given")]
    NoPlayers,
    /// Draws per turn must be at least 1.
    #[error("draws per turn must be at least 1")]
    ZeroDrawsPerTurn,
}
