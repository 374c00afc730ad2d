//! Engine error type.
//!
//! Every failure the engine reports is local and recoverable: the caller
//! surfaces a message and takes no further action. No variant leaves the
//! game in a partially mutated state.

use thiserror::Error;

use super::player::PlayerId;

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors returned by board, setup, and turn operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Board size is zero or outside the configured range.
    #[error("invalid board size {0}")]
    InvalidSize(usize),

    /// Coordinates fall outside `[0, size)`.
    #[error("cell ({row}, {col}) is outside a {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    /// Target cell already holds a marker.
    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    /// Operation is only allowed during setup.
    #[error("cannot change setup while a game is in progress")]
    GameInProgress,

    /// Extension amount is zero or the resulting size is out of range.
    #[error("cannot extend a {size}x{size} board by {by}: new size must be above {min} and at most {max}")]
    InvalidExtension { size: usize, by: usize, min: usize, max: usize },

    /// Game is not in the `Playing` phase.
    #[error("game is not being played")]
    NotPlaying,

    /// Game is paused.
    #[error("game is paused")]
    Paused,

    /// A human player has not chosen a marker.
    #[error("{0} has not chosen a marker")]
    IncompleteSetup(PlayerId),

    /// Human input arrived while the computer player is to move.
    #[error("it is the computer player's turn")]
    ComputerTurn,

    /// Player id does not belong to this game.
    #[error("{0} is not part of this game")]
    UnknownPlayer(PlayerId),

    /// Marker already belongs to another player.
    #[error("marker {0} is already taken")]
    MarkerTaken(String),

    /// A game seats 2 to 255 players.
    #[error("a game needs 2 to 255 players, got {0}")]
    NotEnoughPlayers(usize),

    /// Configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
