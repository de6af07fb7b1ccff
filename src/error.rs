//! Error types for board operations, game flow, and search

use thiserror::Error;

use crate::board::Coord;

/// Errors raised by the board, the game state, and the search engine.
///
/// None of these is fatal to a game loop: `MoveSelector` converts
/// `InvalidSearchResult` and any unexpected engine fault into a random
/// fallback move, and a game with no possible continuation is reported as
/// aborted rather than propagated as a panic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Board size outside the supported [1, 5] range
    #[error("board size must be between 1 and 5, got {0}")]
    InvalidSize(usize),

    /// Coordinate outside [0, N) on some axis
    #[error("move {0} is out of bounds")]
    OutOfBounds(Coord),

    /// Target cell is already occupied
    #[error("cell {0} is already occupied")]
    CellOccupied(Coord),

    /// Move attempted after the game reached a terminal state
    #[error("game is over, no more moves allowed")]
    GameOver,

    /// Search invoked on a position with no legal moves
    #[error("no legal moves available")]
    NoLegalMoves,

    /// Engine returned a move not present in the current legal-move set.
    /// Always recoverable: the selector falls back to a random legal move.
    #[error("search returned illegal move {0}")]
    InvalidSearchResult(Coord),

    /// Engine configuration failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
