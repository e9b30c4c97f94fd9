//! Error types for the engine.
//!
//! Every error here is caller-correctable: the engine state is left exactly
//! as it was before the failing call.

use thiserror::Error;

use crate::square::Square;

/// A rejected move submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMove {
    /// The coordinates do not name a cell of the 8×8 board.
    #[error("Illegal move: ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    /// The cell already holds a disc.
    #[error("Illegal move: {0} is already occupied")]
    Occupied(Square),

    /// The cell is empty but placing there would capture nothing.
    #[error("Illegal move: {0} captures no discs")]
    NoCapture(Square),

    /// The game has already ended.
    #[error("Illegal move: the game is over")]
    GameOver,
}

/// Errors from building a board out of external data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A board string must describe exactly 64 cells.
    #[error("board string has {0} cells, expected 64")]
    Length(usize),

    /// A character other than `X`, `O` or `-` was found.
    #[error("unexpected character '{found}' at cell {index}")]
    Character { index: usize, found: char },

    /// The same square was given to both players.
    #[error("black and white discs overlap")]
    Overlap,
}
