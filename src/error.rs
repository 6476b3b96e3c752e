use thiserror::Error;

use crate::types::Position;

/// Why a move was refused by the rules.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IllegalReason {
    #[error("intersection is occupied")]
    Occupied,
    #[error("move would be suicide")]
    Suicide,
    #[error("move repeats the previous position (ko)")]
    Ko,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("position ({row}, {col}) is outside a {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("board dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("board size must be odd and between 1 and 255, got {0}")]
    InvalidBoardSize(usize),

    #[error("invalid cell value {0} (expected 0, 1 or 2)")]
    InvalidCell(u8),

    #[error("no handicap table for a {0}x{0} board")]
    UnsupportedHandicapSize(usize),

    #[error("requested {requested} handicap stones but only {available} are defined")]
    TooManyHandicapStones { requested: usize, available: usize },

    #[error("illegal move at ({}, {}): {reason}", .position.row, .position.col)]
    IllegalMove {
        position: Position,
        reason: IllegalReason,
    },

    #[error("game is already over")]
    GameOver,

    #[error("there is no move to undo")]
    NothingToUndo,
}
