use serde::{Deserialize, Serialize};

/// Stone color of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    /// Cell code used by `Board::to_array`: 1=black, 2=white.
    pub fn code(self) -> u8 {
        match self {
            Self::Black => 1,
            Self::White => 2,
        }
    }
}

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// A stone placement by `color` at `position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub position: Position,
    pub color: Color,
}

impl Move {
    pub const fn new(row: u8, col: u8, color: Color) -> Self {
        Self {
            position: Position::new(row, col),
            color,
        }
    }
}

/// Stones captured *by* each color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureCounts {
    pub black: u32,
    pub white: u32,
}

impl CaptureCounts {
    pub fn get(&self, color: Color) -> u32 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    pub fn add(&mut self, color: Color, stones: u32) {
        match color {
            Color::Black => self.black += stones,
            Color::White => self.white += stones,
        }
    }
}

/// Territory plus captures per color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    pub black: u32,
    pub white: u32,
}

/// Public session state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub size: usize,
    /// Row-major cells, 0=empty, 1=black, 2=white.
    pub board: Vec<u8>,
    pub current_player: Color,
    pub captures: CaptureCounts,
    pub move_count: usize,
    pub is_game_over: bool,
    /// `true` when the previous action was a pass.
    pub is_pass: bool,
    /// Stones removed by the previous action; empty after a pass.
    pub captured: Vec<Position>,
    pub last_move: Option<Position>,
    pub can_undo: bool,
}

/// Board cells after capture resolution plus the removed stones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaptureReport {
    /// Row-major cells, 0=empty, 1=black, 2=white.
    pub board: Vec<u8>,
    pub captured: Vec<Position>,
}

/// Result of one committed move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveReport {
    pub color: Color,
    pub position: Position,
    pub captured: Vec<Position>,
}
