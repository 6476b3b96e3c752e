use crate::board::Board;
use crate::error::EngineError;
use crate::types::{Color, Position};

// Star points in placement order: four corners, then tengen.
const NINE: [Position; 5] = [
    Position::new(2, 6),
    Position::new(6, 2),
    Position::new(6, 6),
    Position::new(2, 2),
    Position::new(4, 4),
];
const THIRTEEN: [Position; 5] = [
    Position::new(3, 9),
    Position::new(9, 3),
    Position::new(9, 9),
    Position::new(3, 3),
    Position::new(6, 6),
];
const NINETEEN: [Position; 5] = [
    Position::new(3, 15),
    Position::new(15, 3),
    Position::new(15, 15),
    Position::new(3, 3),
    Position::new(9, 9),
];

/// Standard handicap points for `board_size`, in placement order.
pub fn handicap_positions(board_size: usize) -> Result<&'static [Position], EngineError> {
    match board_size {
        9 => Ok(&NINE),
        13 => Ok(&THIRTEEN),
        19 => Ok(&NINETEEN),
        other => Err(EngineError::UnsupportedHandicapSize(other)),
    }
}

/// Returns `board` with the first `count` handicap stones placed as Black.
pub fn apply_handicap(board: &Board, count: usize) -> Result<Board, EngineError> {
    if count == 0 {
        return Ok(board.clone());
    }
    let points = handicap_positions(board.size())?;
    if count > points.len() {
        return Err(EngineError::TooManyHandicapStones {
            requested: count,
            available: points.len(),
        });
    }
    let mut next = board.clone();
    for &pos in &points[..count] {
        next.set(pos, Some(Color::Black));
    }
    Ok(next)
}
