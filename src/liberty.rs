use std::collections::BTreeSet;

use crate::board::Board;
use crate::error::EngineError;
use crate::types::Position;

/// Returns `true` when no member of `group` touches an empty intersection.
/// Off-board edges and stones of either color are not liberties.
pub fn is_surrounded(board: &Board, group: &[Position]) -> Result<bool, EngineError> {
    for &pos in group {
        board.check_position(pos)?;
    }
    Ok(!has_liberty(board, group))
}

/// Distinct empty intersections adjacent to `group`.
pub fn liberties(board: &Board, group: &[Position]) -> Result<BTreeSet<Position>, EngineError> {
    for &pos in group {
        board.check_position(pos)?;
    }
    Ok(liberty_set(board, group))
}

pub(crate) fn has_liberty(board: &Board, group: &[Position]) -> bool {
    group
        .iter()
        .any(|&pos| board.neighbors(pos).any(|next| board.is_empty_at(next)))
}

pub(crate) fn liberty_set(board: &Board, group: &[Position]) -> BTreeSet<Position> {
    group
        .iter()
        .flat_map(|&pos| board.neighbors(pos))
        .filter(|&next| board.is_empty_at(next))
        .collect()
}
