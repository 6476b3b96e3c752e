use tracing::debug;

use crate::board::Board;
use crate::error::EngineError;
use crate::liberty::has_liberty;
use crate::region::group_of;
use crate::types::{CaptureReport, Color, Position};

/// Board after captures plus the stones that were removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureOutcome {
    pub board: Board,
    /// Removed opponent stones in row-major order.
    pub captured: Vec<Position>,
}

impl CaptureOutcome {
    /// Cell-array form handed to the board UI.
    pub fn to_report(&self) -> CaptureReport {
        CaptureReport {
            board: self.board.to_array(),
            captured: self.captured.clone(),
        }
    }
}

/// Removes every opponent group adjacent to `last_move` that has no liberty
/// left on `board` (which already holds the mover's stone).
///
/// Only opponent groups are examined, so the stone just placed is never
/// removed by this call.
pub fn resolve_captures(
    board: &Board,
    last_move: Position,
    mover: Color,
) -> Result<CaptureOutcome, EngineError> {
    board.check_position(last_move)?;
    Ok(remove_dead_neighbors(board, last_move, mover))
}

pub(crate) fn remove_dead_neighbors(board: &Board, last_move: Position, mover: Color) -> CaptureOutcome {
    let opponent = mover.opponent();
    let mut next = board.clone();
    let mut captured = Vec::new();

    for neighbor in board.neighbors(last_move) {
        // A group reached through two neighbors is already gone on `next`.
        if next.cell(neighbor) != Some(opponent) {
            continue;
        }
        let group = group_of(&next, neighbor);
        if !has_liberty(&next, &group) {
            for &pos in &group {
                next.set(pos, None);
            }
            captured.extend(group);
        }
    }

    if !captured.is_empty() {
        captured.sort_unstable();
        debug!(
            row = last_move.row,
            col = last_move.col,
            ?mover,
            stones = captured.len(),
            "captured opponent stones"
        );
    }

    CaptureOutcome {
        board: next,
        captured,
    }
}
