use tracing::{debug, trace};

use crate::board::Board;
use crate::capture::{CaptureOutcome, remove_dead_neighbors};
use crate::config::LegalityRule;
use crate::error::{EngineError, IllegalReason};
use crate::liberty::has_liberty;
use crate::region::group_of;
use crate::types::{Color, Move, Position};

/// Outcome of checking a candidate move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveVerdict {
    Legal,
    Occupied,
    Suicide,
    Ko,
}

impl MoveVerdict {
    pub fn is_legal(self) -> bool {
        self == Self::Legal
    }

    /// Refusal reason, `None` for a legal move.
    pub fn reason(self) -> Option<IllegalReason> {
        match self {
            Self::Legal => None,
            Self::Occupied => Some(IllegalReason::Occupied),
            Self::Suicide => Some(IllegalReason::Suicide),
            Self::Ko => Some(IllegalReason::Ko),
        }
    }
}

impl From<IllegalReason> for MoveVerdict {
    fn from(reason: IllegalReason) -> Self {
        match reason {
            IllegalReason::Occupied => Self::Occupied,
            IllegalReason::Suicide => Self::Suicide,
            IllegalReason::Ko => Self::Ko,
        }
    }
}

/// Returns `true` when `mv` may be played on `board` under the strict rule.
///
/// `ko_reference` is the board as it stood before the opponent's last move;
/// a move recreating it is refused.
pub fn is_legal(board: &Board, mv: Move, ko_reference: Option<&Board>) -> Result<bool, EngineError> {
    check_move(board, mv, ko_reference, LegalityRule::Strict).map(MoveVerdict::is_legal)
}

/// Classifies `mv` as legal or names why it is refused.
pub fn check_move(
    board: &Board,
    mv: Move,
    ko_reference: Option<&Board>,
    rule: LegalityRule,
) -> Result<MoveVerdict, EngineError> {
    validate_inputs(board, mv.position, ko_reference)?;
    Ok(match judge(board, mv, ko_reference, rule) {
        Ok(_) => MoveVerdict::Legal,
        Err(reason) => reason.into(),
    })
}

/// Returns `true` when playing `mv` would recreate `previous` exactly.
/// Occupied targets are never a ko.
pub fn is_ko(board: &Board, mv: Move, previous: Option<&Board>) -> Result<bool, EngineError> {
    validate_inputs(board, mv.position, previous)?;
    let Some(previous) = previous else {
        return Ok(false);
    };
    if !board.is_empty_at(mv.position) {
        return Ok(false);
    }
    let outcome = place_and_capture(board, mv);
    Ok(outcome.board == *previous)
}

/// Every empty point where `color` may legally play.
pub fn legal_moves(
    board: &Board,
    color: Color,
    ko_reference: Option<&Board>,
    rule: LegalityRule,
) -> Result<Vec<Position>, EngineError> {
    if let Some(reference) = ko_reference {
        board.check_same_size(reference)?;
    }
    Ok(board
        .positions()
        .filter(|&pos| board.is_empty_at(pos))
        .filter(|&pos| judge(board, Move { position: pos, color }, ko_reference, rule).is_ok())
        .collect())
}

/// The board a legal move produces, or why the move is refused.
pub(crate) fn judge(
    board: &Board,
    mv: Move,
    ko_reference: Option<&Board>,
    rule: LegalityRule,
) -> Result<CaptureOutcome, IllegalReason> {
    let pos = mv.position;
    if !board.is_empty_at(pos) {
        trace!(row = pos.row, col = pos.col, "target occupied");
        return Err(IllegalReason::Occupied);
    }

    let mut placed = board.clone();
    placed.set(pos, Some(mv.color));
    let outcome = remove_dead_neighbors(&placed, pos, mv.color);

    let breathes = match rule {
        LegalityRule::Strict => has_liberty(&outcome.board, &group_of(&outcome.board, pos)),
        LegalityRule::Approximate => {
            placed.neighbors(pos).any(|next| placed.is_empty_at(next))
                || surrounds_opponent(&placed, pos, mv.color)
        }
    };

    if !breathes {
        debug!(row = pos.row, col = pos.col, color = ?mv.color, "suicide rejected");
        return Err(IllegalReason::Suicide);
    }
    if ko_reference.is_some_and(|reference| outcome.board == *reference) {
        debug!(row = pos.row, col = pos.col, color = ?mv.color, "ko rejected");
        return Err(IllegalReason::Ko);
    }
    Ok(outcome)
}

/// Whether any opponent group next to `pos` has no liberty on `placed`.
fn surrounds_opponent(placed: &Board, pos: Position, mover: Color) -> bool {
    let opponent = mover.opponent();
    placed.neighbors(pos).any(|next| {
        placed.cell(next) == Some(opponent) && !has_liberty(placed, &group_of(placed, next))
    })
}

fn place_and_capture(board: &Board, mv: Move) -> CaptureOutcome {
    let mut placed = board.clone();
    placed.set(mv.position, Some(mv.color));
    remove_dead_neighbors(&placed, mv.position, mv.color)
}

fn validate_inputs(board: &Board, pos: Position, reference: Option<&Board>) -> Result<(), EngineError> {
    board.check_position(pos)?;
    if let Some(reference) = reference {
        board.check_same_size(reference)?;
    }
    Ok(())
}
