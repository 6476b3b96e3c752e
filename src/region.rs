//! Connected-component search over orthogonally adjacent intersections.
//!
//! The traversal uses an explicit work list and a visited grid, so a fully
//! connected 255x255 board costs no native stack depth.

use crate::board::Board;
use crate::error::EngineError;
use crate::types::{Color, Position};

/// Visited marks indexed like the board's cells.
#[derive(Debug, Clone)]
pub(crate) struct Visited {
    marks: Vec<bool>,
}

impl Visited {
    pub(crate) fn new(board: &Board) -> Self {
        Self {
            marks: vec![false; board.size() * board.size()],
        }
    }

    pub(crate) fn is_marked(&self, board: &Board, pos: Position) -> bool {
        self.marks[board.index(pos)]
    }

    /// Marks `pos`, returning `false` when it was already marked.
    fn mark(&mut self, board: &Board, pos: Position) -> bool {
        let idx = board.index(pos);
        !std::mem::replace(&mut self.marks[idx], true)
    }
}

/// Returns the maximal set of cells connected to `start` whose `key` equals
/// the key of `start`.
///
/// `key` is the membership predicate: `|cell| cell` groups stones of one color,
/// `|cell| cell.is_none()` collects an empty region. Order of the result is the
/// visiting order and carries no meaning.
pub fn find_region<K, F>(board: &Board, start: Position, key: F) -> Result<Vec<Position>, EngineError>
where
    F: Fn(Option<Color>) -> K,
    K: PartialEq,
{
    board.check_position(start)?;
    let mut visited = Visited::new(board);
    Ok(flood(board, start, &key, &mut visited))
}

/// The empty region containing `pos`; empty when `pos` holds a stone.
pub fn empty_region_at(board: &Board, pos: Position) -> Result<Vec<Position>, EngineError> {
    board.check_position(pos)?;
    if !board.is_empty_at(pos) {
        return Ok(Vec::new());
    }
    Ok(group_of(board, pos))
}

/// The group (same stone color, or same emptiness) containing `pos`.
pub fn group_at(board: &Board, pos: Position) -> Result<Vec<Position>, EngineError> {
    board.check_position(pos)?;
    Ok(group_of(board, pos))
}

pub(crate) fn group_of(board: &Board, pos: Position) -> Vec<Position> {
    let mut visited = Visited::new(board);
    flood(board, pos, &|cell: Option<Color>| cell, &mut visited)
}

/// Flood fill sharing `visited` with the caller, so repeated calls partition
/// the board with every cell visited at most once overall.
pub(crate) fn flood<K, F>(board: &Board, start: Position, key: &F, visited: &mut Visited) -> Vec<Position>
where
    F: Fn(Option<Color>) -> K,
    K: PartialEq,
{
    let target = key(board.cell(start));
    let mut region = Vec::new();
    if !visited.mark(board, start) {
        return region;
    }

    let mut stack = vec![start];
    while let Some(pos) = stack.pop() {
        region.push(pos);
        for next in board.neighbors(pos) {
            if key(board.cell(next)) == target && visited.mark(board, next) {
                stack.push(next);
            }
        }
    }

    region
}
