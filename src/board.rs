use crate::error::EngineError;
use crate::types::{Color, Position};

/// Largest side length addressable by a `u8` position.
pub const MAX_BOARD_SIZE: usize = u8::MAX as usize;
const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Square grid of intersections, each empty or holding one stone.
///
/// Boards are values: every placement or removal produces a new `Board`, so a
/// snapshot kept for ko comparison or undo is never changed behind its owner.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Color>>,
}

impl Board {
    /// Creates an empty `size`x`size` board.
    pub fn new(size: usize) -> Result<Self, EngineError> {
        validate_size(size)?;
        Ok(Self {
            size,
            cells: vec![None; size * size],
        })
    }

    /// Builds a board from rows; every row must be as long as there are rows.
    pub fn from_rows(rows: &[Vec<Option<Color>>]) -> Result<Self, EngineError> {
        let size = rows.len();
        validate_size(size)?;
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            if row.len() != size {
                return Err(EngineError::DimensionMismatch {
                    expected: size,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self { size, cells })
    }

    /// Decodes row-major cells where 0=empty, 1=black, 2=white.
    pub fn from_array(size: usize, data: &[u8]) -> Result<Self, EngineError> {
        validate_size(size)?;
        if data.len() != size * size {
            return Err(EngineError::DimensionMismatch {
                expected: size * size,
                found: data.len(),
            });
        }
        let cells = data
            .iter()
            .map(|&code| match code {
                0 => Ok(None),
                1 => Ok(Some(Color::Black)),
                2 => Ok(Some(Color::White)),
                other => Err(EngineError::InvalidCell(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { size, cells })
    }

    /// Converts the board to row-major cells where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> Vec<u8> {
        self.cells
            .iter()
            .map(|cell| cell.map_or(0, Color::code))
            .collect()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, pos: Position) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    pub fn check_position(&self, pos: Position) -> Result<(), EngineError> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(EngineError::OutOfBounds {
                row: pos.row as usize,
                col: pos.col as usize,
                size: self.size,
            })
        }
    }

    /// Fails unless `other` has the same side length as `self`.
    pub fn check_same_size(&self, other: &Board) -> Result<(), EngineError> {
        if self.size == other.size {
            Ok(())
        } else {
            Err(EngineError::DimensionMismatch {
                expected: self.size,
                found: other.size,
            })
        }
    }

    /// Returns the stone at `pos`, if any.
    pub fn get(&self, pos: Position) -> Result<Option<Color>, EngineError> {
        self.check_position(pos)?;
        Ok(self.cell(pos))
    }

    /// Returns a copy of the board with `color` placed at `pos`.
    /// The target cell is overwritten; occupancy is the validator's concern.
    pub fn with_stone(&self, pos: Position, color: Color) -> Result<Self, EngineError> {
        self.check_position(pos)?;
        let mut next = self.clone();
        next.set(pos, Some(color));
        Ok(next)
    }

    /// Returns a copy of the board with every listed cell emptied.
    pub fn without(&self, positions: &[Position]) -> Result<Self, EngineError> {
        let mut next = self.clone();
        for &pos in positions {
            self.check_position(pos)?;
            next.set(pos, None);
        }
        Ok(next)
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.cell(pos).is_none()
    }

    pub fn stone_count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(color)).count()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// All intersections in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let size = self.size;
        (0..size * size).map(move |idx| pos_from_index(idx, size))
    }

    /// On-board orthogonal neighbors of `pos`.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + use<> {
        let size = self.size as i32;
        let (row, col) = (pos.row as i32, pos.col as i32);
        DIRECTIONS.into_iter().filter_map(move |(dr, dc)| {
            let (r, c) = (row + dr, col + dc);
            if (0..size).contains(&r) && (0..size).contains(&c) {
                Some(Position::new(r as u8, c as u8))
            } else {
                None
            }
        })
    }

    /// Row-major index of an on-board position.
    pub(crate) fn index(&self, pos: Position) -> usize {
        pos.row as usize * self.size + pos.col as usize
    }

    /// Stone at an on-board position; callers pass positions already checked
    /// or produced by `neighbors`/`positions`.
    pub(crate) fn cell(&self, pos: Position) -> Option<Color> {
        self.cells[self.index(pos)]
    }

    pub(crate) fn set(&mut self, pos: Position, cell: Option<Color>) {
        let idx = self.index(pos);
        self.cells[idx] = cell;
    }

    /// Parses a diagram of `.`, `X` (black) and `O` (white), one row per line.
    #[cfg(test)]
    pub(crate) fn from_diagram(diagram: &str) -> Self {
        let rows: Vec<Vec<Option<Color>>> = diagram
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .filter(|ch| !ch.is_whitespace())
                    .map(|ch| match ch {
                        'X' => Some(Color::Black),
                        'O' => Some(Color::White),
                        '.' => None,
                        other => panic!("unexpected diagram character {other:?}"),
                    })
                    .collect()
            })
            .collect();
        Self::from_rows(&rows).expect("diagram must be a valid board")
    }
}

pub(crate) fn validate_size(size: usize) -> Result<(), EngineError> {
    if size == 0 || size % 2 == 0 || size > MAX_BOARD_SIZE {
        return Err(EngineError::InvalidBoardSize(size));
    }
    Ok(())
}

fn pos_from_index(idx: usize, size: usize) -> Position {
    Position::new((idx / size) as u8, (idx % size) as u8)
}
