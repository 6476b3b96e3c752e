//! Territory scoring.
//!
//! Empty intersections are partitioned into maximal regions. A region whose
//! bordering stones are all one color is that color's territory. A region
//! touching both colors is either neutral or, when it holds the shared
//! liberties of groups that cannot approach each other, seki. Neither kind
//! is scored.

use std::collections::BTreeSet;

use tracing::trace;

use crate::board::Board;
use crate::error::EngineError;
use crate::liberty::liberty_set;
use crate::region::{Visited, flood};
use crate::types::{CaptureCounts, Color, Position, Score};

/// Cell code for seki points in `territory_map`.
pub const SEKI_CODE: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionOwner {
    Territory(Color),
    Seki,
    Neutral,
}

/// A maximal empty region and its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub cells: Vec<Position>,
    pub owner: RegionOwner,
}

#[derive(Debug, Clone, Copy, Default)]
struct Borders {
    black: bool,
    white: bool,
}

impl Borders {
    fn of(board: &Board, region: &[Position]) -> Self {
        let mut borders = Self::default();
        for next in region.iter().flat_map(|&pos| board.neighbors(pos)) {
            match board.cell(next) {
                Some(Color::Black) => borders.black = true,
                Some(Color::White) => borders.white = true,
                None => {}
            }
        }
        borders
    }

    fn single(self) -> Option<Color> {
        match (self.black, self.white) {
            (true, false) => Some(Color::Black),
            (false, true) => Some(Color::White),
            _ => None,
        }
    }
}

/// Classifies every empty region of `board`, in row-major order of each
/// region's first cell.
pub fn analyze_territory(board: &Board) -> Vec<Region> {
    let mut visited = Visited::new(board);
    let mut regions = Vec::new();

    for pos in board.positions() {
        if !board.is_empty_at(pos) || visited.is_marked(board, pos) {
            continue;
        }
        let cells = flood(board, pos, &|cell: Option<Color>| cell.is_none(), &mut visited);
        let owner = classify(board, &cells);
        trace!(cells = cells.len(), ?owner, "classified region");
        regions.push(Region { cells, owner });
    }

    regions
}

/// Territory plus captures for each color.
pub fn score(board: &Board, captures: CaptureCounts) -> Score {
    let mut score = Score {
        black: captures.black,
        white: captures.white,
    };
    for region in analyze_territory(board) {
        match region.owner {
            RegionOwner::Territory(Color::Black) => score.black += region.cells.len() as u32,
            RegionOwner::Territory(Color::White) => score.white += region.cells.len() as u32,
            RegionOwner::Seki | RegionOwner::Neutral => {}
        }
    }
    score
}

/// Row-major map: 0=stone or neutral, 1=black territory, 2=white territory,
/// `SEKI_CODE` for seki points.
pub fn territory_map(board: &Board) -> Vec<u8> {
    let mut map = vec![0u8; board.size() * board.size()];
    for region in analyze_territory(board) {
        let code = match region.owner {
            RegionOwner::Territory(color) => color.code(),
            RegionOwner::Seki => SEKI_CODE,
            RegionOwner::Neutral => continue,
        };
        for pos in region.cells {
            map[board.index(pos)] = code;
        }
    }
    map
}

/// Returns `true` when `region` holds shared liberties of a mutual-life
/// position: it borders both colors, and every group bordering it has at
/// least two liberties, all of which are also liberties of bordering groups
/// of the other color.
pub fn is_seki(board: &Board, region: &[Position]) -> Result<bool, EngineError> {
    for &pos in region {
        board.check_position(pos)?;
    }
    if region.is_empty() || region.iter().any(|&pos| !board.is_empty_at(pos)) {
        return Ok(false);
    }
    Ok(shares_liberties(board, region))
}

fn classify(board: &Board, region: &[Position]) -> RegionOwner {
    let borders = Borders::of(board, region);
    if let Some(color) = borders.single() {
        RegionOwner::Territory(color)
    } else if borders.black && borders.white && shares_liberties(board, region) {
        RegionOwner::Seki
    } else {
        RegionOwner::Neutral
    }
}

fn shares_liberties(board: &Board, region: &[Position]) -> bool {
    let mut seen = Visited::new(board);
    let mut groups: Vec<(Color, BTreeSet<Position>)> = Vec::new();
    for next in region.iter().flat_map(|&pos| board.neighbors(pos)) {
        let Some(color) = board.cell(next) else {
            continue;
        };
        if seen.is_marked(board, next) {
            continue;
        }
        let group = flood(board, next, &|cell: Option<Color>| cell, &mut seen);
        groups.push((color, liberty_set(board, &group)));
    }

    let shared = |color: Color| -> BTreeSet<Position> {
        groups
            .iter()
            .filter(|(owner, _)| *owner == color)
            .flat_map(|(_, libs)| libs.iter().copied())
            .collect()
    };
    let black_libs = shared(Color::Black);
    let white_libs = shared(Color::White);
    if black_libs.is_empty() || white_libs.is_empty() {
        return false;
    }

    groups.iter().all(|(color, libs)| {
        let opposing = match color {
            Color::Black => &white_libs,
            Color::White => &black_libs,
        };
        libs.len() >= 2 && libs.is_subset(opposing)
    })
}
