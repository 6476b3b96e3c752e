use serde::Deserialize;

use crate::board::validate_size;
use crate::error::EngineError;
use crate::handicap::handicap_positions;

pub const DEFAULT_BOARD_SIZE: usize = 19;

/// How the suicide part of move legality is decided.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LegalityRule {
    /// Place the stone, remove captured opponent groups, then require a
    /// liberty for the mover's own group.
    #[default]
    Strict,
    /// Accept when the placed stone itself touches an empty point, or when
    /// some adjacent opponent group is left without liberties. Connecting
    /// into an own group with outside liberties is refused under this rule.
    Approximate,
}

/// Session setup, deserialized from the host (a JS object in the browser).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    pub board_size: usize,
    pub handicap: usize,
    pub legality: LegalityRule,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            handicap: 0,
            legality: LegalityRule::Strict,
        }
    }
}

impl GameConfig {
    pub fn with_size(board_size: usize) -> Self {
        Self {
            board_size,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        validate_size(self.board_size)?;
        if self.handicap > 0 {
            let available = handicap_positions(self.board_size)?.len();
            if self.handicap > available {
                return Err(EngineError::TooManyHandicapStones {
                    requested: self.handicap,
                    available,
                });
            }
        }
        Ok(())
    }
}
