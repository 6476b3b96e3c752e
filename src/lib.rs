//! Rules engine for Go: legality, captures and territory scoring on a square
//! board. Every rule function is pure and works on `Board` values;
//! `GameSession` sequences them for a game with undo.

use wasm_bindgen::prelude::*;

pub mod board;
pub mod capture;
pub mod config;
pub mod error;
pub mod game;
pub mod handicap;
pub mod liberty;
pub mod region;
pub mod rules;
pub mod scoring;
pub mod types;
pub mod wasm;

pub use board::Board;
pub use capture::{CaptureOutcome, resolve_captures};
pub use config::{GameConfig, LegalityRule};
pub use error::{EngineError, IllegalReason};
pub use game::GameSession;
pub use handicap::{apply_handicap, handicap_positions};
pub use liberty::is_surrounded;
pub use region::{empty_region_at, find_region, group_at};
pub use rules::{MoveVerdict, check_move, is_ko, is_legal, legal_moves};
pub use scoring::{analyze_territory, is_seki, score};
pub use types::{CaptureCounts, CaptureReport, Color, Move, Position, Score};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
