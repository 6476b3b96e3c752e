//! JavaScript-facing API for the board UI.
//!
//! Session methods mirror `GameSession`; the free functions expose the pure
//! rules on boards encoded as row-major cells (0=empty, 1=black, 2=white).

use wasm_bindgen::prelude::*;

use crate::board::Board;
use crate::capture;
use crate::config::GameConfig;
use crate::error::EngineError;
use crate::game::GameSession;
use crate::handicap;
use crate::rules;
use crate::scoring;
use crate::types::{CaptureCounts, Color, Move, Position};

#[wasm_bindgen]
pub struct WasmGame {
    inner: GameSession,
}

#[wasm_bindgen]
impl WasmGame {
    /// Accepts `{ boardSize?, handicap?, legality?: "strict" | "approximate" }`
    /// or `undefined` for a 19x19 even game.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<WasmGame, JsValue> {
        let config: GameConfig = if config.is_undefined() || config.is_null() {
            GameConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        let inner = GameSession::new(config).map_err(to_js)?;
        Ok(WasmGame { inner })
    }

    /// Plays for the current player; resolves to `{ color, position, captured }`.
    pub fn play(&mut self, row: u8, col: u8) -> Result<JsValue, JsValue> {
        let report = self.inner.play(row, col).map_err(to_js)?;
        Ok(serde_wasm_bindgen::to_value(&report)?)
    }

    pub fn pass(&mut self) -> Result<(), JsValue> {
        self.inner.pass().map_err(to_js)
    }

    pub fn undo(&mut self) -> Result<(), JsValue> {
        self.inner.undo().map_err(to_js)
    }

    #[wasm_bindgen(js_name = isLegal)]
    pub fn is_legal(&self, row: u8, col: u8) -> bool {
        !self.inner.is_game_over()
            && self
                .inner
                .check(row, col)
                .is_ok_and(|verdict| verdict.is_legal())
    }

    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.legal_moves())?)
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.to_game_state())?)
    }

    pub fn score(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.score())?)
    }

    #[wasm_bindgen(js_name = territoryMap)]
    pub fn territory_map(&self) -> Vec<u8> {
        self.inner.territory_map()
    }
}

#[wasm_bindgen(js_name = handicapPositions)]
pub fn handicap_positions(board_size: usize) -> Result<JsValue, JsValue> {
    let points = handicap::handicap_positions(board_size).map_err(to_js)?;
    Ok(serde_wasm_bindgen::to_value(points)?)
}

#[wasm_bindgen(js_name = isLegalMove)]
pub fn is_legal_move(
    size: usize,
    cells: &[u8],
    row: u8,
    col: u8,
    color: u8,
    ko_cells: Option<Vec<u8>>,
) -> Result<bool, JsValue> {
    let board = Board::from_array(size, cells).map_err(to_js)?;
    let reference = ko_cells
        .map(|ko| Board::from_array(size, &ko))
        .transpose()
        .map_err(to_js)?;
    let mv = Move::new(row, col, color_from_code(color)?);
    rules::is_legal(&board, mv, reference.as_ref()).map_err(to_js)
}

/// Removes groups captured by the stone at `(row, col)`, which must already
/// be on `cells`. Resolves to `{ board, captured }`; the caller adds
/// `captured.length` to the mover's tally.
#[wasm_bindgen(js_name = resolveCaptures)]
pub fn resolve_captures(size: usize, cells: &[u8], row: u8, col: u8, color: u8) -> Result<JsValue, JsValue> {
    let board = Board::from_array(size, cells).map_err(to_js)?;
    let outcome = capture::resolve_captures(
        &board,
        Position::new(row, col),
        color_from_code(color)?,
    )
    .map_err(to_js)?;
    Ok(serde_wasm_bindgen::to_value(&outcome.to_report())?)
}

#[wasm_bindgen(js_name = scoreBoard)]
pub fn score_board(size: usize, cells: &[u8], black_captures: u32, white_captures: u32) -> Result<JsValue, JsValue> {
    let board = Board::from_array(size, cells).map_err(to_js)?;
    let captures = CaptureCounts {
        black: black_captures,
        white: white_captures,
    };
    Ok(serde_wasm_bindgen::to_value(&scoring::score(&board, captures))?)
}

fn color_from_code(code: u8) -> Result<Color, JsValue> {
    match code {
        1 => Ok(Color::Black),
        2 => Ok(Color::White),
        other => Err(to_js(EngineError::InvalidCell(other))),
    }
}

fn to_js(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
