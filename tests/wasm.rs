#![cfg(target_arch = "wasm32")]

use goban_rules::wasm::{WasmGame, handicap_positions, is_legal_move, resolve_captures, score_board};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn field(value: &JsValue, name: &str) -> JsValue {
    js_sys::Reflect::get(value, &JsValue::from_str(name)).unwrap()
}

fn config(size: u32) -> JsValue {
    let config = js_sys::Object::new();
    js_sys::Reflect::set(&config, &"boardSize".into(), &JsValue::from(size)).unwrap();
    config.into()
}

#[wasm_bindgen_test]
fn undefined_config_starts_nineteen_board() {
    let game = WasmGame::new(JsValue::UNDEFINED).unwrap();
    let state = game.state().unwrap();

    assert_eq!(field(&state, "size").as_f64(), Some(19.0));
    assert_eq!(field(&state, "currentPlayer").as_string().as_deref(), Some("black"));
}

#[wasm_bindgen_test]
fn play_and_undo_round_trip_through_js() {
    let mut game = WasmGame::new(config(9)).unwrap();

    let report = game.play(4, 4).unwrap();
    assert_eq!(field(&report, "color").as_string().as_deref(), Some("black"));
    assert!(!game.is_legal(4, 4));

    game.undo().unwrap();
    let state = game.state().unwrap();
    assert_eq!(field(&state, "moveCount").as_f64(), Some(0.0));
    assert!(game.is_legal(4, 4));
}

#[wasm_bindgen_test]
fn errors_surface_as_messages() {
    let mut game = WasmGame::new(config(9)).unwrap();

    let err = game.play(20, 0).unwrap_err();

    assert!(err.as_string().unwrap().contains("outside"));
    assert!(WasmGame::new(config(8)).is_err());
}

#[wasm_bindgen_test]
fn pure_functions_work_on_cell_arrays() {
    // White stone at the center of a 3x3 board, black on three sides.
    let cells = [0, 1, 0, 1, 2, 1, 0, 0, 0];

    assert_eq!(is_legal_move(3, &cells, 2, 1, 1, None), Ok(true));
    assert_eq!(is_legal_move(3, &cells, 0, 1, 1, None), Ok(false));

    let mut placed = cells;
    placed[7] = 1;
    let resolved = resolve_captures(3, &placed, 2, 1, 1).unwrap();
    let after: Vec<u8> = js_sys::Array::from(&field(&resolved, "board"))
        .iter()
        .map(|cell| cell.as_f64().unwrap() as u8)
        .collect();
    assert_eq!(after[4], 0);
    let captured = js_sys::Array::from(&field(&resolved, "captured"));
    assert_eq!(captured.length(), 1);
    let stone = captured.get(0);
    assert_eq!(field(&stone, "row").as_f64(), Some(1.0));
    assert_eq!(field(&stone, "col").as_f64(), Some(1.0));

    let score = score_board(3, &after, 1, 0).unwrap();
    assert_eq!(field(&score, "black").as_f64(), Some(6.0));

    let points = js_sys::Array::from(&handicap_positions(9).unwrap());
    assert_eq!(points.length(), 5);
}
