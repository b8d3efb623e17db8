//! WASM API smoke tests
//!
//! These run in a browser through wasm-bindgen-test; the codecs themselves
//! are covered by the native tests.

#![cfg(target_arch = "wasm32")]

use noteblock_wasm::api::midi::{
    closest_compatible_bpm_js, compatible_bpms, import_midi_file, sanitize_original_bpm_js,
    validate_target_bpm_js,
};
use noteblock_wasm::api::pitch::{extended_note_name_js, instruments, playback_rate_of_js};
use noteblock_wasm::api::score::{generate_score_js, parse_score_js};
use noteblock_wasm::models::{InstrumentId, Note};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_parse_and_generate_score() {
    let notes_js = parse_score_js("*M10\\O5!K", "layer-1").expect("parseScore should succeed");
    let notes: Vec<Note> = serde_wasm_bindgen::from_value(notes_js.clone()).unwrap();

    assert_eq!(notes.len(), 3);
    assert_eq!(notes[1].instrument, InstrumentId::Harp);
    assert!(notes.iter().all(|n| n.layer_id == "layer-1"));

    let score = generate_score_js(notes_js).expect("generateScore should succeed");
    assert_eq!(score, "M10\\O5!K");
}

#[wasm_bindgen_test]
fn test_generate_rejects_bad_notes() {
    assert!(generate_score_js(JsValue::from_str("not notes")).is_err());
}

#[wasm_bindgen_test]
fn test_import_rejects_garbage() {
    assert!(import_midi_file(b"garbage", JsValue::UNDEFINED).is_err());
}

#[wasm_bindgen_test]
fn test_tempo_helpers() {
    assert_eq!(closest_compatible_bpm_js(128.0), 120);
    assert_eq!(compatible_bpms().length(), 6);
    assert_eq!(sanitize_original_bpm_js("96"), 96);
    assert_eq!(sanitize_original_bpm_js("abc"), 120);
    assert!(validate_target_bpm_js(150).is_ok());
    assert!(validate_target_bpm_js(500).is_err());
}

#[wasm_bindgen_test]
fn test_reference_data() {
    assert!(instruments().is_ok());
    assert_eq!(playback_rate_of_js(12).unwrap(), 1.0);
    assert!(playback_rate_of_js(25).is_err());
    assert_eq!(extended_note_name_js(72).unwrap(), "++++F#");
    assert!(extended_note_name_js(73).is_err());
}
