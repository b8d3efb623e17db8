//! Pitch and instrument reference data for the WASM API

use wasm_bindgen::prelude::*;

use crate::api::helpers::{serialize, validate_display_pitch, validation_error};
use crate::models::{
    display_pitch_of, extended_note_name, note_name, pitch_from_display, playback_rate_of,
    INSTRUMENTS,
};

/// The instrument catalog, in palette order
#[wasm_bindgen(js_name = instruments)]
pub fn instruments() -> Result<JsValue, JsValue> {
    serialize(&INSTRUMENTS, "Failed to serialize instruments")
}

#[wasm_bindgen(js_name = displayPitchOf)]
pub fn display_pitch_of_js(pitch: i32, octave_offset: i32) -> i32 {
    display_pitch_of(pitch, octave_offset)
}

#[wasm_bindgen(js_name = pitchFromDisplay)]
pub fn pitch_from_display_js(display: i32, octave_offset: i32) -> i32 {
    pitch_from_display(display, octave_offset)
}

/// Playback-rate multiplier for a pitch level (0-24)
#[wasm_bindgen(js_name = playbackRateOf)]
pub fn playback_rate_of_js(level: i32) -> Result<f64, JsValue> {
    playback_rate_of(level).map_err(|e| validation_error(e.to_string()))
}

/// Home-range note name for a pitch level (0-24)
#[wasm_bindgen(js_name = noteName)]
pub fn note_name_js(level: i32) -> Result<String, JsValue> {
    note_name(level)
        .map(str::to_string)
        .map_err(|e| validation_error(e.to_string()))
}

/// Note name for a display-axis position (0-72)
#[wasm_bindgen(js_name = extendedNoteName)]
pub fn extended_note_name_js(display: i32) -> Result<String, JsValue> {
    validate_display_pitch(display).map_err(validation_error)?;
    extended_note_name(display).ok_or_else(|| validation_error("Invalid display pitch"))
}
