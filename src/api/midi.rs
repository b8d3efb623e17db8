//! MIDI import operations for the WASM API
//!
//! The import dialog first calls `analyzeMidiFile` to show the file's tempo
//! and tracks, then `importMidiFile` (possibly several times while the user
//! adjusts tempos) to preview and finally place the notes.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, parse_leading_int, serialize, validation_error};
use crate::converters::midi::defaults::{
    closest_compatible_bpm, sanitize_original_bpm, validate_target_bpm, COMPATIBLE_BPMS,
};
use crate::converters::midi::{analyze_midi, import_midi, ImportOptions};
use crate::{wasm_error, wasm_info, wasm_log};

/// Analyze a MIDI file before a tempo is chosen
///
/// # Returns
/// `{ originalBpm, durationSeconds, trackInfo, totalNoteCount }`
#[wasm_bindgen(js_name = analyzeMidiFile)]
pub fn analyze_midi_file(bytes: &[u8]) -> Result<JsValue, JsValue> {
    wasm_info!("analyzeMidiFile called: {} bytes", bytes.len());

    let analysis = analyze_midi(bytes).map_err(|e| {
        wasm_error!("MIDI analysis error: {}", e);
        JsValue::from_str(&format!("MIDI analysis error: {}", e))
    })?;

    wasm_log!(
        "  {} BPM, {:.2}s, {} notes in {} tracks",
        analysis.original_bpm,
        analysis.duration_seconds,
        analysis.total_note_count,
        analysis.track_info.len()
    );

    serialize(&analysis, "Failed to serialize MIDI analysis")
}

/// Import a MIDI file as notes
///
/// # Parameters
/// - `bytes`: MIDI file contents
/// - `options_js`: `{ layerId, originalBpm, targetBpm, maxTicks }`, all optional
///
/// # Returns
/// `{ notes, originalBpm, targetBpm, suggestedTotalTicks, skippedCount, trackInfo }`
#[wasm_bindgen(js_name = importMidiFile)]
pub fn import_midi_file(bytes: &[u8], options_js: JsValue) -> Result<JsValue, JsValue> {
    let options: ImportOptions = if options_js.is_undefined() || options_js.is_null() {
        ImportOptions::default()
    } else {
        deserialize(options_js, "Failed to deserialize import options")?
    };

    wasm_info!(
        "importMidiFile called: {} bytes, {} -> {} BPM, maxTicks={}",
        bytes.len(),
        options.original_bpm,
        options.target_bpm,
        options.max_ticks
    );

    let result = import_midi(bytes, &options).map_err(|e| {
        wasm_error!("MIDI import error: {}", e);
        JsValue::from_str(&format!("MIDI import error: {}", e))
    })?;

    wasm_log!(
        "  Imported {} notes, skipped {}, suggested length {} ticks",
        result.notes.len(),
        result.skipped_count,
        result.suggested_total_ticks
    );

    serialize(&result, "Failed to serialize MIDI import result")
}

/// Nearest tempo whose beat is a whole number of game ticks
#[wasm_bindgen(js_name = closestCompatibleBpm)]
pub fn closest_compatible_bpm_js(bpm: f64) -> u32 {
    closest_compatible_bpm(bpm)
}

/// Tempos whose beat is a whole number of game ticks
#[wasm_bindgen(js_name = compatibleBpms)]
pub fn compatible_bpms() -> js_sys::Array {
    COMPATIBLE_BPMS.iter().map(|&bpm| JsValue::from(bpm)).collect()
}

/// Read the original-tempo text field, falling back to 120 when unusable
#[wasm_bindgen(js_name = sanitizeOriginalBpm)]
pub fn sanitize_original_bpm_js(input: &str) -> u32 {
    sanitize_original_bpm(parse_leading_int(input))
}

/// Check a custom target tempo (20-300)
#[wasm_bindgen(js_name = validateTargetBpm)]
pub fn validate_target_bpm_js(bpm: u32) -> Result<u32, JsValue> {
    validate_target_bpm(bpm).map_err(validation_error)
}
