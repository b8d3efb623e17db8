//! Score notation operations for the WASM API

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, from_json, serialize, to_json, validation_error};
use crate::models::{with_layer, Note};
use crate::parse::parse_score;
use crate::renderers::generate_score;
use crate::{wasm_info, wasm_log};

/// Parse score notation into notes on the given layer
///
/// Never fails on malformed notation: unknown characters are skipped.
///
/// # Returns
/// JavaScript array of Note objects
#[wasm_bindgen(js_name = parseScore)]
pub fn parse_score_js(text: &str, layer_id: &str) -> Result<JsValue, JsValue> {
    wasm_info!("parseScore called: {} chars, layer='{}'", text.len(), layer_id);

    let notes = with_layer(parse_score(text), layer_id);
    wasm_log!("  Parsed {} notes", notes.len());

    serialize(&notes, "Failed to serialize notes")
}

/// Render notes as score notation
///
/// # Parameters
/// - `notes_js`: JavaScript array of Note objects
#[wasm_bindgen(js_name = generateScore)]
pub fn generate_score_js(notes_js: JsValue) -> Result<String, JsValue> {
    let notes: Vec<Note> = deserialize(notes_js, "Failed to deserialize notes")?;
    wasm_info!("generateScore called: {} notes", notes.len());

    let score = generate_score(&notes);
    wasm_log!("  Generated {} chars", score.len());

    Ok(score)
}

/// Same as `parseScore`, returning the notes as a JSON string
#[wasm_bindgen(js_name = parseScoreToJson)]
pub fn parse_score_to_json(text: &str, layer_id: &str) -> Result<String, JsValue> {
    let notes = with_layer(parse_score(text), layer_id);
    to_json(&notes, "Failed to encode notes").map_err(validation_error)
}

/// Same as `generateScore`, reading the notes from a JSON string (e.g. a saved project)
#[wasm_bindgen(js_name = generateScoreFromJson)]
pub fn generate_score_from_json(json: &str) -> Result<String, JsValue> {
    let notes: Vec<Note> = from_json(json, "Failed to parse notes").map_err(validation_error)?;
    Ok(generate_score(&notes))
}
