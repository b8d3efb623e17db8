//! Shared helpers for WASM API operations
//!
//! This module contains common patterns and utilities for serialization,
//! deserialization, error handling, and validation across all API operations.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsValue;

// ============================================================================
// Console Logging Functions
// ============================================================================

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_debug(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = info)]
    fn console_info(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    fn console_warn(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    fn console_error(s: &str);
}

// Off the browser (native tests) there is no console; use the log facade
#[cfg(not(target_arch = "wasm32"))]
fn console_debug(s: &str) {
    log::debug!("{}", s);
}

#[cfg(not(target_arch = "wasm32"))]
fn console_info(s: &str) {
    log::info!("{}", s);
}

#[cfg(not(target_arch = "wasm32"))]
fn console_warn(s: &str) {
    log::warn!("{}", s);
}

#[cfg(not(target_arch = "wasm32"))]
fn console_error(s: &str) {
    log::error!("{}", s);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

// ============================================================================
// Logging Helper Functions (called by macros)
// ============================================================================

pub fn log_debug(msg: &str) {
    console_debug(&format!("[WASM] {}", msg));
}

pub fn log_info(msg: &str) {
    console_info(&format!("[WASM] {}", msg));
}

pub fn log_warn(msg: &str) {
    console_warn(&format!("[WASM] ⚠️ {}", msg));
}

pub fn log_error(msg: &str) {
    console_error(&format!("[WASM] ❌ {}", msg));
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

/// Parse a JSON string with automatic error handling
pub fn from_json<T: DeserializeOwned>(json: &str, error_context: &str) -> Result<T, String> {
    serde_json::from_str(json).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        msg
    })
}

/// Render a value as a JSON string with automatic error handling
pub fn to_json<T: Serialize>(value: &T, error_context: &str) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        msg
    })
}

// ============================================================================
// Validation Helpers
// ============================================================================

/// Parse a user-entered integer the way a text field hands it over.
///
/// Leading digits are read and anything after them ignored, so `"128 bpm"`
/// is 128. Returns `None` when the text does not start with a number.
pub fn parse_leading_int(text: &str) -> Option<u32> {
    let trimmed = text.trim_start();
    let digits: String = trimmed
        .strip_prefix('+')
        .unwrap_or(trimmed)
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Validate that a display pitch lies on the 73-step axis
pub fn validate_display_pitch(display: i32) -> Result<(), String> {
    let max = crate::models::pitch::EXTENDED_PITCH_COUNT as i32 - 1;
    if !(0..=max).contains(&display) {
        return Err(format!(
            "Invalid display pitch: {} (must be 0-{})",
            display, max
        ));
    }
    Ok(())
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Convert a validation error to a JsValue
pub fn validation_error(msg: impl Into<String>) -> JsValue {
    let msg = msg.into();
    log_error(&msg);
    JsValue::from_str(&msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InstrumentId, Note};

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("128"), Some(128));
        assert_eq!(parse_leading_int("  96 bpm"), Some(96));
        assert_eq!(parse_leading_int("+140"), Some(140));
        assert_eq!(parse_leading_int("bpm"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-20"), None);
    }

    #[test]
    fn test_validate_display_pitch() {
        assert!(validate_display_pitch(0).is_ok());
        assert!(validate_display_pitch(72).is_ok());
        assert!(validate_display_pitch(73).is_err());
        assert!(validate_display_pitch(-1).is_err());
    }

    #[test]
    fn test_json_helpers() {
        let notes = vec![Note::new(4, 12, InstrumentId::Flute, "layer-1")];
        let json = to_json(&notes, "encode").unwrap();
        let back: Vec<Note> = from_json(&json, "decode").unwrap();
        assert_eq!(back, notes);

        let err = from_json::<Vec<Note>>("[{\"tick\": 1}]", "Failed to parse notes").unwrap_err();
        assert!(err.starts_with("Failed to parse notes: "));
    }

    #[test]
    fn test_saved_notes_with_unknown_instrument_generate() {
        let json = r#"[
            {"id": "a", "tick": 0, "pitch": 12, "instrument": "pling", "layerId": "layer-1"},
            {"id": "b", "tick": 4, "pitch": 14, "instrument": "kazoo", "layerId": "layer-1"}
        ]"#;
        let notes: Vec<Note> = from_json(json, "Failed to parse notes").unwrap();
        assert_eq!(notes[1].instrument, InstrumentId::Pling);
        assert_eq!(crate::renderers::generate_score(&notes), "M4O");
    }
}
