//! Note-block editor WASM API
//!
//! This module provides the JavaScript-facing API for the piano-roll editor.
//! It includes shared utilities for serialization, validation, and error
//! handling, as well as the API functions organized by functional domain.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, validation, error handling, and logging
//! - `score`: Score notation parse/generate
//! - `midi`: MIDI analysis and import, tempo helpers
//! - `pitch`: Instrument catalog and pitch conversions

pub mod helpers;
pub mod midi;
pub mod pitch;
pub mod score;

pub use midi::{analyze_midi_file, import_midi_file};
pub use pitch::instruments;
pub use score::{generate_score_js, parse_score_js};
