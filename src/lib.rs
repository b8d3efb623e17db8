//! Note-block Editor WASM Module
//!
//! Core of the note-block piano-roll editor: the note/pitch/instrument model,
//! the compact score notation codec, and the MIDI importer with instrument
//! range assignment and tempo retiming.
//!
//! Everything outside `api` is plain Rust and usable without a browser.

pub mod models;
pub mod parse;
pub mod renderers;
pub mod converters;
pub mod api;

// Re-export commonly used types
pub use models::*;
pub use parse::parse_score;
pub use renderers::generate_score;
pub use converters::midi::{
    analyze_midi, import_midi, ImportOptions, MidiAnalysis, MidiError, MidiImportResult,
};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        wasm_warn!("logger already initialized: {}", e);
    }

    log::info!("Note-block editor WASM module initialized");
}
