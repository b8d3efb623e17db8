//! Format converters
//!
//! This module contains importers from external file formats into the
//! editor's note model.

pub mod midi;

pub use midi::{analyze_midi, import_midi, ImportOptions, MidiAnalysis, MidiError, MidiImportResult};
