//! Standard MIDI File import
//!
//! Reads SMF bytes into a small note model, then classifies each note into a
//! note-block instrument and quantizes it onto the 50 ms tick grid after
//! rescaling time from the original tempo to the target tempo.
//!
//! Only the ratio `original_bpm / target_bpm` is applied as a rescale; later
//! tempo changes in the file affect note start times but never that ratio.

mod model;
mod read;

pub mod defaults;
pub mod import;

pub use model::*;
pub use read::read_smf;
pub use import::{
    analyze_file, analyze_midi, classify_midi_note, import_file, import_midi, ImportOptions,
    InstrumentRange, MidiAnalysis, MidiImportResult, TrackInfo, INSTRUMENT_RANGES,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MidiError {
    #[error("malformed MIDI file: {0}")]
    Malformed(String),
    #[error("invalid {name} BPM: {value}")]
    InvalidBpm { name: &'static str, value: f64 },
}

impl From<midly::Error> for MidiError {
    fn from(e: midly::Error) -> Self {
        MidiError::Malformed(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MidiError>;
