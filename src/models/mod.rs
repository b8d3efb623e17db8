//! Models module for the note-block editor
//!
//! This module contains the data model shared by the score notation codec
//! and the MIDI importer: pitch levels, the instrument catalog and notes.

pub mod instrument;
pub mod note;
pub mod pitch;

// Re-export commonly used types
pub use instrument::{
    default_instrument, instrument_by_id, instrument_by_name, instrument_by_symbol, Instrument,
    InstrumentId, OctaveOffset, INSTRUMENTS,
};
pub use note::{generate_id, with_layer, Note};
pub use pitch::{
    display_pitch_of, extended_note_name, is_placeable, level_of_letter, note_name,
    pitch_from_display, pitch_letter, playback_rate_of, PitchError, MAX_PITCH_LEVEL,
    PITCH_LETTERS,
};
