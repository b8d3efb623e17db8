//! Parsing module for the note-block editor
//!
//! This module turns score notation text into notes.

pub mod score;

// Re-export commonly used types
pub use score::{parse_score, scan_score, ScanState, ScannedNote, ScoreChar, ScoreScanner};
