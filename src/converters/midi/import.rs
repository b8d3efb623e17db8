//! MIDI to note-block import
//!
//! Each note-block instrument covers 25 semitones (two octaves, F# to F#).
//! MIDI note 54 (F#3) is pitch 0 of the home instrument, and the other
//! melodic instruments are the same range shifted by whole octaves:
//!
//! | instrument | octave | MIDI range |
//! |------------|--------|------------|
//! | bass       | -2     | 30-54      |
//! | guitar     | -1     | 42-66      |
//! | pling      | 0      | 54-78      |
//! | flute      | +1     | 66-90      |
//! | bell       | +2     | 78-102     |
//!
//! Neighbouring ranges overlap by an octave. The table is scanned in order
//! and the first match wins, so an overlapping note goes to the lower
//! instrument.

use serde::{Deserialize, Serialize};

use crate::converters::midi::defaults::{
    DEFAULT_BPM, DEFAULT_MAX_TICKS, DRUM_CHANNEL, SECONDS_PER_TICK, TAIL_MARGIN_TICKS,
};
use crate::converters::midi::read::read_smf;
use crate::converters::midi::{MidiError, MidiFile, MidiTrack, Result};
use crate::models::{InstrumentId, Note, OctaveOffset, MAX_PITCH_LEVEL};

/// MIDI note number of pitch 0 on an octave-0 instrument
pub const MIDI_F_SHARP_BASE: i32 = 54;

/// MIDI note span an instrument is assigned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstrumentRange {
    pub instrument: InstrumentId,
    pub min_midi: u8,
    pub max_midi: u8,
    pub octave_offset: OctaveOffset,
}

impl InstrumentRange {
    pub fn contains(&self, key: u8) -> bool {
        (self.min_midi..=self.max_midi).contains(&key)
    }
}

/// Instrument ranges in match order
pub static INSTRUMENT_RANGES: [InstrumentRange; 5] = [
    InstrumentRange {
        instrument: InstrumentId::Bass,
        min_midi: 30,
        max_midi: 54,
        octave_offset: OctaveOffset::TwoDown,
    },
    InstrumentRange {
        instrument: InstrumentId::Guitar,
        min_midi: 42,
        max_midi: 66,
        octave_offset: OctaveOffset::OneDown,
    },
    InstrumentRange {
        instrument: InstrumentId::Pling,
        min_midi: 54,
        max_midi: 78,
        octave_offset: OctaveOffset::Home,
    },
    InstrumentRange {
        instrument: InstrumentId::Flute,
        min_midi: 66,
        max_midi: 90,
        octave_offset: OctaveOffset::OneUp,
    },
    InstrumentRange {
        instrument: InstrumentId::Bell,
        min_midi: 78,
        max_midi: 102,
        octave_offset: OctaveOffset::TwoUp,
    },
];

/// Pick the instrument and pitch level for a MIDI note number.
///
/// Returns `None` when no instrument can play the note.
pub fn classify_midi_note(key: u8) -> Option<(InstrumentId, u8)> {
    let range = INSTRUMENT_RANGES.iter().find(|r| r.contains(key))?;

    let base = MIDI_F_SHARP_BASE + range.octave_offset.semitones();
    let pitch = key as i32 - base;
    if !(0..=MAX_PITCH_LEVEL as i32).contains(&pitch) {
        return None;
    }

    Some((range.instrument, pitch as u8))
}

/// Note count for one track
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrackInfo {
    pub name: String,
    pub note_count: usize,
}

/// What a file contains, before a tempo has been chosen
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MidiAnalysis {
    /// First tempo in the file, rounded; 120 when there is none
    pub original_bpm: u32,
    pub duration_seconds: f64,
    pub track_info: Vec<TrackInfo>,
    pub total_note_count: usize,
}

/// Import settings chosen by the user
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportOptions {
    /// Layer the imported notes are placed on
    pub layer_id: String,
    pub original_bpm: f64,
    pub target_bpm: f64,
    /// Notes at or beyond this tick are dropped
    pub max_ticks: u32,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            layer_id: String::new(),
            original_bpm: DEFAULT_BPM as f64,
            target_bpm: DEFAULT_BPM as f64,
            max_ticks: DEFAULT_MAX_TICKS,
        }
    }
}

impl ImportOptions {
    /// Factor applied to MIDI time before it is quantized to ticks
    pub fn time_scale(&self) -> Result<f64> {
        check_bpm("original", self.original_bpm)?;
        check_bpm("target", self.target_bpm)?;
        Ok(self.original_bpm / self.target_bpm)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MidiImportResult {
    pub notes: Vec<Note>,
    pub original_bpm: f64,
    pub target_bpm: f64,
    /// Roll length that fits every imported note
    pub suggested_total_ticks: u32,
    /// Notes dropped for falling outside the roll or every instrument range
    pub skipped_count: usize,
    pub track_info: Vec<TrackInfo>,
}

/// Summarize a MIDI file. Drum-channel notes are not counted.
pub fn analyze_midi(bytes: &[u8]) -> Result<MidiAnalysis> {
    Ok(analyze_file(&read_smf(bytes)?))
}

pub fn analyze_file(file: &MidiFile) -> MidiAnalysis {
    let original_bpm = file
        .first_tempo()
        .map(|t| t.bpm().round() as u32)
        .unwrap_or(DEFAULT_BPM);

    let track_info: Vec<TrackInfo> = file
        .tracks
        .iter()
        .filter_map(|track| {
            let note_count = track
                .notes
                .iter()
                .filter(|n| n.channel != DRUM_CHANNEL)
                .count();
            (note_count > 0).then(|| TrackInfo {
                name: track_name(track),
                note_count,
            })
        })
        .collect();

    let total_note_count = track_info.iter().map(|t| t.note_count).sum();

    MidiAnalysis {
        original_bpm,
        duration_seconds: file.duration_seconds(),
        track_info,
        total_note_count,
    }
}

/// Convert a MIDI file into notes on the tick grid
pub fn import_midi(bytes: &[u8], options: &ImportOptions) -> Result<MidiImportResult> {
    let file = read_smf(bytes)?;
    import_file(&file, options)
}

pub fn import_file(file: &MidiFile, options: &ImportOptions) -> Result<MidiImportResult> {
    let time_scale = options.time_scale()?;

    let mut notes = Vec::new();
    let mut skipped_count = 0usize;
    let mut track_info = Vec::new();

    for track in &file.tracks {
        let mut note_count = 0usize;

        for midi_note in track.notes.iter().filter(|n| n.channel != DRUM_CHANNEL) {
            let adjusted_seconds = midi_note.start_seconds * time_scale;
            let tick = (adjusted_seconds / SECONDS_PER_TICK).round();

            if tick < 0.0 || tick >= options.max_ticks as f64 {
                log::debug!(
                    "skipping MIDI note {} at {:.3}s: tick {} outside 0..{}",
                    midi_note.key,
                    midi_note.start_seconds,
                    tick,
                    options.max_ticks
                );
                skipped_count += 1;
                continue;
            }

            let Some((instrument, pitch)) = classify_midi_note(midi_note.key) else {
                log::debug!("skipping MIDI note {}: no instrument covers it", midi_note.key);
                skipped_count += 1;
                continue;
            };

            notes.push(Note::new(tick as u32, pitch, instrument, options.layer_id.as_str()));
            note_count += 1;
        }

        if note_count > 0 {
            track_info.push(TrackInfo {
                name: track_name(track),
                note_count,
            });
        }
    }

    let max_note_tick = notes.iter().map(|n| n.tick).max().unwrap_or(0);
    let suggested_total_ticks = options
        .max_ticks
        .max(max_note_tick.saturating_add(TAIL_MARGIN_TICKS));

    log::info!(
        "imported {} MIDI notes ({} skipped) at {} -> {} BPM",
        notes.len(),
        skipped_count,
        options.original_bpm,
        options.target_bpm
    );

    Ok(MidiImportResult {
        notes,
        original_bpm: options.original_bpm,
        target_bpm: options.target_bpm,
        suggested_total_ticks,
        skipped_count,
        track_info,
    })
}

fn track_name(track: &MidiTrack) -> String {
    track.name.clone().unwrap_or_else(|| "Track".to_string())
}

fn check_bpm(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MidiError::InvalidBpm { name, value })
    }
}
