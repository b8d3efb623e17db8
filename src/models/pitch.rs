//! Pitch levels and the absolute display axis
//!
//! A note-block instrument plays 25 semitone steps, written as the letters
//! `A`..`Y`. Instruments sit at different octaves, so the editor also keeps a
//! 73-step display axis (two octaves below and two above the home range) on
//! which every instrument's notes can be compared.

use thiserror::Error;

/// Number of pitch levels a single instrument can play
pub const PITCH_LEVEL_COUNT: usize = 25;

/// Highest valid pitch level
pub const MAX_PITCH_LEVEL: u8 = 24;

/// Letters used for pitch levels in score notation, lowest first
pub const PITCH_LETTERS: [char; PITCH_LEVEL_COUNT] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y',
];

/// Playback-rate multiplier for each pitch level, 0.5 at `A` up to 2.0 at `Y`
pub const PLAYBACK_RATES: [f64; PITCH_LEVEL_COUNT] = [
    0.5, 0.5297, 0.5612, 0.5946, 0.6299, 0.6674, 0.7071, 0.7491, 0.7937, 0.8408, 0.8908, 0.9438,
    1.0, 1.0594, 1.1224, 1.1892, 1.2599, 1.3348, 1.4142, 1.4983, 1.5874, 1.6817, 1.7817, 1.8877,
    2.0,
];

/// Display names for the home range, F# up to the F# two octaves above
pub const NOTE_NAMES: [&str; PITCH_LEVEL_COUNT] = [
    "F#", "G", "G#", "A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "+F#", "+G", "+G#", "+A",
    "+A#", "+B", "+C", "+C#", "+D", "+D#", "+E", "+F", "+F#",
];

/// Steps on the display axis: the 25 home steps plus 24 below and 24 above
pub const EXTENDED_PITCH_COUNT: usize = 25 + 24 + 24;

/// Where pitch level 0 of an offset-0 instrument sits on the display axis
pub const NORMAL_PITCH_OFFSET: i32 = 24;

const SEMITONES_PER_OCTAVE: i32 = 12;

const OCTAVE_NOTE_NAMES: [&str; 12] =
    ["F#", "G", "G#", "A", "A#", "B", "C", "C#", "D", "D#", "E", "F"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PitchError {
    #[error("pitch level {level} out of range (expected 0-24)")]
    OutOfRange { level: i32 },
}

pub type Result<T> = std::result::Result<T, PitchError>;

/// Map a logical pitch onto the shared display axis.
///
/// No range check: the result may fall outside `0..73` for pitches an
/// instrument cannot actually play.
pub fn display_pitch_of(pitch: i32, octave_offset: i32) -> i32 {
    pitch + NORMAL_PITCH_OFFSET + octave_offset * SEMITONES_PER_OCTAVE
}

/// Inverse of [`display_pitch_of`].
pub fn pitch_from_display(display: i32, octave_offset: i32) -> i32 {
    display - NORMAL_PITCH_OFFSET - octave_offset * SEMITONES_PER_OCTAVE
}

/// Whether a display position is playable by an instrument with this offset
pub fn is_placeable(display: i32, octave_offset: i32) -> bool {
    let pitch = pitch_from_display(display, octave_offset);
    (0..=MAX_PITCH_LEVEL as i32).contains(&pitch)
}

/// Playback-rate multiplier for a pitch level
pub fn playback_rate_of(level: i32) -> Result<f64> {
    checked_index(level).map(|i| PLAYBACK_RATES[i])
}

/// Score-notation letter for a pitch level
pub fn pitch_letter(level: i32) -> Result<char> {
    checked_index(level).map(|i| PITCH_LETTERS[i])
}

/// Pitch level of a score-notation letter, if it is one
pub fn level_of_letter(letter: char) -> Option<u8> {
    PITCH_LETTERS
        .iter()
        .position(|&c| c == letter)
        .map(|i| i as u8)
}

/// Home-range display name for a pitch level
pub fn note_name(level: i32) -> Result<&'static str> {
    checked_index(level).map(|i| NOTE_NAMES[i])
}

/// Name of a display-axis position, `--F#` at the bottom to `++++F#` at the top.
///
/// Each octave is prefixed with one `-` per octave below home or one `+`
/// per octave above it.
pub fn extended_note_name(display: i32) -> Option<String> {
    if !(0..EXTENDED_PITCH_COUNT as i32).contains(&display) {
        return None;
    }

    let octave = display.div_euclid(SEMITONES_PER_OCTAVE) - 2;
    let base = OCTAVE_NOTE_NAMES[display.rem_euclid(SEMITONES_PER_OCTAVE) as usize];
    let prefix = match octave {
        o if o < 0 => "-".repeat(o.unsigned_abs() as usize),
        o => "+".repeat(o as usize),
    };

    Some(format!("{}{}", prefix, base))
}

fn checked_index(level: i32) -> Result<usize> {
    if (0..=MAX_PITCH_LEVEL as i32).contains(&level) {
        Ok(level as usize)
    } else {
        Err(PitchError::OutOfRange { level })
    }
}
