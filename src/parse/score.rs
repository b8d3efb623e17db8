//! Score notation parser
//!
//! Score notation is a compact run-length text format: digit runs advance a
//! tick cursor, an instrument symbol selects the instrument for the next
//! pitch letter only, and each pitch letter (`A`-`Y`) places one note.
//!
//! ```text
//! *M10\O5!K   pling M at 0, harp O at 10, hat K at 15
//! ```
//!
//! Parsing never fails. Characters that are neither digits, instrument
//! symbols nor pitch letters are skipped without affecting the scanner, and a
//! trailing digit run (rest after the last note) is dropped.

use crate::models::{instrument_by_symbol, level_of_letter, Instrument, InstrumentId, Note};

/// Scanner state between characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Nothing pending: start of input or just after a note
    Idle,
    /// Inside a digit run that has not been added to the cursor yet
    AccumulatingDigits,
    /// An instrument symbol is waiting for its pitch letter
    AwaitingPitch,
}

/// What a single character means in score notation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreChar {
    Digit(u32),
    Symbol(&'static Instrument),
    Pitch(u8),
    Ignored,
}

impl ScoreChar {
    pub fn classify(c: char) -> Self {
        if let Some(d) = c.to_digit(10) {
            ScoreChar::Digit(d)
        } else if let Some(level) = level_of_letter(c) {
            ScoreChar::Pitch(level)
        } else if let Some(inst) = instrument_by_symbol(c) {
            ScoreChar::Symbol(inst)
        } else {
            ScoreChar::Ignored
        }
    }
}

/// A note placed by the scanner, before it is given an id and a layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannedNote {
    pub tick: u32,
    pub pitch: u8,
    pub instrument: InstrumentId,
}

/// Single-pass, left-to-right score scanner
#[derive(Debug, Clone)]
pub struct ScoreScanner {
    state: ScanState,
    cursor_tick: u32,
    digits: u32,
    pending_instrument: Option<InstrumentId>,
}

impl ScoreScanner {
    pub fn new() -> Self {
        Self {
            state: ScanState::Idle,
            cursor_tick: 0,
            digits: 0,
            pending_instrument: None,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn cursor_tick(&self) -> u32 {
        self.cursor_tick
    }

    /// Feed one character, returning the note it places, if any
    pub fn feed(&mut self, c: char) -> Option<ScannedNote> {
        match ScoreChar::classify(c) {
            ScoreChar::Digit(d) => {
                self.digits = self.digits.saturating_mul(10).saturating_add(d);
                self.state = ScanState::AccumulatingDigits;
                None
            }
            ScoreChar::Symbol(inst) => {
                self.flush_digits();
                // A later symbol overrides an earlier one
                self.pending_instrument = Some(inst.id);
                self.state = ScanState::AwaitingPitch;
                None
            }
            ScoreChar::Pitch(pitch) => {
                self.flush_digits();
                let instrument = self.pending_instrument.take().unwrap_or_default();
                self.state = ScanState::Idle;
                Some(ScannedNote {
                    tick: self.cursor_tick,
                    pitch,
                    instrument,
                })
            }
            ScoreChar::Ignored => None,
        }
    }

    /// End of input; a pending digit run is trailing rest and is discarded
    pub fn finish(&mut self) {
        if self.state == ScanState::AccumulatingDigits {
            log::debug!("discarding trailing rest of {} ticks", self.digits);
        }
        self.digits = 0;
        self.pending_instrument = None;
        self.state = ScanState::Idle;
    }

    fn flush_digits(&mut self) {
        if self.state == ScanState::AccumulatingDigits {
            self.cursor_tick = self.cursor_tick.saturating_add(self.digits);
            self.digits = 0;
            // The digits may have followed a symbol that is still pending
            self.state = if self.pending_instrument.is_some() {
                ScanState::AwaitingPitch
            } else {
                ScanState::Idle
            };
        }
    }
}

impl Default for ScoreScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Scan score notation into `(tick, pitch, instrument)` triples
pub fn scan_score(text: &str) -> Vec<ScannedNote> {
    let mut scanner = ScoreScanner::new();
    let notes: Vec<ScannedNote> = text.chars().filter_map(|c| scanner.feed(c)).collect();
    scanner.finish();
    notes
}

/// Parse score notation into notes with fresh ids and an empty layer.
///
/// The caller assigns the layer afterwards (see [`crate::models::with_layer`]).
pub fn parse_score(text: &str) -> Vec<Note> {
    let notes: Vec<Note> = scan_score(text)
        .into_iter()
        .map(|n| Note::new(n.tick, n.pitch, n.instrument, ""))
        .collect();
    log::debug!("parsed {} notes from {} chars of score", notes.len(), text.len());
    notes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triples(text: &str) -> Vec<(u32, u8, InstrumentId)> {
        scan_score(text)
            .into_iter()
            .map(|n| (n.tick, n.pitch, n.instrument))
            .collect()
    }

    #[test]
    fn test_digit_run_is_one_number() {
        assert_eq!(triples("12M"), vec![(12, 12, InstrumentId::Pling)]);
    }

    #[test]
    fn test_cursor_is_cumulative() {
        assert_eq!(
            triples("1M1M"),
            vec![(1, 12, InstrumentId::Pling), (2, 12, InstrumentId::Pling)]
        );
    }

    #[test]
    fn test_symbol_applies_to_one_note() {
        assert_eq!(
            triples("\\M*O"),
            vec![(0, 12, InstrumentId::Harp), (0, 14, InstrumentId::Pling)]
        );
        assert_eq!(
            triples("\\MO"),
            vec![(0, 12, InstrumentId::Harp), (0, 14, InstrumentId::Pling)]
        );
    }

    #[test]
    fn test_last_symbol_wins() {
        assert_eq!(triples("(\\!K"), vec![(0, 10, InstrumentId::Hat)]);
    }

    #[test]
    fn test_symbol_survives_digits() {
        assert_eq!(triples("\\12M"), vec![(12, 12, InstrumentId::Harp)]);
    }

    #[test]
    fn test_documented_example() {
        assert_eq!(
            triples("*M10\\O5!K"),
            vec![
                (0, 12, InstrumentId::Pling),
                (10, 14, InstrumentId::Harp),
                (15, 10, InstrumentId::Hat),
            ]
        );
    }

    #[test]
    fn test_unknown_characters_are_transparent() {
        assert_eq!(triples("1 2M"), vec![(12, 12, InstrumentId::Pling)]);
        assert_eq!(triples("\\ ~M"), vec![(0, 12, InstrumentId::Harp)]);
        assert_eq!(triples("M\nm zO"), triples("MO"));
    }

    #[test]
    fn test_trailing_digits_are_dropped() {
        assert_eq!(triples("M40"), vec![(0, 12, InstrumentId::Pling)]);
        assert!(triples("40").is_empty());
        assert!(triples("").is_empty());
        assert!(triples("\\(").is_empty());
    }

    #[test]
    fn test_huge_digit_runs_saturate() {
        let notes = triples("99999999999999999999M");
        assert_eq!(notes, vec![(u32::MAX, 12, InstrumentId::Pling)]);
    }

    #[test]
    fn test_scanner_states() {
        let mut scanner = ScoreScanner::new();
        assert_eq!(scanner.state(), ScanState::Idle);
        scanner.feed('\\');
        assert_eq!(scanner.state(), ScanState::AwaitingPitch);
        scanner.feed('3');
        assert_eq!(scanner.state(), ScanState::AccumulatingDigits);
        assert_eq!(scanner.cursor_tick(), 0);
        let note = scanner.feed('A');
        assert_eq!(scanner.state(), ScanState::Idle);
        assert_eq!(scanner.cursor_tick(), 3);
        assert_eq!(
            note,
            Some(ScannedNote {
                tick: 3,
                pitch: 0,
                instrument: InstrumentId::Harp
            })
        );
    }

    #[test]
    fn test_parse_score_leaves_layer_blank() {
        let notes = parse_score("M2O");
        assert_eq!(notes.len(), 2);
        assert!(notes.iter().all(|n| n.layer_id.is_empty()));
        assert_ne!(notes[0].id, notes[1].id);
    }
}
