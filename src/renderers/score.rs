//! Score notation generator
//!
//! Inverse of [`crate::parse::parse_score`]: notes are written in tick order
//! as `<rest digits><instrument symbol><pitch letter>`. The rest is omitted
//! when zero and the symbol is omitted for the default instrument, so
//! `parse_score(&generate_score(notes))` gives back the same triples.

use crate::models::{pitch_letter, Note};

/// Render notes as score notation.
///
/// Notes are sorted by tick; notes sharing a tick keep their input order.
/// A note whose pitch is not a valid level cannot be written and is skipped.
pub fn generate_score(notes: &[Note]) -> String {
    let mut sorted: Vec<&Note> = notes.iter().collect();
    sorted.sort_by_key(|note| note.tick);

    let mut out = String::new();
    let mut last_tick = 0u32;

    for note in sorted {
        let letter = match pitch_letter(note.pitch as i32) {
            Ok(letter) => letter,
            Err(e) => {
                log::warn!("skipping note {} at tick {}: {}", note.id, note.tick, e);
                continue;
            }
        };

        let rest = note.tick - last_tick;
        if rest > 0 {
            out.push_str(&rest.to_string());
        }
        last_tick = note.tick;

        let instrument = note.instrument_info();
        if !instrument.is_default() {
            out.push(instrument.symbol);
        }

        out.push(letter);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InstrumentId;

    fn note(tick: u32, pitch: u8, instrument: InstrumentId) -> Note {
        Note::new(tick, pitch, instrument, "layer-1")
    }

    #[test]
    fn test_default_instrument_has_no_symbol() {
        assert_eq!(generate_score(&[note(0, 12, InstrumentId::Pling)]), "M");
    }

    #[test]
    fn test_empty() {
        assert_eq!(generate_score(&[]), "");
    }

    #[test]
    fn test_rests_and_symbols() {
        let notes = vec![
            note(0, 12, InstrumentId::Pling),
            note(10, 14, InstrumentId::Harp),
            note(15, 10, InstrumentId::Hat),
        ];
        assert_eq!(generate_score(&notes), "M10\\O5!K");
    }

    #[test]
    fn test_sorts_by_tick_keeping_tie_order() {
        let notes = vec![
            note(8, 0, InstrumentId::Bass),
            note(0, 2, InstrumentId::Pling),
            note(8, 24, InstrumentId::Bell),
            note(0, 1, InstrumentId::Flute),
        ];
        assert_eq!(generate_score(&notes), "C@B8(A/Y");
    }

    #[test]
    fn test_leading_rest() {
        assert_eq!(generate_score(&[note(20, 0, InstrumentId::Chime)]), "20_A");
    }

    #[test]
    fn test_invalid_pitch_is_skipped() {
        let notes = vec![
            note(0, 12, InstrumentId::Pling),
            note(4, 30, InstrumentId::Harp),
            note(6, 13, InstrumentId::Pling),
        ];
        assert_eq!(generate_score(&notes), "M6N");
    }
}
