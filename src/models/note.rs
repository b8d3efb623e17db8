//! Piano-roll notes
//!
//! One tick is 50 ms of game time. Tempo is resolved before ticks are
//! assigned, so a note carries no tempo information of its own.

use serde::{Deserialize, Serialize};

use super::instrument::{Instrument, InstrumentId};

/// A single note-block note on the piano roll
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub tick: u32,
    /// Pitch level 0-24 (`A`-`Y`)
    pub pitch: u8,
    pub instrument: InstrumentId,
    /// Layer the note belongs to; empty until the editor assigns one
    #[serde(default)]
    pub layer_id: String,
}

impl Note {
    /// Create a note with a fresh id
    pub fn new(tick: u32, pitch: u8, instrument: InstrumentId, layer_id: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            tick,
            pitch,
            instrument,
            layer_id: layer_id.into(),
        }
    }

    pub fn instrument_info(&self) -> &'static Instrument {
        self.instrument.instrument()
    }

    /// Position of this note on the shared display axis
    pub fn display_pitch(&self) -> i32 {
        super::pitch::display_pitch_of(
            self.pitch as i32,
            self.instrument_info().octave_offset.octaves(),
        )
    }

    /// The `(tick, pitch, instrument)` triple the codecs care about
    pub fn key(&self) -> (u32, u8, InstrumentId) {
        (self.tick, self.pitch, self.instrument)
    }
}

/// Assign a layer to every note, e.g. after parsing a score into the current layer
pub fn with_layer(notes: Vec<Note>, layer_id: &str) -> Vec<Note> {
    notes
        .into_iter()
        .map(|note| Note {
            layer_id: layer_id.to_string(),
            ..note
        })
        .collect()
}

/// Generate a unique note id
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_note_has_unique_id() {
        let a = Note::new(0, 12, InstrumentId::Pling, "layer-1");
        let b = Note::new(0, 12, InstrumentId::Pling, "layer-1");
        assert_ne!(a.id, b.id);
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn test_display_pitch_uses_instrument_offset() {
        assert_eq!(Note::new(0, 0, InstrumentId::Pling, "").display_pitch(), 24);
        assert_eq!(Note::new(0, 0, InstrumentId::Bass, "").display_pitch(), 0);
        assert_eq!(Note::new(0, 24, InstrumentId::Bell, "").display_pitch(), 72);
    }

    #[test]
    fn test_with_layer() {
        let notes = vec![
            Note::new(0, 1, InstrumentId::Harp, ""),
            Note::new(4, 2, InstrumentId::Pling, ""),
        ];
        let ids: Vec<_> = notes.iter().map(|n| n.id.clone()).collect();
        let notes = with_layer(notes, "melody");
        assert!(notes.iter().all(|n| n.layer_id == "melody"));
        assert_eq!(notes.iter().map(|n| n.id.clone()).collect::<Vec<_>>(), ids);
    }

    #[test]
    fn test_json_shape() {
        let note = Note {
            id: "n1".to_string(),
            tick: 10,
            pitch: 12,
            instrument: InstrumentId::Harp,
            layer_id: "layer-1".to_string(),
        };
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "n1",
                "tick": 10,
                "pitch": 12,
                "instrument": "harp",
                "layerId": "layer-1",
            })
        );

        let back: Note = serde_json::from_value(json).unwrap();
        assert_eq!(back, note);
    }
}
