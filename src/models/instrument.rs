//! Note-block instrument catalog
//!
//! Instruments are fixed reference data. Each one has a one-character symbol
//! used in score notation and an octave offset that places its 25-step range
//! on the shared display axis.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Identifier of a note-block instrument
///
/// Deserializing an id that names no instrument yields the default, so notes
/// saved with an unknown instrument still load and play as `pling`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum InstrumentId {
    #[default]
    Pling,
    Harp,
    Bass,
    Guitar,
    Bell,
    Chime,
    Xylophone,
    Flute,
    Basedrum,
    Snare,
    Hat,
}

impl InstrumentId {
    /// Get the lowercase identifier used by the editor and in sound ids
    pub fn as_str(&self) -> &'static str {
        match self {
            InstrumentId::Pling => "pling",
            InstrumentId::Harp => "harp",
            InstrumentId::Bass => "bass",
            InstrumentId::Guitar => "guitar",
            InstrumentId::Bell => "bell",
            InstrumentId::Chime => "chime",
            InstrumentId::Xylophone => "xylophone",
            InstrumentId::Flute => "flute",
            InstrumentId::Basedrum => "basedrum",
            InstrumentId::Snare => "snare",
            InstrumentId::Hat => "hat",
        }
    }

    /// Catalog entry for this instrument
    pub fn instrument(&self) -> &'static Instrument {
        // Every id has exactly one catalog entry
        &INSTRUMENTS[*INDEX_BY_ID
            .get(self)
            .unwrap_or(&DEFAULT_INSTRUMENT_INDEX)]
    }
}

impl From<String> for InstrumentId {
    fn from(id: String) -> Self {
        instrument_by_name(&id).map(|inst| inst.id).unwrap_or_else(|| {
            log::warn!("unknown instrument '{}', using {}", id, InstrumentId::default());
            InstrumentId::default()
        })
    }
}

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Octave shift of an instrument relative to the home range
#[repr(i8)]
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde_repr::Serialize_repr, serde_repr::Deserialize_repr,
)]
pub enum OctaveOffset {
    TwoDown = -2,
    OneDown = -1,
    Home = 0,
    OneUp = 1,
    TwoUp = 2,
}

impl OctaveOffset {
    pub fn octaves(&self) -> i32 {
        *self as i8 as i32
    }

    pub fn semitones(&self) -> i32 {
        self.octaves() * 12
    }
}

/// A note-block instrument
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    pub id: InstrumentId,
    /// Score-notation symbol
    pub symbol: char,
    pub name: &'static str,
    pub name_ja: &'static str,
    /// `#RRGGBB` color used for piano-roll cells
    pub color: &'static str,
    pub minecraft_sound: &'static str,
    pub octave_offset: OctaveOffset,
}

impl Instrument {
    pub fn is_default(&self) -> bool {
        self.id == InstrumentId::default()
    }
}

const DEFAULT_INSTRUMENT_INDEX: usize = 0;

/// All instruments, in palette order. The first entry is the default.
pub static INSTRUMENTS: [Instrument; 11] = [
    Instrument {
        id: InstrumentId::Pling,
        symbol: '*',
        name: "Pling",
        name_ja: "プリング",
        color: "#FFD700",
        minecraft_sound: "minecraft:block.note.pling",
        octave_offset: OctaveOffset::Home,
    },
    Instrument {
        id: InstrumentId::Harp,
        symbol: '\\',
        name: "Harp",
        name_ja: "ハープ",
        color: "#4CAF50",
        minecraft_sound: "minecraft:block.note.harp",
        octave_offset: OctaveOffset::Home,
    },
    Instrument {
        id: InstrumentId::Bass,
        symbol: '(',
        name: "Bass",
        name_ja: "ベース",
        color: "#795548",
        minecraft_sound: "minecraft:block.note.bass",
        octave_offset: OctaveOffset::TwoDown,
    },
    Instrument {
        id: InstrumentId::Guitar,
        symbol: ')',
        name: "Guitar",
        name_ja: "ギター",
        color: "#FF9800",
        minecraft_sound: "minecraft:block.note.guitar",
        octave_offset: OctaveOffset::OneDown,
    },
    Instrument {
        id: InstrumentId::Bell,
        symbol: '/',
        name: "Bell",
        name_ja: "ベル",
        color: "#E91E63",
        minecraft_sound: "minecraft:block.note.bell",
        octave_offset: OctaveOffset::TwoUp,
    },
    Instrument {
        id: InstrumentId::Chime,
        symbol: '_',
        name: "Chime",
        name_ja: "チャイム",
        color: "#9C27B0",
        minecraft_sound: "minecraft:block.note.chime",
        octave_offset: OctaveOffset::TwoUp,
    },
    Instrument {
        id: InstrumentId::Xylophone,
        symbol: ',',
        name: "Xylophone",
        name_ja: "シロフォン",
        color: "#00BCD4",
        minecraft_sound: "minecraft:block.note.xylophone",
        octave_offset: OctaveOffset::TwoUp,
    },
    Instrument {
        id: InstrumentId::Flute,
        symbol: '@',
        name: "Flute",
        name_ja: "フルート",
        color: "#8BC34A",
        minecraft_sound: "minecraft:block.note.flute",
        octave_offset: OctaveOffset::OneUp,
    },
    Instrument {
        id: InstrumentId::Basedrum,
        symbol: '^',
        name: "Bass Drum",
        name_ja: "ベースドラム",
        color: "#607D8B",
        minecraft_sound: "minecraft:block.note.basedrum",
        octave_offset: OctaveOffset::Home,
    },
    Instrument {
        id: InstrumentId::Snare,
        symbol: '?',
        name: "Snare",
        name_ja: "スネア",
        color: "#9E9E9E",
        minecraft_sound: "minecraft:block.note.snare",
        octave_offset: OctaveOffset::Home,
    },
    Instrument {
        id: InstrumentId::Hat,
        symbol: '!',
        name: "Hat",
        name_ja: "ハット",
        color: "#FFEB3B",
        minecraft_sound: "minecraft:block.note.hat",
        octave_offset: OctaveOffset::Home,
    },
];

static INDEX_BY_ID: Lazy<HashMap<InstrumentId, usize>> = Lazy::new(|| {
    INSTRUMENTS
        .iter()
        .enumerate()
        .map(|(i, inst)| (inst.id, i))
        .collect()
});

static INDEX_BY_SYMBOL: Lazy<HashMap<char, usize>> = Lazy::new(|| {
    INSTRUMENTS
        .iter()
        .enumerate()
        .map(|(i, inst)| (inst.symbol, i))
        .collect()
});

/// The home instrument: notes without a symbol in score notation use it
pub fn default_instrument() -> &'static Instrument {
    &INSTRUMENTS[DEFAULT_INSTRUMENT_INDEX]
}

pub fn instrument_by_id(id: InstrumentId) -> &'static Instrument {
    id.instrument()
}

/// Look up an instrument by its lowercase string id
pub fn instrument_by_name(id: &str) -> Option<&'static Instrument> {
    INSTRUMENTS.iter().find(|inst| inst.id.as_str() == id)
}

/// Look up an instrument by its score-notation symbol
pub fn instrument_by_symbol(symbol: char) -> Option<&'static Instrument> {
    INDEX_BY_SYMBOL.get(&symbol).map(|&i| &INSTRUMENTS[i])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_is_unique() {
        let ids: HashSet<_> = INSTRUMENTS.iter().map(|i| i.id).collect();
        let symbols: HashSet<_> = INSTRUMENTS.iter().map(|i| i.symbol).collect();
        assert_eq!(ids.len(), INSTRUMENTS.len());
        assert_eq!(symbols.len(), INSTRUMENTS.len());
    }

    #[test]
    fn test_default_instrument() {
        let default = default_instrument();
        assert_eq!(default.id, InstrumentId::Pling);
        assert_eq!(default.symbol, '*');
        assert!(default.is_default());
        assert!(!InstrumentId::Harp.instrument().is_default());
    }

    #[test]
    fn test_lookup_by_symbol() {
        assert_eq!(instrument_by_symbol('\\').map(|i| i.id), Some(InstrumentId::Harp));
        assert_eq!(instrument_by_symbol('(').map(|i| i.id), Some(InstrumentId::Bass));
        assert_eq!(instrument_by_symbol('!').map(|i| i.id), Some(InstrumentId::Hat));
        assert!(instrument_by_symbol('~').is_none());
        assert!(instrument_by_symbol('M').is_none());
    }

    #[test]
    fn test_lookup_by_id() {
        for inst in INSTRUMENTS.iter() {
            assert_eq!(instrument_by_id(inst.id), inst);
            assert_eq!(instrument_by_name(inst.id.as_str()), Some(inst));
        }
        assert!(instrument_by_name("kazoo").is_none());
    }

    #[test]
    fn test_octave_offsets() {
        assert_eq!(InstrumentId::Bass.instrument().octave_offset.semitones(), -24);
        assert_eq!(InstrumentId::Guitar.instrument().octave_offset.octaves(), -1);
        assert_eq!(InstrumentId::Flute.instrument().octave_offset.semitones(), 12);
        assert_eq!(InstrumentId::Bell.instrument().octave_offset.octaves(), 2);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_value(InstrumentId::Harp.instrument()).unwrap();
        assert_eq!(json["id"], "harp");
        assert_eq!(json["symbol"], "\\");
        assert_eq!(json["nameJa"], "ハープ");
        assert_eq!(json["octaveOffset"], 0);

        let bass = serde_json::to_value(InstrumentId::Bass.instrument()).unwrap();
        assert_eq!(bass["octaveOffset"], -2);

        let id: InstrumentId = serde_json::from_str("\"xylophone\"").unwrap();
        assert_eq!(id, InstrumentId::Xylophone);
    }

    #[test]
    fn test_unknown_id_deserializes_to_default() {
        let id: InstrumentId = serde_json::from_str("\"kazoo\"").unwrap();
        assert_eq!(id, InstrumentId::Pling);

        let id: InstrumentId = serde_json::from_str("\"Harp\"").unwrap();
        assert_eq!(id, InstrumentId::Pling);

        assert!(serde_json::from_str::<InstrumentId>("3").is_err());
    }
}
