/// Lean representation of a Standard MIDI File for import
///
/// Only what the importer needs: the time base, the tempo map, and per-track
/// note spans with their start and end in both MIDI ticks and seconds.

#[derive(Debug, Clone)]
pub struct MidiFile {
    pub time_base: TimeBase,
    pub tempos: Vec<Tempo>,   // sorted by tick
    pub tracks: Vec<MidiTrack>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeBase {
    /// Ticks per quarter note
    Metrical(u16),
    /// SMPTE frames per second and ticks per frame
    Timecode { fps: f32, subframes: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tempo {
    pub tick: u64,
    pub micros_per_beat: u32,
}

impl Tempo {
    pub fn bpm(&self) -> f64 {
        60_000_000.0 / self.micros_per_beat as f64
    }
}

#[derive(Debug, Clone, Default)]
pub struct MidiTrack {
    pub name: Option<String>,
    pub notes: Vec<MidiNote>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MidiNote {
    pub key: u8,        // MIDI note number 0-127
    pub velocity: u8,
    pub channel: u8,    // 0-15 (9 = drums)
    pub start_tick: u64,
    pub end_tick: u64,
    pub start_seconds: f64,
    pub end_seconds: f64,
}

impl MidiFile {
    /// Tempo of the first tempo event, if the file has one
    pub fn first_tempo(&self) -> Option<&Tempo> {
        self.tempos.first()
    }

    /// End of the last sounding note, in seconds
    pub fn duration_seconds(&self) -> f64 {
        self.tracks
            .iter()
            .flat_map(|t| t.notes.iter())
            .map(|n| n.end_seconds)
            .fold(0.0, f64::max)
    }
}

/// Convert an absolute tick position to seconds
///
/// Metrical time walks the tempo map (120 BPM until the first tempo event);
/// SMPTE time is independent of tempo.
pub fn tick_to_seconds(tick: u64, time_base: TimeBase, tempos: &[Tempo]) -> f64 {
    let tpq = match time_base {
        TimeBase::Timecode { fps, subframes } => {
            let ticks_per_second = fps as f64 * subframes.max(1) as f64;
            return tick as f64 / ticks_per_second;
        }
        TimeBase::Metrical(tpq) => tpq.max(1) as f64,
    };

    let mut seconds = 0.0;
    let mut last_tick = 0u64;
    let mut micros_per_beat = 500_000.0;

    for tempo in tempos {
        if tempo.tick >= tick {
            break;
        }
        let delta = tempo.tick - last_tick;
        seconds += (delta as f64 / tpq) * (micros_per_beat / 1_000_000.0);
        last_tick = tempo.tick;
        micros_per_beat = tempo.micros_per_beat as f64;
    }

    let delta = tick - last_tick;
    seconds + (delta as f64 / tpq) * (micros_per_beat / 1_000_000.0)
}
