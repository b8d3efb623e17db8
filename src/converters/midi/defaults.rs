//! Default values and tempo helpers for MIDI import
//!
//! The game plays one tick every 50 ms, so a tempo fits the tick grid
//! exactly only when a beat is a whole number of ticks (1200 / BPM).

/// Tempo assumed when a file has no tempo event
pub const DEFAULT_BPM: u32 = 120;

/// Piano-roll length used when the caller does not give one
pub const DEFAULT_MAX_TICKS: u32 = 200;

/// Length of one game tick
pub const SECONDS_PER_TICK: f64 = 0.05;

/// Extra ticks added after the last imported note when the roll is extended
pub const TAIL_MARGIN_TICKS: u32 = 8;

/// MIDI channel 10 (0-indexed 9) is reserved for percussion
pub const DRUM_CHANNEL: u8 = 9;

pub const MIN_ORIGINAL_BPM: u32 = 20;
pub const MAX_ORIGINAL_BPM: u32 = 400;
pub const MIN_TARGET_BPM: u32 = 20;
pub const MAX_TARGET_BPM: u32 = 300;

/// Tempos whose beat is a whole number of ticks
pub const COMPATIBLE_BPMS: [u32; 6] = [60, 80, 100, 120, 150, 200];

/// Nearest tick-compatible tempo; ties resolve to the slower tempo
pub fn closest_compatible_bpm(bpm: f64) -> u32 {
    let mut closest = COMPATIBLE_BPMS[0];
    let mut min_diff = (bpm - closest as f64).abs();

    for &candidate in COMPATIBLE_BPMS.iter().skip(1) {
        let diff = (bpm - candidate as f64).abs();
        if diff < min_diff {
            min_diff = diff;
            closest = candidate;
        }
    }

    closest
}

/// Clamp a user-entered original tempo: anything outside 20-400 falls back to 120
pub fn sanitize_original_bpm(bpm: Option<u32>) -> u32 {
    match bpm {
        Some(bpm) if (MIN_ORIGINAL_BPM..=MAX_ORIGINAL_BPM).contains(&bpm) => bpm,
        _ => DEFAULT_BPM,
    }
}

/// Validate a custom target tempo
pub fn validate_target_bpm(bpm: u32) -> Result<u32, String> {
    if (MIN_TARGET_BPM..=MAX_TARGET_BPM).contains(&bpm) {
        Ok(bpm)
    } else {
        Err(format!(
            "Invalid target BPM: {} (must be {}-{})",
            bpm, MIN_TARGET_BPM, MAX_TARGET_BPM
        ))
    }
}
