use std::collections::{HashMap, VecDeque};

use midly::{MetaMessage, MidiMessage, Smf, Timing, TrackEventKind};

use crate::converters::midi::{model::*, Result};

/// Read SMF bytes into the import model
///
/// Note-off (or note-on with velocity 0) closes the oldest open note with the
/// same key and channel. Notes still open at the end of a track end there.
pub fn read_smf(bytes: &[u8]) -> Result<MidiFile> {
    let smf = Smf::parse(bytes)?;

    let time_base = match smf.header.timing {
        Timing::Metrical(tpq) => TimeBase::Metrical(tpq.as_int()),
        Timing::Timecode(fps, subframes) => TimeBase::Timecode {
            fps: fps.as_f32(),
            subframes,
        },
    };

    let mut tempos = Vec::new();
    let mut tracks = Vec::with_capacity(smf.tracks.len());

    for events in &smf.tracks {
        let mut track = MidiTrack::default();
        let mut tick: u64 = 0;
        // (channel, key) -> indices of open notes, oldest first
        let mut open: HashMap<(u8, u8), VecDeque<usize>> = HashMap::new();

        for event in events {
            tick += event.delta.as_int() as u64;

            match event.kind {
                TrackEventKind::Meta(MetaMessage::Tempo(t)) => {
                    tempos.push(Tempo {
                        tick,
                        micros_per_beat: t.as_int(),
                    });
                }
                TrackEventKind::Meta(MetaMessage::TrackName(name)) if track.name.is_none() => {
                    let name = String::from_utf8_lossy(name).into_owned();
                    if !name.is_empty() {
                        track.name = Some(name);
                    }
                }
                TrackEventKind::Midi { channel, message } => {
                    let channel = channel.as_int();
                    match message {
                        MidiMessage::NoteOn { key, vel } if vel.as_int() > 0 => {
                            open.entry((channel, key.as_int()))
                                .or_default()
                                .push_back(track.notes.len());
                            track.notes.push(MidiNote {
                                key: key.as_int(),
                                velocity: vel.as_int(),
                                channel,
                                start_tick: tick,
                                end_tick: tick,
                                start_seconds: 0.0,
                                end_seconds: 0.0,
                            });
                        }
                        MidiMessage::NoteOn { key, .. } | MidiMessage::NoteOff { key, .. } => {
                            let started = open
                                .get_mut(&(channel, key.as_int()))
                                .and_then(|queue| queue.pop_front());
                            if let Some(index) = started {
                                track.notes[index].end_tick = tick;
                            }
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        for index in open.into_values().flatten() {
            track.notes[index].end_tick = tick;
        }

        tracks.push(track);
    }

    // Stable: tempo events at the same tick keep file order
    tempos.sort_by_key(|t| t.tick);

    for note in tracks.iter_mut().flat_map(|t| t.notes.iter_mut()) {
        note.start_seconds = tick_to_seconds(note.start_tick, time_base, &tempos);
        note.end_seconds = tick_to_seconds(note.end_tick, time_base, &tempos);
    }

    let note_count: usize = tracks.iter().map(|t| t.notes.len()).sum();
    log::debug!(
        "read SMF: {} tracks, {} notes, {} tempo events",
        tracks.len(),
        note_count,
        tempos.len()
    );

    Ok(MidiFile {
        time_base,
        tempos,
        tracks,
    })
}
