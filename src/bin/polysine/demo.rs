//! Demo phrase - exercises the pedal, the pitch wheel and voice reuse

use polysine::{
    io::converter::SUSTAIN_PEDAL_CC,
    synth::message::TimedMessage,
    MidiEvent, SynthParams,
};

/// Length of the phrase, release tail included.
pub const LENGTH_SECONDS: f64 = 7.0;
/// Fade-out before the end of the phrase.
const FADE_SECONDS: f64 = 0.5;

const CHORD: [u8; 4] = [48, 55, 60, 64]; // C3 G3 C4 E4
const ARPEGGIO: [u8; 8] = [60, 64, 67, 72, 76, 72, 67, 64];

/// The phrase as absolutely-timed messages, sorted by time.
pub fn phrase(sample_rate: f64) -> Vec<TimedMessage> {
    let at = |seconds: f64| (seconds * sample_rate).round() as u64;
    let mut messages = Vec::new();
    let mut push = |seconds: f64, event: MidiEvent| {
        messages.push(TimedMessage::new(at(seconds), event));
    };

    // Chord struck, keys released at once, held by the pedal
    push(0.0, MidiEvent::control_change(SUSTAIN_PEDAL_CC, 127));
    for (i, &note) in CHORD.iter().enumerate() {
        push(0.02 * i as f64, MidiEvent::note_on(note, 36));
    }
    for &note in &CHORD {
        push(0.4, MidiEvent::note_off(note));
    }
    push(2.0, MidiEvent::control_change(SUSTAIN_PEDAL_CC, 0));

    // Bend a held A4 up a whole tone and back
    push(2.5, MidiEvent::note_on(69, 90));
    for step in 0..=16 {
        let value = (8191.0 * step as f64 / 16.0) as i16;
        push(2.8 + 0.02 * step as f64, MidiEvent::pitch_bend(value));
    }
    for step in (0..16).rev() {
        let value = (8191.0 * step as f64 / 16.0) as i16;
        push(3.5 + 0.02 * (16 - step) as f64, MidiEvent::pitch_bend(value));
    }
    push(4.0, MidiEvent::note_off(69));

    // Arpeggio, played twice
    for pass in 0..2 {
        for (i, &note) in ARPEGGIO.iter().enumerate() {
            let t = 4.2 + pass as f64 * 0.8 + i as f64 * 0.1;
            push(t, MidiEvent::note_on(note, 60 + 5 * i as u8));
            push(t + 0.08, MidiEvent::note_off(note));
        }
    }

    messages.sort_by_key(|m| m.sample_time);
    messages
}

/// Parameter snapshot at `seconds`, fading the gain out before the end.
pub fn params_at(seconds: f64, length: f64, base: SynthParams) -> SynthParams {
    let fade_start = length - FADE_SECONDS;
    if seconds <= fade_start {
        return base;
    }
    let progress = ((seconds - fade_start) / FADE_SECONDS).clamp(0.0, 1.0);
    SynthParams {
        gain: base.gain - progress * base.gain,
        ..base
    }
}
