//! Conversions from raw MIDI values to engine units.

/// Controller number of the sustain (damper) pedal.
pub const SUSTAIN_PEDAL_CC: u8 = 64;
/// Pitch wheel range in semitones, in each direction.
pub const PITCH_BEND_RANGE: f64 = 2.0;

const PITCH_BEND_HALF_SPAN: f64 = 8192.0;

/// Pitch wheel value (centered on 0) to a semitone offset in [-2, +2).
#[inline]
pub fn pitch_bend_semitones(value: i16) -> f64 {
    PITCH_BEND_RANGE * f64::from(value) / PITCH_BEND_HALF_SPAN
}

/// Note velocity to a target amplitude in [0, 1].
#[inline]
pub fn velocity_to_amplitude(velocity: u8) -> f64 {
    f64::from(velocity) / 127.0
}

/// Controller values of 64 and above mean the pedal is held.
#[inline]
pub fn pedal_is_down(value: u8) -> bool {
    value >= 64
}

/// Convert MIDI note number to frequency in Hz.
/// A4 = 440 Hz = MIDI note 69
pub fn midi_note_to_freq(note: u8) -> f64 {
    440.0 * 2.0_f64.powf((f64::from(note) - 69.0) / 12.0)
}
