//! Sine oscillator math: pitch model and phase accumulation.

use std::f64::consts::TAU;

/*
Sine Oscillator
===============

Every voice in this synth is a single sine wave. The oscillator keeps one
number of state, the phase, and asks `sin()` for the sample.

Vocabulary
----------

  phase       Accumulated angle in radians. Advanced once per sample.

  omega       Angular increment per sample (radians/sample). A 440 Hz tone at
              48 kHz advances by 2π · 440 / 48000 ≈ 0.0576 rad per sample.

  pitch bend  A global offset in semitones added to every note number before
              converting to frequency. The wheel spans ±2 semitones.


The Pitch Model
---------------

Equal temperament with A4 (MIDI note 69) tuned to 440 Hz:

    frequency = 440 · 2^((note - 69 + bend) / 12)
    omega     = 2π · frequency / sample_rate

Bend is applied in the exponent so a +2 semitone bend is exactly a whole tone
above every note, regardless of register.


Why the Phase Must Be Wrapped
-----------------------------

Phase only grows. After a minute of a sustained 1 kHz note at 48 kHz it has
reached ~377,000 radians. At that magnitude an f64 still has sub-microradian
resolution, but the argument reduction inside `sin()` keeps losing low bits
and after hours the pitch drifts audibly. Subtracting 2π at block boundaries
keeps the phase in [0, 2π] forever, at the cost of one comparison per voice
per block.

    phase
      2π ┤    ╱│   ╱│   ╱│
         │   ╱ │  ╱ │  ╱ │
         │  ╱  │ ╱  │ ╱  │
       0 ┼─╱───┴╱───┴╱───┴──→ blocks
*/

/// A4 reference pitch in Hz.
pub const A4_FREQUENCY: f64 = 440.0;
/// MIDI note number of A4.
pub const A4_NOTE: f64 = 69.0;

/// Angular increment per sample for `note` bent by `bend_semitones`.
///
/// Note numbers are not validated; values outside 0..=127 produce whatever
/// the formula gives.
#[inline]
pub fn omega(note: u8, bend_semitones: f64, sample_rate: f64) -> f64 {
    let semitones = f64::from(note) - A4_NOTE + bend_semitones;
    TAU * A4_FREQUENCY * 2.0_f64.powf(semitones / 12.0) / sample_rate
}

/// Frequency in Hz corresponding to an angular increment.
#[inline]
pub fn omega_to_frequency(omega: f64, sample_rate: f64) -> f64 {
    omega * sample_rate / TAU
}

/// Phase accumulator for a single sine voice.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SinePhase {
    phase: f64,
}

impl SinePhase {
    pub fn new() -> Self {
        Self { phase: 0.0 }
    }

    /// Current sine value, `sin(phase)`.
    #[inline]
    pub fn value(&self) -> f64 {
        self.phase.sin()
    }

    #[inline]
    pub fn advance(&mut self, omega: f64) {
        self.phase += omega;
    }

    /// Bring the phase back into [0, 2π].
    ///
    /// Called once per block; with omega below π the loop runs at most
    /// `block_len / 2` times. A non-finite phase restarts at 0.
    #[inline]
    pub fn normalize(&mut self) {
        if !self.phase.is_finite() {
            self.phase = 0.0;
            return;
        }
        while self.phase > TAU {
            self.phase -= TAU;
        }
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }
}
