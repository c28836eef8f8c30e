use crate::dsp::{oscillator, smoothing};

/// Engine-wide state shared by every voice of one synth instance.
///
/// Passed by reference to voice and dispatcher calls; nothing in the crate
/// keeps process-wide mutable state, so several engines can run side by side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineState {
    pub sample_rate: f64,
    /// Sustain pedal held.
    pub pedal_down: bool,
    /// Global pitch wheel offset in semitones.
    pub pitch_bend: f64,
    /// One-pole coefficient for the current block.
    pub smoothing_coeff: f64,
}

/// Rate used when the host hands over one the pitch model cannot use.
pub const FALLBACK_SAMPLE_RATE: f64 = 48_000.0;

/// Finite and strictly positive.
#[inline]
pub fn is_valid_sample_rate(sample_rate: f64) -> bool {
    sample_rate.is_finite() && sample_rate > 0.0
}

impl EngineState {
    /// A zero, negative or non-finite `sample_rate` is replaced by
    /// `FALLBACK_SAMPLE_RATE`.
    pub fn new(sample_rate: f64, smooth: f64) -> Self {
        let sample_rate = if is_valid_sample_rate(sample_rate) {
            sample_rate
        } else {
            log::warn!(
                "polysine: invalid sample rate {sample_rate}, using {FALLBACK_SAMPLE_RATE} Hz"
            );
            FALLBACK_SAMPLE_RATE
        };
        Self {
            sample_rate,
            pedal_down: false,
            pitch_bend: 0.0,
            smoothing_coeff: smoothing::smoothing_coefficient(smooth, sample_rate),
        }
    }

    /// Recompute the smoothing coefficient from the "Smooth" parameter.
    pub fn update_smoothing(&mut self, smooth: f64) {
        self.smoothing_coeff = smoothing::smoothing_coefficient(smooth, self.sample_rate);
    }

    /// Angular increment for `note` with the current pitch bend.
    #[inline]
    pub fn omega_for(&self, note: u8) -> f64 {
        oscillator::omega(note, self.pitch_bend, self.sample_rate)
    }

    /// Pedal up and wheel centered.
    pub fn reset_controllers(&mut self) {
        self.pedal_down = false;
        self.pitch_bend = 0.0;
    }
}
