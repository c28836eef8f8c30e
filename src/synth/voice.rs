use crate::dsp::{
    oscillator::SinePhase,
    smoothing::{one_pole, SILENCE_THRESHOLD},
};
use crate::io::converter::velocity_to_amplitude;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceState {
    Free,      // Available for allocation
    Active,    // Sounding, amplitude chasing the velocity target
    Releasing, // Target is zero, waiting for the level to reach silence
}

/// One sine oscillator with a one-pole amplitude envelope.
///
/// Voices live by value inside a `VoicePool` slot and are moved between
/// slots when the pool compacts; a voice has no identity beyond its note.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Voice {
    note: Option<u8>,
    omega: f64,
    target: f64,
    level: f64,
    phase: SinePhase,
    pending_release: bool,
}

impl Voice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or re-strike) a note.
    ///
    /// Phase and level carry over, so re-using a slot that is still
    /// releasing continues from where it was instead of clicking. A release
    /// already deferred by the pedal stays pending and still fires when the
    /// pedal comes up.
    pub fn note_on(&mut self, note: u8, velocity: u8, omega: f64) {
        self.target = velocity_to_amplitude(velocity);
        self.note = Some(note);
        self.omega = omega;
    }

    /// Key released. Deferred until `pedal_released` while the pedal is held.
    pub fn note_off(&mut self, pedal_down: bool) {
        if pedal_down {
            self.pending_release = true;
        } else {
            self.target = 0.0;
        }
    }

    /// Pedal lifted: release the note if its key went up meanwhile.
    pub fn pedal_released(&mut self) {
        if self.pending_release {
            self.note_off(false);
            self.pending_release = false;
        }
    }

    /// Replace the angular increment without touching level or phase.
    pub fn force_pitch(&mut self, omega: f64) {
        self.omega = omega;
    }

    /// Advance one sample.
    ///
    /// Returns `None` once a released voice has decayed below the silence
    /// threshold; the phase is not advanced on that call and the owner must
    /// retire the slot before the next sample.
    #[inline]
    pub fn render_sample(&mut self, coeff: f64) -> Option<f64> {
        self.level = one_pole(self.level, self.target, coeff);
        if self.target == 0.0 && self.level < SILENCE_THRESHOLD {
            return None;
        }

        let sample = self.level * self.phase.value();
        self.phase.advance(self.omega);
        Some(sample)
    }

    pub fn normalize_phase(&mut self) {
        self.phase.normalize();
    }

    /// Back to the unassigned state.
    pub fn free(&mut self) {
        *self = Self::default();
    }

    pub fn state(&self) -> VoiceState {
        match self.note {
            None => VoiceState::Free,
            Some(_) if self.target == 0.0 => VoiceState::Releasing,
            Some(_) => VoiceState::Active,
        }
    }

    pub fn is_free(&self) -> bool {
        self.note.is_none()
    }

    pub fn note(&self) -> Option<u8> {
        self.note
    }

    pub fn omega(&self) -> f64 {
        self.omega
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Current smoothed amplitude.
    pub fn level(&self) -> f64 {
        self.level
    }

    pub fn phase(&self) -> f64 {
        self.phase.phase()
    }

    pub fn pending_release(&self) -> bool {
        self.pending_release
    }
}
