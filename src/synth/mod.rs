// Purpose: Voice management, polyphony, MIDI handling
// This layer sits above the DSP primitives and manages multiple voices

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::DEFAULT_MAX_VOICES;

pub mod dispatcher;
pub mod message;
pub mod params;
pub mod poly;
pub mod pool;
pub mod scheduler;
pub mod state;
pub mod voice;

use params::SynthParams;

/// Setup-time configuration for a `PolySynth`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Zero, negative or non-finite rates fall back to 48 kHz.
    pub sample_rate: f64,
    /// Voice slots, fixed for the lifetime of the engine.
    pub max_voices: usize,
    /// Parameter values used before the host sends its first block.
    pub params: SynthParams,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_rate: 48_000.0,
            max_voices: DEFAULT_MAX_VOICES,
            params: SynthParams::default(),
        }
    }
}
