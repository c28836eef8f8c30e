pub mod dsp; // Oscillator, smoothing and gain math
pub mod io; // Host-facing buffers and MIDI event types
pub mod synth; // Voice management and block rendering

pub use io::{midi::MidiEvent, midi::TimedEvent, AudioOutput};
pub use synth::{
    params::SynthParams,
    poly::{BlockData, PolySynth, Tail},
    EngineConfig,
};

pub const MAX_BLOCK_SIZE: usize = 2048;
/// Voice slots allocated by `EngineConfig::default()`.
pub const DEFAULT_MAX_VOICES: usize = 24;
