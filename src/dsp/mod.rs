//! Low-level DSP primitives used by the synth layer.
//!
//! These components are allocation-free and realtime-safe, making them safe to
//! embed directly inside voice structs. They stay focused on the
//! signal-processing math; voice lifetime and event handling live in `synth`.

/// Master gain mapping and intra-block geometric ramps.
pub mod gain;
/// Pitch model and sine phase accumulation.
pub mod oscillator;
/// One-pole amplitude smoothing.
pub mod smoothing;

pub use gain::GainRamp;
pub use oscillator::SinePhase;
