//! Real-world scenario benchmarks.
//!
//! These benchmarks model actual host usage: full blocks rendered through
//! `PolySynth` with sounding voices and dense event lists.

mod events;
mod voices;

pub use events::bench_events;
pub use voices::bench_voices;
