//! Benchmarks for low-level DSP primitives.

mod oscillator;
mod smoothing;

pub use oscillator::bench_oscillator;
pub use smoothing::bench_smoothing;
