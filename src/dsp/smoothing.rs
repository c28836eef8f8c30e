//! One-pole amplitude smoothing.

/*
One-Pole Smoothing
==================

Instead of a multi-stage ADSR, each voice chases a single target amplitude
with an exponential approach:

    level += k · (target - level)

On note-on the target is the velocity (0..1) and the level rises; on note-off
the target is 0 and the level falls. The curve is the same in both
directions, which is all this synth needs for click-free starts and stops.

    Level
      1 ┤      ╭────────────╮
        │     ╱              ╲
        │    │                ╲
        │   ╱                  ╲_
      0 ┼──╯                     ╲____→ time
          note-on           note-off


The Coefficient
---------------

The "Smooth" parameter (seconds-ish, default 0.01) is turned into `k` once
per block, shared by every voice:

    k = 10^(1 / (50 + 0.5 · sample_rate · smooth)) - 1

At 48 kHz with smooth = 0.01 the denominator is 290 and k ≈ 0.00797, so a
release from full level reaches the silence threshold after roughly 1150
samples (~24 ms). The constant 50 keeps k below ~0.047 even with smooth = 0,
so the envelope never jumps in a single sample.


Silence Threshold
-----------------

A releasing voice is considered finished once its level drops below
`SILENCE_THRESHOLD` (-80 dB). The exponential never reaches zero on its own.
*/

/// Level below which a releasing voice is considered silent (-80 dB).
pub const SILENCE_THRESHOLD: f64 = 1e-4;

/// Per-sample smoothing coefficient for the given "Smooth" value.
///
/// The denominator is bounded below by 50, so this never divides by zero,
/// even for a zero sample rate or smoothing time.
#[inline]
pub fn smoothing_coefficient(smooth: f64, sample_rate: f64) -> f64 {
    let denominator = (50.0 + 0.5 * sample_rate * smooth).max(1.0);
    10.0_f64.powf(1.0 / denominator) - 1.0
}

/// One step of the exponential approach toward `target`.
#[inline]
pub fn one_pole(value: f64, target: f64, coeff: f64) -> f64 {
    value + coeff * (target - value)
}

/// Number of samples a release from `start` takes to fall below the
/// silence threshold with coefficient `coeff`.
///
/// Returns `None` when the level would never decay (coefficient of 0).
pub fn release_samples(start: f64, coeff: f64) -> Option<usize> {
    if start < SILENCE_THRESHOLD {
        return Some(0);
    }
    if coeff <= 0.0 {
        return None;
    }
    if coeff >= 1.0 {
        return Some(1);
    }
    let steps = (SILENCE_THRESHOLD / start).ln() / (1.0 - coeff).ln();
    Some(steps.ceil() as usize)
}
