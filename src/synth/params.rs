#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Host-visible parameter names, in declaration order.
pub const PARAM_NAMES: [&str; 2] = ["Smooth", "Gain"];

/// Snapshot of every declared parameter.
///
/// The host supplies one at the beginning and one at the end of each block;
/// the renderer ramps between them.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthParams {
    /// Envelope smoothing time control.
    pub smooth: f64,
    /// Master gain control, log-mapped by `dsp::gain::gain_from_param`.
    pub gain: f64,
}

impl SynthParams {
    pub const DEFAULT_SMOOTH: f64 = 0.01;
    pub const DEFAULT_GAIN: f64 = 0.5;

    pub fn new(smooth: f64, gain: f64) -> Self {
        Self { smooth, gain }
    }

    /// Values in `PARAM_NAMES` order.
    pub fn values(&self) -> [f64; 2] {
        [self.smooth, self.gain]
    }
}

impl Default for SynthParams {
    fn default() -> Self {
        Self {
            smooth: Self::DEFAULT_SMOOTH,
            gain: Self::DEFAULT_GAIN,
        }
    }
}
