//! Master gain mapping and per-block geometric ramps.

/*
Log-Domain Gain
===============

The "Gain" parameter (0..1) maps to a linear multiplier through a decade per
half unit:

    gain = 10^(2 · p - 1)

      p     gain     dB
    0.0     0.1    -20 dB
    0.5     1.0      0 dB
    1.0    10.0    +20 dB

Because the mapping is exponential, a parameter that moves linearly across a
block becomes a geometric gain sequence. Each sample multiplies the gain by a
constant ratio:

    ratio = 10^(2 · (p_end - p_begin) / N)

and after N multiplications the gain has moved from gain(p_begin) to exactly
gain(p_end). No per-sample `pow()` is needed.

The ratio is forced to 1 when the parameter did not move or the block is
empty, so a zero-length block never divides by zero.
*/

/// Linear gain for a "Gain" parameter value.
#[inline]
pub fn gain_from_param(param: f64) -> f64 {
    10.0_f64.powf(2.0 * param - 1.0)
}

/// Per-sample multiplier that moves the gain from `begin` to `end` (both
/// parameter values) over `samples` steps.
#[inline]
pub fn ramp_ratio(begin: f64, end: f64, samples: usize) -> f64 {
    let delta = end - begin;
    if delta == 0.0 || samples == 0 {
        return 1.0;
    }
    10.0_f64.powf(2.0 * delta / samples as f64)
}

/// Geometric master-gain ramp across one block.
///
/// `next()` advances first and then returns, so sample 0 is one step past
/// the begin gain and sample `N - 1` lands on the end gain.
#[derive(Debug, Clone, Copy)]
pub struct GainRamp {
    gain: f64,
    ratio: f64,
}

impl GainRamp {
    pub fn new(param: f64) -> Self {
        Self {
            gain: gain_from_param(param),
            ratio: 1.0,
        }
    }

    /// Start a new block ramping from `begin` to `end` parameter values.
    pub fn begin(&mut self, begin: f64, end: f64, samples: usize) {
        self.gain = gain_from_param(begin);
        self.ratio = ramp_ratio(begin, end, samples);
    }

    #[inline]
    pub fn next(&mut self) -> f64 {
        self.gain *= self.ratio;
        self.gain
    }

    pub fn gain(&self) -> f64 {
        self.gain
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }
}

impl Default for GainRamp {
    fn default() -> Self {
        Self::new(0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_mapping() {
        assert!((gain_from_param(0.5) - 1.0).abs() < 1e-12);
        assert!((gain_from_param(0.0) - 0.1).abs() < 1e-12);
        assert!((gain_from_param(1.0) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn static_param_is_flat() {
        let mut ramp = GainRamp::default();
        ramp.begin(0.5, 0.5, 64);
        assert_eq!(ramp.ratio(), 1.0);
        for _ in 0..64 {
            assert_eq!(ramp.next(), 1.0);
        }
    }

    #[test]
    fn empty_block_does_not_divide_by_zero() {
        assert_eq!(ramp_ratio(0.2, 0.8, 0), 1.0);
    }

    #[test]
    fn ramp_lands_on_end_gain() {
        let n = 128;
        let mut ramp = GainRamp::default();
        ramp.begin(0.25, 0.75, n);
        let start = gain_from_param(0.25);
        let end = gain_from_param(0.75);
        assert_eq!(ramp.gain(), start);

        let mut previous = start;
        let mut last = start;
        for _ in 0..n {
            last = ramp.next();
            assert!(last > previous, "ramp must rise monotonically");
            assert!(last <= end * (1.0 + 1e-9));
            previous = last;
        }
        assert!((last - end).abs() < 1e-9, "expected {end}, got {last}");
    }

    #[test]
    fn falling_ramp_is_monotonic() {
        let n = 64;
        let mut ramp = GainRamp::default();
        ramp.begin(0.9, 0.1, n);
        let mut previous = gain_from_param(0.9);
        for _ in 0..n {
            let g = ramp.next();
            assert!(g < previous);
            previous = g;
        }
        assert!((previous - gain_from_param(0.1)).abs() < 1e-9);
    }
}
