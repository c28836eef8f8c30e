//! Benchmarks for amplitude smoothing and the output gain ramp.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use polysine::dsp::{
    gain::GainRamp,
    smoothing::{one_pole, smoothing_coefficient},
};

use crate::BLOCK_SIZES;

pub fn bench_smoothing(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/smoothing");
    let coeff = smoothing_coefficient(0.01, 48_000.0);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f64; size];

        // One-pole step towards a fixed target
        let mut level = 0.0;
        group.bench_with_input(BenchmarkId::new("one_pole", size), &size, |b, _| {
            b.iter(|| {
                for sample in buffer.iter_mut() {
                    level = one_pole(level, black_box(1.0), coeff);
                    *sample = level;
                }
                black_box(&buffer);
            })
        });

        // Geometric gain ramp across the block
        let mut ramp = GainRamp::default();
        group.bench_with_input(BenchmarkId::new("gain_ramp", size), &size, |b, &n| {
            b.iter(|| {
                ramp.begin(black_box(0.3), black_box(0.7), n);
                for sample in buffer.iter_mut() {
                    *sample *= ramp.next();
                }
                black_box(&buffer);
            })
        });
    }

    group.finish();
}
