//! Benchmarks for sine phase accumulation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use polysine::dsp::oscillator::{omega, SinePhase};

use crate::BLOCK_SIZES;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");
    let step = omega(69, 0.0, 48_000.0);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f64; size];

        // Sine - one sin() per sample, wrapped once per block
        let mut phase = SinePhase::new();
        group.bench_with_input(BenchmarkId::new("sine", size), &size, |b, _| {
            b.iter(|| {
                for sample in buffer.iter_mut() {
                    *sample = phase.value();
                    phase.advance(black_box(step));
                }
                phase.normalize();
                black_box(&buffer);
            })
        });

        // Pitch recomputation - what a pitch-wheel message costs per voice
        group.bench_with_input(BenchmarkId::new("omega", size), &size, |b, &n| {
            b.iter(|| {
                let mut acc = 0.0;
                for i in 0..n {
                    acc += omega(black_box((i % 128) as u8), 0.5, 48_000.0);
                }
                black_box(acc)
            })
        });
    }

    group.finish();
}
