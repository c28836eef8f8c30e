//! Benchmarks for whole blocks with many sounding voices.
//!
//! Voices are struck in a warm-up block so the measured blocks only pay for
//! summing, smoothing and the gain ramp.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use polysine::{
    AudioOutput, BlockData, EngineConfig, MidiEvent, PolySynth, SynthParams, TimedEvent,
    DEFAULT_MAX_VOICES,
};

use crate::BLOCK_SIZES;

const VOICE_COUNTS: &[usize] = &[1, 8, DEFAULT_MAX_VOICES];

fn held_synth(voices: usize, channels: usize) -> PolySynth {
    let mut synth = PolySynth::new(EngineConfig::default());
    let chord: Vec<TimedEvent> = (0..voices)
        .map(|i| TimedEvent::new(0.0, MidiEvent::note_on(36 + i as u8 * 2, 100)))
        .collect();
    let mut out = AudioOutput::new(channels, 64);
    synth.process_block(&BlockData::new(64, SynthParams::default(), &chord), &mut out);
    synth
}

pub fn bench_voices(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/voices");

    for &size in BLOCK_SIZES {
        let block = BlockData::new(size, SynthParams::default(), &[]);

        for &voices in VOICE_COUNTS {
            let mut synth = held_synth(voices, 2);
            let mut out = AudioOutput::new(2, size);
            let id = BenchmarkId::new(format!("{voices}_voices"), size);
            group.bench_with_input(id, &size, |b, _| {
                b.iter(|| {
                    synth.process_block(black_box(&block), &mut out);
                    black_box(&out.buffers);
                })
            });
        }

        // Gain automation on every block
        let mut synth = held_synth(DEFAULT_MAX_VOICES, 2);
        let mut out = AudioOutput::new(2, size);
        let fading = BlockData {
            samples: size,
            begin: SynthParams::new(0.01, 0.6),
            end: SynthParams::new(0.01, 0.4),
            events: &[],
        };
        group.bench_with_input(BenchmarkId::new("gain_automation", size), &size, |b, _| {
            b.iter(|| {
                synth.process_block(black_box(&fading), &mut out);
                black_box(&out.buffers);
            })
        });
    }

    group.finish();
}
