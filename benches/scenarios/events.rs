//! Benchmarks for event-dense blocks.
//!
//! Every block strikes and releases keys at scattered offsets, exercising
//! allocation, retirement and pitch-wheel retuning inside the render loop.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use polysine::{AudioOutput, BlockData, MidiEvent, PolySynth, SynthParams, TimedEvent};

use crate::BLOCK_SIZES;

fn busy_block(size: usize) -> Vec<TimedEvent> {
    let mut events = Vec::new();
    let step = (size / 16).max(1);
    for (i, time) in (0..size).step_by(step).enumerate() {
        let note = 48 + (i % 24) as u8;
        let event = match i % 4 {
            0 | 1 => MidiEvent::note_on(note, 90),
            2 => MidiEvent::note_off(note.saturating_sub(2)),
            _ => MidiEvent::pitch_bend(((i * 512) % 8192) as i16),
        };
        events.push(TimedEvent::new(time as f64, event));
    }
    events
}

pub fn bench_events(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/events");

    for &size in BLOCK_SIZES {
        let events = busy_block(size);
        let block = BlockData::new(size, SynthParams::default(), &events);
        let mut synth = PolySynth::default();
        let mut out = AudioOutput::new(2, size);

        group.bench_with_input(BenchmarkId::new("dense", size), &size, |b, _| {
            b.iter(|| {
                synth.process_block(black_box(&block), &mut out);
                black_box(&out.buffers);
            })
        });
    }

    group.finish();
}
