//! Offline rendering to a WAV file

use std::collections::VecDeque;
use std::path::Path;

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use hound::{SampleFormat, WavSpec, WavWriter};

use polysine::{
    synth::scheduler::Scheduler, AudioOutput, BlockData, EngineConfig, PolySynth, SynthParams,
};

use crate::{cli::Args, demo};

/// Events a single block may carry before the rest spill into the next one.
const MAX_EVENTS_PER_BLOCK: usize = 256;

pub fn render_wav(path: &Path, args: &Args, params: SynthParams) -> EyreResult<()> {
    let sample_rate = f64::from(args.sample_rate);
    let block_size = args.block_size();
    let total_frames = (args.seconds.max(0.0) * sample_rate).round() as usize;

    let config = EngineConfig {
        sample_rate,
        params,
        ..EngineConfig::default()
    };
    let mut synth = PolySynth::new(config);
    let mut scheduler = Scheduler::new(MAX_EVENTS_PER_BLOCK);
    let mut output = AudioOutput::new(1, block_size);
    let mut rx: VecDeque<_> = demo::phrase(sample_rate).into();

    let spec = WavSpec {
        channels: 1,
        sample_rate: args.sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec)
        .wrap_err_with(|| format!("failed to create {}", path.display()))?;

    log::info!(
        "rendering {:.2}s at {} Hz to {}",
        args.seconds,
        args.sample_rate,
        path.display()
    );

    let mut peak = 0.0f32;
    let mut written = 0;
    while written < total_frames {
        let frames = (total_frames - written).min(block_size);
        let start = written as f64 / sample_rate;
        let end = (written + frames) as f64 / sample_rate;

        let block = BlockData {
            samples: frames,
            begin: demo::params_at(start, args.seconds, params),
            end: demo::params_at(end, args.seconds, params),
            events: scheduler.collect(&mut rx, frames),
        };
        synth.process_block(&block, &mut output);

        let mono = output
            .channel(0)
            .ok_or_else(|| eyre!("render buffer has no channel"))?;
        for &sample in &mono[..frames] {
            peak = peak.max(sample.abs());
            let value = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
            writer
                .write_sample(value)
                .wrap_err("failed to write sample")?;
        }
        written += frames;
    }

    writer.finalize().wrap_err("failed to finalize wav file")?;

    println!("Wrote {} frames to {}", written, path.display());
    if peak > 1.0 {
        log::warn!("output clipped (peak {peak:.2}); lower --gain");
    }
    Ok(())
}
