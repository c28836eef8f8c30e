//! Realtime playback through the default output device

use std::time::Duration;

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::RingBuffer;

use polysine::{
    synth::{message::TimedMessage, scheduler::Scheduler},
    AudioOutput, BlockData, EngineConfig, PolySynth, SynthParams, MAX_BLOCK_SIZE,
};

use crate::{cli::Args, demo};

/// Events a single block may carry before the rest spill into the next one.
const MAX_EVENTS_PER_BLOCK: usize = 256;

pub fn play(args: &Args, params: SynthParams) -> EyreResult<()> {
    // Set up audio
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| eyre!("no default output device available"))?;
    let config = device
        .default_output_config()
        .wrap_err("failed to fetch default output config")?;

    let sample_rate = config.sample_rate().0 as f64;
    let channels = config.channels() as usize;
    let block_size = args.block_size();

    println!("=== polysine ===");
    println!("Sample rate: {} Hz", sample_rate);
    println!("Channels: {}", channels);
    println!("Block size: {}", block_size);
    println!();

    // Queue the whole phrase up front; the scheduler releases each message
    // in the block it belongs to.
    let phrase = demo::phrase(sample_rate);
    let (mut tx, mut rx) = RingBuffer::<TimedMessage>::new(phrase.len().max(1));
    for message in phrase {
        tx.push(message)
            .map_err(|_| eyre!("event queue full"))?;
    }

    let mut synth = PolySynth::new(EngineConfig {
        sample_rate,
        params,
        ..EngineConfig::default()
    });
    let mut scheduler = Scheduler::new(MAX_EVENTS_PER_BLOCK);
    let mut output = AudioOutput::new(channels, MAX_BLOCK_SIZE);
    let length = args.seconds;

    let stream = device.build_output_stream(
        &config.into(),
        move |data: &mut [f32], _| {
            let total_frames = data.len() / channels;
            let mut frames_written = 0;

            while frames_written < total_frames {
                let frames = (total_frames - frames_written).min(block_size);
                let start = scheduler.sample_pos() as f64 / sample_rate;
                let end = start + frames as f64 / sample_rate;

                let block = BlockData {
                    samples: frames,
                    begin: demo::params_at(start, length, params),
                    end: demo::params_at(end, length, params),
                    events: scheduler.collect(&mut rx, frames),
                };
                synth.process_block(&block, &mut output);

                let offset = frames_written * channels;
                output.interleave_into(&mut data[offset..], frames);

                frames_written += frames;
            }
        },
        |err| log::error!("audio stream error: {err}"),
        None,
    )?;

    stream.play().wrap_err("failed to start output stream")?;

    println!("Playing {:.1}s demo...", length);
    std::thread::sleep(Duration::from_secs_f64(length.max(0.0)));
    Ok(())
}
