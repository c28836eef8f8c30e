use std::path::PathBuf;

use clap::Parser;

use crate::demo;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Render to a 16-bit WAV file instead of playing
    #[arg(long)]
    pub wav: Option<PathBuf>,

    /// Length of audio to play or render, in seconds
    #[arg(long, default_value_t = demo::LENGTH_SECONDS)]
    pub seconds: f64,

    /// Sample rate for offline rendering (playback uses the device rate)
    #[arg(long, default_value_t = 48_000)]
    pub sample_rate: u32,

    /// Envelope smoothing ("Smooth" parameter)
    #[arg(long, default_value_t = 0.01)]
    pub smooth: f64,

    /// Master gain ("Gain" parameter, 0.5 = unity)
    #[arg(long, default_value_t = 0.5)]
    pub gain: f64,

    /// Frames per engine block
    #[arg(long, default_value_t = 256)]
    pub block_size: usize,
}

impl Args {
    /// Block size clamped to what the engine buffers hold.
    pub fn block_size(&self) -> usize {
        self.block_size.clamp(1, polysine::MAX_BLOCK_SIZE)
    }
}
