//! polysine - play or render the demo phrase
//!
//! Run with: cargo run
//! Render to disk with: cargo run -- --wav demo.wav

mod app;
mod cli;
mod demo;
mod render;

use clap::Parser;
use polysine::{synth::params::PARAM_NAMES, SynthParams};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let args = cli::Args::parse();
    let params = SynthParams::new(args.smooth, args.gain);
    for (name, value) in PARAM_NAMES.iter().zip(params.values()) {
        log::info!("{name} = {value}");
    }

    match &args.wav {
        Some(path) => render::render_wav(path, &args, params),
        None => app::play(&args, params),
    }
}
