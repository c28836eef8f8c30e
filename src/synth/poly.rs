use crate::{
    dsp::gain::GainRamp,
    io::{midi::TimedEvent, AudioOutput},
    synth::{
        dispatcher::EventCursor, params::SynthParams, pool::VoicePool,
        state::{is_valid_sample_rate, EngineState},
        EngineConfig,
    },
};

/// Everything the host hands over for one block.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockData<'a> {
    /// Samples to render in this call.
    pub samples: usize,
    /// Parameter values at the first sample of the block.
    pub begin: SynthParams,
    /// Parameter values at the end of the block.
    pub end: SynthParams,
    /// Events for this block, non-decreasing in `time`.
    pub events: &'a [TimedEvent],
}

impl<'a> BlockData<'a> {
    /// A block with constant parameters.
    pub fn new(samples: usize, params: SynthParams, events: &'a [TimedEvent]) -> Self {
        Self {
            samples,
            begin: params,
            end: params,
            events,
        }
    }
}

/// How long the engine may keep sounding after its input goes quiet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tail {
    /// Output is silent after this many samples.
    Samples(usize),
    /// Never report idle; the host must keep calling `process_block`.
    Infinite,
}

/// Polyphonic sine synthesizer rendering one host block at a time.
///
/// `process_block` does not allocate or lock and its cost is bounded by
/// `samples * max_voices`.
pub struct PolySynth {
    voices: VoicePool,
    state: EngineState,
    gain: GainRamp,
    frame_counter: u64,
}

impl PolySynth {
    pub fn new(config: EngineConfig) -> Self {
        log::debug!(
            "polysine: {} voices at {} Hz",
            config.max_voices,
            config.sample_rate
        );

        Self {
            voices: VoicePool::new(config.max_voices),
            state: EngineState::new(config.sample_rate, config.params.smooth),
            gain: GainRamp::new(config.params.gain),
            frame_counter: 0,
        }
    }

    /// Render `block.samples` frames into every channel of `out`.
    ///
    /// Output channels shorter than the block are filled up to their length.
    /// Events stamped past the rendered frames are still applied once the
    /// frames are done, so no note-off or pedal change is lost.
    pub fn process_block(&mut self, block: &BlockData, out: &mut AudioOutput) {
        let frames = block.samples.min(out.frames());

        self.state.update_smoothing(block.begin.smooth);
        self.gain.begin(block.begin.gain, block.end.gain, frames);

        let coeff = self.state.smoothing_coeff;
        let mut events = EventCursor::new(block.events);

        for i in 0..frames {
            events.dispatch_due(i, &mut self.voices, &mut self.state);

            let sample = self.voices.sum_active(coeff) * self.gain.next();

            // Mono mix: the same value goes to every channel
            let sample = sample as f32;
            for channel in out.buffers.iter_mut() {
                channel[i] = sample;
            }
        }

        events.dispatch_remaining(&mut self.voices, &mut self.state);

        self.voices.normalize_phases();
        self.frame_counter += frames as u64;
    }

    /// The synth can always receive a new note, so it never reports idle.
    pub fn tail(&self) -> Tail {
        Tail::Infinite
    }

    /// Change the sample rate and retune every sounding voice.
    ///
    /// A zero, negative or non-finite rate is ignored and the current one
    /// kept.
    pub fn set_sample_rate(&mut self, sample_rate: f64) {
        if !is_valid_sample_rate(sample_rate) {
            log::warn!(
                "polysine: ignoring invalid sample rate {sample_rate}, staying at {} Hz",
                self.state.sample_rate
            );
            return;
        }
        if sample_rate == self.state.sample_rate {
            return;
        }
        log::debug!(
            "polysine: sample rate {} -> {} Hz",
            self.state.sample_rate,
            sample_rate
        );
        self.state.sample_rate = sample_rate;
        self.voices.retune(&self.state);
    }

    /// Silence everything and return controllers to rest.
    ///
    /// Not realtime-critical; meant for transport stops or device changes.
    pub fn reset(&mut self) {
        log::debug!("polysine: reset ({} voices cut)", self.voices.active_count());
        self.voices.clear();
        self.state.reset_controllers();
        self.frame_counter = 0;
    }

    pub fn active_voices(&self) -> usize {
        self.voices.active_count()
    }

    pub fn pool(&self) -> &VoicePool {
        &self.voices
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn sample_rate(&self) -> f64 {
        self.state.sample_rate
    }

    /// Frames rendered since construction or the last `reset`.
    pub fn frames_rendered(&self) -> u64 {
        self.frame_counter
    }
}

impl Default for PolySynth {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
