// Purpose - external interfaces, format conversions

pub mod converter;
pub mod midi;

/// Planar output buffers, one `Vec` per channel.
///
/// Allocated by the owner ahead of time; the engine only writes into them.
#[derive(Debug, Default)]
pub struct AudioOutput {
    pub buffers: Vec<Vec<f32>>,
}

impl AudioOutput {
    pub fn new(channels: usize, frames: usize) -> Self {
        Self {
            buffers: vec![vec![0.0; frames]; channels],
        }
    }

    pub fn channels(&self) -> usize {
        self.buffers.len()
    }

    /// Frames every channel can hold (the shortest channel wins).
    pub fn frames(&self) -> usize {
        self.buffers.iter().map(Vec::len).min().unwrap_or(0)
    }

    /// Samples of channel `ch`, or `None` past the last channel.
    pub fn channel(&self, ch: usize) -> Option<&[f32]> {
        self.buffers.get(ch).map(Vec::as_slice)
    }

    /// Copy the first `frames` frames into an interleaved device buffer.
    ///
    /// Stops early if `dest` is too short for `frames` whole frames.
    pub fn interleave_into(&self, dest: &mut [f32], frames: usize) {
        let channels = self.channels();
        if channels == 0 {
            return;
        }
        for (i, frame) in dest.chunks_exact_mut(channels).take(frames).enumerate() {
            for (ch, sample) in frame.iter_mut().enumerate() {
                *sample = self.buffers[ch][i];
            }
        }
    }
}
