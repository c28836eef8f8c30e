//! Scheduler - maps live, absolutely-timed messages onto host blocks
//!
//! Runs in the audio thread. Each block it pulls the messages that fall
//! inside the block from a `MessageReceiver` and rewrites their timestamps
//! as offsets from the first sample of the block, ready for `BlockData`.

use crate::io::midi::TimedEvent;
use crate::synth::message::MessageReceiver;

/// Sample clock plus a pre-sized buffer for one block's events.
pub struct Scheduler {
    /// Absolute sample time of the next block's first sample
    sample_pos: u64,
    /// Events for the current block; never grows past `max_events`
    events: Vec<TimedEvent>,
    max_events: usize,
}

impl Scheduler {
    /// `max_events` bounds how many messages one block can carry. Any
    /// overflow stays in the receiver and is delivered in the next block.
    pub fn new(max_events: usize) -> Self {
        let max_events = max_events.max(1);
        Self {
            sample_pos: 0,
            events: Vec::with_capacity(max_events),
            max_events,
        }
    }

    /// Collect every message due before the end of a `block_len` block and
    /// advance the clock past it.
    ///
    /// Messages stamped earlier than the block (late arrivals) are placed at
    /// offset 0. Returns the collected events, ready for `BlockData`.
    pub fn collect<R: MessageReceiver + ?Sized>(
        &mut self,
        rx: &mut R,
        block_len: usize,
    ) -> &[TimedEvent] {
        self.events.clear();
        let block_end = self.sample_pos + block_len as u64;

        while self.events.len() < self.max_events {
            match rx.peek() {
                Some(msg) if msg.sample_time < block_end => {}
                _ => break,
            }
            let Some(msg) = rx.pop() else { break };

            let offset = msg.sample_time.saturating_sub(self.sample_pos) as f64;
            // Keep the block non-decreasing even if the producer was not.
            let time = self.events.last().map_or(offset, |last| offset.max(last.time));
            self.events.push(TimedEvent::new(time, msg.event));
        }

        self.sample_pos = block_end;
        &self.events
    }

    /// Absolute time of the next block's first sample.
    pub fn sample_pos(&self) -> u64 {
        self.sample_pos
    }
}
