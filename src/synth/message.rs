use std::collections::VecDeque;

#[cfg(feature = "rtrb")]
use rtrb::Consumer;

use crate::io::midi::MidiEvent;

/// A MIDI event stamped with an absolute sample time.
///
/// Used on the live path, where events are produced on another thread and
/// the audio callback maps them onto its own block boundaries.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TimedMessage {
    pub sample_time: u64,
    pub event: MidiEvent,
}

impl TimedMessage {
    pub fn new(sample_time: u64, event: MidiEvent) -> Self {
        Self { sample_time, event }
    }
}

pub trait MessageReceiver {
    /// Next message without consuming it.
    fn peek(&self) -> Option<&TimedMessage>;

    fn pop(&mut self) -> Option<TimedMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<TimedMessage> {
    fn peek(&self) -> Option<&TimedMessage> {
        Consumer::peek(self).ok()
    }

    fn pop(&mut self) -> Option<TimedMessage> {
        Consumer::pop(self).ok()
    }
}

/// Offline rendering and tests.
impl MessageReceiver for VecDeque<TimedMessage> {
    fn peek(&self) -> Option<&TimedMessage> {
        self.front()
    }

    fn pop(&mut self) -> Option<TimedMessage> {
        self.pop_front()
    }
}
