#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Channel voice messages, already decoded by the host.
///
/// `PitchBend` carries the 14-bit wheel value re-centered on zero
/// (-8192..=8191). `ProgramChange` is accepted but has no effect on the
/// engine, like any other message it does not understand.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MidiEvent {
    NoteOn { channel: u8, key: u8, velocity: u8 },
    NoteOff { channel: u8, key: u8, velocity: u8 },
    ControlChange { channel: u8, controller: u8, value: u8 },
    PitchBend { channel: u8, value: i16 },
    ProgramChange { channel: u8, program: u8 },
}

impl MidiEvent {
    pub fn note_on(key: u8, velocity: u8) -> Self {
        Self::NoteOn {
            channel: 0,
            key,
            velocity,
        }
    }

    pub fn note_off(key: u8) -> Self {
        Self::NoteOff {
            channel: 0,
            key,
            velocity: 0,
        }
    }

    pub fn control_change(controller: u8, value: u8) -> Self {
        Self::ControlChange {
            channel: 0,
            controller,
            value,
        }
    }

    pub fn pitch_bend(value: i16) -> Self {
        Self::PitchBend { channel: 0, value }
    }
}

/// An event positioned inside the current block.
///
/// `time` is a fractional sample offset from the first sample of the block.
/// Events in a block are non-decreasing in `time`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedEvent {
    pub time: f64,
    pub event: MidiEvent,
}

impl TimedEvent {
    pub fn new(time: f64, event: MidiEvent) -> Self {
        Self { time, event }
    }
}
