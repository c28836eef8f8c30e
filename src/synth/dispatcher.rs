//! Sample-accurate application of a block's MIDI events.

use crate::io::{
    converter::{pedal_is_down, pitch_bend_semitones, SUSTAIN_PEDAL_CC},
    midi::{MidiEvent, TimedEvent},
};
use crate::synth::{pool::VoicePool, state::EngineState};

/// Walks the event list of one block in step with the sample loop.
pub struct EventCursor<'a> {
    events: &'a [TimedEvent],
    next: usize,
}

impl<'a> EventCursor<'a> {
    pub fn new(events: &'a [TimedEvent]) -> Self {
        Self { events, next: 0 }
    }

    /// Apply every pending event stamped at or before `sample_index`.
    ///
    /// Called before rendering sample `sample_index`, so an event at time 0
    /// already affects the first sample of the block.
    #[inline]
    pub fn dispatch_due(
        &mut self,
        sample_index: usize,
        pool: &mut VoicePool,
        state: &mut EngineState,
    ) {
        let now = sample_index as f64;
        let events = self.events;
        while let Some(timed) = events.get(self.next) {
            if timed.time > now {
                break;
            }
            apply_event(&timed.event, pool, state);
            self.next += 1;
        }
    }

    /// Apply every event not dispatched yet, whatever its timestamp.
    pub fn dispatch_remaining(&mut self, pool: &mut VoicePool, state: &mut EngineState) {
        for timed in self.remaining() {
            apply_event(&timed.event, pool, state);
        }
        self.next = self.events.len();
    }

    /// Events not yet dispatched.
    pub fn remaining(&self) -> &'a [TimedEvent] {
        &self.events[self.next..]
    }
}

/// Apply one event to the voices and engine state.
pub fn apply_event(event: &MidiEvent, pool: &mut VoicePool, state: &mut EngineState) {
    match *event {
        // Running-status convention: velocity 0 is a release.
        MidiEvent::NoteOn { key, velocity: 0, .. } | MidiEvent::NoteOff { key, .. } => {
            note_off(key, pool, state);
        }
        MidiEvent::NoteOn { key, velocity, .. } => {
            if let Some(index) = pool.allocate(key) {
                let omega = state.omega_for(key);
                if let Some(voice) = pool.voice_mut(index) {
                    voice.note_on(key, velocity, omega);
                }
            }
        }
        MidiEvent::PitchBend { value, .. } => {
            state.pitch_bend = pitch_bend_semitones(value);
            pool.retune(state);
        }
        MidiEvent::ControlChange {
            controller: SUSTAIN_PEDAL_CC,
            value,
            ..
        } => {
            let down = pedal_is_down(value);
            if down != state.pedal_down {
                state.pedal_down = down;
                if !down {
                    for voice in pool.active_mut() {
                        voice.pedal_released();
                    }
                }
            }
        }
        MidiEvent::ControlChange { .. } | MidiEvent::ProgramChange { .. } => {}
    }
}

fn note_off(key: u8, pool: &mut VoicePool, state: &EngineState) {
    if let Some(voice) = pool.find_by_note(key).and_then(|i| pool.voice_mut(i)) {
        voice.note_off(state.pedal_down);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::voice::VoiceState;

    fn setup() -> (VoicePool, EngineState) {
        (VoicePool::new(4), EngineState::new(48_000.0, 0.01))
    }

    fn voice_for(pool: &VoicePool, note: u8) -> crate::synth::voice::Voice {
        *pool.voice(pool.find_by_note(note).unwrap()).unwrap()
    }

    #[test]
    fn note_on_allocates_and_tunes() {
        let (mut pool, mut state) = setup();
        apply_event(&MidiEvent::note_on(69, 127), &mut pool, &mut state);
        let v = voice_for(&pool, 69);
        assert_eq!(v.target(), 1.0);
        assert!((v.omega() - std::f64::consts::TAU * 440.0 / 48_000.0).abs() < 1e-12);
    }

    #[test]
    fn note_off_for_missing_note_is_noop() {
        let (mut pool, mut state) = setup();
        apply_event(&MidiEvent::note_on(60, 100), &mut pool, &mut state);
        apply_event(&MidiEvent::note_off(61), &mut pool, &mut state);
        assert_eq!(pool.active_count(), 1);
        assert_eq!(voice_for(&pool, 60).state(), VoiceState::Active);
    }

    #[test]
    fn zero_velocity_note_on_releases() {
        let (mut pool, mut state) = setup();
        apply_event(&MidiEvent::note_on(60, 100), &mut pool, &mut state);
        apply_event(&MidiEvent::note_on(60, 0), &mut pool, &mut state);
        assert_eq!(voice_for(&pool, 60).state(), VoiceState::Releasing);
        assert_eq!(pool.active_count(), 1);
    }

    #[test]
    fn sustain_pedal_defers_until_release() {
        let (mut pool, mut state) = setup();
        apply_event(&MidiEvent::control_change(64, 127), &mut pool, &mut state);
        assert!(state.pedal_down);

        apply_event(&MidiEvent::note_on(60, 100), &mut pool, &mut state);
        apply_event(&MidiEvent::note_on(64, 100), &mut pool, &mut state);
        apply_event(&MidiEvent::note_off(60), &mut pool, &mut state);

        let held = voice_for(&pool, 60);
        assert_eq!(held.target(), 100.0 / 127.0);
        assert!(held.pending_release());

        // Repeated "down" values change nothing.
        apply_event(&MidiEvent::control_change(64, 100), &mut pool, &mut state);
        assert_eq!(voice_for(&pool, 60).state(), VoiceState::Active);

        apply_event(&MidiEvent::control_change(64, 0), &mut pool, &mut state);
        assert!(!state.pedal_down);
        assert_eq!(voice_for(&pool, 60).state(), VoiceState::Releasing);
        // Still held by its key.
        assert_eq!(voice_for(&pool, 64).state(), VoiceState::Active);
    }

    #[test]
    fn pedal_up_releases_restruck_key() {
        let (mut pool, mut state) = setup();
        let events = [
            TimedEvent::new(0.0, MidiEvent::control_change(64, 127)),
            TimedEvent::new(0.0, MidiEvent::note_on(60, 100)),
            TimedEvent::new(1.0, MidiEvent::note_off(60)),
            TimedEvent::new(2.0, MidiEvent::note_on(60, 100)),
            TimedEvent::new(3.0, MidiEvent::control_change(64, 0)),
        ];
        let mut cursor = EventCursor::new(&events);
        for i in 0..3 {
            cursor.dispatch_due(i, &mut pool, &mut state);
        }
        assert_eq!(voice_for(&pool, 60).target(), 100.0 / 127.0);

        cursor.dispatch_due(3, &mut pool, &mut state);
        let v = voice_for(&pool, 60);
        assert_eq!(v.target(), 0.0);
        assert!(!v.pending_release());
        assert_eq!(pool.active_count(), 1);
    }

    #[test]
    fn pitch_bend_retunes_sounding_voices() {
        let (mut pool, mut state) = setup();
        apply_event(&MidiEvent::note_on(60, 100), &mut pool, &mut state);
        apply_event(&MidiEvent::pitch_bend(8192 / 2), &mut pool, &mut state);
        assert_eq!(state.pitch_bend, 1.0);

        let expected = crate::dsp::oscillator::omega(61, 0.0, 48_000.0);
        assert!((voice_for(&pool, 60).omega() - expected).abs() < 1e-12);

        // New notes pick the bend up too.
        apply_event(&MidiEvent::note_on(70, 100), &mut pool, &mut state);
        let expected = crate::dsp::oscillator::omega(71, 0.0, 48_000.0);
        assert!((voice_for(&pool, 70).omega() - expected).abs() < 1e-12);
    }

    #[test]
    fn other_controllers_are_ignored() {
        let (mut pool, mut state) = setup();
        let before = state;
        apply_event(&MidiEvent::control_change(1, 127), &mut pool, &mut state);
        apply_event(
            &MidiEvent::ProgramChange { channel: 0, program: 3 },
            &mut pool,
            &mut state,
        );
        assert_eq!(state, before);
        assert_eq!(pool.active_count(), 0);
    }

    #[test]
    fn cursor_dispatches_by_timestamp() {
        let (mut pool, mut state) = setup();
        let events = [
            TimedEvent::new(0.0, MidiEvent::note_on(60, 100)),
            TimedEvent::new(2.5, MidiEvent::note_on(62, 100)),
            TimedEvent::new(3.0, MidiEvent::note_on(64, 100)),
        ];
        let mut cursor = EventCursor::new(&events);

        cursor.dispatch_due(0, &mut pool, &mut state);
        assert_eq!(pool.active_count(), 1);
        cursor.dispatch_due(2, &mut pool, &mut state);
        assert_eq!(pool.active_count(), 1);
        cursor.dispatch_due(3, &mut pool, &mut state);
        assert_eq!(pool.active_count(), 3);
        assert!(cursor.remaining().is_empty());
    }

    #[test]
    fn dispatch_remaining_flushes_late_events() {
        let (mut pool, mut state) = setup();
        let events = [
            TimedEvent::new(0.0, MidiEvent::note_on(60, 100)),
            TimedEvent::new(40.0, MidiEvent::note_off(60)),
            TimedEvent::new(63.5, MidiEvent::control_change(64, 127)),
        ];
        let mut cursor = EventCursor::new(&events);
        cursor.dispatch_due(15, &mut pool, &mut state);
        assert_eq!(cursor.remaining().len(), 2);

        cursor.dispatch_remaining(&mut pool, &mut state);
        assert!(cursor.remaining().is_empty());
        assert_eq!(voice_for(&pool, 60).state(), VoiceState::Releasing);
        assert!(state.pedal_down);
    }
}
