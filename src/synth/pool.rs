use crate::synth::{state::EngineState, voice::Voice};

/*
Voice Pool
==========

A fixed number of voice slots, allocated once when the engine is built. The
slots are split into two partitions:

    [0, active)         sounding or releasing voices
    [active, capacity)  free slots, always in their reset form

    ┌────┬────┬────┬────┬────┬────┐
    │ 60 │ 64 │ 67 │ -- │ -- │ -- │     active = 3
    └────┴────┴────┴────┴────┴────┘

Allocation takes slot `active` and bumps the count. Removal swaps the last
active voice into the hole and shrinks the count, so it is O(1) and the
active voices always stay contiguous:

    retire_at(0):
    ┌────┬────┬────┬────┐         ┌────┬────┬────┬────┐
    │ 60 │ 64 │ 67 │ -- │   →     │ 67 │ 64 │ -- │ -- │    active = 2
    └────┴────┴────┴────┘         └────┴────┴────┴────┘

A voice changes slot but keeps its note, level and phase. Lookups are by
note, never by slot index, so nothing holds a stale index across samples.

When every slot is in use a new note is dropped. No sounding voice is ever
stolen.
*/

pub struct VoicePool {
    voices: Box<[Voice]>,
    active: usize,
}

impl VoicePool {
    pub fn new(capacity: usize) -> Self {
        let voices = (0..capacity).map(|_| Voice::new()).collect();
        Self { voices, active: 0 }
    }

    /// Slot index of the active voice playing `note`.
    pub fn find_by_note(&self, note: u8) -> Option<usize> {
        self.voices[..self.active]
            .iter()
            .position(|v| v.note() == Some(note))
    }

    /// Slot for a note-on: the voice already playing `note`, otherwise the
    /// next free slot. `None` when the pool is full.
    pub fn allocate(&mut self, note: u8) -> Option<usize> {
        if let Some(index) = self.find_by_note(note) {
            return Some(index);
        }
        if self.active < self.voices.len() {
            let index = self.active;
            self.active += 1;
            return Some(index);
        }
        None
    }

    /// Remove the active voice at `index` by moving the last active voice
    /// into its slot.
    pub fn retire_at(&mut self, index: usize) {
        debug_assert!(index < self.active);
        let last = self.active - 1;
        if index != last {
            self.voices[index] = self.voices[last];
        }
        self.voices[last].free();
        self.active = last;
    }

    /// Render one sample of every active voice and return the sum.
    ///
    /// Voices that finish on this sample are retired immediately. The voice
    /// swapped into the vacated slot has not been rendered yet, so the index
    /// stays put for it.
    #[inline]
    pub fn sum_active(&mut self, coeff: f64) -> f64 {
        let mut sum = 0.0;
        let mut i = 0;
        while i < self.active {
            match self.voices[i].render_sample(coeff) {
                Some(sample) => {
                    sum += sample;
                    i += 1;
                }
                None => self.retire_at(i),
            }
        }
        sum
    }

    /// Wrap every active phase back into [0, 2π].
    pub fn normalize_phases(&mut self) {
        for voice in self.active_mut() {
            voice.normalize_phase();
        }
    }

    /// Recompute every active voice's pitch from `state`.
    pub fn retune(&mut self, state: &EngineState) {
        for voice in self.active_mut() {
            if let Some(note) = voice.note() {
                voice.force_pitch(state.omega_for(note));
            }
        }
    }

    /// Free every slot.
    pub fn clear(&mut self) {
        for voice in self.active_mut() {
            voice.free();
        }
        self.active = 0;
    }

    pub fn voice(&self, index: usize) -> Option<&Voice> {
        self.voices[..self.active].get(index)
    }

    pub fn voice_mut(&mut self, index: usize) -> Option<&mut Voice> {
        self.voices[..self.active].get_mut(index)
    }

    /// Active voices, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Voice> {
        self.voices[..self.active].iter()
    }

    pub fn active_mut(&mut self) -> impl Iterator<Item = &mut Voice> {
        self.voices[..self.active].iter_mut()
    }

    pub fn active_count(&self) -> usize {
        self.active
    }

    pub fn capacity(&self) -> usize {
        self.voices.len()
    }

    pub fn is_full(&self) -> bool {
        self.active == self.voices.len()
    }
}
