//! MIDI event types for real-time processing.
//!
//! This module provides the MIDI 1.0 channel-voice events a MIDI effect has
//! to pass through or generate. All types are `Copy` and the [`MidiBuffer`]
//! is a fixed-size array, so nothing here allocates on the audio thread.
//!
//! Channels are zero-based (`0..=15`) on the wire types. User-facing
//! configuration uses the one-based channel numbers printed on hardware;
//! convert at the boundary with [`MidiChannel`] arithmetic, not here.

// =============================================================================
// Basic MIDI Types
// =============================================================================

/// MIDI channel (0-15).
pub type MidiChannel = u8;

/// MIDI note number (0-127, where 60 = middle C).
pub type MidiNote = u8;

/// Largest 7-bit data byte value.
pub const MAX_DATA_VALUE: u8 = 127;

/// A MIDI note-on event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteOn {
    /// MIDI channel (0-15).
    pub channel: MidiChannel,
    /// Note number (0-127).
    pub pitch: MidiNote,
    /// Velocity (0-127).
    pub velocity: u8,
}

/// A MIDI note-off event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteOff {
    /// MIDI channel (0-15).
    pub channel: MidiChannel,
    /// Note number (0-127).
    pub pitch: MidiNote,
    /// Release velocity (0-127).
    pub velocity: u8,
}

/// Polyphonic key pressure (aftertouch per note).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolyPressure {
    /// MIDI channel (0-15).
    pub channel: MidiChannel,
    /// Note number (0-127).
    pub pitch: MidiNote,
    /// Pressure amount (0-127).
    pub pressure: u8,
}

/// Control Change (CC) message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlChange {
    /// MIDI channel (0-15).
    pub channel: MidiChannel,
    /// Controller number (0-127).
    pub controller: u8,
    /// Controller value (0-127).
    pub value: u8,
}

impl ControlChange {
    /// Status nibble for control change messages.
    pub const STATUS: u8 = 0xB0;

    /// Value as a normalized float (0.0 to 1.0).
    #[inline]
    pub fn normalized(&self) -> f32 {
        self.value as f32 / MAX_DATA_VALUE as f32
    }

    /// Encode as a MIDI 1.0 message: status byte plus two data bytes.
    ///
    /// Out-of-range fields are masked to their bit width, so the output is
    /// always a well-formed message.
    #[inline]
    pub const fn to_bytes(&self) -> [u8; 3] {
        [
            Self::STATUS | (self.channel & 0x0F),
            self.controller & 0x7F,
            self.value & 0x7F,
        ]
    }
}

/// Pitch bend (14-bit, centered at 8192).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PitchBend {
    /// MIDI channel (0-15).
    pub channel: MidiChannel,
    /// Bend amount (0-16383, 8192 = center).
    pub value: u16,
}

/// Channel pressure (channel aftertouch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelPressure {
    /// MIDI channel (0-15).
    pub channel: MidiChannel,
    /// Pressure amount (0-127).
    pub pressure: u8,
}

/// Program change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramChange {
    /// MIDI channel (0-15).
    pub channel: MidiChannel,
    /// Program number (0-127).
    pub program: u8,
}

// =============================================================================
// MIDI Event Enum
// =============================================================================

/// MIDI event types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MidiEventKind {
    /// Note on event.
    NoteOn(NoteOn),
    /// Note off event.
    NoteOff(NoteOff),
    /// Polyphonic key pressure (per-note aftertouch).
    PolyPressure(PolyPressure),
    /// Control change (CC).
    ControlChange(ControlChange),
    /// Pitch bend.
    PitchBend(PitchBend),
    /// Channel pressure (channel aftertouch).
    ChannelPressure(ChannelPressure),
    /// Program change.
    ProgramChange(ProgramChange),
}

/// A sample-accurate MIDI event.
///
/// The `sample_offset` field specifies when within the current audio buffer
/// this event should be processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MidiEvent {
    /// Sample offset within the current buffer (0 = start of buffer).
    pub sample_offset: u32,
    /// The MIDI event data.
    pub event: MidiEventKind,
}

impl Default for MidiEvent {
    /// A zeroed note-off, used only to fill unused buffer storage.
    fn default() -> Self {
        Self {
            sample_offset: 0,
            event: MidiEventKind::NoteOff(NoteOff {
                channel: 0,
                pitch: 0,
                velocity: 0,
            }),
        }
    }
}

impl MidiEvent {
    /// Create a new note-on event.
    pub const fn note_on(
        sample_offset: u32,
        channel: MidiChannel,
        pitch: MidiNote,
        velocity: u8,
    ) -> Self {
        Self {
            sample_offset,
            event: MidiEventKind::NoteOn(NoteOn {
                channel,
                pitch,
                velocity,
            }),
        }
    }

    /// Create a new note-off event.
    pub const fn note_off(
        sample_offset: u32,
        channel: MidiChannel,
        pitch: MidiNote,
        velocity: u8,
    ) -> Self {
        Self {
            sample_offset,
            event: MidiEventKind::NoteOff(NoteOff {
                channel,
                pitch,
                velocity,
            }),
        }
    }

    /// Create a control change event.
    pub const fn control_change(
        sample_offset: u32,
        channel: MidiChannel,
        controller: u8,
        value: u8,
    ) -> Self {
        Self {
            sample_offset,
            event: MidiEventKind::ControlChange(ControlChange {
                channel,
                controller,
                value,
            }),
        }
    }

    /// The control change payload, if this is a CC event.
    #[inline]
    pub fn as_control_change(&self) -> Option<&ControlChange> {
        match &self.event {
            MidiEventKind::ControlChange(cc) => Some(cc),
            _ => None,
        }
    }
}

// =============================================================================
// MidiBuffer
// =============================================================================

/// Maximum number of MIDI events per buffer.
pub const MAX_MIDI_EVENTS: usize = 1024;

/// A fixed-capacity buffer of MIDI events for one processing block.
///
/// Events are kept in chronological order (by `sample_offset`). The storage
/// is allocated once at construction; `push`, `insert_at` and `clear` never
/// touch the heap.
#[derive(Debug)]
pub struct MidiBuffer {
    events: Box<[MidiEvent; MAX_MIDI_EVENTS]>,
    len: usize,
    /// Set when a push or insert fails due to buffer exhaustion
    overflowed: bool,
}

impl MidiBuffer {
    /// Create a new empty MIDI buffer.
    pub fn new() -> Self {
        Self {
            events: Box::new([MidiEvent::default(); MAX_MIDI_EVENTS]),
            len: 0,
            overflowed: false,
        }
    }

    /// Clear all events from the buffer.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
        self.overflowed = false;
    }

    /// Returns the number of events in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if any push or insert failed since the last clear.
    #[inline]
    pub fn has_overflowed(&self) -> bool {
        self.overflowed
    }

    /// Append an event at the end of the buffer.
    ///
    /// Returns `false` (and sets the overflow flag) if the buffer is full.
    #[inline]
    pub fn push(&mut self, event: MidiEvent) -> bool {
        if self.len < MAX_MIDI_EVENTS {
            self.events[self.len] = event;
            self.len += 1;
            true
        } else {
            self.overflowed = true;
            false
        }
    }

    /// Insert an event in time order without disturbing existing events.
    ///
    /// The event lands after every event with the same or an earlier
    /// `sample_offset`, so repeated inserts at one offset keep their call
    /// order and events already in the buffer are never reordered.
    ///
    /// Returns `false` (and sets the overflow flag) if the buffer is full.
    pub fn insert_at(&mut self, event: MidiEvent) -> bool {
        if self.len >= MAX_MIDI_EVENTS {
            self.overflowed = true;
            return false;
        }

        let position = self.events[..self.len]
            .iter()
            .position(|e| e.sample_offset > event.sample_offset)
            .unwrap_or(self.len);

        self.events.copy_within(position..self.len, position + 1);
        self.events[position] = event;
        self.len += 1;
        true
    }

    /// Iterate over events in the buffer.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &MidiEvent> {
        self.events[..self.len].iter()
    }

    /// Get the events as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[MidiEvent] {
        &self.events[..self.len]
    }
}

impl Default for MidiBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_change_bytes() {
        let cc = ControlChange {
            channel: 0,
            controller: 74,
            value: 64,
        };
        assert_eq!(cc.to_bytes(), [0xB0, 74, 64]);

        let cc = ControlChange {
            channel: 15,
            controller: 1,
            value: 127,
        };
        assert_eq!(cc.to_bytes(), [0xBF, 1, 127]);
    }

    #[test]
    fn test_control_change_normalized() {
        let cc = ControlChange {
            channel: 0,
            controller: 7,
            value: 127,
        };
        assert!((cc.normalized() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_push_and_overflow() {
        let mut buffer = MidiBuffer::new();
        for i in 0..MAX_MIDI_EVENTS {
            assert!(buffer.push(MidiEvent::note_on(i as u32, 0, 60, 100)));
        }
        assert!(!buffer.has_overflowed());
        assert!(!buffer.push(MidiEvent::note_on(0, 0, 60, 100)));
        assert!(buffer.has_overflowed());
        assert_eq!(buffer.len(), MAX_MIDI_EVENTS);

        buffer.clear();
        assert!(buffer.is_empty());
        assert!(!buffer.has_overflowed());
    }

    #[test]
    fn test_insert_at_keeps_existing_order() {
        let mut buffer = MidiBuffer::new();
        buffer.push(MidiEvent::note_on(0, 0, 60, 100));
        buffer.push(MidiEvent::note_off(32, 0, 60, 0));

        buffer.insert_at(MidiEvent::control_change(0, 0, 74, 10));
        buffer.insert_at(MidiEvent::control_change(0, 0, 75, 20));

        let events = buffer.as_slice();
        assert_eq!(events.len(), 4);
        assert_eq!(events[0], MidiEvent::note_on(0, 0, 60, 100));
        assert_eq!(events[1], MidiEvent::control_change(0, 0, 74, 10));
        assert_eq!(events[2], MidiEvent::control_change(0, 0, 75, 20));
        assert_eq!(events[3], MidiEvent::note_off(32, 0, 60, 0));
    }

    #[test]
    fn test_insert_at_into_empty_buffer() {
        let mut buffer = MidiBuffer::new();
        assert!(buffer.insert_at(MidiEvent::control_change(0, 3, 1, 1)));
        assert_eq!(
            buffer.as_slice()[0].as_control_change(),
            Some(&ControlChange {
                channel: 3,
                controller: 1,
                value: 1
            })
        );
    }

    #[test]
    fn test_insert_at_full_buffer_overflows() {
        let mut buffer = MidiBuffer::new();
        for _ in 0..MAX_MIDI_EVENTS {
            buffer.push(MidiEvent::note_on(8, 0, 60, 100));
        }
        assert!(!buffer.insert_at(MidiEvent::control_change(0, 0, 1, 1)));
        assert!(buffer.has_overflowed());
        assert!(buffer.as_slice()[0].as_control_change().is_none());
    }
}
