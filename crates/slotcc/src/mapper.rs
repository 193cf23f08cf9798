//! Real-time CC mapper.
//!
//! Once per block, every active slot's parameter value is quantized to a
//! 7-bit CC value. A control change is emitted only when that value differs
//! from the last one the slot sent, so a static parameter produces no
//! traffic.
//!
//! The last-sent cache is atomic because the control thread invalidates it
//! (preset apply, reset, state restore) while the audio thread owns the
//! read-compare-write cycle.

use std::sync::atomic::{AtomicI32, Ordering};

use slotcc_core::{MidiBuffer, MidiEvent};

use crate::activity::ActivityFlags;
use crate::parameters::{to_cc_value, SlotParameters};
use crate::slot::{SlotStore, NUM_SLOTS};

/// Cache value meaning "nothing sent since the last invalidation".
const NOT_SENT: i32 = -1;

/// Emits CC messages for slots whose quantized value changed.
#[derive(Debug)]
pub struct CcMapper {
    last_sent: [AtomicI32; NUM_SLOTS],
}

impl CcMapper {
    /// A mapper with an empty cache: the first block emits every active slot.
    pub fn new() -> Self {
        Self {
            last_sent: std::array::from_fn(|_| AtomicI32::new(NOT_SENT)),
        }
    }

    /// Forget every last-sent value so each active slot re-emits on the next
    /// block.
    pub fn invalidate_all(&self) {
        for last in &self.last_sent {
            last.store(NOT_SENT, Ordering::Relaxed);
        }
    }

    /// Last CC value sent by a slot, if any since the last invalidation.
    pub fn last_sent(&self, index: usize) -> Option<u8> {
        let value = self.last_sent[index].load(Ordering::Relaxed);
        (value != NOT_SENT).then_some(value as u8)
    }

    /// Map one block.
    ///
    /// Emitted events are placed at sample offset 0, after any events already
    /// in `output` at that offset, in slot order. If `output` is full the
    /// event is dropped and the slot's cache is left untouched so it retries
    /// on the next block.
    ///
    /// Returns the number of events emitted. Real-time safe.
    pub fn map_block(
        &self,
        slots: &SlotStore,
        parameters: &SlotParameters,
        activity: &ActivityFlags,
        output: &mut MidiBuffer,
    ) -> usize {
        let mut emitted = 0;

        for index in 0..NUM_SLOTS {
            let Some(route) = slots.route(index) else {
                continue;
            };

            let value = to_cc_value(parameters.slot(index).get());
            let last = &self.last_sent[index];
            if last.load(Ordering::Relaxed) == value as i32 {
                continue;
            }

            let event = MidiEvent::control_change(0, route.channel, route.controller, value);
            if output.insert_at(event) {
                last.store(value as i32, Ordering::Relaxed);
                activity.set(index);
                emitted += 1;
            }
        }

        emitted
    }
}

impl Default for CcMapper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotcc_core::{ControlChange, MAX_MIDI_EVENTS};

    struct Fixture {
        slots: SlotStore,
        parameters: SlotParameters,
        activity: ActivityFlags,
        mapper: CcMapper,
        output: MidiBuffer,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                slots: SlotStore::new(),
                parameters: SlotParameters::new(),
                activity: ActivityFlags::new(),
                mapper: CcMapper::new(),
                output: MidiBuffer::new(),
            }
        }

        fn run(&mut self) -> Vec<ControlChange> {
            self.output.clear();
            self.mapper.map_block(
                &self.slots,
                &self.parameters,
                &self.activity,
                &mut self.output,
            );
            self.output
                .iter()
                .filter_map(|e| e.as_control_change().copied())
                .collect()
        }
    }

    fn cc(channel: u8, controller: u8, value: u8) -> ControlChange {
        ControlChange {
            channel,
            controller,
            value,
        }
    }

    #[test]
    fn test_emits_only_on_change() {
        let mut f = Fixture::new();
        f.slots.set_routing(0, 74, 1, true);
        f.parameters.slot(0).set(0.5);

        assert_eq!(f.run(), vec![cc(0, 74, 64)]);
        assert!(f.activity.poll_and_clear(0));

        // Unchanged value: nothing
        assert!(f.run().is_empty());
        assert!(!f.activity.poll_and_clear(0));

        f.parameters.slot(0).set(1.0);
        assert_eq!(f.run(), vec![cc(0, 74, 127)]);
        assert_eq!(f.mapper.last_sent(0), Some(127));
    }

    #[test]
    fn test_quantization_collision_is_silent() {
        let mut f = Fixture::new();
        f.slots.set_routing(0, 74, 1, true);
        f.parameters.slot(0).set(0.5);
        assert_eq!(f.run().len(), 1);

        // 0.503 * 127 = 63.88 rounds to the same 64
        f.parameters.slot(0).set(0.503);
        assert!(f.run().is_empty());

        // 0.51 * 127 = 64.77 rounds to 65
        f.parameters.slot(0).set(0.51);
        assert_eq!(f.run(), vec![cc(0, 74, 65)]);
    }

    #[test]
    fn test_channel_sixteen_is_wire_fifteen() {
        let mut f = Fixture::new();
        f.slots.set_routing(0, 1, 16, true);
        f.parameters.slot(0).set(1.0);

        let events = f.run();
        assert_eq!(events, vec![cc(15, 1, 127)]);
        assert_eq!(events[0].to_bytes(), [0xBF, 1, 127]);
    }

    #[test]
    fn test_disabled_or_unassigned_slots_are_silent() {
        let mut f = Fixture::new();
        // Slot 0 enabled without CC, slot 1 has CC but is disabled
        f.slots.set_cc_number(1, 10);
        f.parameters.slot(0).set(1.0);
        f.parameters.slot(1).set(1.0);

        assert!(f.run().is_empty());
        assert!(!f.activity.poll_and_clear(0));
        assert!(!f.activity.poll_and_clear(1));
        assert_eq!(f.mapper.last_sent(1), None);
    }

    #[test]
    fn test_first_block_emits_zero_value() {
        let mut f = Fixture::new();
        f.slots.set_routing(0, 7, 1, true);
        assert_eq!(f.run(), vec![cc(0, 7, 0)]);
    }

    #[test]
    fn test_invalidate_reemits() {
        let mut f = Fixture::new();
        f.slots.set_routing(0, 7, 1, true);
        f.parameters.slot(0).set(0.25);
        assert_eq!(f.run().len(), 1);
        assert!(f.run().is_empty());

        f.mapper.invalidate_all();
        assert_eq!(f.mapper.last_sent(0), None);
        assert_eq!(f.run(), vec![cc(0, 7, 32)]);
    }

    #[test]
    fn test_slot_order_and_duplicate_targets() {
        let mut f = Fixture::new();
        // Two slots on the same channel/CC both emit, in slot order
        f.slots.set_routing(2, 20, 3, true);
        f.slots.set_routing(9, 20, 3, true);
        f.parameters.slot(2).set(0.0);
        f.parameters.slot(9).set(1.0);

        assert_eq!(f.run(), vec![cc(2, 20, 0), cc(2, 20, 127)]);
    }

    #[test]
    fn test_events_follow_existing_offset_zero_events() {
        let mut f = Fixture::new();
        f.slots.set_routing(0, 1, 1, true);
        f.parameters.slot(0).set(1.0);

        f.output.clear();
        f.output.push(MidiEvent::note_on(0, 0, 60, 100));
        f.output.push(MidiEvent::note_off(32, 0, 60, 0));
        f.mapper
            .map_block(&f.slots, &f.parameters, &f.activity, &mut f.output);

        let events = f.output.as_slice();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0], MidiEvent::note_on(0, 0, 60, 100));
        assert_eq!(events[1], MidiEvent::control_change(0, 0, 1, 127));
        assert_eq!(events[2], MidiEvent::note_off(32, 0, 60, 0));
    }

    #[test]
    fn test_full_buffer_retries_next_block() {
        let mut f = Fixture::new();
        f.slots.set_routing(0, 1, 1, true);
        f.parameters.slot(0).set(1.0);

        f.output.clear();
        for _ in 0..MAX_MIDI_EVENTS {
            f.output.push(MidiEvent::note_on(0, 0, 60, 100));
        }
        let emitted = f
            .mapper
            .map_block(&f.slots, &f.parameters, &f.activity, &mut f.output);
        assert_eq!(emitted, 0);
        assert!(f.output.has_overflowed());
        assert_eq!(f.mapper.last_sent(0), None);

        assert_eq!(f.run(), vec![cc(0, 1, 127)]);
    }

    #[test]
    fn test_concurrent_invalidate_and_poll() {
        let slots = SlotStore::new();
        let parameters = SlotParameters::new();
        let activity = ActivityFlags::new();
        let mapper = CcMapper::new();

        // Slot i sends CC i, so events map back to their slot
        for i in 0..NUM_SLOTS {
            slots.set_routing(i, i as i32, 1, true);
            parameters.slot(i).set(i as f64 / 15.0);
        }

        std::thread::scope(|s| {
            s.spawn(|| {
                let mut output = MidiBuffer::new();
                for _ in 0..2000 {
                    output.clear();
                    let emitted = mapper.map_block(&slots, &parameters, &activity, &mut output);
                    assert!(emitted <= NUM_SLOTS);
                    assert_eq!(output.len(), emitted);
                    for event in output.iter() {
                        let cc = event.as_control_change().unwrap();
                        let slot = cc.controller as usize;
                        assert_eq!(cc.value, to_cc_value(parameters.slot(slot).get()));
                    }
                }
            });
            s.spawn(|| {
                for _ in 0..2000 {
                    mapper.invalidate_all();
                    for i in 0..NUM_SLOTS {
                        activity.poll_and_clear(i);
                    }
                }
            });
        });

        // The cache holds either nothing or the value actually sent
        for i in 0..NUM_SLOTS {
            if let Some(value) = mapper.last_sent(i) {
                assert_eq!(value, to_cc_value(parameters.slot(i).get()));
            }
        }

        mapper.invalidate_all();
        let mut output = MidiBuffer::new();
        assert_eq!(
            mapper.map_block(&slots, &parameters, &activity, &mut output),
            NUM_SLOTS
        );
        assert!(activity.poll_all().iter().all(|&flag| flag));
    }
}
