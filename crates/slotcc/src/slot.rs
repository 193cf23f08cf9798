//! Slot state store.
//!
//! A slot is one mapping from an automatable parameter to an outgoing CC
//! number on a MIDI channel. The store holds exactly [`NUM_SLOTS`] of them
//! for the lifetime of the plugin.
//!
//! # Threading
//!
//! Routing fields (CC number, channel, enabled) are written by the control
//! thread and read by the audio thread every block, so each one is an atomic.
//! `enabled` is stored last with `Release` and loaded first with `Acquire`:
//! a block that sees a slot switch on also sees the routing written before
//! it. Routing changes on an already-enabled slot may be observed a block
//! late, which is acceptable for a CC stream.
//!
//! The display name is never read by the audio thread and sits behind a
//! mutex.
//!
//! Out-of-range slot indices are programming errors and panic.

use std::sync::atomic::{AtomicBool, AtomicI32, AtomicU8, Ordering};
use std::sync::{Mutex, MutexGuard};

use slotcc_core::MidiChannel;

/// Number of slots.
pub const NUM_SLOTS: usize = 16;

/// CC number meaning "no controller assigned".
pub const CC_UNSET: i32 = -1;

/// Highest valid CC number.
pub const MAX_CC_NUMBER: i32 = 127;

/// Lowest and highest user-facing MIDI channel.
pub const MIN_CHANNEL: u8 = 1;
pub const MAX_CHANNEL: u8 = 16;

/// Default display name for a slot.
pub fn default_slot_name(index: usize) -> String {
    format!("Slot {}", index + 1)
}

/// Clamp a CC number into the valid domain: `-1` or `0..=127`.
///
/// Anything negative collapses to [`CC_UNSET`].
#[inline]
pub fn sanitize_cc_number(cc_number: i32) -> i32 {
    if cc_number < 0 {
        CC_UNSET
    } else {
        cc_number.min(MAX_CC_NUMBER)
    }
}

/// Clamp a user-facing MIDI channel into `1..=16`.
#[inline]
pub fn sanitize_channel(channel: i32) -> u8 {
    channel.clamp(MIN_CHANNEL as i32, MAX_CHANNEL as i32) as u8
}

/// Parse the text of a CC number field.
///
/// Empty (or whitespace-only) text clears the assignment. Otherwise the
/// leading integer is taken, anything after it ignored, and the result
/// clamped to `0..=127`. Text without a leading integer reads as 0.
///
/// ```
/// use slotcc::slot::parse_cc_text;
///
/// assert_eq!(parse_cc_text(""), -1);
/// assert_eq!(parse_cc_text("74"), 74);
/// assert_eq!(parse_cc_text("200"), 127);
/// ```
pub fn parse_cc_text(text: &str) -> i32 {
    let text = text.trim();
    if text.is_empty() {
        return CC_UNSET;
    }
    parse_leading_int(text).clamp(0, MAX_CC_NUMBER as i64) as i32
}

/// Leading signed integer of `text`, or 0 when there is none.
///
/// Saturates instead of overflowing on very long digit runs.
pub(crate) fn parse_leading_int(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value.saturating_mul(10).saturating_add((b - b'0') as i64);
    }
    if negative {
        -value
    } else {
        value
    }
}

// =============================================================================
// SlotConfig
// =============================================================================

/// Snapshot of one slot's configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotConfig {
    /// CC number, [`CC_UNSET`] or `0..=127`.
    pub cc_number: i32,
    /// MIDI channel, `1..=16`.
    pub midi_channel: u8,
    /// Whether the slot produces output.
    pub enabled: bool,
    /// Display label.
    pub name: String,
}

impl SlotConfig {
    /// The configuration a slot starts with: slot 0 enabled, the rest
    /// disabled, no CC assigned, channel 1.
    pub fn initial(index: usize) -> Self {
        Self {
            cc_number: CC_UNSET,
            midi_channel: MIN_CHANNEL,
            enabled: index == 0,
            name: default_slot_name(index),
        }
    }

    /// Whether this slot emits CC messages.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.enabled && self.cc_number != CC_UNSET
    }
}

// =============================================================================
// SlotStore
// =============================================================================

/// Where an active slot sends its CC messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRoute {
    /// Zero-based MIDI channel (0-15).
    pub channel: MidiChannel,
    /// Controller number (0-127).
    pub controller: u8,
}

struct SlotCell {
    cc_number: AtomicI32,
    midi_channel: AtomicU8,
    enabled: AtomicBool,
    name: Mutex<String>,
}

impl SlotCell {
    fn new(config: SlotConfig) -> Self {
        Self {
            cc_number: AtomicI32::new(config.cc_number),
            midi_channel: AtomicU8::new(config.midi_channel),
            enabled: AtomicBool::new(config.enabled),
            name: Mutex::new(config.name),
        }
    }

    fn name(&self) -> MutexGuard<'_, String> {
        // A panic while holding the lock cannot leave a String invalid.
        self.name.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Fixed array of slot configurations shared by the audio and control
/// threads.
pub struct SlotStore {
    cells: [SlotCell; NUM_SLOTS],
}

impl SlotStore {
    /// Create a store with every slot in its [initial](SlotConfig::initial)
    /// configuration.
    pub fn new() -> Self {
        Self {
            cells: std::array::from_fn(|i| SlotCell::new(SlotConfig::initial(i))),
        }
    }

    #[inline]
    fn cell(&self, index: usize) -> &SlotCell {
        assert!(
            index < NUM_SLOTS,
            "slot index {} out of range (0..{})",
            index,
            NUM_SLOTS
        );
        &self.cells[index]
    }

    /// Snapshot of a slot's configuration.
    pub fn get(&self, index: usize) -> SlotConfig {
        let cell = self.cell(index);
        SlotConfig {
            cc_number: cell.cc_number.load(Ordering::Relaxed),
            midi_channel: cell.midi_channel.load(Ordering::Relaxed),
            enabled: cell.enabled.load(Ordering::Acquire),
            name: cell.name().clone(),
        }
    }

    /// Write routing fields of a slot (CC number, channel, enabled).
    ///
    /// Values are sanitized into their valid domains. The name is left alone;
    /// renames go through [`SlotStore::set_name`] so the caller can keep the
    /// slot parameter in sync.
    pub fn set_routing(&self, index: usize, cc_number: i32, midi_channel: i32, enabled: bool) {
        let cell = self.cell(index);
        cell.cc_number
            .store(sanitize_cc_number(cc_number), Ordering::Relaxed);
        cell.midi_channel
            .store(sanitize_channel(midi_channel), Ordering::Relaxed);
        cell.enabled.store(enabled, Ordering::Release);
    }

    /// Set the CC number (sanitized to `-1` or `0..=127`).
    pub fn set_cc_number(&self, index: usize, cc_number: i32) {
        self.cell(index)
            .cc_number
            .store(sanitize_cc_number(cc_number), Ordering::Release);
    }

    /// Set the MIDI channel (clamped to `1..=16`).
    pub fn set_midi_channel(&self, index: usize, channel: i32) {
        self.cell(index)
            .midi_channel
            .store(sanitize_channel(channel), Ordering::Release);
    }

    /// Enable or disable a slot.
    pub fn set_enabled(&self, index: usize, enabled: bool) {
        self.cell(index).enabled.store(enabled, Ordering::Release);
    }

    /// Current display name.
    pub fn name(&self, index: usize) -> String {
        self.cell(index).name().clone()
    }

    /// Replace the display name of a slot.
    pub fn set_name(&self, index: usize, name: &str) {
        let mut current = self.cell(index).name();
        current.clear();
        current.push_str(name);
    }

    /// Routing for the audio thread.
    ///
    /// Returns `None` when the slot is disabled or has no CC assigned. Values
    /// that somehow escaped sanitizing are clamped rather than rejected.
    /// Lock-free.
    #[inline]
    pub fn route(&self, index: usize) -> Option<SlotRoute> {
        let cell = self.cell(index);
        if !cell.enabled.load(Ordering::Acquire) {
            return None;
        }
        let cc_number = cell.cc_number.load(Ordering::Relaxed);
        if cc_number < 0 {
            return None;
        }
        let channel = cell
            .midi_channel
            .load(Ordering::Relaxed)
            .clamp(MIN_CHANNEL, MAX_CHANNEL);

        Some(SlotRoute {
            channel: channel - 1,
            controller: cc_number.min(MAX_CC_NUMBER) as u8,
        })
    }
}

impl Default for SlotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SlotStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries((0..NUM_SLOTS).map(|i| self.get(i)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_configuration() {
        let store = SlotStore::new();

        let first = store.get(0);
        assert!(first.enabled);
        assert_eq!(first.cc_number, CC_UNSET);
        assert_eq!(first.midi_channel, 1);
        assert_eq!(first.name, "Slot 1");

        for i in 1..NUM_SLOTS {
            let slot = store.get(i);
            assert!(!slot.enabled);
            assert_eq!(slot.cc_number, CC_UNSET);
            assert_eq!(slot.name, format!("Slot {}", i + 1));
        }
    }

    #[test]
    fn test_route_requires_enabled_and_cc() {
        let store = SlotStore::new();

        // Enabled but no CC
        assert_eq!(store.route(0), None);

        store.set_cc_number(0, 74);
        assert_eq!(
            store.route(0),
            Some(SlotRoute {
                channel: 0,
                controller: 74
            })
        );

        store.set_enabled(0, false);
        assert_eq!(store.route(0), None);

        // CC but disabled
        store.set_cc_number(3, 10);
        assert_eq!(store.route(3), None);
    }

    #[test]
    fn test_route_channel_is_zero_based() {
        let store = SlotStore::new();
        store.set_routing(2, 1, 16, true);
        assert_eq!(
            store.route(2),
            Some(SlotRoute {
                channel: 15,
                controller: 1
            })
        );
    }

    #[test]
    fn test_values_are_sanitized() {
        let store = SlotStore::new();
        store.set_routing(5, 300, 0, true);
        let slot = store.get(5);
        assert_eq!(slot.cc_number, 127);
        assert_eq!(slot.midi_channel, 1);

        store.set_routing(5, -42, 99, true);
        let slot = store.get(5);
        assert_eq!(slot.cc_number, CC_UNSET);
        assert_eq!(slot.midi_channel, 16);
    }

    #[test]
    fn test_set_name() {
        let store = SlotStore::new();
        store.set_name(4, "Cutoff");
        assert_eq!(store.name(4), "Cutoff");
        assert_eq!(store.get(4).name, "Cutoff");
    }

    #[test]
    #[should_panic(expected = "slot index 16 out of range")]
    fn test_out_of_range_index_panics() {
        let store = SlotStore::new();
        let _ = store.get(NUM_SLOTS);
    }

    #[test]
    fn test_parse_cc_text() {
        assert_eq!(parse_cc_text(""), CC_UNSET);
        assert_eq!(parse_cc_text("   "), CC_UNSET);
        assert_eq!(parse_cc_text("0"), 0);
        assert_eq!(parse_cc_text("74"), 74);
        assert_eq!(parse_cc_text("200"), 127);
        assert_eq!(parse_cc_text("12abc"), 12);
        assert_eq!(parse_cc_text("abc"), 0);
        assert_eq!(parse_cc_text("-5"), 0);
        assert_eq!(parse_cc_text("99999999999999999999999"), 127);
    }

    #[test]
    fn test_slot_config_is_active() {
        let mut config = SlotConfig::initial(0);
        assert!(!config.is_active());
        config.cc_number = 7;
        assert!(config.is_active());
        config.enabled = false;
        assert!(!config.is_active());
    }
}
