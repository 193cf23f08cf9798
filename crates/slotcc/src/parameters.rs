//! Automation parameters, one per slot.
//!
//! Each slot exposes a single continuous parameter in `[0.0, 1.0]`. The host
//! sees it under a stable ID derived from the key `"slot1"` .. `"slot16"`, so
//! automation survives renames and plugin updates. The display name follows
//! the slot name.
//!
//! Values are shown as the CC value they produce (`0` .. `127`).

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use slotcc_core::{
    fnv1a_32, ParameterFlags, ParameterId, ParameterInfo, ParameterStore, ParameterValue,
    MAX_DATA_VALUE,
};

use crate::slot::{default_slot_name, parse_leading_int, NUM_SLOTS};

/// Stable string keys of the slot parameters.
pub const SLOT_PARAMETER_KEYS: [&str; NUM_SLOTS] = [
    "slot1", "slot2", "slot3", "slot4", "slot5", "slot6", "slot7", "slot8", "slot9", "slot10",
    "slot11", "slot12", "slot13", "slot14", "slot15", "slot16",
];

/// Host-facing IDs of the slot parameters, hashed from [`SLOT_PARAMETER_KEYS`].
pub const SLOT_PARAMETER_IDS: [ParameterId; NUM_SLOTS] = {
    let mut ids = [0; NUM_SLOTS];
    let mut i = 0;
    while i < NUM_SLOTS {
        ids[i] = fnv1a_32(SLOT_PARAMETER_KEYS[i]);
        i += 1;
    }
    ids
};

/// Convert a normalized value to the 7-bit CC value it produces.
///
/// Rounds half away from zero, so `0.5` maps to `64`. Out-of-range input is
/// clamped and NaN reads as 0.
#[inline]
pub fn to_cc_value(normalized: ParameterValue) -> u8 {
    let normalized = if normalized.is_nan() {
        0.0
    } else {
        normalized.clamp(0.0, 1.0)
    };
    (normalized * MAX_DATA_VALUE as f64).round() as u8
}

/// Display text for a normalized value: the CC value as a decimal integer.
pub fn value_to_text(normalized: ParameterValue) -> String {
    to_cc_value(normalized).to_string()
}

/// Normalized value for display text.
///
/// The leading integer is clamped to `0..=127` and divided by 127. Text with
/// no leading integer reads as 0.
pub fn text_to_value(text: &str) -> ParameterValue {
    let cc_value = parse_leading_int(text).clamp(0, MAX_DATA_VALUE as i64);
    cc_value as f64 / MAX_DATA_VALUE as f64
}

#[inline]
fn sanitize(value: ParameterValue) -> ParameterValue {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

// =============================================================================
// SlotParameter
// =============================================================================

/// One slot's automatable value.
///
/// The value is an `f64` stored as bits in an `AtomicU64`, readable from the
/// audio thread without locking.
pub struct SlotParameter {
    id: ParameterId,
    key: &'static str,
    value: AtomicU64,
    name: RwLock<String>,
}

impl SlotParameter {
    fn new(index: usize) -> Self {
        Self {
            id: SLOT_PARAMETER_IDS[index],
            key: SLOT_PARAMETER_KEYS[index],
            value: AtomicU64::new(0.0f64.to_bits()),
            name: RwLock::new(default_slot_name(index)),
        }
    }

    /// Host-facing parameter ID.
    #[inline]
    pub fn id(&self) -> ParameterId {
        self.id
    }

    /// Stable string key (`"slot1"` .. `"slot16"`).
    #[inline]
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Current normalized value.
    #[inline]
    pub fn get(&self) -> ParameterValue {
        f64::from_bits(self.value.load(Ordering::Relaxed))
    }

    /// Set the normalized value, clamped to `[0.0, 1.0]`.
    #[inline]
    pub fn set(&self, value: ParameterValue) {
        self.value
            .store(sanitize(value).to_bits(), Ordering::Relaxed);
    }

    /// Current display name.
    pub fn name(&self) -> String {
        match self.name.read() {
            Ok(name) => name.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub(crate) fn set_name(&self, name: &str) {
        let mut current = self.name.write().unwrap_or_else(|p| p.into_inner());
        current.clear();
        current.push_str(name);
    }

    /// Metadata snapshot for the host.
    pub fn info(&self) -> ParameterInfo {
        ParameterInfo::new(self.id, self.name())
            .with_default(0.0)
            .with_flags(ParameterFlags::default())
    }
}

impl std::fmt::Debug for SlotParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlotParameter")
            .field("key", &self.key)
            .field("value", &self.get())
            .field("name", &self.name())
            .finish()
    }
}

// =============================================================================
// SlotParameters
// =============================================================================

/// The full set of slot parameters, exposed to the host in slot order.
#[derive(Debug)]
pub struct SlotParameters {
    slots: [SlotParameter; NUM_SLOTS],
}

impl SlotParameters {
    /// Create all parameters at value 0 with default names.
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(SlotParameter::new),
        }
    }

    /// Parameter of the given slot.
    ///
    /// # Panics
    ///
    /// Panics if `index >= NUM_SLOTS`.
    #[inline]
    pub fn slot(&self, index: usize) -> &SlotParameter {
        assert!(
            index < NUM_SLOTS,
            "slot index {} out of range (0..{})",
            index,
            NUM_SLOTS
        );
        &self.slots[index]
    }

    /// Slot index for a host parameter ID.
    pub fn index_of(&self, id: ParameterId) -> Option<usize> {
        SLOT_PARAMETER_IDS.iter().position(|&slot_id| slot_id == id)
    }

    fn by_id(&self, id: ParameterId) -> Option<&SlotParameter> {
        self.index_of(id).map(|index| &self.slots[index])
    }

    /// Iterate over the parameters in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &SlotParameter> {
        self.slots.iter()
    }
}

impl Default for SlotParameters {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterStore for SlotParameters {
    fn count(&self) -> usize {
        NUM_SLOTS
    }

    fn info(&self, index: usize) -> Option<ParameterInfo> {
        self.slots.get(index).map(SlotParameter::info)
    }

    fn get_normalized(&self, id: ParameterId) -> ParameterValue {
        self.by_id(id).map(SlotParameter::get).unwrap_or(0.0)
    }

    fn set_normalized(&self, id: ParameterId, value: ParameterValue) {
        if let Some(parameter) = self.by_id(id) {
            parameter.set(value);
        }
    }

    fn normalized_to_string(&self, _id: ParameterId, normalized: ParameterValue) -> String {
        value_to_text(normalized)
    }

    fn string_to_normalized(&self, id: ParameterId, string: &str) -> Option<ParameterValue> {
        self.by_id(id).map(|_| text_to_value(string))
    }
}
