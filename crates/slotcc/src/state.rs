//! Persisted plugin state.
//!
//! The host stores an opaque blob per plugin instance. We write it as JSON:
//!
//! ```json
//! {
//!   "slots": [
//!     { "index": 0, "ccNumber": 74, "channel": 1, "enabled": true,
//!       "name": "Cutoff", "value": 0.5 }
//!   ],
//!   "userPreset": "",
//!   "currentPresetManufacturer": "Korg",
//!   "currentPresetName": "Korg Minilogue",
//!   "isCurrentPresetUser": false
//! }
//! ```
//!
//! Reading is lenient. Missing fields take their documented defaults, a slot
//! record that fails to parse is skipped on its own, and records with an
//! index outside `0..16` are ignored.

use serde::{Deserialize, Deserializer, Serialize};

use crate::parameters::SlotParameters;
use crate::preset::PresetTag;
use crate::slot::{
    default_slot_name, sanitize_cc_number, sanitize_channel, SlotConfig, SlotStore, CC_UNSET,
    MIN_CHANNEL, NUM_SLOTS,
};

fn missing_index() -> i64 {
    -1
}

fn unset_cc() -> i32 {
    CC_UNSET
}

fn first_channel() -> i32 {
    MIN_CHANNEL as i32
}

/// One slot as written to state blobs and user preset files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotRecord {
    #[serde(default = "missing_index")]
    pub index: i64,
    #[serde(default = "unset_cc")]
    pub cc_number: i32,
    #[serde(default = "first_channel")]
    pub channel: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub value: f64,
}

/// A record resolved against its defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSlot {
    pub index: usize,
    pub config: SlotConfig,
    pub value: f64,
}

impl SlotRecord {
    /// Record for a slot's current configuration and parameter value.
    pub fn capture(index: usize, config: &SlotConfig, value: f64) -> Self {
        Self {
            index: index as i64,
            cc_number: config.cc_number,
            channel: config.midi_channel as i32,
            enabled: Some(config.enabled),
            name: Some(config.name.clone()),
            value,
        }
    }

    /// Apply defaults and sanitize.
    ///
    /// Returns `None` when the index does not address a slot. A missing
    /// `enabled` means "enabled only for slot 0", a missing name means the
    /// default slot name.
    pub fn resolve(&self) -> Option<ResolvedSlot> {
        let index = usize::try_from(self.index)
            .ok()
            .filter(|&i| i < NUM_SLOTS)?;

        let value = if self.value.is_finite() {
            self.value.clamp(0.0, 1.0)
        } else {
            0.0
        };

        Some(ResolvedSlot {
            index,
            config: SlotConfig {
                cc_number: sanitize_cc_number(self.cc_number),
                midi_channel: sanitize_channel(self.channel),
                enabled: self.enabled.unwrap_or(index == 0),
                name: self
                    .name
                    .clone()
                    .unwrap_or_else(|| default_slot_name(index)),
            },
            value,
        })
    }
}

/// Records for all slots, in slot order.
pub fn capture_slots(slots: &SlotStore, parameters: &SlotParameters) -> Vec<SlotRecord> {
    (0..NUM_SLOTS)
        .map(|i| SlotRecord::capture(i, &slots.get(i), parameters.slot(i).get()))
        .collect()
}

/// Deserialize a record list, dropping entries that fail to parse.
pub(crate) fn lenient_records<'de, D>(deserializer: D) -> Result<Vec<SlotRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(values
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<SlotRecord>(value) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("Skipping malformed slot record: {}", e);
                None
            }
        })
        .collect())
}

/// Top-level persisted state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PluginState {
    #[serde(deserialize_with = "lenient_records")]
    pub slots: Vec<SlotRecord>,
    /// Last saved or loaded user preset, serialized, or empty.
    pub user_preset: String,
    pub current_preset_manufacturer: String,
    pub current_preset_name: String,
    pub is_current_preset_user: bool,
}

impl PluginState {
    /// Parse a state blob.
    pub fn from_bytes(data: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(data)
    }

    /// Serialize to a state blob.
    pub fn to_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    /// The stored preset tag, or `None` when no preset was loaded.
    pub fn preset_tag(&self) -> Option<PresetTag> {
        if self.current_preset_manufacturer.is_empty() && self.current_preset_name.is_empty() {
            return None;
        }
        Some(PresetTag {
            manufacturer: self.current_preset_manufacturer.clone(),
            name: self.current_preset_name.clone(),
            is_user: self.is_current_preset_user,
        })
    }

    pub fn set_preset_tag(&mut self, tag: Option<&PresetTag>) {
        match tag {
            Some(tag) => {
                self.current_preset_manufacturer = tag.manufacturer.clone();
                self.current_preset_name = tag.name.clone();
                self.is_current_preset_user = tag.is_user;
            }
            None => {
                self.current_preset_manufacturer.clear();
                self.current_preset_name.clear();
                self.is_current_preset_user = false;
            }
        }
    }
}
