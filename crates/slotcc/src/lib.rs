//! # SlotCC
//!
//! A MIDI effect that turns 16 automatable parameters ("slots") into MIDI
//! Control Change messages.
//!
//! Each slot has a CC number, a MIDI channel, an enable switch and a name.
//! Once per block the processor quantizes every active slot's parameter to
//! `0..=127` and emits a CC only when that value changed since the slot last
//! sent. Incoming MIDI passes through untouched; audio output is silent.
//!
//! ## Threads
//!
//! - The audio thread runs [`SlotCcProcessor::process_midi`], which only
//!   touches atomics.
//! - The control thread (editor, host state calls) goes through
//!   [`SlotController`]: slot edits, presets, reset, state save and restore,
//!   activity polling at [`ACTIVITY_POLL_HZ`].
//!
//! ## Presets
//!
//! Built-in instrument templates live in [`catalog`]; user presets are JSON
//! files managed by [`PresetStore`].
//!
//! ```no_run
//! use slotcc::{Plugin, SlotCcPlugin};
//!
//! let plugin = SlotCcPlugin::default();
//! plugin
//!     .controller()
//!     .apply_builtin_preset("Korg", "Korg Minilogue")
//!     .unwrap();
//! assert!(plugin.is_midi_effect());
//! ```

pub mod activity;
pub mod bank;
pub mod catalog;
pub mod controller;
pub mod error;
pub mod mapper;
pub mod parameters;
pub mod plugin;
pub mod preset;
pub mod slot;
pub mod state;
pub mod store;

pub use activity::{ActivityFlags, ACTIVITY_POLL_HZ, ACTIVITY_POLL_INTERVAL};
pub use bank::SlotBank;
pub use controller::{SlotController, DEFAULT_USER_MANUFACTURER};
pub use error::{PresetError, PresetResult};
pub use mapper::CcMapper;
pub use parameters::{SlotParameter, SlotParameters, SLOT_PARAMETER_IDS, SLOT_PARAMETER_KEYS};
pub use plugin::{SlotCcPlugin, SlotCcProcessor, CONFIG};
pub use preset::{BuiltinPreset, CcMapping, PresetTag, SlotAssignment};
pub use slot::{parse_cc_text, SlotConfig, SlotStore, CC_UNSET, NUM_SLOTS};
pub use state::{PluginState, SlotRecord};
pub use store::{PresetStore, PresetSummary, UserPreset};

// Core framework types
pub use slotcc_core::{
    AudioProcessor, AudioSetup, Buffer, HasParameters, HostNotifier, MidiBuffer, MidiEvent,
    NoopHost, ParameterStore, Plugin, PluginConfig, PluginError, PluginResult, ProcessContext,
};
