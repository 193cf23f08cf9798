//! # slotcc-core
//!
//! Core plugin abstractions for SlotCC.
//!
//! This crate provides format-agnostic traits and types that define the
//! interface between a plugin and the host wrapper driving it. It has no
//! external dependencies.
//!
//! ## Main Traits
//!
//! - [`Plugin`] / [`AudioProcessor`] - Two-phase plugin lifecycle
//! - [`ParameterStore`] - Host-facing parameter collection
//! - [`HostNotifier`] - Plugin-to-host change notifications
//!
//! ## Types
//!
//! - [`Buffer`] - Main audio I/O buffer
//! - [`MidiEvent`] / [`MidiBuffer`] - MIDI events and per-block event storage
//! - [`ParameterInfo`] - Parameter metadata
//! - [`PluginConfig`] - Plugin metadata
//! - [`PluginError`] - Error types

pub mod buffer;
pub mod config;
pub mod error;
pub mod host;
pub mod midi;
pub mod parameter_info;
pub mod parameter_store;
pub mod plugin;
pub mod process_context;
pub mod types;

// Re-exports for convenience
pub use buffer::Buffer;
pub use config::PluginConfig;
pub use error::{PluginError, PluginResult};
pub use host::{HostNotifier, NoopHost};
pub use midi::{
    ChannelPressure, ControlChange, MidiBuffer, MidiChannel, MidiEvent, MidiEventKind, MidiNote,
    NoteOff, NoteOn, PitchBend, PolyPressure, ProgramChange, MAX_DATA_VALUE, MAX_MIDI_EVENTS,
};
pub use parameter_info::{ParameterFlags, ParameterInfo};
pub use parameter_store::ParameterStore;
pub use plugin::{AudioProcessor, AudioSetup, HasParameters, Plugin, ProcessorConfig};
pub use process_context::ProcessContext;
pub use types::{ParameterId, ParameterValue, MAX_CHANNELS};
pub use slotcc_utils::fnv1a_32;
