//! Core plugin trait definitions.
//!
//! This module defines the two-phase plugin lifecycle:
//!
//! - **[`Plugin`]** (unprepared state): Holds parameters and configuration,
//!   created before the host has told us the sample rate. Transforms into a
//!   processor via [`Plugin::prepare()`] when configuration arrives.
//!
//! - **[`AudioProcessor`]** (prepared state): Ready for processing. Created by
//!   [`Plugin::prepare()`], returns to the unprepared state via
//!   [`AudioProcessor::unprepare()`] when the host releases resources.
//!
//! ```text
//! Plugin::default() -> Plugin (unprepared, holds params)
//!                      |
//!                      v  Plugin::prepare(config)        (host: prepare)
//!                      |
//!                      v
//!                AudioProcessor (prepared, ready for audio)
//!                      |
//!                      v  AudioProcessor::unprepare()    (host: release)
//!                      |
//!                      v
//!                 Plugin (unprepared, params preserved)
//! ```
//!
//! The host serializes these transitions: `prepare` never runs concurrently
//! with `process`.

use crate::buffer::Buffer;
use crate::error::PluginResult;
use crate::midi::{MidiBuffer, MidiEvent};
use crate::parameter_store::ParameterStore;
use crate::process_context::ProcessContext;

// =============================================================================
// HasParameters Trait (Shared Parameter Access)
// =============================================================================

/// Trait for types that hold parameters.
///
/// Shared between [`Plugin`] and [`AudioProcessor`] so a wrapper can reach
/// the parameter store in either lifecycle state.
pub trait HasParameters: Send + 'static {
    /// The parameter collection type.
    type Parameters: ParameterStore;

    /// Returns a reference to the parameters.
    fn parameters(&self) -> &Self::Parameters;
}

// =============================================================================
// Processor Configuration Types
// =============================================================================

/// Marker trait for processor configuration types.
pub trait ProcessorConfig: Clone + Send + 'static {}

/// Standard audio setup configuration with sample rate and max buffer size.
#[derive(Clone, Debug, PartialEq)]
pub struct AudioSetup {
    /// Sample rate in Hz (e.g., 44100.0, 48000.0, 96000.0)
    pub sample_rate: f64,
    /// Maximum number of samples per process() call
    pub max_buffer_size: usize,
}
impl ProcessorConfig for AudioSetup {}

// =============================================================================
// AudioProcessor Trait
// =============================================================================

/// The prepared processor - ready for audio and MIDI processing.
///
/// # Real-Time Safety
///
/// `process` and `process_midi` are called on the audio thread and must be
/// real-time safe:
/// - No allocations
/// - No locks that another thread may hold
/// - No syscalls or blocking I/O
/// - No unbounded loops
pub trait AudioProcessor: HasParameters {
    /// The unprepared plugin type that created this processor.
    type Plugin: Plugin<Processor = Self, Parameters = Self::Parameters>;

    /// Process one block of audio.
    fn process(&mut self, buffer: &mut Buffer, context: &ProcessContext);

    /// Process one block of MIDI.
    ///
    /// `input` holds the host's incoming events for the block (sorted by
    /// `sample_offset`); `output` starts empty.
    ///
    /// The default implementation passes all events through unchanged.
    fn process_midi(&mut self, input: &[MidiEvent], output: &mut MidiBuffer) {
        for event in input {
            output.push(*event);
        }
    }

    /// Return to the unprepared plugin state (host: release resources).
    fn unprepare(self) -> Self::Plugin
    where
        Self: Sized;

    /// Tail length in samples. Default returns 0 (no tail).
    fn tail_samples(&self) -> u32 {
        0
    }

    /// Latency in samples. Default returns 0.
    fn latency_samples(&self) -> u32 {
        0
    }

    /// Save the plugin state to bytes.
    ///
    /// Default returns an empty vector.
    fn save_state(&self) -> PluginResult<Vec<u8>> {
        Ok(Vec::new())
    }

    /// Load the plugin state from bytes previously returned by `save_state`.
    ///
    /// Default does nothing.
    fn load_state(&mut self, _data: &[u8]) -> PluginResult<()> {
        Ok(())
    }
}

// =============================================================================
// Plugin Trait
// =============================================================================

/// The unprepared plugin - holds parameters before audio config is known.
pub trait Plugin: HasParameters + Default {
    /// Configuration passed to [`Plugin::prepare`].
    type Config: ProcessorConfig;

    /// The prepared processor type.
    type Processor: AudioProcessor<Plugin = Self, Parameters = Self::Parameters>;

    /// Consume the plugin and build a processor for the given configuration.
    fn prepare(self, config: Self::Config) -> Self::Processor;

    /// Whether the plugin has an event input bus.
    fn accepts_midi(&self) -> bool {
        false
    }

    /// Whether the plugin has an event output bus.
    fn produces_midi(&self) -> bool {
        false
    }

    /// Whether the plugin is a pure MIDI effect (no audio processing).
    fn is_midi_effect(&self) -> bool {
        false
    }

    /// Save the plugin state while unprepared.
    fn save_state(&self) -> PluginResult<Vec<u8>> {
        Ok(Vec::new())
    }

    /// Load the plugin state while unprepared.
    fn load_state(&mut self, _data: &[u8]) -> PluginResult<()> {
        Ok(())
    }
}
