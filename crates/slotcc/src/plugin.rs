//! The plugin and its prepared processor.

use std::sync::Arc;

use slotcc_core::{
    AudioProcessor, AudioSetup, Buffer, HasParameters, HostNotifier, MidiBuffer, MidiEvent,
    NoopHost, Plugin, PluginConfig, PluginResult, ProcessContext,
};

use crate::controller::SlotController;
use crate::parameters::SlotParameters;
use crate::store::PresetStore;

// =============================================================================
// Plugin Configuration
// =============================================================================

/// Plugin metadata exported to the host wrapper.
pub static CONFIG: PluginConfig = PluginConfig::new("SlotCC")
    .with_vendor("SlotCC")
    .with_url("https://github.com/slotcc/slotcc")
    .with_version(env!("CARGO_PKG_VERSION"))
    .with_category("Fx")
    .with_sub_categories("Fx|Midi")
    .with_editor();

// =============================================================================
// Plugin (unprepared state)
// =============================================================================

/// Unprepared plugin: holds the slot state until the host supplies an audio
/// setup.
#[derive(Debug, Clone)]
pub struct SlotCcPlugin {
    controller: SlotController,
}

impl SlotCcPlugin {
    pub fn new(host: Arc<dyn HostNotifier>, store: PresetStore) -> Self {
        Self {
            controller: SlotController::new(host, store),
        }
    }

    /// Control-thread handle, for an editor.
    pub fn controller(&self) -> &SlotController {
        &self.controller
    }
}

impl Default for SlotCcPlugin {
    fn default() -> Self {
        Self::new(Arc::new(NoopHost), PresetStore::default_location())
    }
}

impl HasParameters for SlotCcPlugin {
    type Parameters = SlotParameters;

    fn parameters(&self) -> &SlotParameters {
        &self.controller.bank().parameters
    }
}

impl Plugin for SlotCcPlugin {
    type Config = AudioSetup;
    type Processor = SlotCcProcessor;

    fn prepare(self, config: AudioSetup) -> SlotCcProcessor {
        log::debug!(
            "Preparing at {} Hz, max block {}",
            config.sample_rate,
            config.max_buffer_size
        );
        // Every active slot re-sends its value after a (re)start.
        self.controller.bank().mapper.invalidate_all();

        SlotCcProcessor {
            controller: self.controller,
            setup: config,
        }
    }

    fn accepts_midi(&self) -> bool {
        true
    }

    fn produces_midi(&self) -> bool {
        true
    }

    fn is_midi_effect(&self) -> bool {
        CONFIG.is_midi_fx()
    }

    fn save_state(&self) -> PluginResult<Vec<u8>> {
        self.controller.save_state()
    }

    fn load_state(&mut self, data: &[u8]) -> PluginResult<()> {
        self.controller.load_state(data)
    }
}

// =============================================================================
// Audio Processor (prepared state)
// =============================================================================

/// Prepared processor: runs the CC mapper once per block.
#[derive(Debug)]
pub struct SlotCcProcessor {
    controller: SlotController,
    setup: AudioSetup,
}

impl SlotCcProcessor {
    pub fn controller(&self) -> &SlotController {
        &self.controller
    }

    pub fn setup(&self) -> &AudioSetup {
        &self.setup
    }
}

impl HasParameters for SlotCcProcessor {
    type Parameters = SlotParameters;

    fn parameters(&self) -> &SlotParameters {
        &self.controller.bank().parameters
    }
}

impl AudioProcessor for SlotCcProcessor {
    type Plugin = SlotCcPlugin;

    fn unprepare(self) -> SlotCcPlugin {
        SlotCcPlugin {
            controller: self.controller,
        }
    }

    fn process(&mut self, buffer: &mut Buffer, _context: &ProcessContext) {
        // MIDI effect: no audio output
        buffer.clear_outputs();
    }

    fn process_midi(&mut self, input: &[MidiEvent], output: &mut MidiBuffer) {
        for event in input {
            output.push(*event);
        }
        self.controller.bank().map_block(output);
    }

    fn save_state(&self) -> PluginResult<Vec<u8>> {
        self.controller.save_state()
    }

    fn load_state(&mut self, data: &[u8]) -> PluginResult<()> {
        self.controller.load_state(data)
    }
}
