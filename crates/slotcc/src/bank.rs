//! State shared by the audio thread and the control thread.

use slotcc_core::MidiBuffer;

use crate::activity::ActivityFlags;
use crate::mapper::CcMapper;
use crate::parameters::SlotParameters;
use crate::slot::SlotStore;

/// Everything the mapper reads and writes, behind one `Arc`.
///
/// Every field is lock-free on the paths the audio thread takes.
#[derive(Debug, Default)]
pub struct SlotBank {
    pub slots: SlotStore,
    pub parameters: SlotParameters,
    pub activity: ActivityFlags,
    pub mapper: CcMapper,
}

impl SlotBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the mapper for one block. Real-time safe.
    #[inline]
    pub fn map_block(&self, output: &mut MidiBuffer) -> usize {
        self.mapper
            .map_block(&self.slots, &self.parameters, &self.activity, output)
    }
}
