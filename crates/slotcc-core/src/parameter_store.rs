//! Low-level parameter store for host communication.
//!
//! [`ParameterStore`] is the raw normalized-value interface that format
//! wrappers (VST3, AU, CLAP) drive. It exposes parameter metadata, lock-free
//! value access and the value/text conversions the host shows in automation
//! lanes and generic editors.
//!
//! # Thread Safety
//!
//! The trait requires `Send + Sync` because parameters are touched from
//! several threads:
//! - Audio thread: reads values during processing
//! - UI thread: displays and edits values
//! - Host thread: automation playback and recording
//!
//! Use atomic types (e.g., `AtomicU64` with `to_bits`/`from_bits`) for
//! lock-free value storage.

use crate::parameter_info::ParameterInfo;
use crate::types::{ParameterId, ParameterValue};

/// Low-level trait for plugin parameter collections (host interface).
pub trait ParameterStore: Send + Sync {
    /// Returns the number of parameters.
    fn count(&self) -> usize;

    /// Returns a snapshot of the parameter info at `index` (0 to count-1).
    ///
    /// Returns `None` if index is out of bounds.
    fn info(&self, index: usize) -> Option<ParameterInfo>;

    /// Gets the current normalized value (0.0 to 1.0) for a parameter.
    ///
    /// Unknown IDs read as 0.0. Must be lock-free.
    fn get_normalized(&self, id: ParameterId) -> ParameterValue;

    /// Sets the normalized value (0.0 to 1.0) for a parameter.
    ///
    /// Must be lock-free. Values are clamped to [0.0, 1.0]; unknown IDs are
    /// ignored.
    fn set_normalized(&self, id: ParameterId, value: ParameterValue);

    /// Converts a normalized value to a display string.
    fn normalized_to_string(&self, id: ParameterId, normalized: ParameterValue) -> String;

    /// Parses a display string to a normalized value.
    ///
    /// Returns `None` if the ID is unknown.
    fn string_to_normalized(&self, id: ParameterId, string: &str) -> Option<ParameterValue>;

    /// Find parameter info by ID.
    ///
    /// Default implementation searches linearly through all parameters.
    fn info_by_id(&self, id: ParameterId) -> Option<ParameterInfo> {
        (0..self.count())
            .filter_map(|i| self.info(i))
            .find(|info| info.id == id)
    }
}
