//! Callbacks from the plugin to the host.
//!
//! Format wrappers receive a handler object from the host (VST3's
//! `IComponentHandler`, AU's parameter observers). [`HostNotifier`] is the
//! format-agnostic face of that handler: the plugin calls it whenever a
//! change originates on the plugin side, so the host's view of parameters
//! stays in sync with the engine.
//!
//! Calls happen on the control (UI/message) thread only. Never call a
//! notifier from the audio thread.

use crate::types::{ParameterId, ParameterValue};

/// Host-side sink for parameter change notifications.
pub trait HostNotifier: Send + Sync {
    /// A parameter value was changed by the plugin (preset load, state
    /// restore, reset). The host should record it like a user edit.
    fn parameter_value_changed(&self, id: ParameterId, normalized: ParameterValue);

    /// Parameter metadata (display names) changed. The host should re-query
    /// [`ParameterStore::info`](crate::ParameterStore::info).
    fn parameter_titles_changed(&self);
}

/// Notifier for hosts without a handler (and for tests).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHost;

impl HostNotifier for NoopHost {
    fn parameter_value_changed(&self, _id: ParameterId, _normalized: ParameterValue) {}

    fn parameter_titles_changed(&self) {}
}
