//! Error types for SlotCC plugins.

use std::fmt;

/// Errors that can occur outside the audio thread.
///
/// The real-time path never produces one of these; it clamps instead.
#[derive(Debug)]
pub enum PluginError {
    /// Plugin initialization failed.
    InitializationFailed(String),
    /// State serialization/deserialization error.
    StateError(String),
}

impl fmt::Display for PluginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Self::StateError(msg) => write!(f, "State error: {}", msg),
        }
    }
}

impl std::error::Error for PluginError {}

/// Result type for SlotCC plugin operations.
pub type PluginResult<T> = Result<T, PluginError>;
