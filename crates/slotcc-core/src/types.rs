//! Common types used throughout SlotCC.

/// Maximum number of audio channels per bus.
///
/// A MIDI effect only ever sees the host's placeholder bus, so this is a
/// generous ceiling rather than a surround-format limit.
pub const MAX_CHANNELS: usize = 32;

/// Parameter identifier.
pub type ParameterId = u32;

/// Parameter value (normalized 0.0 to 1.0).
pub type ParameterValue = f64;
