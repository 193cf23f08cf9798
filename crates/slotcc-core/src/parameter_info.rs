//! Parameter metadata types.
//!
//! - [`ParameterInfo`] - Complete parameter description (name, steps, flags)
//! - [`ParameterFlags`] - Behavioral flags (automation, read-only, hidden)

use crate::types::{ParameterId, ParameterValue};

/// Flags controlling parameter behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterFlags {
    /// Parameter can be automated by the host.
    pub can_automate: bool,
    /// Parameter is read-only (display only).
    pub is_readonly: bool,
    /// Parameter is hidden from the DAW's parameter list.
    pub is_hidden: bool,
}

impl Default for ParameterFlags {
    fn default() -> Self {
        Self {
            can_automate: true,
            is_readonly: false,
            is_hidden: false,
        }
    }
}

/// Metadata describing a single parameter.
///
/// The `id` is the parameter's identity for the host and never changes. The
/// `name` may change at runtime (slots are renamed by the user), so infos are
/// handed out as owned snapshots rather than references.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterInfo {
    /// Unique parameter identifier.
    pub id: ParameterId,
    /// Current display name.
    pub name: String,
    /// Unit label (e.g., "dB", "%", "Hz").
    pub units: &'static str,
    /// Default value in normalized form (0.0 to 1.0).
    pub default_normalized: ParameterValue,
    /// Number of discrete steps. 0 = continuous, 1 = toggle, >1 = discrete.
    pub step_count: i32,
    /// Behavioral flags.
    pub flags: ParameterFlags,
}

impl ParameterInfo {
    /// Create a new continuous, automatable parameter with default 0.0.
    pub fn new(id: ParameterId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            units: "",
            default_normalized: 0.0,
            step_count: 0,
            flags: ParameterFlags::default(),
        }
    }

    /// Set the default normalized value.
    pub fn with_default(mut self, default: ParameterValue) -> Self {
        self.default_normalized = default;
        self
    }

    /// Set parameter flags.
    pub fn with_flags(mut self, flags: ParameterFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Name truncated to at most `max_chars` characters, for hosts with
    /// fixed-width parameter name fields. `0` means no limit.
    pub fn name_truncated(&self, max_chars: usize) -> &str {
        if max_chars == 0 {
            return &self.name;
        }
        match self.name.char_indices().nth(max_chars) {
            Some((byte_index, _)) => &self.name[..byte_index],
            None => &self.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let info = ParameterInfo::new(7, "Cutoff");
        assert_eq!(info.id, 7);
        assert_eq!(info.name, "Cutoff");
        assert_eq!(info.default_normalized, 0.0);
        assert_eq!(info.step_count, 0);
        assert!(info.flags.can_automate);
    }

    #[test]
    fn test_name_truncated() {
        let info = ParameterInfo::new(0, "Filter Env Attack");
        assert_eq!(info.name_truncated(0), "Filter Env Attack");
        assert_eq!(info.name_truncated(6), "Filter");
        assert_eq!(info.name_truncated(100), "Filter Env Attack");

        let info = ParameterInfo::new(0, "Fläche");
        assert_eq!(info.name_truncated(3), "Flä");
    }
}
