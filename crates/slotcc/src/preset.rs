//! Preset types and the slot merge rule.
//!
//! A preset is an ordered list of `(cc_number, label)` pairs. Applying one
//! enables the first `L` slots with those assignments and disables the rest.
//! Channels and parameter values are left as they are; a preset describes
//! *what* each slot controls, not where it currently sits.

use crate::slot::{default_slot_name, sanitize_cc_number, CC_UNSET, NUM_SLOTS};

/// One CC assignment of a preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CcMapping<'a> {
    /// Controller number.
    pub cc_number: i32,
    /// Label given to the slot.
    pub name: &'a str,
}

/// Built-in instrument template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinPreset {
    /// Instrument maker, used for grouping.
    pub manufacturer: &'static str,
    /// Instrument name.
    pub name: &'static str,
    mappings: &'static [(u8, &'static str)],
}

impl BuiltinPreset {
    /// Create a template from `(cc_number, label)` pairs.
    pub const fn new(
        manufacturer: &'static str,
        name: &'static str,
        mappings: &'static [(u8, &'static str)],
    ) -> Self {
        Self {
            manufacturer,
            name,
            mappings,
        }
    }

    /// Number of assignments.
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Whether the template assigns nothing.
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Assignments in slot order.
    pub fn mappings(&self) -> impl Iterator<Item = CcMapping<'static>> + '_ {
        self.mappings.iter().map(|&(cc_number, name)| CcMapping {
            cc_number: cc_number as i32,
            name,
        })
    }
}

/// What a slot becomes when a preset is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotAssignment {
    pub enabled: bool,
    pub cc_number: i32,
    pub name: String,
}

/// Merge a preset's mappings into a full set of slot assignments.
///
/// Slot `i < L` becomes `{enabled, cc, label}` from mapping `i`; every other
/// slot becomes `{disabled, unset, "Slot i+1"}`. Mappings beyond
/// [`NUM_SLOTS`] are ignored and CC numbers are sanitized.
pub fn merge_mappings<'a, I>(mappings: I) -> [SlotAssignment; NUM_SLOTS]
where
    I: IntoIterator<Item = CcMapping<'a>>,
{
    let mut assignments: [SlotAssignment; NUM_SLOTS] = std::array::from_fn(|i| SlotAssignment {
        enabled: false,
        cc_number: CC_UNSET,
        name: default_slot_name(i),
    });

    for (assignment, mapping) in assignments.iter_mut().zip(mappings) {
        assignment.enabled = true;
        assignment.cc_number = sanitize_cc_number(mapping.cc_number);
        assignment.name = mapping.name.to_string();
    }

    assignments
}

/// Identity of the preset currently loaded, as shown in the editor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PresetTag {
    pub manufacturer: String,
    pub name: String,
    /// Whether this is a user preset rather than a built-in template.
    pub is_user: bool,
}

impl PresetTag {
    pub fn builtin(preset: &BuiltinPreset) -> Self {
        Self {
            manufacturer: preset.manufacturer.to_string(),
            name: preset.name.to_string(),
            is_user: false,
        }
    }

    pub fn user(manufacturer: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            manufacturer: manufacturer.into(),
            name: name.into(),
            is_user: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: BuiltinPreset =
        BuiltinPreset::new("Test", "Small", &[(74, "Cutoff"), (71, "Resonance")]);

    #[test]
    fn test_merge_short_preset() {
        let assignments = merge_mappings(SMALL.mappings());

        assert_eq!(
            assignments[0],
            SlotAssignment {
                enabled: true,
                cc_number: 74,
                name: "Cutoff".to_string()
            }
        );
        assert_eq!(assignments[1].cc_number, 71);
        assert_eq!(assignments[1].name, "Resonance");

        for (i, assignment) in assignments.iter().enumerate().skip(2) {
            assert!(!assignment.enabled);
            assert_eq!(assignment.cc_number, CC_UNSET);
            assert_eq!(assignment.name, format!("Slot {}", i + 1));
        }
    }

    #[test]
    fn test_merge_empty_disables_everything() {
        let assignments = merge_mappings(std::iter::empty::<CcMapping<'_>>());
        assert!(assignments.iter().all(|a| !a.enabled && a.cc_number == CC_UNSET));
    }

    #[test]
    fn test_merge_ignores_extra_and_sanitizes() {
        let mappings: Vec<CcMapping<'_>> = (0..20)
            .map(|i| CcMapping {
                cc_number: if i == 3 { 500 } else { i },
                name: "x",
            })
            .collect();

        let assignments = merge_mappings(mappings);
        assert!(assignments.iter().all(|a| a.enabled));
        assert_eq!(assignments[3].cc_number, 127);
        assert_eq!(assignments[15].cc_number, 15);
    }

    #[test]
    fn test_tags() {
        let tag = PresetTag::builtin(&SMALL);
        assert_eq!(tag.manufacturer, "Test");
        assert!(!tag.is_user);

        let tag = PresetTag::user("Me", "Mine");
        assert!(tag.is_user);
        assert_eq!(tag.name, "Mine");
    }
}
