//! Internal utilities for SlotCC.
//!
//! Low-level helpers shared between `slotcc-core` and `slotcc`. Everything
//! here is dependency-free and `const fn` where the language allows it.
//!
//! # Contents
//!
//! - [`fnv1a_32`] - FNV-1a hash used for stable parameter IDs
//! - [`sanitize_file_stem`] - file-name-safe form of a preset identifier

pub mod hash;
pub mod path;

pub use hash::fnv1a_32;
pub use path::sanitize_file_stem;
