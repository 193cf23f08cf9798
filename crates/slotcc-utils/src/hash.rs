//! Stable hashing for parameter identity.
//!
//! Slot parameters are addressed by the host through a numeric ID. The ID is
//! derived from a fixed string key (`"slot1"` .. `"slot16"`), so it stays the
//! same across sessions, builds and platforms, and automation lanes written
//! by one version of the plugin keep pointing at the same slot in the next.

/// FNV-1a 32-bit hash of a string.
///
/// Usable in const context, so parameter ID tables can be built at compile
/// time:
///
/// ```
/// use slotcc_utils::fnv1a_32;
///
/// const SLOT_1: u32 = fnv1a_32("slot1");
/// assert_eq!(SLOT_1, fnv1a_32("slot1"));
/// ```
#[inline]
pub const fn fnv1a_32(s: &str) -> u32 {
    const OFFSET_BASIS: u32 = 0x811c_9dc5;
    const PRIME: u32 = 0x0100_0193;

    let bytes = s.as_bytes();
    let mut hash = OFFSET_BASIS;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u32;
        hash = hash.wrapping_mul(PRIME);
        i += 1;
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_offset_basis() {
        assert_eq!(fnv1a_32(""), 0x811c_9dc5);
    }

    #[test]
    fn test_known_vector() {
        assert_eq!(fnv1a_32("a"), 0xe40c_292c);
    }

    #[test]
    fn test_slot_keys_are_distinct() {
        let ids: Vec<u32> = (1..=16).map(|i| fnv1a_32(&format!("slot{}", i))).collect();
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
