//! Per-slot activity flags.
//!
//! The audio thread raises a flag whenever a slot emits a CC message; the UI
//! polls at [`ACTIVITY_POLL_HZ`] and clears what it read. Multiple emissions
//! between polls coalesce into one flash. Lock-free on both sides.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::slot::NUM_SLOTS;

/// Rate at which an editor polls the flags.
pub const ACTIVITY_POLL_HZ: u32 = 30;

/// Interval between two polls at [`ACTIVITY_POLL_HZ`].
pub const ACTIVITY_POLL_INTERVAL: Duration = Duration::from_millis(1000 / ACTIVITY_POLL_HZ as u64);

/// One "recently emitted" flag per slot.
#[derive(Debug)]
pub struct ActivityFlags {
    flags: [AtomicBool; NUM_SLOTS],
}

impl ActivityFlags {
    /// All flags cleared.
    pub fn new() -> Self {
        Self {
            flags: std::array::from_fn(|_| AtomicBool::new(false)),
        }
    }

    /// Raise the flag of a slot. Called from the audio thread.
    #[inline]
    pub fn set(&self, index: usize) {
        self.flags[index].store(true, Ordering::Relaxed);
    }

    /// Read and clear the flag of a slot.
    #[inline]
    pub fn poll_and_clear(&self, index: usize) -> bool {
        self.flags[index].swap(false, Ordering::Relaxed)
    }

    /// Read and clear every flag, in slot order.
    pub fn poll_all(&self) -> [bool; NUM_SLOTS] {
        std::array::from_fn(|i| self.poll_and_clear(i))
    }

    /// Read a flag without clearing it.
    #[inline]
    pub fn peek(&self, index: usize) -> bool {
        self.flags[index].load(Ordering::Relaxed)
    }
}

impl Default for ActivityFlags {
    fn default() -> Self {
        Self::new()
    }
}
