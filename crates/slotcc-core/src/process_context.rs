//! Per-block processing context.

/// Information about the current processing block.
///
/// Passed to [`AudioProcessor::process`](crate::AudioProcessor::process)
/// alongside the audio buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessContext {
    /// Sample rate in Hz.
    pub sample_rate: f64,
    /// Number of samples in this block.
    pub num_samples: usize,
}

impl ProcessContext {
    /// Create a new context.
    pub const fn new(sample_rate: f64, num_samples: usize) -> Self {
        Self {
            sample_rate,
            num_samples,
        }
    }
}
