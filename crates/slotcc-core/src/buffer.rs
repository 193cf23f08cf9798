//! Audio buffer view for plugin processing.
//!
//! A MIDI effect still receives an audio buffer from the host: the main bus
//! is part of the plugin contract even when nothing is rendered into it.
//! [`Buffer`] wraps the host's channel slices with fixed-size stack storage,
//! so constructing one per block never allocates.

use crate::types::MAX_CHANNELS;

/// Main audio buffer for one processing block.
///
/// The `'a` lifetime ties the buffer to the host's audio data. Buffers are
/// only valid within a single `process()` call.
pub struct Buffer<'a> {
    /// Input channel slices (immutable audio from host)
    inputs: [Option<&'a [f32]>; MAX_CHANNELS],
    /// Output channel slices (mutable audio to host)
    outputs: [Option<&'a mut [f32]>; MAX_CHANNELS],
    num_input_channels: usize,
    num_output_channels: usize,
    /// Number of samples in this processing block
    num_samples: usize,
}

impl<'a> Buffer<'a> {
    /// Create a new buffer from channel slices.
    ///
    /// Channels beyond [`MAX_CHANNELS`] are silently ignored.
    pub fn new(
        inputs: impl IntoIterator<Item = &'a [f32]>,
        outputs: impl IntoIterator<Item = &'a mut [f32]>,
        num_samples: usize,
    ) -> Self {
        let mut input_arr: [Option<&'a [f32]>; MAX_CHANNELS] = [None; MAX_CHANNELS];
        let mut num_input_channels = 0;
        for (i, slice) in inputs.into_iter().take(MAX_CHANNELS).enumerate() {
            input_arr[i] = Some(slice);
            num_input_channels = i + 1;
        }

        // Can't use [None; N] for &mut because it's not Copy
        let mut output_arr: [Option<&'a mut [f32]>; MAX_CHANNELS] = std::array::from_fn(|_| None);
        let mut num_output_channels = 0;
        for (i, slice) in outputs.into_iter().take(MAX_CHANNELS).enumerate() {
            output_arr[i] = Some(slice);
            num_output_channels = i + 1;
        }

        Self {
            inputs: input_arr,
            outputs: output_arr,
            num_input_channels,
            num_output_channels,
            num_samples,
        }
    }

    /// Number of samples in this processing block.
    #[inline]
    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// Number of input channels.
    #[inline]
    pub fn num_input_channels(&self) -> usize {
        self.num_input_channels
    }

    /// Number of output channels.
    #[inline]
    pub fn num_output_channels(&self) -> usize {
        self.num_output_channels
    }

    /// Get an input channel by index.
    ///
    /// Returns an empty slice if the channel doesn't exist.
    #[inline]
    pub fn input(&self, channel: usize) -> &[f32] {
        self.inputs
            .get(channel)
            .and_then(|opt| opt.as_ref())
            .map(|ch| &ch[..self.num_samples.min(ch.len())])
            .unwrap_or(&[])
    }

    /// Fill every output channel with silence.
    pub fn clear_outputs(&mut self) {
        let n = self.num_samples;
        for output in self.outputs.iter_mut().flatten() {
            let len = n.min(output.len());
            output[..len].fill(0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_outputs() {
        let input = [0.5f32; 8];
        let mut left = [1.0f32; 8];
        let mut right = [-1.0f32; 8];

        let mut buffer = Buffer::new(
            [&input[..]],
            [&mut left[..], &mut right[..]],
            8,
        );
        assert_eq!(buffer.num_input_channels(), 1);
        assert_eq!(buffer.num_output_channels(), 2);
        assert_eq!(buffer.num_samples(), 8);

        assert_eq!(buffer.input(0), &input[..]);
        assert!(buffer.input(1).is_empty());

        buffer.clear_outputs();
        drop(buffer);
        assert!(left.iter().all(|&s| s == 0.0));
        assert!(right.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_clear_respects_num_samples() {
        let mut out = [1.0f32; 8];
        let mut buffer = Buffer::new(std::iter::empty::<&[f32]>(), [&mut out[..]], 4);
        buffer.clear_outputs();
        drop(buffer);
        assert_eq!(out, [0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]);
    }
}
