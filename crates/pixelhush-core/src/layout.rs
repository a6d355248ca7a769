use enum_dispatch::enum_dispatch;

use crate::result::Result;
use crate::{engine, legacy};

/// An embedding scheme, decides where and how code units live inside a pixel buffer.
#[enum_dispatch]
pub trait Embedding {
    /// maximum number of code units a buffer of the given byte length can carry
    fn capacity(&self, buffer_byte_length: usize) -> usize;

    /// hides the code units in place
    fn embed(&self, pixels: &mut [u8], units: &[u8]) -> Result<()>;

    /// recovers previously hidden code units
    fn extract(&self, pixels: &[u8]) -> Result<Vec<u8>>;
}

/// Length header plus 3 fold repetition in the red channel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RepetitionFrame;

impl Embedding for RepetitionFrame {
    fn capacity(&self, buffer_byte_length: usize) -> usize {
        crate::capacity::capacity(buffer_byte_length)
    }

    fn embed(&self, pixels: &mut [u8], units: &[u8]) -> Result<()> {
        engine::encode(pixels, units)
    }

    fn extract(&self, pixels: &[u8]) -> Result<Vec<u8>> {
        engine::decode(pixels)
    }
}

/// NUL terminated units in the alpha channel, as written by older releases.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LegacyAlphaTerminated;

impl Embedding for LegacyAlphaTerminated {
    fn capacity(&self, buffer_byte_length: usize) -> usize {
        legacy::capacity(buffer_byte_length)
    }

    fn embed(&self, pixels: &mut [u8], units: &[u8]) -> Result<()> {
        legacy::encode(pixels, units)
    }

    fn extract(&self, pixels: &[u8]) -> Result<Vec<u8>> {
        legacy::decode(pixels)
    }
}

#[enum_dispatch(Embedding)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    RepetitionFrame,
    LegacyAlphaTerminated,
}

impl Default for Layout {
    fn default() -> Self {
        RepetitionFrame.into()
    }
}
