//! Bit level access to one color channel of an RGBA pixel buffer.
//!
//! A pixel buffer is a flat byte slice where pixel `i`'s channel `c` sits at
//! offset `i * 4 + c`. Only the least significant bit of a channel is ever
//! touched, so a written channel differs by at most 1 from its original value.

use crate::error::SteganoError;
use crate::result::Result;

pub const CHANNELS_PER_PIXEL: usize = 4;

/// The channel that carries the repetition frame, all other channels stay untouched.
pub const DESIGNATED_CHANNEL: ColorChannel = ColorChannel::Red;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChannel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl ColorChannel {
    /// offset of this channel inside one pixel
    pub fn offset(&self) -> usize {
        match self {
            ColorChannel::Red => 0,
            ColorChannel::Green => 1,
            ColorChannel::Blue => 2,
            ColorChannel::Alpha => 3,
        }
    }
}

/// Replaces the least significant bit of `byte` with `bit`.
pub fn write_bit(byte: u8, bit: bool) -> u8 {
    (byte & (u8::MAX - 1)) | u8::from(bit)
}

/// Returns the least significant bit of `byte`.
pub fn read_bit(byte: u8) -> bool {
    byte & 1 == 1
}

pub trait HideBit {
    fn hide_bit(self, bit: bool);
}

impl HideBit for &mut u8 {
    fn hide_bit(self, bit: bool) {
        *self = write_bit(*self, bit);
    }
}

pub trait UnveilBit {
    fn unveil_bit(self) -> bool;
}

impl UnveilBit for u8 {
    fn unveil_bit(self) -> bool {
        read_bit(self)
    }
}

/// Number of pixels, fails if the buffer does not consist of whole pixels.
pub fn pixel_count(pixels: &[u8]) -> Result<usize> {
    if pixels.len() % CHANNELS_PER_PIXEL != 0 {
        return Err(SteganoError::MalformedPixelBuffer(pixels.len()));
    }

    Ok(pixels.len() / CHANNELS_PER_PIXEL)
}

/// Iterates over one channel of every pixel, in pixel order.
pub fn channel_values(pixels: &[u8], channel: ColorChannel) -> impl Iterator<Item = u8> + '_ {
    let offset = channel.offset();
    pixels
        .chunks_exact(CHANNELS_PER_PIXEL)
        .map(move |pixel| pixel[offset])
}

/// Iterates mutably over one channel of every pixel, in pixel order.
pub fn channel_values_mut(
    pixels: &mut [u8],
    channel: ColorChannel,
) -> impl Iterator<Item = &mut u8> + '_ {
    let offset = channel.offset();
    pixels
        .chunks_exact_mut(CHANNELS_PER_PIXEL)
        .map(move |pixel| &mut pixel[offset])
}

/// Writes `bits` one per pixel into the given channel, starting at the first pixel.
///
/// The caller guarantees the buffer has at least `bits.len()` pixels.
pub(crate) fn hide_bits(pixels: &mut [u8], channel: ColorChannel, bits: &[bool]) {
    for (value, &bit) in channel_values_mut(pixels, channel).zip(bits) {
        value.hide_bit(bit);
    }
}

/// Reads up to `limit` bits, one per pixel, from the given channel.
pub(crate) fn unveil_bits(pixels: &[u8], channel: ColorChannel, limit: usize) -> Vec<bool> {
    channel_values(pixels, channel)
        .take(limit)
        .map(UnveilBit::unveil_bit)
        .collect()
}
