//! The older alpha channel layout.
//!
//! Message bits go into the alpha channel, 8 per code unit, followed by a NUL
//! terminator unit. There is no length header and no repetition. Unveiling
//! reads the alpha bits of every pixel and drops all NUL units, which also
//! drops whatever noise the unused pixels contributed as long as it is zero.

use log::debug;

use crate::bits::{bits_to_text, text_to_bits, BITS_PER_UNIT};
use crate::channel::{hide_bits, pixel_count, unveil_bits, ColorChannel, CHANNELS_PER_PIXEL};
use crate::error::SteganoError;
use crate::result::Result;

pub const TERMINATOR: u8 = 0;

const CHANNEL: ColorChannel = ColorChannel::Alpha;

/// Maximum number of code units, the terminator already accounted for.
pub fn capacity(buffer_byte_length: usize) -> usize {
    (buffer_byte_length / CHANNELS_PER_PIXEL / BITS_PER_UNIT).saturating_sub(1)
}

pub fn encode(pixels: &mut [u8], units: &[u8]) -> Result<()> {
    let available = pixel_count(pixels)?;

    let mut bits = text_to_bits(units);
    bits.extend(text_to_bits(&[TERMINATOR]));
    if bits.len() > available {
        return Err(SteganoError::MessageTooLarge {
            required: bits.len(),
            available,
        });
    }

    debug!("writing {} terminated bits into the alpha channel", bits.len());
    hide_bits(pixels, CHANNEL, &bits);

    Ok(())
}

pub fn decode(pixels: &[u8]) -> Result<Vec<u8>> {
    let available = pixel_count(pixels)?;

    let bits = unveil_bits(pixels, CHANNEL, available);
    Ok(bits_to_text(&bits)
        .into_iter()
        .filter(|unit| *unit != TERMINATOR)
        .collect())
}
