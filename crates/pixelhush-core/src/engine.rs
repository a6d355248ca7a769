//! Hides a repetition frame in the red channel of a pixel buffer and gets it back out.
//!
//! Encoding runs `ValidatingCapacity -> WritingFrame -> Done`, decoding runs
//! `ReadingHeader -> ValidatingLength -> ReadingPayload -> Done`. Any failure
//! is terminal: encode leaves the buffer untouched, decode returns no partial
//! message.

use log::debug;

use crate::bits::bits_to_text;
use crate::channel::{hide_bits, pixel_count, unveil_bits, DESIGNATED_CHANNEL};
use crate::error::SteganoError;
use crate::frame::{build_frame, frame_length, parse_header, parse_payload, HEADER_REPEATED_BITS};
use crate::result::Result;
use crate::text::TextEncoding;

/// Hides `units` in the given RGBA pixel buffer, in place.
///
/// The buffer is mutated directly; keep a clone around if the original image is
/// still needed. Fails with [`SteganoError::MessageTooLarge`] without touching
/// the buffer if the frame needs more bits than there are pixels.
pub fn encode(pixels: &mut [u8], units: &[u8]) -> Result<()> {
    let available = pixel_count(pixels)?;
    debug!(
        "validating capacity for {} units on {available} pixels",
        units.len()
    );

    let frame = build_frame(units)?;
    if frame.len() > available {
        debug!(
            "rejected: frame of {} bits exceeds {available} pixels",
            frame.len()
        );
        return Err(SteganoError::MessageTooLarge {
            required: frame.len(),
            available,
        });
    }

    debug!("writing frame of {} bits", frame.len());
    hide_bits(pixels, DESIGNATED_CHANNEL, &frame);

    Ok(())
}

/// Recovers the code units hidden by [`encode`].
pub fn decode(pixels: &[u8]) -> Result<Vec<u8>> {
    let available = pixel_count(pixels)?;

    debug!("reading header from {available} pixels");
    let header = unveil_bits(pixels, DESIGNATED_CHANNEL, HEADER_REPEATED_BITS);

    debug!("validating announced length");
    let payload_bits = parse_header(&header, available)?;

    debug!("reading payload of {payload_bits} bits");
    let framed = unveil_bits(pixels, DESIGNATED_CHANNEL, frame_length(payload_bits));
    let payload = parse_payload(&framed, payload_bits)?;

    Ok(bits_to_text(&payload))
}

/// Hides a text message, turned into code units by `encoding`.
pub fn hide_text(pixels: &mut [u8], text: &str, encoding: TextEncoding) -> Result<()> {
    let units = encoding.encode(text)?;
    encode(pixels, &units)
}

/// Recovers a text message hidden by [`hide_text`] with the same `encoding`.
pub fn unveil_text(pixels: &[u8], encoding: TextEncoding) -> Result<String> {
    encoding.decode(decode(pixels)?)
}
