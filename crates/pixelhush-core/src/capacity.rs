//! How many code units a carrier can take under the repetition frame.

use crate::bits::BITS_PER_UNIT;
use crate::channel::CHANNELS_PER_PIXEL;
use crate::frame::{frame_length, HEADER_REPEATED_BITS, REPETITION_FACTOR};

/// Maximum number of code units a pixel buffer of `buffer_byte_length` bytes can carry.
///
/// Only one bit per pixel is available, the replicated header is paid first.
/// Buffers too small for the header have a capacity of 0.
pub fn capacity(buffer_byte_length: usize) -> usize {
    let total_bits = buffer_byte_length / CHANNELS_PER_PIXEL;
    if total_bits <= HEADER_REPEATED_BITS {
        return 0;
    }

    let max_payload_bits = (total_bits - HEADER_REPEATED_BITS) / REPETITION_FACTOR;
    max_payload_bits / BITS_PER_UNIT
}

/// Same as [`capacity`] for a given pixel buffer, the content is not inspected.
pub fn capacity_of(pixels: &[u8]) -> usize {
    capacity(pixels.len())
}

/// Carrier bits, and by that pixels, a message of `units` code units requires.
pub fn frame_bits_for(units: usize) -> usize {
    frame_length(units.saturating_mul(BITS_PER_UNIT))
}

/// Scales `width` x `height` up, keeping the aspect ratio, until at least
/// `required_pixels` pixels are available.
pub fn suggest_dimensions(width: u32, height: u32, required_pixels: usize) -> (usize, usize) {
    let (width, height) = (width.max(1) as usize, height.max(1) as usize);
    let current = width * height;
    if current >= required_pixels {
        return (width, height);
    }

    let scale = (required_pixels as f64 / current as f64).sqrt();
    let w = (width as f64 * scale).ceil() as usize;
    let mut h = (height as f64 * scale).ceil() as usize;
    while w * h < required_pixels {
        h += 1;
    }

    (w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_be_zero_for_buffers_without_room_for_the_header() {
        assert_eq!(capacity(0), 0);
        assert_eq!(capacity(40 * 4), 0);
        assert_eq!(capacity(96 * 4), 0);
        assert_eq!(capacity(97 * 4), 0);
    }

    #[test]
    fn should_count_whole_units_after_the_header() {
        // 96 header bits + 1 unit * 8 bits * 3 replicas
        assert_eq!(capacity((96 + 24) * 4), 1);
        assert_eq!(capacity((96 + 24) * 4 - 4), 0);
        assert_eq!(capacity(1000 * 4), 37);
        assert_eq!(capacity(1000 * 4 + 3), 37);
    }

    #[test]
    fn should_never_decrease_with_the_buffer_size() {
        let mut previous = 0;
        for len in 0..20_000 {
            let current = capacity(len);
            assert!(current >= previous, "capacity dropped at {len} bytes");
            previous = current;
        }
    }

    #[test]
    fn capacity_should_always_fit_its_frame() {
        for pixels in [97, 120, 500, 1000, 4096, 65_536] {
            let units = capacity(pixels * 4);
            assert!(frame_bits_for(units) <= pixels);
            assert!(frame_bits_for(units + 1) > pixels);
        }
    }

    #[test]
    fn should_suggest_larger_dimensions_with_enough_pixels() {
        assert_eq!(suggest_dimensions(10, 10, 50), (10, 10));

        let (w, h) = suggest_dimensions(10, 5, 1000);
        assert!(w * h >= 1000);
        assert!(w > 10 && h > 5);
        assert_eq!(frame_bits_for(2), 144);
    }
}
