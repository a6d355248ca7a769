//! Conversion between 8 bit code units and bitstreams.
//!
//! Bits are laid out most significant bit first, one code unit after the other,
//! without any escaping or terminator. A bitstream is represented as `Vec<bool>`.

use bitstream_io::{BigEndian, BitRead, BitReader};

/// Number of bits a single code unit occupies in a bitstream.
pub const BITS_PER_UNIT: usize = 8;

/// Expands every code unit into its 8 bits, most significant bit first.
///
/// The output always has `8 * units.len()` bits.
pub fn text_to_bits(units: &[u8]) -> Vec<bool> {
    let mut reader = BitReader::endian(units, BigEndian);
    let mut bits = Vec::with_capacity(units.len() * BITS_PER_UNIT);
    while let Ok(bit) = reader.read_bit() {
        bits.push(bit);
    }

    bits
}

/// Packs every complete group of 8 bits back into one code unit.
///
/// A trailing group of less than 8 bits is dropped silently.
pub fn bits_to_text(bits: &[bool]) -> Vec<u8> {
    bits.chunks_exact(BITS_PER_UNIT)
        .map(|byte| {
            byte.iter()
                .fold(0u8, |unit, &bit| (unit << 1) | u8::from(bit))
        })
        .collect()
}
