//! The wire frame that is hidden inside a carrier.
//!
//! A frame is a 32 bit big endian header holding the payload length in *bits*,
//! followed by the payload bits. Every bit of header and payload is then
//! repeated [`REPETITION_FACTOR`] times in a row, so that a single flipped
//! replica per group is corrected by majority vote on the way back.
//!
//! ```text
//! | header (32 bits) | payload (8 bits per unit) |  -> each bit b becomes b b b
//! ```

use byteorder::{BigEndian, ByteOrder};
use log::trace;

use crate::bits::{bits_to_text, text_to_bits, BITS_PER_UNIT};
use crate::error::SteganoError;
use crate::result::Result;

/// Width of the length header in bits.
pub const HEADER_LENGTH: usize = 32;

/// How often every logical bit is replicated.
pub const REPETITION_FACTOR: usize = 3;

/// Carrier bits the replicated header occupies.
pub const HEADER_REPEATED_BITS: usize = HEADER_LENGTH * REPETITION_FACTOR;

/// Carrier bits a frame with `payload_bits` payload bits occupies.
pub fn frame_length(payload_bits: usize) -> usize {
    HEADER_LENGTH
        .saturating_add(payload_bits)
        .saturating_mul(REPETITION_FACTOR)
}

/// Largest payload (in bits) that fits into `available_bits` carrier bits.
pub fn max_payload_bits(available_bits: usize) -> usize {
    available_bits.saturating_sub(HEADER_REPEATED_BITS) / REPETITION_FACTOR
}

/// The big endian header bytes announcing `payload_bits`.
pub fn encode_header(payload_bits: usize) -> Result<[u8; HEADER_LENGTH / BITS_PER_UNIT]> {
    let announced = u32::try_from(payload_bits).map_err(|_| SteganoError::PayloadTooLong {
        bits: payload_bits,
        max: u32::MAX as usize,
    })?;

    let mut header = [0u8; HEADER_LENGTH / BITS_PER_UNIT];
    BigEndian::write_u32(&mut header, announced);
    Ok(header)
}

/// Builds the replicated frame for the given code units.
pub fn build_frame(units: &[u8]) -> Result<Vec<bool>> {
    let payload = text_to_bits(units);
    let header = encode_header(payload.len())?;
    let payload_bits = payload.len();

    let frame: Vec<bool> = text_to_bits(&header)
        .into_iter()
        .chain(payload)
        .flat_map(|bit| std::iter::repeat(bit).take(REPETITION_FACTOR))
        .collect();
    trace!(
        "built frame of {} bits for {payload_bits} payload bits",
        frame.len()
    );

    Ok(frame)
}

/// Recovers one logical bit from its replicas.
///
/// A bit is set if strictly more than half of the replicas are set, so a tie
/// (only possible for an even group size) resolves to `false`.
pub fn majority_vote(replicas: &[bool]) -> bool {
    let ones = replicas.iter().filter(|bit| **bit).count();
    ones * 2 > replicas.len()
}

fn vote_all(framed: &[bool]) -> Vec<bool> {
    framed
        .chunks_exact(REPETITION_FACTOR)
        .map(majority_vote)
        .collect()
}

/// Recovers the announced payload length from the replicated header, without validating it.
pub fn read_header(framed: &[bool]) -> Result<usize> {
    if framed.len() < HEADER_REPEATED_BITS {
        return Err(SteganoError::IncompleteData {
            required: HEADER_REPEATED_BITS,
            available: framed.len(),
        });
    }

    let header = bits_to_text(&vote_all(&framed[..HEADER_REPEATED_BITS]));
    Ok(BigEndian::read_u32(&header) as usize)
}

/// Checks an announced payload length against the carrier it was read from.
///
/// The length must be positive and must fit into what remains of the
/// `available_bits` after the header.
pub fn validate_payload_length(announced: usize, available_bits: usize) -> Result<usize> {
    let max = max_payload_bits(available_bits);
    if announced == 0 || announced > max {
        return Err(SteganoError::InvalidFraming { announced, max });
    }

    Ok(announced)
}

/// Recovers and validates the payload length of a frame within `available_bits` carrier bits.
///
/// `framed` needs to hold at least the replicated header.
pub fn parse_header(framed: &[bool], available_bits: usize) -> Result<usize> {
    let announced = read_header(framed)?;
    trace!("header announces {announced} payload bits");

    validate_payload_length(announced, available_bits)
}

/// Recovers `payload_bits` payload bits that follow the replicated header.
pub fn parse_payload(framed: &[bool], payload_bits: usize) -> Result<Vec<bool>> {
    let end = frame_length(payload_bits);
    if framed.len() < end {
        return Err(SteganoError::IncompleteData {
            required: end,
            available: framed.len(),
        });
    }

    let payload = vote_all(&framed[HEADER_REPEATED_BITS..end]);
    if payload.len() != payload_bits {
        return Err(SteganoError::FrameLengthMismatch {
            expected: payload_bits,
            recovered: payload.len(),
        });
    }

    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_a_frame_with_replicated_length_header() {
        let frame = build_frame(b"Hi").unwrap();

        assert_eq!(frame.len(), (32 + 16) * 3);
        for group in frame.chunks_exact(REPETITION_FACTOR) {
            assert!(group.iter().all(|b| *b == group[0]));
        }

        let logical: Vec<bool> = frame.iter().step_by(REPETITION_FACTOR).copied().collect();
        assert_eq!(bits_to_text(&logical[..32]), vec![0, 0, 0, 16]);
        assert_eq!(bits_to_text(&logical[32..]), b"Hi".to_vec());
    }

    #[test]
    fn header_should_hold_the_bit_length_big_endian() {
        assert_eq!(encode_header(16).unwrap(), [0, 0, 0, 16]);
        assert_eq!(encode_header(u32::MAX as usize).unwrap(), [0xff; 4]);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn header_overflow_should_not_be_blamed_on_the_carrier() {
        match encode_header(u32::MAX as usize + 1) {
            Err(SteganoError::PayloadTooLong { bits, max }) => {
                assert_eq!(bits, 1 << 32);
                assert_eq!(max, u32::MAX as usize);
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn should_build_a_header_only_frame_for_no_units() {
        let frame = build_frame(&[]).unwrap();

        assert_eq!(frame.len(), HEADER_REPEATED_BITS);
        assert!(frame.iter().all(|b| !b));
    }

    #[test]
    fn majority_vote_should_decide_by_strict_majority() {
        assert!(!majority_vote(&[false, false, false]));
        assert!(!majority_vote(&[true, false, false]));
        assert!(majority_vote(&[true, true, false]));
        assert!(majority_vote(&[true, true, true]));
        // ties fall back to zero
        assert!(!majority_vote(&[true, false]));
        assert!(!majority_vote(&[]));
    }

    #[test]
    fn should_parse_what_was_built() {
        let frame = build_frame(b"secret").unwrap();

        let len = parse_header(&frame, frame.len()).unwrap();
        assert_eq!(len, 48);
        let payload = parse_payload(&frame, len).unwrap();
        assert_eq!(bits_to_text(&payload), b"secret".to_vec());
    }

    #[test]
    fn should_survive_one_flipped_replica_per_group() {
        let mut frame = build_frame(b"robust").unwrap();
        for (i, group) in frame.chunks_exact_mut(REPETITION_FACTOR).enumerate() {
            let victim = i % REPETITION_FACTOR;
            group[victim] = !group[victim];
        }

        let len = parse_header(&frame, frame.len()).unwrap();
        let payload = parse_payload(&frame, len).unwrap();
        assert_eq!(bits_to_text(&payload), b"robust".to_vec());
    }

    #[test]
    fn should_fail_on_a_truncated_header() {
        let frame = build_frame(b"x").unwrap();

        match parse_header(&frame[..HEADER_REPEATED_BITS - 1], 1000) {
            Err(SteganoError::IncompleteData {
                required,
                available,
            }) => {
                assert_eq!(required, HEADER_REPEATED_BITS);
                assert_eq!(available, HEADER_REPEATED_BITS - 1);
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn should_reject_a_zero_length() {
        let frame = vec![false; 1000];

        assert!(matches!(
            parse_header(&frame, frame.len()),
            Err(SteganoError::InvalidFraming { announced: 0, .. })
        ));
    }

    #[test]
    fn should_reject_a_length_beyond_the_carrier() {
        let frame = build_frame(b"too long").unwrap();
        let available = frame.len() - 1;

        match parse_header(&frame, available) {
            Err(SteganoError::InvalidFraming { announced, max }) => {
                assert_eq!(announced, 64);
                assert_eq!(max, 63);
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn should_fail_on_a_truncated_payload() {
        let frame = build_frame(b"cut").unwrap();

        assert!(matches!(
            parse_payload(&frame[..frame.len() - 1], 24),
            Err(SteganoError::IncompleteData { .. })
        ));
    }

    #[test]
    fn should_compute_frame_budgets() {
        assert_eq!(frame_length(0), 96);
        assert_eq!(frame_length(16), 144);
        assert_eq!(max_payload_bits(96), 0);
        assert_eq!(max_payload_bits(144), 16);
        assert_eq!(max_payload_bits(146), 16);
        assert_eq!(max_payload_bits(10), 0);
    }
}
