//! Merkle–Damgård framing
//!
//! A message of `L` bits is extended with a single `1` bit, then `0` bits
//! until its length is 448 mod 512, then `L` as a 64-bit big-endian integer.
//!
//! # Format
//!
//! ```text
//! [MESSAGE (L bits)] [1] [0 ... 0] [L (64 bits, big-endian)]
//! |<------------- multiple of 512 bits --------------------->|
//! ```
//!
//! Bit strings are stored MSB-first: bit 0 of the message is the high bit of
//! the first byte.

use super::{BLOCK_SIZE, Error, LENGTH_FIELD_SIZE, Result};

/// Offset inside the final block where the length field starts
const LENGTH_OFFSET: usize = BLOCK_SIZE - LENGTH_FIELD_SIZE;

/// Bits per block
const BLOCK_BITS: u64 = (BLOCK_SIZE as u64) * 8;

/// Encode the original message length as the trailing length field.
///
/// Lengths are taken modulo 2^64, the capacity of the field.
#[must_use]
pub fn length_field(bit_len: u64) -> [u8; LENGTH_FIELD_SIZE] {
    bit_len.to_be_bytes()
}

/// Total padded length in bytes for a message of `bit_len` bits.
#[must_use]
pub fn padded_len(bit_len: u64) -> u64 {
    let remainder = bit_len % BLOCK_BITS;
    // The pad bit and the length field need 65 bits of room.
    let tail_blocks = if remainder < BLOCK_BITS - 64 { 1 } else { 2 };
    (bit_len / BLOCK_BITS + tail_blocks) * BLOCK_SIZE as u64
}

/// Pad a bit string of `bit_len` bits held MSB-first in `data`.
///
/// `data` must be exactly `ceil(bit_len / 8)` bytes long. Bits past
/// `bit_len` in the final byte are ignored.
///
/// # Errors
///
/// Returns [`Error::BitLength`] if the buffer length does not match
/// `bit_len`, or [`Error::LengthOverflow`] if the padded message cannot be
/// addressed in memory.
pub fn pad_message(data: &[u8], bit_len: u64) -> Result<Vec<u8>> {
    if data.len() as u64 != bit_len.div_ceil(8) {
        return Err(Error::BitLength {
            bits: bit_len,
            bytes: data.len(),
        });
    }

    let total = usize::try_from(padded_len(bit_len)).map_err(|_| Error::LengthOverflow {
        max: usize::MAX as u64,
    })?;

    let whole = (bit_len / 8) as usize;
    let partial_bits = (bit_len % 8) as u8;
    let prefix = whole - whole % BLOCK_SIZE;
    let last = if partial_bits > 0 { data[whole] } else { 0 };

    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(&data[..prefix]);
    let tail = Tail::new(&data[prefix..whole], last, partial_bits, bit_len);
    for block in tail.blocks() {
        out.extend_from_slice(block);
    }

    debug_assert_eq!(out.len(), total);
    Ok(out)
}

/// Pad a byte-aligned message.
#[must_use]
pub fn pad_bytes(data: &[u8]) -> Vec<u8> {
    let bit_len = (data.len() as u64).wrapping_mul(8);
    let prefix = data.len() - data.len() % BLOCK_SIZE;

    let mut out = Vec::with_capacity(prefix + 2 * BLOCK_SIZE);
    out.extend_from_slice(&data[..prefix]);
    let tail = Tail::new(&data[prefix..], 0, 0, bit_len);
    for block in tail.blocks() {
        out.extend_from_slice(block);
    }
    out
}

/// The final one or two blocks of a padded message.
///
/// Everything before the last partial block passes through the compression
/// function untouched, so only this tail ever needs to be materialized.
pub(crate) struct Tail {
    blocks: [[u8; BLOCK_SIZE]; 2],
    count: usize,
}

impl Tail {
    /// Build the tail from fewer than 64 pending bytes plus an optional
    /// partial byte whose top `partial_bits` bits belong to the message.
    pub(crate) fn new(pending: &[u8], last: u8, partial_bits: u8, bit_len: u64) -> Self {
        debug_assert!(pending.len() < BLOCK_SIZE);
        debug_assert!(partial_bits < 8);

        let mut blocks = [[0u8; BLOCK_SIZE]; 2];
        let first = &mut blocks[0];
        first[..pending.len()].copy_from_slice(pending);

        let pad_at = pending.len();
        first[pad_at] = if partial_bits == 0 {
            0x80
        } else {
            let keep = 0xFFu8 << (8 - partial_bits);
            (last & keep) | (0x80 >> partial_bits)
        };

        let count = if pad_at < LENGTH_OFFSET { 1 } else { 2 };
        blocks[count - 1][LENGTH_OFFSET..].copy_from_slice(&length_field(bit_len));

        Self { blocks, count }
    }

    pub(crate) fn blocks(&self) -> &[[u8; BLOCK_SIZE]] {
        &self.blocks[..self.count]
    }
}
