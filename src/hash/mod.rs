//! SHA-1 core
//!
//! This module provides padding, schedule expansion, the compression function
//! and digest formatting, plus the incremental [`Sha1`] hasher built on them.

mod compress;
mod digest;
mod error;
mod hasher;
pub mod padding;
mod schedule;
mod state;

pub use compress::compress;
pub use digest::Digest;
pub use error::{Error, Result};
pub use hasher::Sha1;
pub use schedule::{block_words, expand};
pub use state::HashState;

/// Block size in bytes (512 bits)
pub const BLOCK_SIZE: usize = 64;

/// Raw digest size in bytes (160 bits)
pub const DIGEST_LEN: usize = 20;

/// Hex digest size in characters
pub const HEX_DIGEST_LEN: usize = DIGEST_LEN * 2;

/// Number of 32-bit state words
pub const STATE_WORDS: usize = 5;

/// Number of words in the expanded message schedule (one per round)
pub const SCHEDULE_WORDS: usize = 80;

/// Size of the trailing big-endian length field in bytes
pub const LENGTH_FIELD_SIZE: usize = 8;

/// Largest byte-aligned input whose bit length fits the 64-bit length field
pub const MAX_INPUT_BYTES: u64 = u64::MAX >> 3;

/// Standard SHA-1 initial hash value (h0..h4)
pub const INITIAL_STATE: [u32; STATE_WORDS] = [
    0x6745_2301,
    0xEFCD_AB89,
    0x98BA_DCFE,
    0x1032_5476,
    0xC3D2_E1F0,
];
