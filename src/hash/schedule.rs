//! Message schedule expansion (16 block words -> 80 round words).

use super::{BLOCK_SIZE, SCHEDULE_WORDS};

/// Words per block
const BLOCK_WORDS: usize = BLOCK_SIZE / 4;

/// Split a block into its sixteen big-endian words.
#[must_use]
pub fn block_words(block: &[u8; BLOCK_SIZE]) -> [u32; BLOCK_WORDS] {
    let mut words = [0u32; BLOCK_WORDS];
    for (word, chunk) in words.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    words
}

/// Expand a block into the 80-word schedule consumed by the rounds.
///
/// Each derived word reads previously derived words, so the expansion runs
/// front to back.
#[must_use]
pub fn expand(block: &[u8; BLOCK_SIZE]) -> [u32; SCHEDULE_WORDS] {
    let mut w = [0u32; SCHEDULE_WORDS];
    w[..BLOCK_WORDS].copy_from_slice(&block_words(block));

    for t in BLOCK_WORDS..SCHEDULE_WORDS {
        w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
    }
    w
}
