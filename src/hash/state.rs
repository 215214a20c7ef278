//! Chaining state (h0..h4).

use super::{BLOCK_SIZE, Digest, INITIAL_STATE, STATE_WORDS, compress};

/// The five 32-bit chaining words of one hash computation.
///
/// Owned by exactly one computation; consumed by [`HashState::finish`].
///
/// ```compile_fail
/// let state = sha1kit::HashState::new();
/// let first = state.finish();
/// let second = state.finish();
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashState {
    words: [u32; STATE_WORDS],
    blocks: u64,
}

impl HashState {
    /// Start from the standard initial value.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            words: INITIAL_STATE,
            blocks: 0,
        }
    }

    /// Resume from explicit chaining words.
    #[must_use]
    pub const fn from_words(words: [u32; STATE_WORDS]) -> Self {
        Self { words, blocks: 0 }
    }

    /// Current chaining words.
    #[must_use]
    pub const fn words(&self) -> [u32; STATE_WORDS] {
        self.words
    }

    /// Blocks absorbed so far.
    #[must_use]
    pub const fn blocks(&self) -> u64 {
        self.blocks
    }

    /// Fold one padded block into the state.
    pub fn absorb(&mut self, block: &[u8; BLOCK_SIZE]) {
        compress(&mut self.words, block);
        self.blocks += 1;
    }

    /// Serialize the final state.
    #[must_use]
    pub fn finish(self) -> Digest {
        Digest::from_words(self.words)
    }
}

impl Default for HashState {
    fn default() -> Self {
        Self::new()
    }
}
