//! Incremental SHA-1 hasher.

use std::io;

use bytes::Buf;

use super::padding::Tail;
use super::{BLOCK_SIZE, Digest, Error, HashState, Result};

/// Streaming SHA-1 computation.
///
/// Input may be fed in any number of pieces; the digest is identical to
/// hashing the concatenation in one call. The message length is tracked in
/// bits modulo 2^64, which is the capacity of the SHA-1 length field.
#[derive(Clone, Debug)]
pub struct Sha1 {
    state: HashState,
    buffer: [u8; BLOCK_SIZE],
    buffer_len: usize,
    bit_len: u64,
}

impl Sha1 {
    /// Start a fresh computation.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: HashState::new(),
            buffer: [0u8; BLOCK_SIZE],
            buffer_len: 0,
            bit_len: 0,
        }
    }

    /// Message bits absorbed so far (modulo 2^64).
    #[must_use]
    pub fn bit_len(&self) -> u64 {
        self.bit_len
    }

    /// Absorb more message bytes.
    pub fn update(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }

        self.bit_len = self.bit_len.wrapping_add((data.len() as u64).wrapping_mul(8));

        let mut input = data;
        if self.buffer_len > 0 {
            let take = (BLOCK_SIZE - self.buffer_len).min(input.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&input[..take]);
            self.buffer_len += take;
            input = &input[take..];
            if self.buffer_len < BLOCK_SIZE {
                return;
            }
            self.state.absorb(&self.buffer);
            self.buffer_len = 0;
        }

        // Whole blocks go straight from the input.
        let mut blocks = input.chunks_exact(BLOCK_SIZE);
        for chunk in &mut blocks {
            if let Ok(block) = <&[u8; BLOCK_SIZE]>::try_from(chunk) {
                self.state.absorb(block);
            }
        }

        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffer_len = rest.len();
    }

    /// Absorb every remaining byte of a [`Buf`], chunk by chunk.
    pub fn update_buf<B: Buf>(&mut self, mut buf: B) {
        while buf.has_remaining() {
            let chunk = buf.chunk();
            let len = chunk.len();
            self.update(chunk);
            buf.advance(len);
        }
    }

    /// Pad, absorb the tail and produce the digest.
    #[must_use]
    pub fn finalize(self) -> Digest {
        self.finish(0, 0)
    }

    /// Finish a message whose last byte is partial.
    ///
    /// The top `bits` bits of `last` (MSB first) are appended to the message
    /// before padding; the remaining low bits are ignored. `bits == 0` is the
    /// same as [`Sha1::finalize`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::BitLength`] if `bits` is 8 or more.
    pub fn finalize_bits(mut self, last: u8, bits: u8) -> Result<Digest> {
        if bits >= 8 {
            return Err(Error::BitLength {
                bits: u64::from(bits),
                bytes: 1,
            });
        }
        self.bit_len = self.bit_len.wrapping_add(u64::from(bits));
        Ok(self.finish(last, bits))
    }

    fn finish(mut self, last: u8, bits: u8) -> Digest {
        let tail = Tail::new(&self.buffer[..self.buffer_len], last, bits, self.bit_len);
        for block in tail.blocks() {
            self.state.absorb(block);
        }
        self.state.finish()
    }

    /// One-shot digest of `data`.
    #[must_use]
    pub fn digest(data: &[u8]) -> Digest {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }

    /// Hash a bit string of `bit_len` bits held MSB-first in `data`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BitLength`] unless `data` is exactly
    /// `ceil(bit_len / 8)` bytes long.
    pub fn digest_bits(data: &[u8], bit_len: u64) -> Result<Digest> {
        if data.len() as u64 != bit_len.div_ceil(8) {
            return Err(Error::BitLength {
                bits: bit_len,
                bytes: data.len(),
            });
        }

        let whole = (bit_len / 8) as usize;
        let partial = (bit_len % 8) as u8;
        let mut hasher = Self::new();
        hasher.update(&data[..whole]);
        let last = if partial > 0 { data[whole] } else { 0 };
        hasher.finalize_bits(last, partial)
    }
}

impl Default for Sha1 {
    fn default() -> Self {
        Self::new()
    }
}

impl io::Write for Sha1 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
