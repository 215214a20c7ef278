//! Read-side tuning for streaming entry points.

use crate::hash::{BLOCK_SIZE, Error, Result};

/// Default read buffer (64 KiB).
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Largest accepted read buffer (16 MiB).
pub const MAX_BUFFER_SIZE: usize = 16 * 1024 * 1024;

/// Configurable parameters for reader-based hashing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamConfig {
    /// Bytes requested per read; a non-zero multiple of the block size.
    pub buffer_size: usize,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl StreamConfig {
    /// Config with a specific buffer size.
    #[must_use]
    pub fn with_buffer_size(buffer_size: usize) -> Self {
        Self { buffer_size }
    }

    /// Check that the buffer is block aligned and within bounds.
    pub fn validate(&self) -> Result<()> {
        if self.buffer_size == 0 || self.buffer_size % BLOCK_SIZE != 0 {
            return Err(Error::InvalidConfig(format!(
                "buffer_size {} is not a non-zero multiple of {BLOCK_SIZE}",
                self.buffer_size
            )));
        }
        if self.buffer_size > MAX_BUFFER_SIZE {
            return Err(Error::InvalidConfig(format!(
                "buffer_size {} exceeds {MAX_BUFFER_SIZE}",
                self.buffer_size
            )));
        }
        Ok(())
    }
}
