//! sha1kit error types

use thiserror::Error;

/// Hashing errors
#[derive(Error, Debug)]
pub enum Error {
    /// IO error while reading the input source
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input longer than the 64-bit length field can describe
    #[error("input too long: exceeds {max} bytes")]
    LengthOverflow {
        /// Maximum supported input size in bytes
        max: u64,
    },

    /// Bit length disagrees with the supplied buffer
    #[error("bit length {bits} does not fit a buffer of {bytes} bytes")]
    BitLength {
        /// Requested bit length
        bits: u64,
        /// Bytes actually supplied
        bytes: usize,
    },

    /// Malformed hex digest
    #[error("invalid digest {input:?}: expected 40 hex characters")]
    InvalidDigest {
        /// Rejected input
        input: String,
    },

    /// Rejected configuration
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
