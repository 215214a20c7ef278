//! sha1kit - self-contained SHA-1 hashing
//!
//! This library implements the SHA-1 Merkle–Damgård construction from first
//! principles: bit-exact padding, the 80-word message schedule, the four-stage
//! compression function and the final digest serialization. It also ships a
//! small file-hashing entry point.
//!
//! # Quick Start
//!
//! ```rust
//! use sha1kit::{Digest, Sha1};
//!
//! // One-shot
//! let digest = Sha1::digest(b"abc");
//! assert_eq!(digest.to_hex(), "a9993e364706816aba3e25717850c26c9cd0d89d");
//!
//! // Incremental
//! let mut hasher = Sha1::new();
//! hasher.update(b"a");
//! hasher.update(b"bc");
//! assert_eq!(hasher.finalize(), digest);
//!
//! // Parsing
//! let parsed: Digest = "a9993e364706816aba3e25717850c26c9cd0d89d".parse()?;
//! assert_eq!(parsed, digest);
//! # Ok::<(), sha1kit::Error>(())
//! ```
//!
//! # Features
//!
//! - **Allocation-free compression** - schedule and registers live on the stack
//! - **Bit-level input** - messages need not be byte aligned
//! - **Streaming entry points** - readers, files and (with `async`) tokio readers
//! - **`serde`** - digests serialize as their hex form
//!
//! SHA-1 is broken for collision resistance. Use it for interoperability and
//! content addressing, not for new security designs.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod hash;
pub mod source;

pub use hash::{
    BLOCK_SIZE, DIGEST_LEN, Digest, Error, HEX_DIGEST_LEN, HashState, MAX_INPUT_BYTES, Result,
    Sha1,
};
pub use source::{StreamConfig, hash_bytes, hash_file, hash_reader};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
