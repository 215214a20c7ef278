//! Entry points that hash whole byte sources.
//!
//! Readers are consumed incrementally through a fixed buffer, so inputs of
//! any size hash in constant memory. Read failures surface as
//! [`Error::Io`](crate::Error::Io) and are never retried here.

#[cfg(feature = "async")]
mod async_read;
mod config;

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use tracing::{debug, instrument, trace};

use crate::hash::{Digest, Error, MAX_INPUT_BYTES, Result, Sha1};

#[cfg(feature = "async")]
pub use async_read::{hash_async_reader, hash_async_reader_with};
pub use config::{DEFAULT_BUFFER_SIZE, MAX_BUFFER_SIZE, StreamConfig};

/// Hash an in-memory buffer.
#[must_use]
pub fn hash_bytes(data: impl AsRef<[u8]>) -> Digest {
    Sha1::digest(data.as_ref())
}

/// Hash everything `reader` yields, using the default buffer.
pub fn hash_reader<R: Read>(reader: R) -> Result<Digest> {
    hash_reader_with(reader, &StreamConfig::default())
}

/// Hash everything `reader` yields.
#[instrument(level = "debug", skip(reader, config), fields(buffer = config.buffer_size))]
pub fn hash_reader_with<R: Read>(mut reader: R, config: &StreamConfig) -> Result<Digest> {
    config.validate()?;

    let mut hasher = Sha1::new();
    let mut buffer = vec![0u8; config.buffer_size];
    let mut total = 0u64;

    loop {
        let len = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(len) => len,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        };
        total = account(total, len)?;
        hasher.update(&buffer[..len]);
        trace!(len, total, "absorbed chunk");
    }

    let digest = hasher.finalize();
    debug!(total, %digest, "input hashed");
    Ok(digest)
}

/// Open and hash a file, using the default buffer.
pub fn hash_file(path: impl AsRef<Path>) -> Result<Digest> {
    hash_file_with(path.as_ref(), &StreamConfig::default())
}

/// Open and hash a file.
#[instrument(level = "debug", skip(path, config), fields(path = %path.display()))]
pub fn hash_file_with(path: &Path, config: &StreamConfig) -> Result<Digest> {
    let file = File::open(path)?;
    debug!("opened file");
    hash_reader_with(file, config)
}

/// Add a read to the running total, refusing lengths the 64-bit bit-count
/// field cannot represent.
pub(crate) fn account(total: u64, len: usize) -> Result<u64> {
    total
        .checked_add(len as u64)
        .filter(|&next| next <= MAX_INPUT_BYTES)
        .ok_or(Error::LengthOverflow {
            max: MAX_INPUT_BYTES,
        })
}
