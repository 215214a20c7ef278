//! Hashing from tokio `AsyncRead` sources.

use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, instrument, trace};

use super::{StreamConfig, account};
use crate::hash::{Digest, Result, Sha1};

/// Hash everything an async reader yields, using the default buffer.
pub async fn hash_async_reader<R: AsyncRead + Unpin>(reader: R) -> Result<Digest> {
    hash_async_reader_with(reader, &StreamConfig::default()).await
}

/// Hash everything an async reader yields.
///
/// Only the reads suspend; compression runs inline between them.
#[instrument(level = "debug", skip(reader, config), fields(buffer = config.buffer_size))]
pub async fn hash_async_reader_with<R: AsyncRead + Unpin>(
    mut reader: R,
    config: &StreamConfig,
) -> Result<Digest> {
    config.validate()?;

    let mut hasher = Sha1::new();
    let mut buffer = vec![0u8; config.buffer_size];
    let mut total = 0u64;

    loop {
        let len = reader.read(&mut buffer).await?;
        if len == 0 {
            break;
        }
        total = account(total, len)?;
        hasher.update(&buffer[..len]);
        trace!(len, total, "absorbed chunk");
    }

    let digest = hasher.finalize();
    debug!(total, %digest, "input hashed");
    Ok(digest)
}
