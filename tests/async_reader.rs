#![cfg(feature = "async")]

use sha1kit::source::{hash_async_reader, hash_async_reader_with};
use sha1kit::{Error, Sha1, StreamConfig};

fn payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i.wrapping_mul(31) % 253) as u8).collect()
}

#[tokio::test]
async fn multi_megabyte_reader_matches_one_shot() {
    let data = payload(3 * 1024 * 1024 + 5);
    let digest = hash_async_reader(&data[..]).await.unwrap();
    assert_eq!(digest, Sha1::digest(&data));
}

#[tokio::test]
async fn duplex_stream_in_small_writes() {
    use tokio::io::AsyncWriteExt;

    let data = payload(200_000);
    let expected = Sha1::digest(&data);
    let (mut writer, reader) = tokio::io::duplex(1000);

    let feed = data.clone();
    let producer = tokio::spawn(async move {
        for chunk in feed.chunks(333) {
            writer.write_all(chunk).await.unwrap();
        }
        writer.shutdown().await.unwrap();
    });

    let config = StreamConfig::with_buffer_size(4096);
    let digest = hash_async_reader_with(reader, &config).await.unwrap();
    producer.await.unwrap();
    assert_eq!(digest, expected);
}

#[tokio::test]
async fn unaligned_buffer_is_rejected() {
    let config = StreamConfig::with_buffer_size(100);
    let result = hash_async_reader_with(&b"abc"[..], &config).await;
    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}
