use sha1kit::hash::padding::{pad_bytes, padded_len};
use sha1kit::{BLOCK_SIZE, Digest, HEX_DIGEST_LEN, HashState, Sha1, hash_bytes};

fn reference(data: &[u8]) -> String {
    use sha1::Digest as _;
    hex::encode(sha1::Sha1::digest(data))
}

#[test]
fn fips_180_vectors() {
    let cases: [(&[u8], &str); 4] = [
        (b"", "da39a3ee5e6b4b0d3255bfef95601890afd80709"),
        (b"abc", "a9993e364706816aba3e25717850c26c9cd0d89d"),
        (
            b"The quick brown fox jumps over the lazy dog",
            "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12",
        ),
        (
            b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
            "84983e441c3bd26ebaae4aa1f95129e5e54670f1",
        ),
    ];

    for (input, expected) in cases {
        assert_eq!(hash_bytes(input).to_hex(), expected);
        let parsed: Digest = expected.parse().unwrap();
        assert_eq!(hash_bytes(input), parsed);
    }
}

#[test]
fn one_million_a() {
    let mut hasher = Sha1::new();
    let chunk = [b'a'; 1000];
    for _ in 0..1000 {
        hasher.update(&chunk);
    }
    assert_eq!(
        hasher.finalize().to_hex(),
        "34aa973cd4c4daa4f61eeb2bdbad27316534016f"
    );
}

#[test]
fn padding_threshold_inputs() {
    // 55 bytes leave room for the pad byte and length; 56 do not.
    let short = vec![b'x'; 55];
    let long = vec![b'x'; 56];

    assert_eq!(pad_bytes(&short).len(), BLOCK_SIZE);
    assert_eq!(pad_bytes(&long).len(), 2 * BLOCK_SIZE);
    assert_eq!(padded_len(55 * 8), BLOCK_SIZE as u64);
    assert_eq!(padded_len(56 * 8), 2 * BLOCK_SIZE as u64);

    assert_eq!(hash_bytes(&short).to_hex(), reference(&short));
    assert_eq!(hash_bytes(&long).to_hex(), reference(&long));
    assert_ne!(hash_bytes(&short), hash_bytes(&long));
}

#[test]
fn manual_pipeline_matches_hasher() {
    let data = vec![0x5Au8; 200];
    let mut state = HashState::new();
    let mut block = [0u8; BLOCK_SIZE];
    for chunk in pad_bytes(&data).chunks_exact(BLOCK_SIZE) {
        block.copy_from_slice(chunk);
        state.absorb(&block);
    }
    assert_eq!(state.blocks(), 4);
    assert_eq!(state.finish(), Sha1::digest(&data));
}

#[test]
fn digest_is_always_forty_hex_chars() {
    for len in [0usize, 1, 63, 64, 65, 1000] {
        let hex = hash_bytes(vec![0u8; len]).to_hex();
        assert_eq!(hex.len(), HEX_DIGEST_LEN);
        assert_eq!(hex, hex.to_lowercase());
    }
}

#[test]
fn single_bit_flip_changes_many_output_bits() {
    let mut data = b"The quick brown fox jumps over the lazy dog".to_vec();
    let before = hash_bytes(&data);
    data[0] ^= 0x01;
    let after = hash_bytes(&data);

    let differing: u32 = before
        .as_bytes()
        .iter()
        .zip(after.as_bytes())
        .map(|(a, b)| (a ^ b).count_ones())
        .sum();
    // Expect roughly half of 160 bits; only reject pathological results.
    assert!(differing > 40, "only {differing} bits changed");
}

#[test]
fn independent_computations_run_in_parallel() {
    let handles: Vec<_> = (0..8u8)
        .map(|seed| {
            std::thread::spawn(move || {
                let data = vec![seed; 10_000 + usize::from(seed)];
                (Sha1::digest(&data).to_hex(), reference(&data))
            })
        })
        .collect();

    for handle in handles {
        let (ours, theirs) = handle.join().unwrap();
        assert_eq!(ours, theirs);
    }
}
