//! Digest value and its hex rendering.

use core::fmt;
use core::str::FromStr;

use super::{DIGEST_LEN, Error, HEX_DIGEST_LEN, STATE_WORDS};

const HEX_LOWER: &[u8; 16] = b"0123456789abcdef";
const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// A finished 160-bit SHA-1 digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Wrap raw digest bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Serialize chaining words h0..h4 big-endian, in order.
    #[must_use]
    pub fn from_words(words: [u32; STATE_WORDS]) -> Self {
        let mut out = [0u8; DIGEST_LEN];
        for (chunk, word) in out.chunks_exact_mut(4).zip(words.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        Self(out)
    }

    /// Borrow the raw 20 bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Take the raw 20 bytes.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; DIGEST_LEN] {
        self.0
    }

    /// 40 lowercase hex characters, no separators.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(HEX_DIGEST_LEN);
        for &byte in &self.0 {
            out.push(char::from(HEX_LOWER[usize::from(byte >> 4)]));
            out.push(char::from(HEX_LOWER[usize::from(byte & 0x0F)]));
        }
        out
    }

    fn write_hex(&self, f: &mut fmt::Formatter<'_>, table: &[u8; 16]) -> fmt::Result {
        let mut buf = [0u8; HEX_DIGEST_LEN];
        for (pair, &byte) in buf.chunks_exact_mut(2).zip(self.0.iter()) {
            pair[0] = table[usize::from(byte >> 4)];
            pair[1] = table[usize::from(byte & 0x0F)];
        }
        // Only ASCII hex digits were written.
        let text = core::str::from_utf8(&buf).map_err(|_| fmt::Error)?;
        f.write_str(text)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_hex(f, HEX_LOWER)
    }
}

impl fmt::UpperHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_hex(f, HEX_UPPER)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Digest").field(&format_args!("{self:x}")).finish()
    }
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl FromStr for Digest {
    type Err = Error;

    /// Parse 40 hex characters, either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidDigest {
            input: s.to_owned(),
        };

        let raw = s.as_bytes();
        if raw.len() != HEX_DIGEST_LEN {
            return Err(invalid());
        }

        let mut out = [0u8; DIGEST_LEN];
        for (byte, pair) in out.iter_mut().zip(raw.chunks_exact(2)) {
            let hi = nibble(pair[0]).ok_or_else(invalid)?;
            let lo = nibble(pair[1]).ok_or_else(invalid)?;
            *byte = (hi << 4) | lo;
        }
        Ok(Self(out))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Digest {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Digest {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
