//! Content digests for entry payloads.
//!
//! Entries compare by content, not by reference: two payloads are the same
//! when their SHA-256 digests match.

use std::fmt;

use sha2::{Digest, Sha256};

/// SHA-256 digest of an entry payload.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PayloadDigest([u8; 32]);

/// Digest of the empty payload.
///
/// An entry whose payload was never set hashes to this value.
pub const EMPTY_DIGEST: PayloadDigest = PayloadDigest([
    0xe3, 0xb0, 0xc4, 0x42, 0x98, 0xfc, 0x1c, 0x14, 0x9a, 0xfb, 0xf4, 0xc8, 0x99, 0x6f, 0xb9, 0x24,
    0x27, 0xae, 0x41, 0xe4, 0x64, 0x9b, 0x93, 0x4c, 0xa4, 0x95, 0x99, 0x1b, 0x78, 0x52, 0xb8, 0x55,
]);

impl PayloadDigest {
    /// Hashes a payload.
    pub fn of(payload: &[u8]) -> Self {
        let hash = Sha256::digest(payload);
        let mut out = [0u8; 32];
        out.copy_from_slice(&hash[..]);
        PayloadDigest(out)
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex, no separators.
    pub fn to_hex(&self) -> String {
        let mut s = String::with_capacity(64);
        for byte in &self.0 {
            s.push_str(&format!("{:02x}", byte));
        }
        s
    }

    /// Parses a 64-character hex digest.
    pub fn from_hex(s: &str) -> Option<Self> {
        if s.len() != 64 {
            return None;
        }

        let mut out = [0u8; 32];
        for (i, chunk) in s.as_bytes().chunks(2).enumerate() {
            if !chunk.iter().all(u8::is_ascii_hexdigit) {
                return None;
            }
            let byte_str = std::str::from_utf8(chunk).ok()?;
            out[i] = u8::from_str_radix(byte_str, 16).ok()?;
        }
        Some(PayloadDigest(out))
    }
}

impl fmt::Debug for PayloadDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PayloadDigest({})", self.to_hex())
    }
}

impl fmt::Display for PayloadDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_digest_constant() {
        assert_eq!(PayloadDigest::of(&[]), EMPTY_DIGEST);
        assert_eq!(
            EMPTY_DIGEST.to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_digest_deterministic() {
        let d1 = PayloadDigest::of(b"skin data");
        let d2 = PayloadDigest::of(b"skin data");
        assert_eq!(d1, d2);

        let d3 = PayloadDigest::of(b"skin datb");
        assert_ne!(d1, d3);
    }

    #[test]
    fn test_hex_roundtrip() {
        let d = PayloadDigest::of(b"GameRules.grf");
        assert_eq!(PayloadDigest::from_hex(&d.to_hex()), Some(d));
        assert_eq!(PayloadDigest::from_hex("abc"), None);
        assert_eq!(PayloadDigest::from_hex(&"zz".repeat(32)), None);
        // Sign prefixes are not hex digits.
        assert_eq!(PayloadDigest::from_hex(&"+a".repeat(32)), None);
        assert_eq!(PayloadDigest::from_hex(&format!("+a{}", &d.to_hex()[2..])), None);
        // Uppercase input parses and re-encodes as lowercase.
        let upper = d.to_hex().to_ascii_uppercase();
        assert_eq!(PayloadDigest::from_hex(&upper), Some(d));
    }
}
