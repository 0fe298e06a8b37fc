// RSA Encryption Padding
// Selects the padding scheme and computes the plaintext bound it implies

use std::fmt;

use serde::Deserialize;

/// Bytes consumed by PKCS#1 v1.5 encryption padding:
/// 0x00 || 0x02 || PS (at least 8 non-zero bytes) || 0x00
pub const PKCS1V15_OVERHEAD: usize = 11;

/// Bytes consumed by OAEP with SHA-256: 2 * hLen + 2
pub const OAEP_SHA256_OVERHEAD: usize = 2 * 32 + 2;

/// Padding applied before the raw RSA transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Padding {
    /// OAEP with SHA-256 as both the label hash and the MGF1 hash.
    #[default]
    OaepSha256,
    /// Legacy PKCS#1 v1.5 encryption padding. Not resistant to chosen-ciphertext
    /// attacks; only for compatibility with existing ciphertexts.
    Pkcs1v15,
}

impl Padding {
    /// Number of bytes the padding adds to every block.
    pub fn overhead(self) -> usize {
        match self {
            Padding::OaepSha256 => OAEP_SHA256_OVERHEAD,
            Padding::Pkcs1v15 => PKCS1V15_OVERHEAD,
        }
    }

    /// Largest plaintext, in bytes, that fits a modulus of `key_size_bytes`.
    pub fn max_plaintext_len(self, key_size_bytes: usize) -> usize {
        key_size_bytes.saturating_sub(self.overhead())
    }

    pub fn name(self) -> &'static str {
        match self {
            Padding::OaepSha256 => "oaep-sha256",
            Padding::Pkcs1v15 => "pkcs1v15",
        }
    }
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
