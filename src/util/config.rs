// Transform Configuration
// Key-size policy, public exponent and padding choice shared by all operations

use serde::Deserialize;

use crate::error::{Result, RsaError};
use crate::rsa::padding::Padding;

/// Smallest modulus any configuration may admit.
pub const ABSOLUTE_MIN_KEY_BITS: usize = 1024;

/// Smallest modulus admitted by default.
pub const DEFAULT_MIN_KEY_BITS: usize = 2048;

/// Largest modulus the `rsa` backend will decode as a public key.
pub const ABSOLUTE_MAX_KEY_BITS: usize = 4096;

pub const DEFAULT_MAX_KEY_BITS: usize = ABSOLUTE_MAX_KEY_BITS;

pub const DEFAULT_PUBLIC_EXPONENT: u64 = 65537;

/// Configuration for key generation, encryption and decryption
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    pub min_key_bits: usize,
    pub max_key_bits: usize,
    pub public_exponent: u64,
    pub padding: Padding,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            min_key_bits: DEFAULT_MIN_KEY_BITS,
            max_key_bits: DEFAULT_MAX_KEY_BITS,
            public_exponent: DEFAULT_PUBLIC_EXPONENT,
            padding: Padding::OaepSha256,
        }
    }
}

impl TransformConfig {
    /// Default configuration with PKCS#1 v1.5 padding, for interop with
    /// ciphertexts produced by legacy `fOAEP=false` encryptors.
    pub fn legacy() -> Self {
        Self::default().with_padding(Padding::Pkcs1v15)
    }

    /// Parse a configuration section such as:
    ///
    /// ```toml
    /// min_key_bits = 3072
    /// padding = "oaep-sha256"
    /// ```
    ///
    /// Missing fields take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| RsaError::Config {
            detail: format!("Failed to parse transform config: {e}"),
        })
    }

    pub fn with_min_key_bits(mut self, bits: usize) -> Self {
        self.min_key_bits = bits;
        self
    }

    pub fn with_max_key_bits(mut self, bits: usize) -> Self {
        self.max_key_bits = bits;
        self
    }

    pub fn with_public_exponent(mut self, e: u64) -> Self {
        self.public_exponent = e;
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Minimum modulus size actually enforced. Never below 1024 bits.
    pub fn effective_min_key_bits(&self) -> usize {
        self.min_key_bits.max(ABSOLUTE_MIN_KEY_BITS)
    }

    /// Maximum modulus size actually enforced. Never above 4096 bits, since
    /// larger public keys cannot be loaded back for encryption.
    pub fn effective_max_key_bits(&self) -> usize {
        self.max_key_bits.min(ABSOLUTE_MAX_KEY_BITS)
    }

    /// Check a requested modulus size against this policy.
    pub fn validate_key_bits(&self, bits: usize) -> Result<()> {
        let min = self.effective_min_key_bits();
        let max = self.effective_max_key_bits();
        if bits < min {
            return Err(RsaError::key_generation(format!(
                "{bits}-bit keys are below the minimum of {min} bits"
            )));
        }
        if bits > max {
            return Err(RsaError::key_generation(format!(
                "{bits}-bit keys exceed the maximum of {max} bits"
            )));
        }
        if bits % 8 != 0 {
            return Err(RsaError::key_generation(format!(
                "Key size must be a whole number of bytes, got {bits} bits"
            )));
        }
        Ok(())
    }

    /// Check the configured public exponent is usable.
    pub fn validate_public_exponent(&self) -> Result<()> {
        let e = self.public_exponent;
        if e < 3 || e % 2 == 0 {
            return Err(RsaError::key_generation(format!(
                "Public exponent must be odd and at least 3, got {e}"
            )));
        }
        Ok(())
    }
}
