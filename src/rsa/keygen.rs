// RSA Key Generation
// Generates PEM-encoded RSA key pairs under the configured key-size policy

use std::fmt;
use std::time::Instant;

use log::{debug, warn};
use rsa::{BigUint, RsaPrivateKey};
use zeroize::Zeroizing;

use super::encoding::{private_key_to_pem, public_key_fingerprint, public_key_to_pem};
use crate::error::{Result, RsaError};
use crate::util::config::{TransformConfig, DEFAULT_MIN_KEY_BITS};

/// RSA Key Pair
///
/// Both halves are independent PEM documents: the public key is SPKI
/// (`BEGIN PUBLIC KEY`), the private key is PKCS#8 (`BEGIN PRIVATE KEY`)
/// and is wiped from memory on drop.
#[derive(Clone)]
pub struct KeyPair {
    public_key: String,
    private_key: Zeroizing<String>,
    bit_length: usize,
}

impl KeyPair {
    /// Public key as SPKI PEM
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Private key as PKCS#8 PEM
    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> usize {
        self.bit_length
    }

    /// Ciphertext length produced by this key pair
    pub fn size_bytes(&self) -> usize {
        self.bit_length / 8
    }

    /// SHA-256 fingerprint of the public key, as lowercase hex.
    pub fn fingerprint(&self) -> Result<String> {
        public_key_fingerprint(&self.public_key)
    }

    /// Split into `(public_key, private_key)`.
    pub fn into_parts(self) -> (String, Zeroizing<String>) {
        (self.public_key, self.private_key)
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key)
            .field("private_key", &"[redacted]")
            .field("bit_length", &self.bit_length)
            .finish()
    }
}

/// Generate RSA key pair with specified bit length
///
/// The size is checked against `config` before any prime search starts:
/// sizes below the configured minimum, above the maximum, or not a whole
/// number of bytes fail with `KeyGeneration`.
pub fn generate_key_pair(bit_length: usize, config: &TransformConfig) -> Result<KeyPair> {
    config.validate_key_bits(bit_length)?;
    config.validate_public_exponent()?;

    if bit_length < DEFAULT_MIN_KEY_BITS {
        warn!(
            "generating a {bit_length}-bit RSA key; sizes below {DEFAULT_MIN_KEY_BITS} bits are not secure"
        );
    }

    debug!(
        "generating {bit_length}-bit RSA key pair (e={})",
        config.public_exponent
    );
    let started = Instant::now();

    let mut rng = rand::thread_rng();
    let exp = BigUint::from(config.public_exponent);
    let private_key = RsaPrivateKey::new_with_exp(&mut rng, bit_length, &exp)
        .map_err(|e| RsaError::key_generation(e.to_string()))?;
    let public_key = private_key.to_public_key();

    let key_pair = KeyPair {
        public_key: public_key_to_pem(&public_key)?,
        private_key: private_key_to_pem(&private_key)?,
        bit_length,
    };

    debug!(
        "generated {bit_length}-bit RSA key pair in {:?}",
        started.elapsed()
    );

    Ok(key_pair)
}

/// Generate RSA key pair with default settings (2048 bits, e=65537)
pub fn generate_default_key_pair() -> Result<KeyPair> {
    generate_key_pair(DEFAULT_MIN_KEY_BITS, &TransformConfig::default())
}
