// RSA Decryption Implementation
// Decrypts ciphertext under a PEM private key back to UTF-8 text

use rsa::traits::PublicKeyParts;
use rsa::{Oaep, Pkcs1v15Encrypt, RsaPrivateKey};
use sha2::Sha256;

use super::encoding::private_key_from_pem;
use super::padding::Padding;
use crate::error::{Result, RsaError};
use crate::util::config::TransformConfig;

/// Decrypt ciphertext bytes using an RSA private key
/// Returns plaintext as bytes
pub fn decrypt_bytes(
    ciphertext: &[u8],
    private_key: &RsaPrivateKey,
    padding: Padding,
) -> Result<Vec<u8>> {
    // Validate ciphertext size
    let key_bytes = private_key.size();
    if ciphertext.len() != key_bytes {
        return Err(RsaError::decryption(format!(
            "Invalid ciphertext length: expected {} bytes, got {}",
            key_bytes,
            ciphertext.len()
        )));
    }

    // Blinded decryption keeps timing independent of the ciphertext
    let mut rng = rand::thread_rng();
    let plaintext = match padding {
        Padding::OaepSha256 => {
            private_key.decrypt_blinded(&mut rng, Oaep::new::<Sha256>(), ciphertext)
        }
        Padding::Pkcs1v15 => private_key.decrypt_blinded(&mut rng, Pkcs1v15Encrypt, ciphertext),
    };

    plaintext.map_err(|e| match e {
        rsa::Error::Decryption => RsaError::decryption(format!(
            "ciphertext does not match this key or {padding} padding"
        )),
        other => RsaError::decryption(other.to_string()),
    })
}

/// Decrypt ciphertext to a string
///
/// Unlike `encrypt`, failures propagate: a malformed key is `InvalidKey`,
/// a mismatched key or corrupt ciphertext is `Decryption`, and recovered
/// bytes that are not UTF-8 are `Encoding`.
pub fn decrypt(
    ciphertext: &[u8],
    private_key_pem: &str,
    config: &TransformConfig,
) -> Result<String> {
    let private_key = private_key_from_pem(private_key_pem)?;
    let plaintext = decrypt_bytes(ciphertext, &private_key, config.padding)?;
    String::from_utf8(plaintext).map_err(|e| RsaError::Encoding {
        reason: format!("Decrypted data is not valid UTF-8: {}", e.utf8_error()),
    })
}
