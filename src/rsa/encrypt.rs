// RSA Encryption Implementation
// Encrypts UTF-8 text under a PEM public key and reports failures as values

use log::{debug, warn};
use rsa::traits::PublicKeyParts;
use rsa::{Oaep, Pkcs1v15Encrypt, RsaPublicKey};
use sha2::Sha256;

use super::encoding::public_key_from_pem;
use super::padding::Padding;
use crate::error::{Result, RsaError};
use crate::util::config::{TransformConfig, DEFAULT_MIN_KEY_BITS};

/// Outcome of an encryption attempt.
///
/// Either ciphertext or a non-empty list of error messages, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncryptionResult {
    Encrypted(Vec<u8>),
    Failed(Vec<String>),
}

impl EncryptionResult {
    pub(crate) fn from_error(err: &RsaError) -> Self {
        EncryptionResult::Failed(vec![err.to_string()])
    }

    pub fn is_success(&self) -> bool {
        matches!(self, EncryptionResult::Encrypted(_))
    }

    pub fn ciphertext(&self) -> Option<&[u8]> {
        match self {
            EncryptionResult::Encrypted(bytes) => Some(bytes.as_slice()),
            EncryptionResult::Failed(_) => None,
        }
    }

    /// Error messages; empty on success.
    pub fn errors(&self) -> &[String] {
        match self {
            EncryptionResult::Encrypted(_) => &[],
            EncryptionResult::Failed(errors) => errors,
        }
    }

    /// Convert to a `Result`, joining the collected messages into one error.
    pub fn into_result(self) -> Result<Vec<u8>> {
        match self {
            EncryptionResult::Encrypted(bytes) => Ok(bytes),
            EncryptionResult::Failed(errors) => Err(RsaError::Encryption {
                reason: errors.join("; "),
            }),
        }
    }
}

impl From<Result<Vec<u8>>> for EncryptionResult {
    fn from(result: Result<Vec<u8>>) -> Self {
        match result {
            Ok(bytes) => EncryptionResult::Encrypted(bytes),
            Err(err) => {
                debug!("encryption failed: {err}");
                EncryptionResult::from_error(&err)
            }
        }
    }
}

/// Encrypt bytes using an RSA public key
/// Returns ciphertext exactly `key.size()` bytes long
pub fn encrypt_bytes(
    plaintext: &[u8],
    public_key: &RsaPublicKey,
    padding: Padding,
) -> Result<Vec<u8>> {
    let max = padding.max_plaintext_len(public_key.size());
    if plaintext.len() > max {
        return Err(RsaError::PlaintextTooLarge {
            len: plaintext.len(),
            max,
        });
    }

    let mut rng = rand::thread_rng();
    let ciphertext = match padding {
        Padding::OaepSha256 => public_key.encrypt(&mut rng, Oaep::new::<Sha256>(), plaintext),
        Padding::Pkcs1v15 => {
            warn!("encrypting with legacy PKCS#1 v1.5 padding");
            public_key.encrypt(&mut rng, Pkcs1v15Encrypt, plaintext)
        }
    };

    ciphertext.map_err(|e| backend_error(e, plaintext.len(), max))
}

/// Key parsing already succeeded here, so backend failures are encryption
/// failures, not key failures.
fn backend_error(err: rsa::Error, len: usize, max: usize) -> RsaError {
    match err {
        rsa::Error::MessageTooLong => RsaError::PlaintextTooLarge { len, max },
        other => RsaError::Encryption {
            reason: other.to_string(),
        },
    }
}

/// Check an externally supplied public key against the key-size policy.
fn check_key_size(public_key: &RsaPublicKey, config: &TransformConfig) -> Result<()> {
    let bits = public_key.size() * 8;
    let min = config.effective_min_key_bits();
    if bits < min {
        return Err(RsaError::invalid_key(format!(
            "{bits}-bit public key is below the minimum of {min} bits"
        )));
    }
    if bits < DEFAULT_MIN_KEY_BITS {
        warn!(
            "encrypting under a {bits}-bit RSA key; sizes below {DEFAULT_MIN_KEY_BITS} bits are not secure"
        );
    }
    Ok(())
}

/// Encrypt a string using a PEM-encoded RSA public key
///
/// The string is encrypted as its UTF-8 bytes. Keys smaller than the
/// configured minimum are refused. Any failure, including a malformed key,
/// is returned inside the result rather than as an error.
pub fn encrypt(
    plaintext: &str,
    public_key_pem: &str,
    config: &TransformConfig,
) -> EncryptionResult {
    public_key_from_pem(public_key_pem)
        .and_then(|key| {
            check_key_size(&key, config)?;
            encrypt_bytes(plaintext.as_bytes(), &key, config.padding)
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::encoding::public_key_to_pem;
    use crate::rsa::test_support::shared_key_pair;
    use rsa::RsaPrivateKey;

    fn public_key_pem(bits: usize) -> String {
        let private_key = RsaPrivateKey::new(&mut rand::thread_rng(), bits).unwrap();
        public_key_to_pem(&private_key.to_public_key()).unwrap()
    }

    #[test]
    fn test_encrypt_string() {
        let keypair = shared_key_pair();
        let result = encrypt(
            "hello world",
            keypair.public_key(),
            &TransformConfig::default(),
        );

        assert!(result.is_success());
        assert!(result.errors().is_empty());
        assert_eq!(result.ciphertext().unwrap().len(), 256); // 2048 bits = 256 bytes
    }

    #[test]
    fn test_encrypt_is_randomized() {
        let keypair = shared_key_pair();
        let config = TransformConfig::default();

        let first = encrypt("same input", keypair.public_key(), &config);
        let second = encrypt("same input", keypair.public_key(), &config);
        assert_ne!(first.ciphertext().unwrap(), second.ciphertext().unwrap());
    }

    #[test]
    fn test_encrypt_legacy_padding() {
        let keypair = shared_key_pair();
        let result = encrypt("hello world", keypair.public_key(), &TransformConfig::legacy());
        assert_eq!(result.ciphertext().unwrap().len(), 256);
    }

    #[test]
    fn test_encrypt_empty() {
        let keypair = shared_key_pair();
        let result = encrypt("", keypair.public_key(), &TransformConfig::default());
        assert_eq!(result.ciphertext().unwrap().len(), 256);
    }

    #[test]
    fn test_encrypt_max_size() {
        let keypair = shared_key_pair();
        // Maximum plaintext for 2048-bit OAEP-SHA256: 256 - 66 = 190 bytes
        let message = "a".repeat(190);

        let result = encrypt(&message, keypair.public_key(), &TransformConfig::default());
        assert!(result.is_success());
    }

    #[test]
    fn test_encrypt_too_large() {
        let keypair = shared_key_pair();
        let message = "a".repeat(191);

        let result = encrypt(&message, keypair.public_key(), &TransformConfig::default());
        assert!(result.ciphertext().is_none());
        assert_eq!(result.errors().len(), 1);
        assert!(result.errors()[0].contains("191"));

        let err = result.into_result().unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_encrypt_too_large_legacy() {
        let keypair = shared_key_pair();
        let key = public_key_from_pem(keypair.public_key()).unwrap();

        assert!(encrypt_bytes(&[7u8; 245], &key, Padding::Pkcs1v15).is_ok());
        assert!(matches!(
            encrypt_bytes(&[7u8; 246], &key, Padding::Pkcs1v15),
            Err(RsaError::PlaintextTooLarge { len: 246, max: 245 })
        ));
    }

    #[test]
    fn test_encrypt_multibyte_counts_bytes() {
        let keypair = shared_key_pair();
        // 64 chars, but 3 bytes each in UTF-8
        let message = "€".repeat(64);

        let result = encrypt(&message, keypair.public_key(), &TransformConfig::default());
        assert!(!result.is_success());
        assert!(result.errors()[0].contains("192"));
    }

    #[test]
    fn test_encrypt_malformed_key() {
        let result = encrypt("hello", "not a key", &TransformConfig::default());

        assert!(!result.is_success());
        assert!(result.ciphertext().is_none());
        assert!(!result.errors().is_empty());
    }

    #[test]
    fn test_backend_errors_are_not_key_errors() {
        let err = backend_error(rsa::Error::Internal, 3, 190);
        assert!(matches!(err, RsaError::Encryption { .. }));

        let err = backend_error(rsa::Error::MessageTooLong, 200, 190);
        assert!(matches!(
            err,
            RsaError::PlaintextTooLarge { len: 200, max: 190 }
        ));
    }

    #[test]
    fn test_encrypt_rejects_small_key() {
        let small_key = public_key_pem(512);
        let result = encrypt("hello", &small_key, &TransformConfig::default());

        assert!(result.ciphertext().is_none());
        assert!(result.errors()[0].starts_with("Invalid key"));
        assert!(result.errors()[0].contains("512"));
    }

    #[test]
    fn test_encrypt_small_key_follows_lowered_minimum() {
        let key = public_key_pem(1024);

        let result = encrypt("hello", &key, &TransformConfig::default());
        assert!(!result.is_success());

        let config = TransformConfig::default().with_min_key_bits(1024);
        let result = encrypt("hello", &key, &config);
        assert_eq!(result.ciphertext().unwrap().len(), 128);
    }

    #[test]
    fn test_encrypt_with_private_key() {
        let keypair = shared_key_pair();
        let result = encrypt("hello", keypair.private_key(), &TransformConfig::default());

        assert!(result.ciphertext().is_none());
        assert!(result.errors()[0].starts_with("Invalid key"));
    }
}
