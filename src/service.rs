// RSA Transform Service
// Stateless facade over the transforms, with blocking-pool offload for async callers

use log::debug;
use tokio_util::sync::CancellationToken;

use crate::error::{Result, RsaError};
use crate::rsa::{decrypt, encrypt, generate_key_pair, EncryptionResult, KeyPair};
use crate::util::config::TransformConfig;

/// Key generation, encryption and decryption under one configuration.
///
/// Holds no key material between calls, so it can be cloned and shared freely
/// across threads and tasks.
#[derive(Clone, Debug, Default)]
pub struct RsaTransformService {
    config: TransformConfig,
}

impl RsaTransformService {
    pub fn new(config: TransformConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    pub fn generate_key_pair(&self, bit_length: usize) -> Result<KeyPair> {
        generate_key_pair(bit_length, &self.config)
    }

    pub fn encrypt(&self, plaintext: &str, public_key: &str) -> EncryptionResult {
        encrypt(plaintext, public_key, &self.config)
    }

    pub fn decrypt(&self, ciphertext: &[u8], private_key: &str) -> Result<String> {
        decrypt(ciphertext, private_key, &self.config)
    }

    /// Generate a key pair on the blocking pool.
    ///
    /// Returns `Cancelled` as soon as `cancel` fires. Prime search itself cannot
    /// be interrupted, so a cancelled generation finishes in the background and
    /// its key pair is dropped.
    pub async fn generate_key_pair_async(
        &self,
        bit_length: usize,
        cancel: &CancellationToken,
    ) -> Result<KeyPair> {
        if cancel.is_cancelled() {
            return Err(RsaError::Cancelled);
        }
        // Reject bad sizes before occupying a blocking thread
        self.config.validate_key_bits(bit_length)?;

        let config = self.config.clone();
        let task = tokio::task::spawn_blocking(move || generate_key_pair(bit_length, &config));

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("{bit_length}-bit key generation cancelled");
                Err(RsaError::Cancelled)
            }
            joined = task => joined.map_err(|e| RsaError::Task { reason: e.to_string() })?,
        }
    }

    /// Encrypt on the blocking pool. Never fails: a panicked or aborted worker
    /// is reported inside the result like any other failure.
    pub async fn encrypt_async(&self, plaintext: &str, public_key: &str) -> EncryptionResult {
        let config = self.config.clone();
        let plaintext = plaintext.to_owned();
        let public_key = public_key.to_owned();

        tokio::task::spawn_blocking(move || encrypt(&plaintext, &public_key, &config))
            .await
            .unwrap_or_else(|e| {
                EncryptionResult::from_error(&RsaError::Task {
                    reason: e.to_string(),
                })
            })
    }

    /// Decrypt on the blocking pool.
    pub async fn decrypt_async(&self, ciphertext: &[u8], private_key: &str) -> Result<String> {
        let config = self.config.clone();
        let ciphertext = ciphertext.to_vec();
        let private_key = zeroize::Zeroizing::new(private_key.to_owned());

        tokio::task::spawn_blocking(move || decrypt(&ciphertext, &private_key, &config))
            .await
            .map_err(|e| RsaError::Task {
                reason: e.to_string(),
            })?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::test_support::shared_key_pair;
    use crate::rsa::Padding;

    #[test]
    fn test_sync_roundtrip() {
        let service = RsaTransformService::default();
        let keypair = shared_key_pair();

        let result = service.encrypt("hello world", keypair.public_key());
        let decrypted = service
            .decrypt(result.ciphertext().unwrap(), keypair.private_key())
            .unwrap();
        assert_eq!(decrypted, "hello world");
    }

    #[test]
    fn test_service_uses_its_padding() {
        let legacy = RsaTransformService::new(TransformConfig::legacy());
        let modern = RsaTransformService::default();
        let keypair = shared_key_pair();

        assert_eq!(legacy.config().padding, Padding::Pkcs1v15);

        let ciphertext = legacy
            .encrypt("hello world", keypair.public_key())
            .into_result()
            .unwrap();
        assert!(modern.decrypt(&ciphertext, keypair.private_key()).is_err());
        assert_eq!(
            legacy.decrypt(&ciphertext, keypair.private_key()).unwrap(),
            "hello world"
        );
    }

    #[test]
    fn test_service_rejects_small_keys() {
        let service = RsaTransformService::default();
        assert!(matches!(
            service.generate_key_pair(1024),
            Err(RsaError::KeyGeneration { .. })
        ));
    }
}
