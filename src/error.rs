// RSA Transform Errors
// Error taxonomy shared by key generation, encryption and decryption

/// All errors produced by the RSA transform operations.
///
/// Messages describe the failure without echoing key material or plaintext.
#[derive(Debug, thiserror::Error)]
pub enum RsaError {
    #[error("Key generation failed: {reason}")]
    KeyGeneration { reason: String },

    #[error("Text encoding failed: {reason}")]
    Encoding { reason: String },

    #[error(
        "Plaintext too large: {len} bytes, but this key and padding accept at most {max} bytes"
    )]
    PlaintextTooLarge { len: usize, max: usize },

    #[error("Encryption failed: {reason}")]
    Encryption { reason: String },

    #[error("Decryption failed: {reason}")]
    Decryption { reason: String },

    #[error("Invalid key: {reason}")]
    InvalidKey { reason: String },

    #[error("Invalid configuration: {detail}")]
    Config { detail: String },

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Background task failed: {reason}")]
    Task { reason: String },
}

impl RsaError {
    pub(crate) fn key_generation(reason: impl Into<String>) -> Self {
        RsaError::KeyGeneration {
            reason: reason.into(),
        }
    }

    pub(crate) fn decryption(reason: impl Into<String>) -> Self {
        RsaError::Decryption {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_key(reason: impl Into<String>) -> Self {
        RsaError::InvalidKey {
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RsaError>;
