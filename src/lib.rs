//! RSA key generation, encryption and decryption.
//!
//! Keys travel as PEM text: SubjectPublicKeyInfo for public keys and PKCS#8
//! for private keys. Encryption defaults to OAEP with SHA-256; PKCS#1 v1.5 is
//! available through [`TransformConfig::legacy`].
//!
//! [`encrypt`] reports failures inside its [`EncryptionResult`] and never
//! returns an error, while [`decrypt`] and [`generate_key_pair`] return
//! [`Result`]. [`EncryptionResult::into_result`] bridges the two.
//!
//! ```no_run
//! use rsa_transform::{RsaTransformService, TransformConfig};
//!
//! let service = RsaTransformService::new(TransformConfig::default());
//! let keypair = service.generate_key_pair(2048)?;
//!
//! let encrypted = service.encrypt("hello world", keypair.public_key());
//! let ciphertext = encrypted.into_result()?;
//! assert_eq!(ciphertext.len(), 256);
//!
//! let plaintext = service.decrypt(&ciphertext, keypair.private_key())?;
//! assert_eq!(plaintext, "hello world");
//! # Ok::<(), rsa_transform::RsaError>(())
//! ```

pub mod error;
pub mod rsa;
pub mod service;
pub mod util;

pub use error::{Result, RsaError};
pub use crate::rsa::{
    decrypt, encrypt, generate_default_key_pair, generate_key_pair, public_key_fingerprint,
    EncryptionResult, KeyPair, Padding,
};
pub use service::RsaTransformService;
pub use tokio_util::sync::CancellationToken;
pub use util::TransformConfig;
