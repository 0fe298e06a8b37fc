// RSA Module - Main module file
// Exports key generation, encryption, decryption and key encoding

pub mod decrypt;
pub mod encoding;
pub mod encrypt;
pub mod keygen;
pub mod padding;

pub use decrypt::{decrypt, decrypt_bytes};
pub use encoding::{
    private_key_from_pem, private_key_to_pem, public_key_fingerprint, public_key_from_pem,
    public_key_to_pem,
};
pub use encrypt::{encrypt, encrypt_bytes, EncryptionResult};
pub use keygen::{generate_default_key_pair, generate_key_pair, KeyPair};
pub use padding::Padding;
