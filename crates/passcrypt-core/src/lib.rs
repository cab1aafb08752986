//! # Passcrypt Core
//!
//! Core library for Passcrypt - passphrase-based AES-CBC encryption of text.
//!
//! A key is derived from the passphrase and a salt with PBKDF2-HMAC-SHA1, then
//! AES encrypts the UTF-8 plaintext in CBC mode with PKCS#7 padding under an
//! explicit IV. Salts and IVs travel as hex, ciphertext as base64, so the
//! output interoperates with any standard implementation of the same
//! primitives.
//!
//! ## Architecture
//!
//! - **crypto**: Key derivation, the AES-CBC cipher, passphrase policy
//! - **encoding**: Hex and base64 helpers
//! - **random**: Salt and IV generation from the OS CSPRNG
//! - **envelope**: Self-describing sealed messages (JSON)

pub mod crypto;
pub mod encoding;
pub mod envelope;
pub mod error;
pub mod random;

pub use crypto::{KeySize, PassphraseCipher};
pub use encoding::{from_base64, from_hex, to_base64, to_hex};
pub use envelope::SealedMessage;
pub use error::{CryptoFailure, PasscryptError, Result};
pub use random::{random_bytes, random_hex, MAX_RANDOM_LENGTH};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_cipher_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PassphraseCipher>();
        assert_send_sync::<PasscryptError>();
    }
}
