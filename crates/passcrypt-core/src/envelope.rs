//! Self-describing sealed messages.
//!
//! A [`SealedMessage`] records everything except the passphrase that
//! [`PassphraseCipher::decrypt`] needs: cipher parameters, salt, IV and
//! ciphertext. Sealing always draws a fresh salt and IV.

use serde::{Deserialize, Serialize};

use crate::crypto::{KeySize, PassphraseCipher, BLOCK_SIZE};
use crate::error::{CryptoFailure, PasscryptError, Result};
use crate::random::random_hex;

/// Current envelope format version.
pub const ENVELOPE_VERSION: u8 = 1;

/// Default salt length in bytes for sealed messages.
pub const DEFAULT_SALT_LENGTH: usize = 16;

/// Upper bound on iterations accepted from an (untrusted) envelope.
pub const MAX_ENVELOPE_ITERATIONS: u32 = 10_000_000;

/// Encrypted message with the parameters needed to open it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SealedMessage {
    pub version: u8,
    /// Key size in bits
    pub key_size: u16,
    pub iterations: u32,
    /// Hex-encoded salt
    pub salt: String,
    /// Hex-encoded IV
    pub iv: String,
    /// Base64-encoded ciphertext
    pub ciphertext: String,
}

impl PassphraseCipher {
    /// Encrypt `plaintext` under a freshly generated salt and IV.
    ///
    /// # Errors
    ///
    /// Returns `PasscryptError::InvalidConfig` if `salt_length` is zero, or
    /// `PasscryptError::CryptoOperationFailed` if randomness or encryption
    /// fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use passcrypt_core::{KeySize, PassphraseCipher};
    ///
    /// let cipher = PassphraseCipher::new(KeySize::Aes256, 1000).unwrap();
    /// let sealed = cipher.seal("correct horse", "hello world", 16).unwrap();
    /// assert_eq!(sealed.open("correct horse").unwrap(), "hello world");
    /// ```
    pub fn seal(
        &self,
        passphrase: &str,
        plaintext: &str,
        salt_length: usize,
    ) -> Result<SealedMessage> {
        if salt_length == 0 {
            return Err(PasscryptError::InvalidConfig(
                "Salt length must be at least 1 byte".to_string(),
            ));
        }

        let salt = random_hex(salt_length)?;
        let iv = random_hex(BLOCK_SIZE)?;
        let ciphertext = self.encrypt(&salt, &iv, passphrase, plaintext)?;
        tracing::debug!(salt_length, "sealed message");

        Ok(SealedMessage {
            version: ENVELOPE_VERSION,
            key_size: self.key_size().bits(),
            iterations: self.iterations(),
            salt,
            iv,
            ciphertext,
        })
    }
}

impl SealedMessage {
    /// Rebuild the cipher recorded in this envelope.
    ///
    /// Envelope parameters are untrusted, so every rejection here is a
    /// cryptographic failure rather than a configuration error.
    pub fn cipher(&self) -> Result<PassphraseCipher> {
        if self.version != ENVELOPE_VERSION {
            return Err(CryptoFailure::UnsupportedVersion(self.version).into());
        }
        if self.iterations > MAX_ENVELOPE_ITERATIONS {
            return Err(CryptoFailure::Envelope(format!(
                "iteration count {} exceeds limit of {}",
                self.iterations, MAX_ENVELOPE_ITERATIONS
            ))
            .into());
        }
        let key_size = KeySize::try_from(self.key_size)
            .map_err(|e| CryptoFailure::Envelope(e.to_string()))?;
        PassphraseCipher::new(key_size, self.iterations)
            .map_err(|e| CryptoFailure::Envelope(e.to_string()).into())
    }

    /// Decrypt the message with `passphrase`.
    pub fn open(&self, passphrase: &str) -> Result<String> {
        let cipher = self.cipher()?;
        cipher.decrypt(&self.salt, &self.iv, passphrase, &self.ciphertext)
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| CryptoFailure::Envelope(e.to_string()).into())
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CryptoFailure::Envelope(e.to_string()).into())
    }

    /// Parse an envelope from JSON.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map_err(|e| CryptoFailure::Envelope(e.to_string()).into())
    }
}
