//! Key derivation using PBKDF2-HMAC-SHA1.
//!
//! This module stretches a passphrase and salt into AES key material. The
//! derivation is the standard PBKDF2 construction, so keys match any other
//! PBKDF2-HMAC-SHA1 implementation given the same inputs.

use std::fmt;

use pbkdf2::pbkdf2_hmac;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use zeroize::ZeroizeOnDrop;

use crate::error::{CryptoFailure, PasscryptError, Result};

/// AES key length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum KeySize {
    /// 128-bit key (AES-128)
    #[default]
    Aes128,
    /// 192-bit key (AES-192)
    Aes192,
    /// 256-bit key (AES-256)
    Aes256,
}

impl KeySize {
    /// Key length in bits.
    pub const fn bits(self) -> u16 {
        match self {
            KeySize::Aes128 => 128,
            KeySize::Aes192 => 192,
            KeySize::Aes256 => 256,
        }
    }

    /// Key length in bytes.
    pub const fn bytes(self) -> usize {
        self.bits() as usize / 8
    }
}

impl TryFrom<u16> for KeySize {
    type Error = PasscryptError;

    fn try_from(bits: u16) -> Result<Self> {
        match bits {
            128 => Ok(KeySize::Aes128),
            192 => Ok(KeySize::Aes192),
            256 => Ok(KeySize::Aes256),
            other => Err(PasscryptError::InvalidConfig(format!(
                "Key size must be 128, 192 or 256 bits (got {})",
                other
            ))),
        }
    }
}

impl From<KeySize> for u16 {
    fn from(size: KeySize) -> Self {
        size.bits()
    }
}

impl fmt::Display for KeySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

/// A cryptographic key derived from a passphrase.
///
/// Key material is zeroized from memory when dropped.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: Vec<u8>,
}

impl DerivedKey {
    /// Create a new DerivedKey from raw bytes.
    ///
    /// # Security
    ///
    /// The caller is responsible for ensuring the bytes come from a secure source.
    pub(crate) fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { key: bytes }
    }

    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for immediate encryption operations.
    pub fn as_bytes(&self) -> &[u8] {
        &self.key
    }
}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive an AES key from a passphrase using PBKDF2-HMAC-SHA1.
///
/// # Arguments
///
/// * `passphrase` - The passphrase to derive from (used as UTF-8 bytes)
/// * `salt` - Non-empty salt, stored alongside the ciphertext
/// * `iterations` - PBKDF2 round count, at least 1
/// * `key_size` - Length of the key to produce
///
/// # Security
///
/// - Same passphrase + salt + iterations always produces the same key
/// - The returned key is zeroized on drop
///
/// # Examples
///
/// ```
/// use passcrypt_core::crypto::{derive_key, KeySize};
///
/// let key = derive_key("my-passphrase", b"salt", 1000, KeySize::Aes256).unwrap();
/// assert_eq!(key.as_bytes().len(), 32);
/// ```
pub fn derive_key(
    passphrase: &str,
    salt: &[u8],
    iterations: u32,
    key_size: KeySize,
) -> Result<DerivedKey> {
    if salt.is_empty() {
        return Err(CryptoFailure::KeyDerivation("Salt cannot be empty".to_string()).into());
    }

    if iterations == 0 {
        return Err(
            CryptoFailure::KeyDerivation("Iteration count must be at least 1".to_string()).into(),
        );
    }

    tracing::trace!(iterations, key_bits = key_size.bits(), "deriving key");

    let mut key_bytes = vec![0u8; key_size.bytes()];
    pbkdf2_hmac::<Sha1>(passphrase.as_bytes(), salt, iterations, &mut key_bytes);

    Ok(DerivedKey::from_bytes(key_bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_derivation_deterministic() {
        let key1 = derive_key("test-passphrase", b"salt1234", 1000, KeySize::Aes128).unwrap();
        let key2 = derive_key("test-passphrase", b"salt1234", 1000, KeySize::Aes128).unwrap();

        assert_eq!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_salt_different_key() {
        let key1 = derive_key("test-passphrase", b"salt-one", 1000, KeySize::Aes128).unwrap();
        let key2 = derive_key("test-passphrase", b"salt-two", 1000, KeySize::Aes128).unwrap();

        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_passphrase_different_key() {
        let key1 = derive_key("passphrase-one", b"fixed-salt", 1000, KeySize::Aes128).unwrap();
        let key2 = derive_key("passphrase-two", b"fixed-salt", 1000, KeySize::Aes128).unwrap();

        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_iterations_different_key() {
        let key1 = derive_key("test-passphrase", b"fixed-salt", 1000, KeySize::Aes128).unwrap();
        let key2 = derive_key("test-passphrase", b"fixed-salt", 1001, KeySize::Aes128).unwrap();

        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_key_lengths() {
        for size in [KeySize::Aes128, KeySize::Aes192, KeySize::Aes256] {
            let key = derive_key("test-passphrase", b"salt", 10, size).unwrap();
            assert_eq!(key.as_bytes().len(), size.bytes());
        }
    }

    #[test]
    fn test_rfc6070_vectors() {
        // RFC 6070 outputs are 20+ bytes; PBKDF2 output prefixes are stable.
        let key = derive_key("password", b"salt", 1, KeySize::Aes128).unwrap();
        assert_eq!(hex::encode(key.as_bytes()), "0c60c80f961f0e71f3a9b524af601206");

        let key = derive_key("password", b"salt", 4096, KeySize::Aes128).unwrap();
        assert_eq!(hex::encode(key.as_bytes()), "4b007901b765489abead49d926f721d0");

        let key = derive_key(
            "passwordPASSWORDpassword",
            b"saltSALTsaltSALTsaltSALTsaltSALTsalt",
            4096,
            KeySize::Aes192,
        )
        .unwrap();
        assert_eq!(
            hex::encode(key.as_bytes()),
            "3d2eec4fe41c849b80c8d83662c0e44a8b291a964cf2f070"
        );
    }

    #[test]
    fn test_empty_salt_rejected() {
        let err = derive_key("test-passphrase", b"", 1000, KeySize::Aes128).unwrap_err();
        assert!(err.is_crypto_failure());
        assert!(matches!(err.failure(), Some(CryptoFailure::KeyDerivation(_))));
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let err = derive_key("test-passphrase", b"salt", 0, KeySize::Aes128).unwrap_err();
        assert!(err.is_crypto_failure());
    }

    #[test]
    fn test_key_size_from_bits() {
        assert_eq!(KeySize::try_from(128).unwrap(), KeySize::Aes128);
        assert_eq!(KeySize::try_from(192).unwrap(), KeySize::Aes192);
        assert_eq!(KeySize::try_from(256).unwrap(), KeySize::Aes256);

        let err = KeySize::try_from(512).unwrap_err();
        assert!(matches!(err, PasscryptError::InvalidConfig(_)));
        assert!(err.to_string().contains("512"));
    }

    #[test]
    fn test_derived_key_debug_redacts() {
        let key = derive_key("test-passphrase", b"salt", 10, KeySize::Aes128).unwrap();

        let debug_output = format!("{:?}", key);
        assert!(debug_output.contains("REDACTED"));

        let key_hex = hex::encode(&key.as_bytes()[..4]);
        assert!(!debug_output.contains(&key_hex));
    }
}
