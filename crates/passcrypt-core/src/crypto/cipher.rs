//! AES-CBC passphrase cipher.
//!
//! [`PassphraseCipher`] derives a key with PBKDF2-HMAC-SHA1 and runs AES in
//! CBC mode with PKCS#7 padding under a caller-supplied IV. A fresh cipher
//! context is built for every call; the struct only carries configuration,
//! so it is `Copy`, `Send` and `Sync`.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::{Aes128, Aes192, Aes256};

use crate::encoding::{from_base64, from_hex, to_base64};
use crate::error::{CryptoFailure, PasscryptError, Result};

use super::key::{derive_key, DerivedKey, KeySize};

/// AES block size in bytes; also the required IV length.
pub const BLOCK_SIZE: usize = 16;

/// Default PBKDF2 iteration count.
pub const DEFAULT_ITERATIONS: u32 = 100_000;

/// Passphrase-based AES-CBC cipher with fixed key size and iteration count.
///
/// # Examples
///
/// ```
/// use passcrypt_core::{KeySize, PassphraseCipher};
///
/// let cipher = PassphraseCipher::new(KeySize::Aes128, 1000).unwrap();
/// let salt = "00112233";
/// let iv = "000102030405060708090a0b0c0d0e0f";
///
/// let ciphertext = cipher.encrypt(salt, iv, "correct horse", "hello world").unwrap();
/// let plaintext = cipher.decrypt(salt, iv, "correct horse", &ciphertext).unwrap();
/// assert_eq!(plaintext, "hello world");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassphraseCipher {
    key_size: KeySize,
    iterations: u32,
}

impl Default for PassphraseCipher {
    fn default() -> Self {
        Self {
            key_size: KeySize::default(),
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl PassphraseCipher {
    /// Create a cipher with the given key size and PBKDF2 iteration count.
    ///
    /// # Errors
    ///
    /// Returns `PasscryptError::InvalidConfig` if `iterations` is zero.
    pub fn new(key_size: KeySize, iterations: u32) -> Result<Self> {
        if iterations == 0 {
            return Err(PasscryptError::InvalidConfig(
                "Iteration count must be at least 1".to_string(),
            ));
        }
        tracing::debug!(key_bits = key_size.bits(), iterations, "configured cipher");
        Ok(Self {
            key_size,
            iterations,
        })
    }

    pub fn key_size(&self) -> KeySize {
        self.key_size
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Encrypt `plaintext` and return base64 ciphertext.
    ///
    /// `salt` and `iv` are hex text; `iv` must decode to 16 bytes. The output
    /// is deterministic for identical inputs, so callers must supply a fresh
    /// IV for every message.
    ///
    /// # Errors
    ///
    /// Returns `PasscryptError::CryptoOperationFailed` for malformed hex, an
    /// empty salt or a wrong-length IV.
    pub fn encrypt(
        &self,
        salt: &str,
        iv: &str,
        passphrase: &str,
        plaintext: &str,
    ) -> Result<String> {
        let salt = from_hex(salt)?;
        let iv = from_hex(iv)?;
        let encrypted = self.encrypt_bytes(&salt, &iv, passphrase, plaintext.as_bytes())?;
        Ok(to_base64(&encrypted))
    }

    /// Decrypt base64 `ciphertext` back to text.
    ///
    /// # Errors
    ///
    /// Returns `PasscryptError::CryptoOperationFailed` if any input is
    /// malformed, if padding validation fails (the usual symptom of a wrong
    /// passphrase, salt or IV) or if the result is not UTF-8.
    pub fn decrypt(
        &self,
        salt: &str,
        iv: &str,
        passphrase: &str,
        ciphertext: &str,
    ) -> Result<String> {
        let salt = from_hex(salt)?;
        let iv = from_hex(iv)?;
        let ciphertext = from_base64(ciphertext)?;
        let decrypted = self.decrypt_bytes(&salt, &iv, passphrase, &ciphertext)?;
        Ok(String::from_utf8(decrypted)?)
    }

    /// Encrypt raw bytes with already-decoded salt and IV.
    pub fn encrypt_bytes(
        &self,
        salt: &[u8],
        iv: &[u8],
        passphrase: &str,
        plaintext: &[u8],
    ) -> Result<Vec<u8>> {
        let key = derive_key(passphrase, salt, self.iterations, self.key_size)?;
        let encrypted = cbc_encrypt(self.key_size, &key, iv, plaintext)?;
        tracing::trace!(
            plaintext_len = plaintext.len(),
            ciphertext_len = encrypted.len(),
            "encrypted"
        );
        Ok(encrypted)
    }

    /// Decrypt raw bytes with already-decoded salt and IV.
    pub fn decrypt_bytes(
        &self,
        salt: &[u8],
        iv: &[u8],
        passphrase: &str,
        ciphertext: &[u8],
    ) -> Result<Vec<u8>> {
        let key = derive_key(passphrase, salt, self.iterations, self.key_size)?;
        let decrypted = cbc_decrypt(self.key_size, &key, iv, ciphertext)?;
        tracing::trace!(
            ciphertext_len = ciphertext.len(),
            plaintext_len = decrypted.len(),
            "decrypted"
        );
        Ok(decrypted)
    }
}

fn cbc_encrypt(
    key_size: KeySize,
    key: &DerivedKey,
    iv: &[u8],
    data: &[u8],
) -> std::result::Result<Vec<u8>, CryptoFailure> {
    match key_size {
        KeySize::Aes128 => encrypt_with::<cbc::Encryptor<Aes128>>(key, iv, data),
        KeySize::Aes192 => encrypt_with::<cbc::Encryptor<Aes192>>(key, iv, data),
        KeySize::Aes256 => encrypt_with::<cbc::Encryptor<Aes256>>(key, iv, data),
    }
}

fn cbc_decrypt(
    key_size: KeySize,
    key: &DerivedKey,
    iv: &[u8],
    data: &[u8],
) -> std::result::Result<Vec<u8>, CryptoFailure> {
    match key_size {
        KeySize::Aes128 => decrypt_with::<cbc::Decryptor<Aes128>>(key, iv, data),
        KeySize::Aes192 => decrypt_with::<cbc::Decryptor<Aes192>>(key, iv, data),
        KeySize::Aes256 => decrypt_with::<cbc::Decryptor<Aes256>>(key, iv, data),
    }
}

fn encrypt_with<C>(
    key: &DerivedKey,
    iv: &[u8],
    data: &[u8],
) -> std::result::Result<Vec<u8>, CryptoFailure>
where
    C: KeyIvInit + BlockEncryptMut,
{
    let cipher = C::new_from_slices(key.as_bytes(), iv).map_err(|e| init_failure(iv, e))?;
    Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(data))
}

fn decrypt_with<C>(
    key: &DerivedKey,
    iv: &[u8],
    data: &[u8],
) -> std::result::Result<Vec<u8>, CryptoFailure>
where
    C: KeyIvInit + BlockDecryptMut,
{
    let cipher = C::new_from_slices(key.as_bytes(), iv).map_err(|e| init_failure(iv, e))?;
    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(data)
        .map_err(|_| CryptoFailure::Padding)
}

fn init_failure(iv: &[u8], err: impl std::fmt::Display) -> CryptoFailure {
    if iv.len() != BLOCK_SIZE {
        CryptoFailure::CipherInit(format!(
            "IV must be {} bytes (got {})",
            BLOCK_SIZE,
            iv.len()
        ))
    } else {
        CryptoFailure::CipherInit(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SALT: &str = "00112233";
    const IV: &str = "000102030405060708090a0b0c0d0e0f";

    fn cipher() -> PassphraseCipher {
        PassphraseCipher::new(KeySize::Aes128, 1000).unwrap()
    }

    #[test]
    fn test_encrypt_decrypt_round_trip() {
        let cipher = cipher();
        let ciphertext = cipher
            .encrypt(SALT, IV, "correct horse", "hello world")
            .unwrap();
        let plaintext = cipher
            .decrypt(SALT, IV, "correct horse", &ciphertext)
            .unwrap();

        assert_eq!(plaintext, "hello world");
    }

    #[test]
    fn test_encrypt_is_deterministic() {
        let cipher = cipher();
        let first = cipher.encrypt(SALT, IV, "correct horse", "hello world").unwrap();
        let second = cipher.encrypt(SALT, IV, "correct horse", "hello world").unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_ciphertext_length_is_padded() {
        let cipher = cipher();
        // 11 bytes pad to one block, 16 bytes pad to two.
        let short = cipher.encrypt_bytes(b"salt", &[0u8; 16], "p", &[0u8; 11]).unwrap();
        let full = cipher.encrypt_bytes(b"salt", &[0u8; 16], "p", &[0u8; 16]).unwrap();
        let empty = cipher.encrypt_bytes(b"salt", &[0u8; 16], "p", &[]).unwrap();

        assert_eq!(short.len(), 16);
        assert_eq!(full.len(), 32);
        assert_eq!(empty.len(), 16);
    }

    #[test]
    fn test_wrong_passphrase_fails() {
        let cipher = cipher();
        let ciphertext = cipher.encrypt(SALT, IV, "correct horse", "hello world").unwrap();

        let err = cipher
            .decrypt(SALT, IV, "wrong passphrase", &ciphertext)
            .unwrap_err();
        assert!(err.is_crypto_failure());
    }

    #[test]
    fn test_wrong_salt_fails() {
        let cipher = cipher();
        let ciphertext = cipher.encrypt(SALT, IV, "correct horse", "hello world").unwrap();

        assert!(cipher
            .decrypt("00112234", IV, "correct horse", &ciphertext)
            .is_err());
    }

    #[test]
    fn test_different_key_sizes_do_not_interoperate() {
        let small = PassphraseCipher::new(KeySize::Aes128, 1000).unwrap();
        let large = PassphraseCipher::new(KeySize::Aes256, 1000).unwrap();

        let a = small.encrypt(SALT, IV, "correct horse", "hello world").unwrap();
        let b = large.encrypt(SALT, IV, "correct horse", "hello world").unwrap();
        assert_ne!(a, b);
        assert_eq!(
            large.decrypt(SALT, IV, "correct horse", &b).unwrap(),
            "hello world"
        );
    }

    #[test]
    fn test_malformed_salt_rejected() {
        let cipher = cipher();
        for salt in ["zz112233", "0011223", ""] {
            let err = cipher.encrypt(salt, IV, "correct horse", "hello").unwrap_err();
            assert!(err.is_crypto_failure(), "salt {:?} should fail", salt);
        }
    }

    #[test]
    fn test_malformed_iv_rejected() {
        let cipher = cipher();
        for iv in ["not-hex", "000102", "000102030405060708090a0b0c0d0e0f00", "0"] {
            let err = cipher.encrypt(SALT, iv, "correct horse", "hello").unwrap_err();
            assert!(err.is_crypto_failure(), "iv {:?} should fail", iv);
        }
    }

    #[test]
    fn test_short_iv_reports_length() {
        let err = cipher()
            .encrypt(SALT, "000102", "correct horse", "hello")
            .unwrap_err();
        match err.failure() {
            Some(CryptoFailure::CipherInit(message)) => assert!(message.contains("16 bytes")),
            other => panic!("unexpected failure: {:?}", other),
        }
    }

    #[test]
    fn test_truncated_ciphertext_rejected() {
        let cipher = cipher();
        let ciphertext = cipher
            .encrypt_bytes(b"salt", &[0u8; 16], "correct horse", b"hello world")
            .unwrap();

        let err = cipher
            .decrypt_bytes(b"salt", &[0u8; 16], "correct horse", &ciphertext[..10])
            .unwrap_err();
        assert!(matches!(err.failure(), Some(CryptoFailure::Padding)));

        let err = cipher
            .decrypt_bytes(b"salt", &[0u8; 16], "correct horse", &[])
            .unwrap_err();
        assert!(err.is_crypto_failure());
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let err = PassphraseCipher::new(KeySize::Aes128, 0).unwrap_err();
        assert!(matches!(err, PasscryptError::InvalidConfig(_)));
    }

    #[test]
    fn test_default_configuration() {
        let cipher = PassphraseCipher::default();
        assert_eq!(cipher.key_size(), KeySize::Aes128);
        assert_eq!(cipher.iterations(), DEFAULT_ITERATIONS);
    }

    #[test]
    fn test_nist_cbc_aes128_vector() {
        // NIST SP 800-38A F.2.1, first block
        let key = DerivedKey::from_bytes(hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap());
        let iv = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
        let block = hex::decode("6bc1bee22e409f96e93d7e117393172a").unwrap();

        let encrypted = cbc_encrypt(KeySize::Aes128, &key, &iv, &block).unwrap();
        assert_eq!(encrypted.len(), 32);
        assert_eq!(
            hex::encode(&encrypted[..16]),
            "7649abac8119b246cee98e9b12e9197d"
        );

        let decrypted = cbc_decrypt(KeySize::Aes128, &key, &iv, &encrypted).unwrap();
        assert_eq!(decrypted, block);
    }

    #[test]
    fn test_nist_cbc_aes256_vector() {
        // NIST SP 800-38A F.2.5, first block
        let key = DerivedKey::from_bytes(
            hex::decode("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4")
                .unwrap(),
        );
        let iv = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
        let block = hex::decode("6bc1bee22e409f96e93d7e117393172a").unwrap();

        let encrypted = cbc_encrypt(KeySize::Aes256, &key, &iv, &block).unwrap();
        assert_eq!(
            hex::encode(&encrypted[..16]),
            "f58c4c04d6e5f1ba779eabfb5f7bfbd6"
        );
    }
}
