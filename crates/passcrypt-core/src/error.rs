//! Error types for Passcrypt core operations.
//!
//! Every failure of an encrypt, decrypt, seal or open call surfaces as
//! [`PasscryptError::CryptoOperationFailed`]. Its display text is the same
//! whatever went wrong; the concrete [`CryptoFailure`] is only reachable
//! through [`std::error::Error::source`].

use thiserror::Error;

/// Result type alias for Passcrypt operations.
pub type Result<T> = std::result::Result<T, PasscryptError>;

/// Core error type for Passcrypt operations.
#[derive(Debug, Error)]
pub enum PasscryptError {
    /// Any failure while encoding, deriving, encrypting or decrypting
    #[error("Cryptographic operation failed")]
    CryptoOperationFailed(#[from] CryptoFailure),

    /// Rejected construction parameters (key size, iterations, salt length)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid user input (passphrase policy)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl PasscryptError {
    /// The underlying cause, if this is a cryptographic failure.
    pub fn failure(&self) -> Option<&CryptoFailure> {
        match self {
            PasscryptError::CryptoOperationFailed(failure) => Some(failure),
            _ => None,
        }
    }

    /// Whether this error came from a cryptographic operation.
    pub fn is_crypto_failure(&self) -> bool {
        matches!(self, PasscryptError::CryptoOperationFailed(_))
    }
}

/// Underlying cause of a [`PasscryptError::CryptoOperationFailed`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CryptoFailure {
    #[error("malformed hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("malformed base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    #[error("cipher initialization failed: {0}")]
    CipherInit(String),

    /// Wrong key, wrong IV or corrupted ciphertext usually end up here.
    #[error("padding validation failed")]
    Padding,

    #[error("decrypted data is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("random source failed: {0}")]
    Random(String),

    #[error("malformed envelope: {0}")]
    Envelope(String),

    #[error("unsupported envelope version {0}")]
    UnsupportedVersion(u8),
}

impl From<hex::FromHexError> for PasscryptError {
    fn from(err: hex::FromHexError) -> Self {
        PasscryptError::CryptoOperationFailed(err.into())
    }
}

impl From<base64::DecodeError> for PasscryptError {
    fn from(err: base64::DecodeError) -> Self {
        PasscryptError::CryptoOperationFailed(err.into())
    }
}

impl From<std::string::FromUtf8Error> for PasscryptError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        PasscryptError::CryptoOperationFailed(err.into())
    }
}
