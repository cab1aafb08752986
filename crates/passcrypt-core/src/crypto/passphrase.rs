//! Passphrase validation.
//!
//! Enforces minimum requirements for passphrases used to create new
//! ciphertext. Decryption never applies this policy, so data produced under
//! weaker passphrases stays readable.

use crate::error::{PasscryptError, Result};

/// Minimum passphrase length in characters.
pub const MIN_PASSPHRASE_LENGTH: usize = 8;

/// Validate passphrase meets minimum security requirements.
///
/// # Requirements
///
/// - At least 8 characters long
/// - Not empty or only whitespace
///
/// # Examples
///
/// ```
/// use passcrypt_core::crypto::validate_passphrase;
///
/// assert!(validate_passphrase("correct horse battery").is_ok());
/// assert!(validate_passphrase("short").is_err());
/// ```
pub fn validate_passphrase(passphrase: &str) -> Result<()> {
    if passphrase.trim().is_empty() {
        return Err(PasscryptError::InvalidInput(
            "Passphrase cannot be empty".to_string(),
        ));
    }

    let length = passphrase.chars().count();
    if length < MIN_PASSPHRASE_LENGTH {
        return Err(PasscryptError::InvalidInput(format!(
            "Passphrase must be at least {} characters (got {})",
            MIN_PASSPHRASE_LENGTH, length
        )));
    }

    Ok(())
}
