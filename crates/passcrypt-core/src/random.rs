//! Salt and IV generation from the operating system CSPRNG.

use crate::encoding::to_hex;
use crate::error::{CryptoFailure, Result};

/// Largest buffer `random_bytes` will fill (1 MiB).
pub const MAX_RANDOM_LENGTH: usize = 1024 * 1024;

/// Fill a fresh buffer of `length` bytes from the OS random source.
///
/// Lengths above [`MAX_RANDOM_LENGTH`] are rejected.
pub fn random_bytes(length: usize) -> Result<Vec<u8>> {
    if length > MAX_RANDOM_LENGTH {
        return Err(CryptoFailure::Random(format!(
            "Requested {} random bytes; the limit is {}",
            length, MAX_RANDOM_LENGTH
        ))
        .into());
    }
    let mut bytes = vec![0u8; length];
    getrandom::getrandom(&mut bytes)
        .map_err(|e| CryptoFailure::Random(format!("Failed to generate random bytes: {}", e)))?;
    Ok(bytes)
}

/// Generate `length` random bytes and return them hex-encoded.
///
/// The result is always `2 * length` characters long.
///
/// # Examples
///
/// ```
/// use passcrypt_core::random_hex;
///
/// let iv = random_hex(16).unwrap();
/// assert_eq!(iv.len(), 32);
/// ```
pub fn random_hex(length: usize) -> Result<String> {
    Ok(to_hex(&random_bytes(length)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_hex_length() {
        for length in [0, 1, 8, 16, 32] {
            assert_eq!(random_hex(length).unwrap().len(), length * 2);
        }
    }

    #[test]
    fn test_oversized_length_rejected() {
        for length in [MAX_RANDOM_LENGTH + 1, usize::MAX] {
            let err = random_hex(length).unwrap_err();
            assert!(matches!(err.failure(), Some(CryptoFailure::Random(_))));
        }
        assert_eq!(random_bytes(MAX_RANDOM_LENGTH).unwrap().len(), MAX_RANDOM_LENGTH);
    }

    #[test]
    fn test_random_hex_differs() {
        let a = random_hex(16).unwrap();
        let b = random_hex(16).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_random_hex_is_valid_hex() {
        let value = random_hex(16).unwrap();
        assert!(value.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(crate::encoding::from_hex(&value).unwrap().len(), 16);
    }
}
