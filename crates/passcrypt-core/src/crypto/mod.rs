//! Cryptographic operations for Passcrypt.
//!
//! This module provides passphrase-based encryption built on well-audited
//! RustCrypto implementations:
//! - **PBKDF2-HMAC-SHA1**: passphrase + salt to key
//! - **AES-CBC with PKCS#7 padding**: block cipher under an explicit IV
//!
//! ## Security Model
//!
//! - Keys exist only for the duration of one call and are zeroized on drop
//! - Passphrases, keys and plaintext are never logged
//! - Every call builds its own cipher context; nothing is shared between calls
//!
//! ## Limits
//!
//! CBC with PKCS#7 is not authenticated. A wrong passphrase is detected by
//! padding or UTF-8 validation, which is a strong heuristic but not an
//! integrity guarantee.

pub mod cipher;
pub mod key;
pub mod passphrase;

pub use cipher::{PassphraseCipher, BLOCK_SIZE, DEFAULT_ITERATIONS};
pub use key::{derive_key, DerivedKey, KeySize};
pub use passphrase::{validate_passphrase, MIN_PASSPHRASE_LENGTH};
