//! Text encodings for salts, IVs and ciphertext.
//!
//! Salts and IVs travel as hex, ciphertext as standard RFC 4648 base64 with
//! padding. Hex is emitted uppercase and accepted in either case.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::Result;

/// Encode bytes as uppercase hex.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Decode hex text (either case) into bytes.
///
/// Fails on odd length or any non-hex character.
pub fn from_hex(text: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(text)?)
}

/// Encode bytes as padded standard base64.
pub fn to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode padded standard base64 into bytes.
pub fn from_base64(text: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(text)?)
}
