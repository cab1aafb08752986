//! JSON output documents.

use passcrypt_core::PassphraseCipher;

use crate::config::PasscryptConfig;

/// Print a JSON value to stdout.
pub fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Result of `encrypt`: everything needed to decrypt except the passphrase.
pub fn ciphertext_json(
    cipher: &PassphraseCipher,
    salt: &str,
    iv: &str,
    ciphertext: &str,
) -> serde_json::Value {
    serde_json::json!({
        "key_size": cipher.key_size().bits(),
        "iterations": cipher.iterations(),
        "salt": salt,
        "iv": iv,
        "ciphertext": ciphertext,
    })
}

pub fn plaintext_json(plaintext: &str) -> serde_json::Value {
    serde_json::json!({ "plaintext": plaintext })
}

pub fn random_json(hex: &str, bytes: usize) -> serde_json::Value {
    serde_json::json!({ "bytes": bytes, "hex": hex })
}

pub fn written_json(path: &str) -> serde_json::Value {
    serde_json::json!({ "written": path })
}

pub fn config_json(path: &str, exists: bool, config: &PasscryptConfig) -> serde_json::Value {
    serde_json::json!({
        "path": path,
        "exists": exists,
        "cipher": {
            "key_size": config.cipher.key_size.bits(),
            "iterations": config.cipher.iterations,
        },
        "random": {
            "salt_length": config.random.salt_length,
        },
    })
}
