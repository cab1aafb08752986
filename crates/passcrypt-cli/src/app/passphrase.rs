//! Passphrase acquisition.

use dialoguer::Password;
use secrecy::{ExposeSecret, SecretString};

use passcrypt_core::crypto::validate_passphrase;

use crate::constants::PASSPHRASE_ENV;
use crate::errors::CliError;

/// Why the passphrase is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassphrasePurpose {
    /// Creating new ciphertext: confirm when prompting, enforce policy
    Encrypt,
    /// Reading existing ciphertext
    Decrypt,
}

/// Read the passphrase from `PASSCRYPT_PASSPHRASE` or an interactive prompt.
pub fn read_passphrase(
    interactive: bool,
    purpose: PassphrasePurpose,
) -> anyhow::Result<SecretString> {
    let passphrase = SecretString::from(match env_passphrase(purpose) {
        Some(value) => {
            tracing::debug!("using passphrase from environment");
            value
        }
        None => prompt_passphrase(interactive, purpose)?,
    });

    if purpose == PassphrasePurpose::Encrypt {
        validate_passphrase(passphrase.expose_secret()).map_err(CliError::from)?;
    }

    Ok(passphrase)
}

/// A blank value counts as unset when creating ciphertext. Decrypt takes it
/// as-is so data sealed under an empty passphrase stays readable.
fn env_passphrase(purpose: PassphrasePurpose) -> Option<String> {
    let value = std::env::var(PASSPHRASE_ENV).ok()?;
    match purpose {
        PassphrasePurpose::Encrypt if value.trim().is_empty() => None,
        _ => Some(value),
    }
}

fn prompt_passphrase(interactive: bool, purpose: PassphrasePurpose) -> anyhow::Result<String> {
    if !interactive {
        return Err(CliError::auth_failed_with_hint(
            "No passphrase provided and no TTY available.",
            format!("Hint: Set {}.", PASSPHRASE_ENV),
        )
        .into());
    }

    let prompt = Password::new().with_prompt("Passphrase");
    let prompt = match purpose {
        PassphrasePurpose::Encrypt => {
            prompt.with_confirmation("Confirm passphrase", "Passphrases do not match")
        }
        PassphrasePurpose::Decrypt => prompt.allow_empty_password(true),
    };

    prompt
        .interact()
        .map_err(|e| CliError::auth_failed(format!("Failed to read passphrase: {}", e)).into())
}
