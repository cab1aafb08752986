//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use passcrypt_core::PasscryptError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (config, envelope file)
    NotFound { message: String, hint: String },

    /// Authentication failed (wrong passphrase, corrupted data)
    AuthFailed {
        message: String,
        hint: Option<String>,
    },

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, .. } => write!(f, "{}", message),
            CliError::AuthFailed { message, .. } => write!(f, "{}", message),
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an AuthFailed error with message and optional hint.
    pub fn auth_failed(message: impl Into<String>) -> Self {
        CliError::AuthFailed {
            message: message.into(),
            hint: None,
        }
    }

    /// Create an AuthFailed error with message and hint.
    pub fn auth_failed_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::AuthFailed {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::AuthFailed { .. } => exit_codes::AUTH_FAILED,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }

    /// Hint printed below the error message, if any.
    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::NotFound { hint, .. } => Some(hint),
            CliError::AuthFailed { hint, .. } => hint.as_deref(),
            CliError::InvalidInput(_) => None,
        }
    }
}

impl From<PasscryptError> for CliError {
    fn from(err: PasscryptError) -> Self {
        match err {
            PasscryptError::CryptoOperationFailed(_) => CliError::auth_failed_with_hint(
                err.to_string(),
                "Hint: Check the passphrase, salt, IV and key settings used at encryption time.",
            ),
            PasscryptError::InvalidConfig(message) | PasscryptError::InvalidInput(message) => {
                CliError::InvalidInput(message)
            }
        }
    }
}

/// Exit code and hint for any error reaching `main`.
pub fn classify(err: &anyhow::Error) -> (i32, Option<String>) {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return (cli_err.exit_code(), cli_err.hint().map(String::from));
    }
    if let Some(core_err) = err.downcast_ref::<PasscryptError>() {
        let code = match core_err {
            PasscryptError::CryptoOperationFailed(_) => exit_codes::AUTH_FAILED,
            PasscryptError::InvalidConfig(_) | PasscryptError::InvalidInput(_) => {
                exit_codes::INVALID_INPUT
            }
        };
        return (code, None);
    }
    (exit_codes::GENERAL, None)
}
