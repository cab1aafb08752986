//! Constants used throughout the CLI.

/// Environment variable holding the passphrase for non-interactive use.
pub const PASSPHRASE_ENV: &str = "PASSCRYPT_PASSPHRASE";

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (clap usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure.
    pub const GENERAL: i32 = 1;

    /// Resource not found (config or envelope file).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Authentication failed (wrong passphrase, corrupted or malformed data).
    pub const AUTH_FAILED: i32 = 5;
}
