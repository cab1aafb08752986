//! Application-level utilities for the Passcrypt CLI.
//!
//! This module provides:
//! - Config path resolution and lazy config loading
//! - Passphrase handling (environment variable or prompt)
//! - Reading text arguments from stdin

mod context;
mod input;
mod passphrase;
mod resolver;

// Re-export public API
pub use context::{check_random_length, AppContext};
pub use input::{read_file_input, read_text_input, strip_trailing_newline};
pub use passphrase::{read_passphrase, PassphrasePurpose};
