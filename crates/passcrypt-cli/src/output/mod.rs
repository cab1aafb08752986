//! Output formatting helpers for the CLI.
//!
//! Results go to stdout, either as JSON documents or as plain text lines;
//! decorations and errors go to stderr.

mod json;
mod text;

// Re-export public API
pub use json::{ciphertext_json, config_json, plaintext_json, print_json, random_json, written_json};
pub use text::print_fields;
