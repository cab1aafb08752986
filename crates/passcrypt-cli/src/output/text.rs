//! Plain text output.

use owo_colors::OwoColorize;

use crate::ui::{kv, UiContext};

/// Print `key: value` lines, with bold keys in pretty mode.
pub fn print_fields(ctx: &UiContext, fields: &[(&str, &str)]) {
    for (key, value) in fields {
        if ctx.mode.is_pretty() {
            println!("{}: {}", key.bold(), value);
        } else {
            println!("{}", kv(key, value));
        }
    }
}
