//! Rendering helpers for stderr decorations and plain key/value output.

use owo_colors::OwoColorize;

use super::context::UiContext;
use super::theme::Badge;

/// Render a badge followed by a message, colored when allowed.
pub fn badge(ctx: &UiContext, badge: Badge, message: &str) -> String {
    if !ctx.color {
        return format!("{} {}", badge.text(), message);
    }
    let token = match badge {
        Badge::Ok => badge.text().green().bold().to_string(),
        Badge::Warn => badge.text().yellow().bold().to_string(),
    };
    format!("{} {}", token, message)
}

/// Render a `key: value` line.
pub fn kv(key: &str, value: &str) -> String {
    format!("{}: {}", key, value)
}

/// Print an error (and optional hint) to stderr.
pub fn print_error(ctx: &UiContext, message: &str, hint: Option<&str>) {
    if ctx.color {
        eprintln!("{} {}", "Error:".red().bold(), message);
        if let Some(hint) = hint {
            eprintln!("{}", hint.dimmed());
        }
    } else {
        eprintln!("Error: {}", message);
        if let Some(hint) = hint {
            eprintln!("{}", hint);
        }
    }
}
