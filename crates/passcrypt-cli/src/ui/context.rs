//! Terminal environment detection.

use std::io::IsTerminal;

use super::mode::OutputMode;

/// Resolved output settings for one invocation.
#[derive(Debug, Clone, Copy)]
pub struct UiContext {
    pub mode: OutputMode,
    /// Colors for stderr decorations (badges, errors)
    pub color: bool,
}

impl UiContext {
    /// Detect the output environment from flags, TTY state and env vars.
    pub fn from_env(json_flag: bool) -> Self {
        let term_is_dumb = std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false);
        let no_color = std::env::var_os("NO_COLOR").is_some();
        let mode = OutputMode::resolve(
            json_flag,
            std::io::stdout().is_terminal(),
            term_is_dumb,
            no_color,
        );
        let color = !term_is_dumb && !no_color && std::io::stderr().is_terminal();
        Self { mode, color }
    }

    /// Context with no terminal features.
    #[cfg(test)]
    pub fn plain() -> Self {
        Self {
            mode: OutputMode::Plain,
            color: false,
        }
    }
}
