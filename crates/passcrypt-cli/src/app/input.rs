//! Text input from arguments, stdin or files.

use std::io::Read;
use std::path::Path;

use crate::errors::CliError;

/// Use `value` if given, otherwise read all of stdin.
pub fn read_text_input(value: Option<&str>) -> anyhow::Result<String> {
    if let Some(value) = value {
        return Ok(value.to_string());
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
    Ok(buffer)
}

/// Read a whole file as UTF-8 text.
pub fn read_file_input(path: &Path) -> anyhow::Result<String> {
    if !path.exists() {
        return Err(CliError::not_found(
            format!("File not found: {}", path.display()),
            "Hint: Check the path passed to --file.",
        )
        .into());
    }
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))
}

/// Drop exactly one trailing line ending, as left by `echo` or a heredoc.
pub fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
