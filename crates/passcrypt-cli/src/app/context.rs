//! Application context for the Passcrypt CLI.
//!
//! Provides a unified context that combines CLI arguments with
//! lazily-loaded configuration.

use std::io::IsTerminal;
use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use passcrypt_core::{KeySize, PassphraseCipher, MAX_RANDOM_LENGTH};

use crate::cli::Cli;
use crate::config::{read_config, PasscryptConfig};
use crate::errors::CliError;
use crate::ui::UiContext;

use super::resolver::resolve_config_path;

/// Application context that bundles CLI args with configuration.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<PasscryptConfig>,
    ui: UiContext,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
            ui: UiContext::from_env(cli.json),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    pub fn ui(&self) -> &UiContext {
        &self.ui
    }

    /// Whether prompts may be shown.
    pub fn interactive(&self) -> bool {
        !self.cli.no_input && std::io::stdin().is_terminal() && std::io::stderr().is_terminal()
    }

    /// Resolved config file path.
    pub fn config_path(&self) -> anyhow::Result<PathBuf> {
        Ok(resolve_config_path(self.cli)?.0)
    }

    /// Get the configuration, loading it lazily if needed.
    ///
    /// A missing default config means defaults; a missing explicit config
    /// is an error.
    pub fn config(&self) -> anyhow::Result<&PasscryptConfig> {
        self.config.get_or_try_init(|| {
            let (path, explicit) = resolve_config_path(self.cli)?;
            if path.exists() {
                tracing::debug!(path = %path.display(), "loading config");
                return read_config(&path);
            }
            if explicit {
                return Err(CliError::not_found(
                    format!("Config file not found: {}", path.display()),
                    "Hint: Run `passcrypt config init` to create it.",
                )
                .into());
            }
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(PasscryptConfig::default())
        })
    }

    /// Build the cipher from config plus command-line overrides.
    pub fn cipher(&self) -> anyhow::Result<PassphraseCipher> {
        let config = self.config()?;
        let key_size = match self.cli.key_size {
            Some(bits) => KeySize::try_from(bits).map_err(CliError::from)?,
            None => config.cipher.key_size,
        };
        let iterations = self.cli.iterations.unwrap_or(config.cipher.iterations);
        Ok(PassphraseCipher::new(key_size, iterations).map_err(CliError::from)?)
    }

    /// Salt length from an explicit override or the config, in `1..=MAX_RANDOM_LENGTH`.
    pub fn salt_length(&self, explicit: Option<usize>) -> anyhow::Result<usize> {
        let length = match explicit {
            Some(length) => length,
            None => self.config()?.random.salt_length,
        };
        check_random_length("Salt length", length)?;
        Ok(length)
    }
}

/// Reject random lengths outside `1..=MAX_RANDOM_LENGTH` as invalid input.
pub fn check_random_length(what: &str, length: usize) -> Result<(), CliError> {
    if length == 0 || length > MAX_RANDOM_LENGTH {
        return Err(CliError::invalid_input(format!(
            "{} must be between 1 and {} bytes",
            what, MAX_RANDOM_LENGTH
        )));
    }
    Ok(())
}
