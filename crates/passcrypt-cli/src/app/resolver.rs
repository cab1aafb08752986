//! Config path resolution.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::default_config_path;

/// Resolved config path and whether the user named it explicitly.
pub fn resolve_config_path(cli: &Cli) -> anyhow::Result<(PathBuf, bool)> {
    if let Some(path) = cli.config.as_ref().filter(|p| !p.trim().is_empty()) {
        return Ok((PathBuf::from(path), true));
    }
    Ok((default_config_path()?, false))
}
