//! Tracing initialization.
//!
//! Logs go to stderr so stdout stays clean for ciphertext and JSON.
//! `RUST_LOG` takes precedence over the `-v`/`-q` flags.

use tracing_subscriber::EnvFilter;

/// Map verbosity flags to a default filter directive.
pub fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global fmt subscriber.
pub fn init_tracing(verbose: u8, quiet: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive(verbose, quiet)))
        .map_err(|e| anyhow::anyhow!("Failed to create env filter: {e}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))
}
