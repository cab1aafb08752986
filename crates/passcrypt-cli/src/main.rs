//! Passcrypt CLI - passphrase-based AES-CBC encryption for text
//!
//! This is the command-line interface for Passcrypt. It exposes the core
//! library's encrypt, decrypt and envelope operations to scripts and humans.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod logging;
mod output;
mod ui;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands, ConfigSubcommand};
use crate::commands::{config as config_cmd, crypt, envelope, misc, random};
use crate::errors::classify;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = logging::init_tracing(cli.verbose, cli.quiet) {
        eprintln!("Warning: {}", err);
    }
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx) {
        let (code, hint) = classify(&e);
        tracing::debug!(error = ?e, "command failed");
        print_error(ctx.ui(), &e.to_string(), hint.as_deref());
        std::process::exit(code);
    }
}

fn run(ctx: &AppContext) -> anyhow::Result<()> {
    match &ctx.cli().command {
        Commands::Encrypt(args) => crypt::handle_encrypt(ctx, args),
        Commands::Decrypt(args) => crypt::handle_decrypt(ctx, args),
        Commands::Seal(args) => envelope::handle_seal(ctx, args),
        Commands::Open(args) => envelope::handle_open(ctx, args),
        Commands::Random(args) => random::handle_random(ctx, args),
        Commands::Config(ConfigSubcommand::Show) => config_cmd::handle_show(ctx),
        Commands::Config(ConfigSubcommand::Init(args)) => config_cmd::handle_init(ctx, args),
        Commands::Completions(args) => misc::handle_completions(args.shell),
    }
}
