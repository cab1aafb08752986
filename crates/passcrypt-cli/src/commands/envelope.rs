//! `passcrypt seal` and `passcrypt open`

use std::path::Path;

use secrecy::ExposeSecret;

use passcrypt_core::SealedMessage;

use crate::app::{
    read_file_input, read_passphrase, read_text_input, strip_trailing_newline, AppContext,
    PassphrasePurpose,
};
use crate::cli::{OpenArgs, SealArgs};
use crate::errors::CliError;
use crate::output::{plaintext_json, print_json, written_json};
use crate::ui::{badge, Badge};

pub fn handle_seal(ctx: &AppContext, args: &SealArgs) -> anyhow::Result<()> {
    let cipher = ctx.cipher()?;
    let salt_length = ctx.salt_length(args.salt_length)?;

    let plaintext = match args.text.as_deref() {
        Some(text) => text.to_string(),
        None => strip_trailing_newline(read_text_input(None)?),
    };
    let passphrase = read_passphrase(ctx.interactive(), PassphrasePurpose::Encrypt)?;

    let sealed = cipher
        .seal(passphrase.expose_secret(), &plaintext, salt_length)
        .map_err(CliError::from)?;
    tracing::info!(salt_length, "sealed");

    if let Some(out) = args.out.as_deref() {
        let contents = sealed.to_json_pretty().map_err(CliError::from)?;
        std::fs::write(out, contents + "\n")
            .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", out, e))?;
        if ctx.ui().mode.is_json() {
            return print_json(&written_json(out));
        }
        if !ctx.quiet() {
            eprintln!(
                "{}",
                badge(ctx.ui(), Badge::Ok, &format!("Sealed message written to {}", out))
            );
        }
        return Ok(());
    }

    let rendered = if ctx.ui().mode.is_pretty() {
        sealed.to_json_pretty()
    } else {
        sealed.to_json()
    }
    .map_err(CliError::from)?;
    println!("{}", rendered);
    Ok(())
}

pub fn handle_open(ctx: &AppContext, args: &OpenArgs) -> anyhow::Result<()> {
    let text = match args.file.as_deref() {
        Some(path) => read_file_input(Path::new(path))?,
        None => read_text_input(args.envelope.as_deref())?,
    };
    let sealed = SealedMessage::from_json(text.trim()).map_err(CliError::from)?;
    let passphrase = read_passphrase(ctx.interactive(), PassphrasePurpose::Decrypt)?;

    let plaintext = sealed
        .open(passphrase.expose_secret())
        .map_err(CliError::from)?;
    tracing::info!(
        key_bits = sealed.key_size,
        iterations = sealed.iterations,
        "opened"
    );

    if ctx.ui().mode.is_json() {
        return print_json(&plaintext_json(&plaintext));
    }
    println!("{}", plaintext);
    Ok(())
}
