//! `passcrypt encrypt` and `passcrypt decrypt`

use secrecy::ExposeSecret;

use passcrypt_core::crypto::BLOCK_SIZE;
use passcrypt_core::random_hex;

use crate::app::{
    read_passphrase, read_text_input, strip_trailing_newline, AppContext, PassphrasePurpose,
};
use crate::cli::{DecryptArgs, EncryptArgs};
use crate::errors::CliError;
use crate::output::{ciphertext_json, plaintext_json, print_fields, print_json};

pub fn handle_encrypt(ctx: &AppContext, args: &EncryptArgs) -> anyhow::Result<()> {
    let cipher = ctx.cipher()?;

    let salt = match args.salt.as_deref() {
        Some(salt) => salt.to_string(),
        None => {
            let length = ctx.salt_length(args.salt_length)?;
            random_hex(length).map_err(CliError::from)?
        }
    };
    let iv = match args.iv.as_deref() {
        Some(iv) => iv.to_string(),
        None => random_hex(BLOCK_SIZE).map_err(CliError::from)?,
    };
    let generated = args.salt.is_none() || args.iv.is_none();

    let plaintext = match args.text.as_deref() {
        Some(text) => text.to_string(),
        None => strip_trailing_newline(read_text_input(None)?),
    };
    let passphrase = read_passphrase(ctx.interactive(), PassphrasePurpose::Encrypt)?;

    let ciphertext = cipher
        .encrypt(&salt, &iv, passphrase.expose_secret(), &plaintext)
        .map_err(CliError::from)?;
    tracing::info!(
        key_bits = cipher.key_size().bits(),
        iterations = cipher.iterations(),
        generated,
        "encrypted"
    );

    if ctx.ui().mode.is_json() {
        return print_json(&ciphertext_json(&cipher, &salt, &iv, &ciphertext));
    }
    if generated {
        print_fields(
            ctx.ui(),
            &[
                ("salt", salt.as_str()),
                ("iv", iv.as_str()),
                ("ciphertext", ciphertext.as_str()),
            ],
        );
    } else {
        println!("{}", ciphertext);
    }
    Ok(())
}

pub fn handle_decrypt(ctx: &AppContext, args: &DecryptArgs) -> anyhow::Result<()> {
    let cipher = ctx.cipher()?;
    let ciphertext = read_text_input(args.ciphertext.as_deref())?;
    let passphrase = read_passphrase(ctx.interactive(), PassphrasePurpose::Decrypt)?;

    let plaintext = cipher
        .decrypt(&args.salt, &args.iv, passphrase.expose_secret(), ciphertext.trim())
        .map_err(CliError::from)?;
    tracing::info!("decrypted");

    if ctx.ui().mode.is_json() {
        return print_json(&plaintext_json(&plaintext));
    }
    println!("{}", plaintext);
    Ok(())
}
