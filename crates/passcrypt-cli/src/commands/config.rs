//! `passcrypt config show` and `passcrypt config init`

use passcrypt_core::KeySize;

use crate::app::AppContext;
use crate::cli::ConfigInitArgs;
use crate::config::{render_config, write_config, CipherSection, PasscryptConfig, RandomSection};
use crate::errors::CliError;
use crate::output::{config_json, print_json, written_json};
use crate::ui::{badge, Badge};

pub fn handle_show(ctx: &AppContext) -> anyhow::Result<()> {
    let path = ctx.config_path()?;
    let exists = path.exists();
    let cipher = ctx.cipher()?;
    let effective = PasscryptConfig {
        cipher: CipherSection {
            key_size: cipher.key_size(),
            iterations: cipher.iterations(),
        },
        random: RandomSection {
            salt_length: ctx.config()?.random.salt_length,
        },
    };

    let path_display = path.display().to_string();
    if ctx.ui().mode.is_json() {
        return print_json(&config_json(&path_display, exists, &effective));
    }
    if !ctx.quiet() {
        let state = if exists { "" } else { " (not found, using defaults)" };
        println!("# {}{}", path_display, state);
    }
    print!("{}", render_config(&effective)?);
    Ok(())
}

pub fn handle_init(ctx: &AppContext, args: &ConfigInitArgs) -> anyhow::Result<()> {
    let path = ctx.config_path()?;
    let exists = path.exists();
    if exists && !args.force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        ))
        .into());
    }

    let mut config = PasscryptConfig::default();
    if let Some(bits) = ctx.cli().key_size {
        config.cipher.key_size = KeySize::try_from(bits).map_err(CliError::from)?;
    }
    if let Some(iterations) = ctx.cli().iterations {
        if iterations == 0 {
            return Err(CliError::invalid_input("Iteration count must be at least 1").into());
        }
        config.cipher.iterations = iterations;
    }

    write_config(&path, &config)?;

    let path_display = path.display().to_string();
    if ctx.ui().mode.is_json() {
        return print_json(&written_json(&path_display));
    }
    if !ctx.quiet() {
        if exists {
            eprintln!(
                "{}",
                badge(ctx.ui(), Badge::Warn, &format!("Overwrote existing config {}", path_display))
            );
        } else {
            eprintln!(
                "{}",
                badge(ctx.ui(), Badge::Ok, &format!("Wrote config to {}", path_display))
            );
        }
    }
    Ok(())
}
