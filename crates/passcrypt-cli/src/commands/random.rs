//! `passcrypt random`

use passcrypt_core::random_hex;

use crate::app::{check_random_length, AppContext};
use crate::cli::RandomArgs;
use crate::errors::CliError;
use crate::output::{print_json, random_json};

pub fn handle_random(ctx: &AppContext, args: &RandomArgs) -> anyhow::Result<()> {
    check_random_length("--bytes", args.bytes)?;

    let hex = random_hex(args.bytes).map_err(CliError::from)?;

    if ctx.ui().mode.is_json() {
        return print_json(&random_json(&hex, args.bytes));
    }
    println!("{}", hex);
    Ok(())
}
