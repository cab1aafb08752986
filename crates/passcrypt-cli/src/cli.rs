use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use passcrypt_core::VERSION;

/// Passcrypt - passphrase-based AES-CBC encryption for text
#[derive(Parser)]
#[command(name = "passcrypt")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true, env = "PASSCRYPT_CONFIG")]
    pub config: Option<String>,

    /// AES key size in bits (128, 192, 256); overrides config
    #[arg(long, global = true, value_name = "BITS")]
    pub key_size: Option<u16>,

    /// PBKDF2 iteration count; overrides config
    #[arg(long, global = true, value_name = "N")]
    pub iterations: Option<u32>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable interactive prompts
    #[arg(long, global = true)]
    pub no_input: bool,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for the `encrypt` command
#[derive(Args)]
pub struct EncryptArgs {
    /// Plaintext (reads stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Salt as hex (generated when omitted)
    #[arg(long, value_name = "HEX")]
    pub salt: Option<String>,

    /// IV as hex, 16 bytes (generated when omitted)
    #[arg(long, value_name = "HEX")]
    pub iv: Option<String>,

    /// Length in bytes of a generated salt; overrides config
    #[arg(long, value_name = "BYTES")]
    pub salt_length: Option<usize>,
}

/// Arguments for the `decrypt` command
#[derive(Args)]
pub struct DecryptArgs {
    /// Base64 ciphertext (reads stdin when omitted)
    #[arg(value_name = "CIPHERTEXT")]
    pub ciphertext: Option<String>,

    /// Salt used at encryption time, as hex
    #[arg(long, value_name = "HEX")]
    pub salt: String,

    /// IV used at encryption time, as hex
    #[arg(long, value_name = "HEX")]
    pub iv: String,
}

/// Arguments for the `seal` command
#[derive(Args)]
pub struct SealArgs {
    /// Plaintext (reads stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Write the envelope to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<String>,

    /// Salt length in bytes; overrides config
    #[arg(long, value_name = "BYTES")]
    pub salt_length: Option<usize>,
}

/// Arguments for the `open` command
#[derive(Args)]
pub struct OpenArgs {
    /// Envelope JSON (reads stdin when omitted)
    #[arg(value_name = "ENVELOPE", conflicts_with = "file")]
    pub envelope: Option<String>,

    /// Read the envelope from a file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<String>,
}

/// Arguments for the `random` command
#[derive(Args)]
pub struct RandomArgs {
    /// Number of random bytes
    #[arg(short, long, default_value_t = 16)]
    pub bytes: usize,
}

/// Arguments for the `config init` command
#[derive(Args)]
pub struct ConfigInitArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show the effective configuration
    Show,

    /// Write a config file with default values
    Init(ConfigInitArgs),
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt text with an explicit (or generated) salt and IV
    Encrypt(EncryptArgs),

    /// Decrypt base64 ciphertext with its salt and IV
    Decrypt(DecryptArgs),

    /// Encrypt text into a self-describing JSON envelope
    Seal(SealArgs),

    /// Decrypt a JSON envelope
    Open(OpenArgs),

    /// Print random hex, suitable for salts and IVs
    Random(RandomArgs),

    /// Inspect or create the config file
    #[command(subcommand)]
    Config(ConfigSubcommand),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
