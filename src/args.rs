use aes_transform::{ChainMode, KeySize, Padding};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, author, arg_required_else_help = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt input to output, written as IV || ciphertext
    Encrypt(CommonArgs),

    /// Decrypt IV || ciphertext input to output
    Decrypt(CommonArgs),
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct CommonArgs {
    /// Input file path.
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    /// Output file path.
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,

    /// Password the key is derived from (PBKDF2-HMAC-SHA256).
    #[arg(short = 'p', long = "password")]
    pub password: String,

    /// Key size in bits.
    #[arg(
        short = 'k',
        long = "key-size",
        value_enum,
        default_value_t = KeySize::Bits128,
    )]
    pub key_size: KeySize,

    /// Padding applied to the final block.
    #[arg(long = "padding", value_enum, default_value_t = Padding::Pkcs7)]
    pub padding: Padding,

    /// Mode of operation.
    #[arg(short = 'm', long = "mode", value_enum, default_value_t = ChainMode::Cbc)]
    pub mode: ChainMode,
}
