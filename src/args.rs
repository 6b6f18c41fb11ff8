use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, author, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// AES-128-ECB encrypt input to output (PKCS#7 padded)
    Encrypt(EncryptArgs),

    /// AES-128-ECB decrypt input to output
    Decrypt(CommonArgs),

    /// Recover the secret suffix of a freshly keyed ECB oracle, byte at a time
    Attack(AttackArgs),
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

    /// Key file path (16 raw bytes).
    #[arg(short = 'k', long = "key")]
    pub key: PathBuf,
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct EncryptArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Generate a random key (written to path specified by key)
    #[arg(long = "gen-key")]
    pub gen_key: bool,

    /// Encrypt on the calling thread even for large inputs.
    #[arg(long = "serial")]
    pub serial: bool,
}

#[derive(Args, Debug)]
pub struct AttackArgs {
    /// Secret suffix as standard base64. Defaults to the built-in secret.
    #[arg(long = "secret-b64", value_name = "BASE64", conflicts_with = "secret_file")]
    pub secret_b64: Option<String>,

    /// File whose raw bytes are used as the secret suffix.
    #[arg(long = "secret-file", value_name = "PATH")]
    pub secret_file: Option<PathBuf>,
}
