use anyhow::Result;
use clap::{Parser, Subcommand};

use poly_crypto::cli::{
    handle_aes_command, handle_bcrypt_command, handle_config_command, handle_convert_command,
    handle_digest_command, handle_rand_command, AesCommands, BcryptCommands, ConfigCommands,
    ConvertCommands, DigestCommands, RandCommands,
};
use poly_crypto::config::{paths::PolyPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "poly-crypto",
    author = "Kaylee Beyene",
    version,
    about = "Portable encryption, password hashing and random strings",
    long_about = "poly-crypto encrypts with AES-256-GCM, hashes passwords with bcrypt and \
                  generates random strings. Its output is byte-compatible with the PHP and \
                  JavaScript runtimes, so values can move freely between them."
)]
struct Cli {
    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Aes(AesCommands),

    #[command(flatten)]
    Bcrypt(BcryptCommands),

    #[command(flatten)]
    Digest(DigestCommands),

    #[command(flatten)]
    Rand(RandCommands),

    #[command(flatten)]
    Convert(ConvertCommands),

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommands>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    poly_crypto::logging::init(cli.verbose)?;

    match cli.command {
        Commands::Aes(cmd) => handle_aes_command(&load_settings()?, cmd)?,
        Commands::Bcrypt(cmd) => handle_bcrypt_command(&load_settings()?, cmd)?,
        Commands::Digest(cmd) => handle_digest_command(cmd)?,
        Commands::Rand(cmd) => handle_rand_command(cmd)?,
        Commands::Convert(cmd) => handle_convert_command(cmd)?,
        Commands::Config { action } => handle_config_command(&PolyPaths::new()?, action)?,
    }

    Ok(())
}

fn load_settings() -> Result<Settings> {
    Ok(Settings::load_or_default(&PolyPaths::new()?)?)
}
