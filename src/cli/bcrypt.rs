//! bcrypt CLI commands

use clap::Subcommand;

use super::{read_password, write_output};
use crate::config::settings::Settings;
use crate::crypto::bcrypt;
use crate::error::PolyResult;

/// bcrypt subcommands
#[derive(Subcommand)]
pub enum BcryptCommands {
    /// Hash a password
    BcryptHash {
        /// Password, at most 72 bytes ("-" prompts)
        password: String,
        /// Work factor between 4 and 31
        #[arg(short, long)]
        cost: Option<u32>,
    },

    /// Check a password against a hash, printing 1 or 0
    BcryptVerify {
        /// Password ("-" prompts)
        password: String,
        /// bcrypt hash string
        hash: String,
    },

    /// Print the parts of a hash as JSON
    BcryptInfo {
        /// bcrypt hash string
        hash: String,
    },
}

/// Handle a bcrypt command
pub fn handle_bcrypt_command(settings: &Settings, cmd: BcryptCommands) -> PolyResult<()> {
    match cmd {
        BcryptCommands::BcryptHash { password, cost } => {
            let password = read_password(password)?;
            let hashed = bcrypt::hash(&password, cost.unwrap_or(settings.bcrypt_cost))?;
            write_output(hashed.as_bytes())
        }
        BcryptCommands::BcryptVerify { password, hash } => {
            let password = read_password(password)?;
            let matches = bcrypt::verify(&password, &hash)?;
            write_output(if matches { b"1" } else { b"0" })
        }
        BcryptCommands::BcryptInfo { hash } => {
            let json = serde_json::to_string(&bcrypt::info(&hash))?;
            write_output(json.as_bytes())
        }
    }
}
