//! Random string CLI commands

use clap::{Subcommand, ValueEnum};

use super::write_output;
use crate::crypto::rand;
use crate::error::PolyResult;

/// Kinds of random value the `rand` command can print
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RandKind {
    /// Lowercase hex characters
    Hex,
    /// Digits and consonants
    Slug,
    /// Unambiguous lowercase characters
    Fax,
    /// A version 4 UUID (length is ignored)
    Uuid,
}

/// Random string subcommands
#[derive(Subcommand)]
pub enum RandCommands {
    /// Print a random string drawn from the given characters
    RandString {
        /// Number of symbols
        length: usize,
        /// Characters to choose from (2 to 256)
        symbols: String,
    },

    /// Print a random value of a predefined kind
    Rand {
        kind: RandKind,
        /// Number of characters
        #[arg(default_value_t = 32)]
        length: usize,
    },
}

/// Handle a random string command
pub fn handle_rand_command(cmd: RandCommands) -> PolyResult<()> {
    let out = match cmd {
        RandCommands::RandString { length, symbols } => {
            rand::string_from_alphabet(length, &symbols)?
        }
        RandCommands::Rand { kind, length } => match kind {
            RandKind::Hex => rand::hex(length),
            RandKind::Slug => rand::slug(length),
            RandKind::Fax => rand::fax(length),
            RandKind::Uuid => rand::uuid_v4(),
        },
    };

    write_output(out.as_bytes())
}
