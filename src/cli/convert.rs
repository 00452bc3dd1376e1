//! Base conversion CLI command

use clap::Subcommand;

use super::write_output;
use crate::crypto::convert;
use crate::error::PolyResult;

#[derive(Subcommand)]
pub enum ConvertCommands {
    /// Convert a number between bases of the standard 95-symbol alphabet
    ConvertBase {
        /// Number to convert
        input: String,
        /// Base of the input
        from: usize,
        /// Base to convert to
        to: usize,
    },
}

/// Handle a conversion command
pub fn handle_convert_command(cmd: ConvertCommands) -> PolyResult<()> {
    match cmd {
        ConvertCommands::ConvertBase { input, from, to } => {
            let converted = convert::base(&input, from, to)?;
            write_output(converted.as_bytes())
        }
    }
}
