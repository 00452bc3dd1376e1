//! Digest CLI command

use clap::Subcommand;

use super::{read_input, write_output};
use crate::crypto::digest::{digest, DigestAlgorithm};
use crate::error::PolyResult;

#[derive(Subcommand)]
pub enum DigestCommands {
    /// Print the hex digest of some data
    Digest {
        /// md5, sha1, sha256 or sha512
        algorithm: DigestAlgorithm,
        /// Data to digest ("-" reads stdin)
        data: String,
    },
}

/// Handle a digest command
pub fn handle_digest_command(cmd: DigestCommands) -> PolyResult<()> {
    match cmd {
        DigestCommands::Digest { algorithm, data } => {
            let hex = digest(algorithm, &read_input(data)?);
            write_output(hex.as_bytes())
        }
    }
}
