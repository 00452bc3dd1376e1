//! CLI command handlers
//!
//! Each submodule owns a clap subcommand enum and its handler. Results are
//! written to stdout as-is, with no trailing newline, so the output can be
//! piped straight into another runtime.

use std::io::{Read, Write};

use crate::crypto::Encoding;
use crate::error::{PolyCryptoError, PolyResult};

pub mod aes;
pub mod bcrypt;
pub mod config;
pub mod convert;
pub mod digest;
pub mod rand;

pub use self::aes::{handle_aes_command, AesCommands};
pub use self::bcrypt::{handle_bcrypt_command, BcryptCommands};
pub use self::config::{handle_config_command, ConfigCommands};
pub use self::convert::{handle_convert_command, ConvertCommands};
pub use self::digest::{handle_digest_command, DigestCommands};
pub use self::rand::{handle_rand_command, RandCommands};

/// Argument value that means "read from stdin" or "prompt"
pub const STDIN_MARKER: &str = "-";

/// Write command output to stdout
pub(crate) fn write_output(bytes: &[u8]) -> PolyResult<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(bytes)?;
    stdout.flush()?;
    Ok(())
}

/// Resolve a data argument, reading all of stdin for `-`
pub(crate) fn read_input(arg: String) -> PolyResult<Vec<u8>> {
    if arg != STDIN_MARKER {
        return Ok(arg.into_bytes());
    }

    let mut buf = Vec::new();
    std::io::stdin().lock().read_to_end(&mut buf)?;
    Ok(buf)
}

/// Resolve an encrypted envelope argument
///
/// Text envelopes lose trailing whitespace, so `echo "$ct" | ... -` works.
/// Binary envelopes are passed through untouched.
pub(crate) fn read_envelope(arg: String, encoding: Encoding) -> PolyResult<Vec<u8>> {
    let mut envelope = read_input(arg)?;
    if encoding.is_text() {
        trim_trailing_whitespace(&mut envelope);
    }
    Ok(envelope)
}

fn trim_trailing_whitespace(bytes: &mut Vec<u8>) {
    let len = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(0, |i| i + 1);
    bytes.truncate(len);
}

/// Resolve a password argument, prompting with hidden input for `-`
pub(crate) fn read_password(arg: String) -> PolyResult<String> {
    if arg != STDIN_MARKER {
        return Ok(arg);
    }

    rpassword::prompt_password("Password: ")
        .map_err(|e| PolyCryptoError::Io(format!("Failed to read password: {}", e)))
}
