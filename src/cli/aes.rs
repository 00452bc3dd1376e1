//! AES envelope CLI commands
//!
//! Implements key- and password-based encryption and decryption, plus key
//! and salt generation.

use clap::Subcommand;

use super::{read_envelope, read_input, read_password, write_output};
use crate::config::settings::Settings;
use crate::crypto::key::HEX_KEY_LEN;
use crate::crypto::{generate_key, generate_salt, Encoding, PolyAes};
use crate::error::PolyResult;

/// AES subcommands
#[derive(Subcommand)]
pub enum AesCommands {
    /// Encrypt with a 64-character hex key
    AesKeyEncrypt {
        /// Hex-encoded 256-bit key
        key: String,
        /// Text to encrypt ("-" reads stdin)
        plaintext: String,
        /// Output encoding (base64, hex, bin)
        #[arg(short, long)]
        encoding: Option<Encoding>,
    },

    /// Decrypt with a 64-character hex key
    AesKeyDecrypt {
        /// Hex-encoded 256-bit key
        key: String,
        /// Encrypted envelope ("-" reads stdin)
        ciphertext: String,
        /// Encoding the envelope was written in
        #[arg(short, long)]
        encoding: Option<Encoding>,
    },

    /// Encrypt with a password and salt
    AesPassEncrypt {
        /// Password ("-" prompts)
        password: String,
        /// Salt, at least 8 characters
        salt: String,
        /// Text to encrypt ("-" reads stdin)
        plaintext: String,
        /// PBKDF2 iteration count
        #[arg(short, long)]
        iterations: Option<u32>,
        /// Output encoding (base64, hex, bin)
        #[arg(short, long)]
        encoding: Option<Encoding>,
    },

    /// Decrypt with a password and salt
    AesPassDecrypt {
        /// Password ("-" prompts)
        password: String,
        /// Salt used when encrypting
        salt: String,
        /// Encrypted envelope ("-" reads stdin)
        ciphertext: String,
        /// PBKDF2 iteration count used when encrypting
        #[arg(short, long)]
        iterations: Option<u32>,
        /// Encoding the envelope was written in
        #[arg(short, long)]
        encoding: Option<Encoding>,
    },

    /// Print a random hex key
    GenerateKey {
        /// Number of hex characters
        #[arg(default_value_t = HEX_KEY_LEN)]
        length: usize,
    },

    /// Print a random hex salt
    GenerateSalt {
        /// Number of hex characters
        #[arg(default_value_t = 64)]
        length: usize,
    },
}

/// Handle an AES command
pub fn handle_aes_command(settings: &Settings, cmd: AesCommands) -> PolyResult<()> {
    match cmd {
        AesCommands::AesKeyEncrypt {
            key,
            plaintext,
            encoding,
        } => {
            let cipher = key_cipher(settings, &key, encoding)?;
            let encrypted = cipher.encrypt(&read_input(plaintext)?)?;
            write_output(&encrypted)
        }
        AesCommands::AesKeyDecrypt {
            key,
            ciphertext,
            encoding,
        } => {
            let cipher = key_cipher(settings, &key, encoding)?;
            let decrypted = cipher.decrypt(&read_envelope(ciphertext, cipher.encoding())?)?;
            write_output(&decrypted)
        }
        AesCommands::AesPassEncrypt {
            password,
            salt,
            plaintext,
            iterations,
            encoding,
        } => {
            let cipher = password_cipher(settings, password, &salt, iterations, encoding)?;
            let encrypted = cipher.encrypt(&read_input(plaintext)?)?;
            write_output(&encrypted)
        }
        AesCommands::AesPassDecrypt {
            password,
            salt,
            ciphertext,
            iterations,
            encoding,
        } => {
            let cipher = password_cipher(settings, password, &salt, iterations, encoding)?;
            let decrypted = cipher.decrypt(&read_envelope(ciphertext, cipher.encoding())?)?;
            write_output(&decrypted)
        }
        AesCommands::GenerateKey { length } => write_output(generate_key(length).as_bytes()),
        AesCommands::GenerateSalt { length } => write_output(generate_salt(length).as_bytes()),
    }
}

fn key_cipher(settings: &Settings, key: &str, encoding: Option<Encoding>) -> PolyResult<PolyAes> {
    Ok(PolyAes::with_key(key)?.with_encoding(encoding.unwrap_or(settings.encoding)))
}

fn password_cipher(
    settings: &Settings,
    password: String,
    salt: &str,
    iterations: Option<u32>,
    encoding: Option<Encoding>,
) -> PolyResult<PolyAes> {
    let password = read_password(password)?;
    let iterations = iterations.unwrap_or(settings.pbkdf2_iterations);

    Ok(PolyAes::with_password_iterations(&password, salt, iterations)?
        .with_encoding(encoding.unwrap_or(settings.encoding)))
}
