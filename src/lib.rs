//! poly-crypto - portable encryption, password hashing and random strings
//!
//! Values produced here can be consumed by the PHP and JavaScript runtimes of
//! the same library and vice versa: the AES-256-GCM envelope has the same byte
//! layout, bcrypt hashes of every `$2?$` flavour verify, and random strings use
//! the same symbol mapping.
//!
//! # Architecture
//!
//! - `crypto`: the envelope codec, bcrypt, random strings, digests and base
//!   conversion
//! - `config`: config directory resolution and persisted CLI defaults
//! - `error`: the crate error type
//! - `logging`: tracing setup for the binary
//! - `cli`: clap subcommands and their handlers
//!
//! # Example
//!
//! ```rust
//! use poly_crypto::crypto::{bcrypt, PolyAes};
//!
//! let cipher = PolyAes::with_password("correct horse", "battery staple")?;
//! let ciphertext = cipher.encrypt_string("attack at dawn")?;
//! assert_eq!(cipher.decrypt_string(&ciphertext)?, "attack at dawn");
//!
//! let hash = bcrypt::hash("hunter2", 4)?;
//! assert!(bcrypt::verify("hunter2", &hash)?);
//! # Ok::<(), poly_crypto::PolyCryptoError>(())
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod error;
pub mod logging;

pub use error::{PolyCryptoError, PolyResult};
