//! AES-256 key material
//!
//! A key is either parsed from a 64-character hex string or derived from a
//! password with PBKDF2-HMAC-SHA1. SHA-1 is what PHP's `openssl_pbkdf2` and
//! node-forge default to, and changing it breaks decryption in those runtimes.

use std::fmt;

use hmac::Hmac;
use sha1::Sha1;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{PolyCryptoError, PolyResult};

use super::rand;

/// Size of an AES-256 key in bytes
pub const KEY_SIZE: usize = 32;

/// Length of a hex-encoded key
pub const HEX_KEY_LEN: usize = KEY_SIZE * 2;

/// Minimum PBKDF2 salt length in characters
pub const MIN_SALT_LEN: usize = 8;

/// Default PBKDF2 iteration count
pub const DEFAULT_ITERATIONS: u32 = 10_000;

/// A 32-byte AES-256 key, zeroed on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct AesKey {
    key: [u8; KEY_SIZE],
}

impl AesKey {
    /// Wrap raw key bytes
    pub fn from_bytes(key: [u8; KEY_SIZE]) -> Self {
        Self { key }
    }

    /// Parse a 64-character hex key, case-insensitively
    pub fn from_hex(hex_key: &str) -> PolyResult<Self> {
        if hex_key.len() != HEX_KEY_LEN || !hex_key.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(PolyCryptoError::InvalidKeyFormat);
        }

        let mut key = [0u8; KEY_SIZE];
        hex::decode_to_slice(hex_key, &mut key).map_err(|_| PolyCryptoError::InvalidKeyFormat)?;
        Ok(Self { key })
    }

    /// Derive a key from a password and salt with PBKDF2-HMAC-SHA1
    ///
    /// The salt must be at least [`MIN_SALT_LEN`] characters.
    pub fn derive(password: &str, salt: &str, iterations: u32) -> PolyResult<Self> {
        if salt.chars().count() < MIN_SALT_LEN {
            return Err(PolyCryptoError::SaltTooShort);
        }
        if iterations == 0 {
            return Err(PolyCryptoError::InvalidIterations);
        }

        tracing::debug!(iterations, "deriving AES key with PBKDF2-HMAC-SHA1");

        let mut key = [0u8; KEY_SIZE];
        pbkdf2::pbkdf2::<Hmac<Sha1>>(password.as_bytes(), salt.as_bytes(), iterations, &mut key)
            .map_err(|_| PolyCryptoError::InvalidIterations)?;
        Ok(Self { key })
    }

    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }
}

impl fmt::Debug for AesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AesKey([REDACTED])")
    }
}

/// Generate a random hex key suitable for [`AesKey::from_hex`]
///
/// `length` is the number of hex characters; 64 gives a full AES-256 key.
pub fn generate_key(length: usize) -> String {
    rand::hex(length)
}

/// Generate a random hex salt suitable for [`AesKey::derive`]
pub fn generate_salt(length: usize) -> String {
    rand::hex(length)
}
