//! Error types for poly-crypto
//!
//! Every fallible operation in the crate returns [`PolyResult`]. Validation
//! and integrity failures are local and synchronous, so none of them are
//! worth retrying.

use thiserror::Error;

/// The main error type for poly-crypto operations
#[derive(Error, Debug)]
pub enum PolyCryptoError {
    /// Hex key is not exactly 64 hexadecimal characters
    #[error("key must be 64-character hexadecimal string")]
    InvalidKeyFormat,

    /// PBKDF2 salt is shorter than 8 characters
    #[error("salt must be 8+ characters")]
    SaltTooShort,

    /// PBKDF2 iteration count of zero
    #[error("iteration count must be at least 1")]
    InvalidIterations,

    /// Output encoding is not one of base64, hex or bin, or cannot carry text
    #[error("encoding must be base64, hex, or bin")]
    InvalidEncoding,

    /// Ciphertext could not be decoded or is shorter than IV + tag
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    /// GCM tag did not verify (tampered data or wrong key)
    #[error("authentication failed: ciphertext was tampered with or the key is wrong")]
    AuthenticationFailed,

    /// Decrypted bytes were requested as text but are not UTF-8
    #[error("decrypted data is not valid UTF-8")]
    InvalidUtf8,

    /// Password longer than bcrypt's 72-byte limit
    #[error("password must be 72 bytes or less")]
    PasswordTooLong,

    /// bcrypt cost outside [4, 31]
    #[error("cost must be between 4 and 31, got {0}")]
    CostOutOfRange(u32),

    /// bcrypt primitive failure
    #[error("bcrypt error: {0}")]
    Bcrypt(String),

    /// Random string symbol list outside [2, 256]
    #[error("symbol list must contain between 2 and 256 characters, got {0}")]
    AlphabetSizeInvalid(usize),

    /// Unknown digest algorithm name
    #[error("unsupported digest algorithm: {0}")]
    UnsupportedDigest(String),

    /// Conversion base outside [2, alphabet length]
    #[error("base must be between 2 and {max}")]
    InvalidBase { max: usize },

    /// Empty number passed to base conversion
    #[error("input number cannot be empty")]
    EmptyInput,

    /// Character not valid in the given base
    #[error("invalid digit \"{digit}\" for base {base}")]
    InvalidDigit { digit: char, base: usize },

    /// Configuration-related errors
    #[error("configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl PolyCryptoError {
    /// Check if the GCM tag failed to verify
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, Self::AuthenticationFailed)
    }

    /// Check if this is an input validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidKeyFormat
                | Self::SaltTooShort
                | Self::InvalidIterations
                | Self::InvalidEncoding
                | Self::PasswordTooLong
                | Self::CostOutOfRange(_)
                | Self::AlphabetSizeInvalid(_)
                | Self::InvalidBase { .. }
                | Self::EmptyInput
                | Self::InvalidDigit { .. }
        )
    }
}

impl From<std::io::Error> for PolyCryptoError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PolyCryptoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<bcrypt::BcryptError> for PolyCryptoError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::Bcrypt(err.to_string())
    }
}

/// Result type alias for poly-crypto operations
pub type PolyResult<T> = Result<T, PolyCryptoError>;
