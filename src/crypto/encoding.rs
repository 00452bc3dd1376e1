//! Output encodings for ciphertext envelopes
//!
//! The envelope does not record which encoding produced it, so callers must
//! decode with the same setting they encoded with.

use std::fmt;
use std::str::FromStr;

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

use crate::error::{PolyCryptoError, PolyResult};

/// How encrypted bytes are represented after encryption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Standard padded base64 (default)
    #[default]
    Base64,
    /// Lowercase hexadecimal
    Hex,
    /// Raw bytes, no encoding
    Bin,
}

impl Encoding {
    /// Name used on the command line and in settings
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Base64 => "base64",
            Self::Hex => "hex",
            Self::Bin => "bin",
        }
    }

    /// Whether the encoded output is printable ASCII
    pub fn is_text(&self) -> bool {
        !matches!(self, Self::Bin)
    }

    /// Encode raw bytes
    pub fn encode(&self, bytes: &[u8]) -> Vec<u8> {
        match self {
            Self::Base64 => STANDARD.encode(bytes).into_bytes(),
            Self::Hex => hex::encode(bytes).into_bytes(),
            Self::Bin => bytes.to_vec(),
        }
    }

    /// Decode bytes produced by [`Encoding::encode`]
    pub fn decode(&self, data: &[u8]) -> PolyResult<Vec<u8>> {
        match self {
            Self::Base64 => STANDARD.decode(data).map_err(|e| {
                PolyCryptoError::MalformedEnvelope(format!("invalid base64: {}", e))
            }),
            Self::Hex => hex::decode(data).map_err(|e| {
                PolyCryptoError::MalformedEnvelope(format!("invalid hex: {}", e))
            }),
            Self::Bin => Ok(data.to_vec()),
        }
    }
}

impl FromStr for Encoding {
    type Err = PolyCryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "base64" => Ok(Self::Base64),
            "hex" => Ok(Self::Hex),
            "bin" => Ok(Self::Bin),
            _ => Err(PolyCryptoError::InvalidEncoding),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
