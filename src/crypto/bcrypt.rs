//! bcrypt password hashing
//!
//! Hash strings follow the 60-character layout
//! `$VV$CC$<22-char salt><31-char hash>`. The PHP-only `2x` and `2y` versions
//! run the same algorithm as `2a` and are verified as such.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use bcrypt::Version;
use serde::Serialize;
use subtle::ConstantTimeEq;

use crate::error::{PolyCryptoError, PolyResult};

/// Longest password bcrypt will consume, in bytes
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Lowest accepted cost
pub const MIN_COST: u32 = 4;

/// Highest accepted cost
pub const MAX_COST: u32 = 31;

/// Cost used when the caller does not pick one
pub const DEFAULT_COST: u32 = 13;

/// Length of every well-formed hash string
pub const HASH_LEN: usize = 60;

const SALT_CHARS: usize = 22;
const HASH_CHARS: usize = 31;

/// bcrypt's "./A-Za-z0-9" base64 variant; the last salt character carries
/// four unused bits that some implementations leave set.
const BCRYPT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::BCRYPT,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireNone),
);

/// Parsed view of a bcrypt hash string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BcryptInfo {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

impl BcryptInfo {
    fn invalid() -> Self {
        Self {
            valid: false,
            version: None,
            cost: None,
            salt: None,
            hash: None,
        }
    }
}

/// Hash a password with a fresh random salt, producing a `$2a$` string
///
/// # Errors
///
/// - [`PolyCryptoError::PasswordTooLong`] above 72 bytes
/// - [`PolyCryptoError::CostOutOfRange`] outside [4, 31]
pub fn hash(password: &str, cost: u32) -> PolyResult<String> {
    check_password_len(password)?;
    if !(MIN_COST..=MAX_COST).contains(&cost) {
        return Err(PolyCryptoError::CostOutOfRange(cost));
    }

    tracing::debug!(cost, "hashing password with bcrypt");
    let parts = bcrypt::hash_with_result(password, cost)?;
    Ok(parts.format_for_version(Version::TwoA))
}

/// Check a password against a hash string
///
/// Hashes that do not parse, or that name an unknown version, verify as
/// `false`. The embedded hash is compared in constant time.
pub fn verify(password: &str, hash_string: &str) -> PolyResult<bool> {
    check_password_len(password)?;

    let normalized = normalize_version(hash_string);
    let parsed = info(&normalized);
    let (Some(version), Some(cost), Some(salt), Some(expected)) =
        (parsed.version, parsed.cost, parsed.salt, parsed.hash)
    else {
        return Ok(false);
    };

    let version = match version.as_str() {
        "$2a$" => Version::TwoA,
        "$2b$" => Version::TwoB,
        other => {
            tracing::debug!(version = other, "unsupported bcrypt version");
            return Ok(false);
        }
    };
    if !(MIN_COST..=MAX_COST).contains(&cost) {
        return Ok(false);
    }

    let salt: [u8; 16] = match BCRYPT_BASE64.decode(&salt) {
        Ok(bytes) => match bytes.try_into() {
            Ok(salt) => salt,
            Err(_) => return Ok(false),
        },
        Err(_) => return Ok(false),
    };

    tracing::debug!(cost, "verifying password with bcrypt");
    let computed = bcrypt::hash_with_salt(password, cost, salt)?.format_for_version(version);
    let computed_hash = &computed[computed.len() - HASH_CHARS..];

    Ok(computed_hash.as_bytes().ct_eq(expected.as_bytes()).into())
}

/// Parse a hash string into its version, cost, salt and hash
///
/// Malformed input is reported as `valid: false`, never as an error.
pub fn info(hash_string: &str) -> BcryptInfo {
    parse(hash_string).unwrap_or_else(BcryptInfo::invalid)
}

/// Rewrite a `$2x$` or `$2y$` prefix to `$2a$`
pub fn normalize_version(hash_string: &str) -> String {
    match hash_string.get(..4) {
        Some("$2x$") | Some("$2y$") => format!("$2a${}", &hash_string[4..]),
        _ => hash_string.to_string(),
    }
}

fn check_password_len(password: &str) -> PolyResult<()> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(PolyCryptoError::PasswordTooLong);
    }
    Ok(())
}

/// Matches `^(\$..?\$)(\d\d)\$(.{22})(.{31})$`
fn parse(hash_string: &str) -> Option<BcryptInfo> {
    let chars: Vec<char> = hash_string.chars().collect();

    // The version field is the only variable-width part
    let version_len = match chars.len() {
        HASH_LEN => 4,
        len if len == HASH_LEN - 1 => 3,
        _ => return None,
    };
    if chars.iter().any(|c| matches!(c, '\n' | '\r')) {
        return None;
    }

    let (version, rest) = chars.split_at(version_len);
    if version[0] != '$' || version[version_len - 1] != '$' {
        return None;
    }
    let cost = match rest {
        [tens, ones, '$', ..] => tens.to_digit(10)? * 10 + ones.to_digit(10)?,
        _ => return None,
    };
    let (salt, hash) = rest[3..].split_at(SALT_CHARS);

    Some(BcryptInfo {
        valid: true,
        version: Some(version.iter().collect()),
        cost: Some(cost),
        salt: Some(salt.iter().collect()),
        hash: Some(hash.iter().collect()),
    })
}
