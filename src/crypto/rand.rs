//! Random strings over caller-supplied symbol lists
//!
//! Each output symbol consumes one random byte `b` and picks
//! `symbols[b % symbols.len()]`. When the symbol count does not divide 256 the
//! earlier symbols are slightly more likely; this matches the other runtimes
//! and is not corrected with rejection sampling.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::OsRng;

use crate::error::{PolyCryptoError, PolyResult};

/// Symbols used by [`slug`]: digits and letters without vowels
pub const SLUG_SYMBOLS: &str = "0123456789bcdfghjklmnpqrstvwxyzBCDFGHJKLMNPQRSTVWXYZ";

/// Symbols used by [`fax`]: lowercase characters that are hard to misread
pub const FAX_SYMBOLS: &str = "3467bcdfhjkmnpqrtvwxy";

/// Fewest symbols a list may contain
pub const MIN_SYMBOLS: usize = 2;

/// Most symbols a list may contain (one per byte value)
pub const MAX_SYMBOLS: usize = 256;

/// Fill a buffer of the given length with secure random bytes
pub fn bytes(length: usize) -> Vec<u8> {
    let mut buf = vec![0u8; length];
    OsRng.fill_bytes(&mut buf);
    buf
}

/// Random lowercase hexadecimal string of exactly `length` characters
pub fn hex(length: usize) -> String {
    let mut out = hex::encode(bytes(length.div_ceil(2)));
    out.truncate(length);
    out
}

/// Random string of digits and consonants
pub fn slug(length: usize) -> String {
    from_static_alphabet(length, SLUG_SYMBOLS)
}

/// Random string of unambiguous lowercase characters
pub fn fax(length: usize) -> String {
    from_static_alphabet(length, FAX_SYMBOLS)
}

/// Random string of `length` symbols drawn from `symbols`
///
/// Symbols may be longer than one character, so the output length in
/// characters is only `length` when every symbol is a single character.
///
/// # Errors
///
/// [`PolyCryptoError::AlphabetSizeInvalid`] unless `2 <= symbols.len() <= 256`.
pub fn string<S: AsRef<str>>(length: usize, symbols: &[S]) -> PolyResult<String> {
    if !(MIN_SYMBOLS..=MAX_SYMBOLS).contains(&symbols.len()) {
        return Err(PolyCryptoError::AlphabetSizeInvalid(symbols.len()));
    }

    let count = symbols.len();
    let mut output = String::with_capacity(length);
    for byte in bytes(length) {
        output.push_str(symbols[byte as usize % count].as_ref());
    }
    Ok(output)
}

/// Random string drawing each character from `alphabet`
pub fn string_from_alphabet(length: usize, alphabet: &str) -> PolyResult<String> {
    let symbols = split_symbols(alphabet);
    string(length, &symbols)
}

/// Random UUID version 4, lowercase and hyphenated
pub fn uuid_v4() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Split an alphabet into one-character symbols
pub fn split_symbols(alphabet: &str) -> Vec<&str> {
    alphabet
        .char_indices()
        .map(|(i, c)| &alphabet[i..i + c.len_utf8()])
        .collect()
}

fn from_static_alphabet(length: usize, alphabet: &'static str) -> String {
    let symbols = split_symbols(alphabet);
    let count = symbols.len();
    bytes(length)
        .into_iter()
        .map(|byte| symbols[byte as usize % count])
        .collect()
}
