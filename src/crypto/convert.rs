//! Base conversion over arbitrary alphabets
//!
//! Numbers are strings of symbols, where a symbol's value is its position in
//! the alphabet. Conversion works digit by digit with carries, so inputs of any
//! length are supported without big-integer arithmetic.

use crate::error::{PolyCryptoError, PolyResult};

/// Alphabets shared with the other runtimes
pub mod alphabets {
    /// 95 printable ASCII symbols, starting with the usual base-62 digits
    pub const STANDARD: &str = concat!(
        "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz",
        "+/`~!@#$%^&*()_={}|[]\\:\";'<>?,-. "
    );

    /// RFC 4648 base64 digits
    pub const BASE64: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

    /// Digits and consonants
    pub const SLUG: &str = crate::crypto::rand::SLUG_SYMBOLS;

    /// Unambiguous lowercase characters
    pub const FAX: &str = crate::crypto::rand::FAX_SYMBOLS;
}

const BYTE_BASE: u64 = 256;
const MIN_BASE: usize = 2;

/// Converts numbers between bases using one alphabet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolyConvert {
    alphabet: Vec<char>,
}

impl Default for PolyConvert {
    fn default() -> Self {
        Self::new(alphabets::STANDARD)
    }
}

impl PolyConvert {
    pub fn new(alphabet: &str) -> Self {
        Self {
            alphabet: alphabet.chars().collect(),
        }
    }

    /// Largest base this alphabet can express
    pub fn max_base(&self) -> usize {
        self.alphabet.len()
    }

    /// Convert `input` from `from_base` to `to_base`
    ///
    /// # Errors
    ///
    /// - [`PolyCryptoError::InvalidBase`] when a base is outside
    ///   [2, alphabet length]
    /// - [`PolyCryptoError::EmptyInput`] for an empty string
    /// - [`PolyCryptoError::InvalidDigit`] for a symbol outside the first
    ///   `from_base` symbols of the alphabet
    pub fn apply_base(&self, input: &str, from_base: usize, to_base: usize) -> PolyResult<String> {
        self.validate_base(from_base)?;
        self.validate_base(to_base)?;
        if input.is_empty() {
            return Err(PolyCryptoError::EmptyInput);
        }
        if from_base == to_base {
            return Ok(input.to_string());
        }

        let digits = self.digit_values(input, from_base)?;
        let converted = convert_digits(&digits, from_base as u64, to_base as u64);
        Ok(self.render(&converted))
    }

    /// Render big-endian bytes as a number in `to_base`
    ///
    /// Leading zero bytes do not survive the conversion.
    pub fn from_bytes(&self, input: &[u8], to_base: usize) -> PolyResult<String> {
        self.validate_base(to_base)?;
        if input.is_empty() {
            return Err(PolyCryptoError::EmptyInput);
        }

        let digits: Vec<u64> = input.iter().map(|&b| u64::from(b)).collect();
        let converted = convert_digits(&digits, BYTE_BASE, to_base as u64);
        Ok(self.render(&converted))
    }

    /// Parse a number in `from_base` into big-endian bytes
    pub fn to_bytes(&self, input: &str, from_base: usize) -> PolyResult<Vec<u8>> {
        self.validate_base(from_base)?;
        if input.is_empty() {
            return Err(PolyCryptoError::EmptyInput);
        }

        let digits = self.digit_values(input, from_base)?;
        // Every digit is below 256 by construction
        Ok(convert_digits(&digits, from_base as u64, BYTE_BASE)
            .into_iter()
            .map(|d| d as u8)
            .collect())
    }

    fn validate_base(&self, base: usize) -> PolyResult<()> {
        if !(MIN_BASE..=self.max_base()).contains(&base) {
            return Err(PolyCryptoError::InvalidBase {
                max: self.max_base(),
            });
        }
        Ok(())
    }

    /// Fold `digits` to the letter case used by the first `base` symbols, if
    /// they only use one
    fn ensure_casing(&self, digits: &str, base: usize) -> String {
        let prefix = &self.alphabet[..base.min(self.alphabet.len())];
        let has_upper = prefix.iter().any(|c| c.is_uppercase());
        let has_lower = prefix.iter().any(|c| c.is_lowercase());

        match (has_upper, has_lower) {
            (true, false) => digits.to_uppercase(),
            (false, true) => digits.to_lowercase(),
            _ => digits.to_string(),
        }
    }

    fn digit_values(&self, input: &str, base: usize) -> PolyResult<Vec<u64>> {
        let prefix = &self.alphabet[..base];
        self.ensure_casing(input, base)
            .chars()
            .map(|digit| {
                prefix
                    .iter()
                    .position(|&c| c == digit)
                    .map(|value| value as u64)
                    .ok_or(PolyCryptoError::InvalidDigit { digit, base })
            })
            .collect()
    }

    fn render(&self, digits: &[u64]) -> String {
        digits.iter().map(|&d| self.alphabet[d as usize]).collect()
    }
}

/// Schoolbook base conversion, most significant digit first
fn convert_digits(digits: &[u64], from_base: u64, to_base: u64) -> Vec<u64> {
    // Little-endian accumulator
    let mut result = vec![0u64];

    for &digit in digits {
        let mut carry = digit;
        for place in result.iter_mut() {
            let product = *place * from_base + carry;
            *place = product % to_base;
            carry = product / to_base;
        }
        while carry > 0 {
            result.push(carry % to_base);
            carry /= to_base;
        }
    }

    result.reverse();
    result
}

/// Map each character of `input` from one alphabet to the other by position
///
/// Characters missing from `from_alphabet`, or whose position has no
/// counterpart in `to_alphabet`, pass through unchanged.
pub fn substitute(input: &str, from_alphabet: &str, to_alphabet: &str) -> String {
    let to: Vec<char> = to_alphabet.chars().collect();
    input
        .chars()
        .map(|c| {
            from_alphabet
                .chars()
                .position(|f| f == c)
                .and_then(|i| to.get(i).copied())
                .unwrap_or(c)
        })
        .collect()
}

/// Mirror substitution: A↔Z, B↔Y, ... and a↔z, b↔y, ...
///
/// Named rot13 for compatibility; applying it twice restores the input.
pub fn rot13(input: &str) -> String {
    substitute(
        input,
        "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz",
        "ZYXWVUTSRQPONMLKJIHGFEDCBAzyxwvutsrqponmlkjihgfedcba",
    )
}

/// Convert between bases with the standard alphabet
pub fn base(input: &str, from_base: usize, to_base: usize) -> PolyResult<String> {
    PolyConvert::default().apply_base(input, from_base, to_base)
}

/// Read a number written in `alphabet` and write it in `to_base`
fn from_alphabet(alphabet: &str, input: &str, to_base: usize) -> PolyResult<String> {
    let standard = substitute(input, alphabet, alphabets::STANDARD);
    base(&standard, alphabet.chars().count(), to_base)
}

/// Read a number in `from_base` and write it in `alphabet`
fn to_alphabet(alphabet: &str, input: &str, from_base: usize) -> PolyResult<String> {
    let converted = base(input, from_base, alphabet.chars().count())?;
    Ok(substitute(&converted, alphabets::STANDARD, alphabet))
}

pub fn from_fax(input: &str, to_base: usize) -> PolyResult<String> {
    from_alphabet(alphabets::FAX, input, to_base)
}

pub fn to_fax(input: &str, from_base: usize) -> PolyResult<String> {
    to_alphabet(alphabets::FAX, input, from_base)
}

pub fn from_slug(input: &str, to_base: usize) -> PolyResult<String> {
    from_alphabet(alphabets::SLUG, input, to_base)
}

pub fn to_slug(input: &str, from_base: usize) -> PolyResult<String> {
    to_alphabet(alphabets::SLUG, input, from_base)
}

pub fn from_base64(input: &str, to_base: usize) -> PolyResult<String> {
    from_alphabet(alphabets::BASE64, input, to_base)
}

pub fn to_base64(input: &str, from_base: usize) -> PolyResult<String> {
    to_alphabet(alphabets::BASE64, input, from_base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_sizes() {
        assert_eq!(PolyConvert::default().max_base(), 95);
        assert_eq!(alphabets::BASE64.len(), 64);
        assert_eq!(alphabets::SLUG.len(), 52);
        assert_eq!(alphabets::FAX.len(), 21);
    }

    #[test]
    fn test_binary_to_decimal() {
        assert_eq!(base("1011", 2, 10).unwrap(), "11");
    }

    #[test]
    fn test_hex_is_case_insensitive() {
        assert_eq!(base("ff", 16, 10).unwrap(), "255");
        assert_eq!(base("FF", 16, 10).unwrap(), "255");
    }

    #[test]
    fn test_small_bases_output_uppercase() {
        assert_eq!(base("ee", 15, 16).unwrap(), "E0");
        assert_eq!(base("zz", 36, 10).unwrap(), "1295");
    }

    #[test]
    fn test_large_numbers() {
        assert_eq!(
            base("18446744073709551615", 10, 16).unwrap(),
            "FFFFFFFFFFFFFFFF"
        );
        assert_eq!(
            base("340282366920938463463374607431768211455", 10, 16).unwrap(),
            "F".repeat(32)
        );
    }

    #[test]
    fn test_mixed_case_bases() {
        assert_eq!(base("1000000", 10, 62).unwrap(), "4C92");
        assert_eq!(base("4C92", 62, 10).unwrap(), "1000000");
        assert_eq!(base("1000000", 10, 95).unwrap(), "1F_U");
        // base 62 distinguishes case
        assert_ne!(base("4c92", 62, 10).unwrap(), "1000000");
    }

    #[test]
    fn test_zero_and_leading_zeros() {
        assert_eq!(base("0", 10, 2).unwrap(), "0");
        assert_eq!(base("000", 10, 16).unwrap(), "0");
        assert_eq!(base("0042", 10, 16).unwrap(), "2A");
    }

    #[test]
    fn test_same_base_returns_input() {
        assert_eq!(base("0042", 10, 10).unwrap(), "0042");
    }

    #[test]
    fn test_invalid_base() {
        assert!(matches!(
            base("12", 1, 10),
            Err(PolyCryptoError::InvalidBase { max: 95 })
        ));
        assert!(matches!(
            base("12", 10, 96),
            Err(PolyCryptoError::InvalidBase { max: 95 })
        ));
        assert!(matches!(
            PolyConvert::new(alphabets::FAX).apply_base("3", 10, 22),
            Err(PolyCryptoError::InvalidBase { max: 21 })
        ));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(base("", 10, 16), Err(PolyCryptoError::EmptyInput)));
        assert!(matches!(
            PolyConvert::default().from_bytes(&[], 16),
            Err(PolyCryptoError::EmptyInput)
        ));
    }

    #[test]
    fn test_invalid_digit() {
        assert!(matches!(
            base("19", 8, 10),
            Err(PolyCryptoError::InvalidDigit { digit: '9', base: 8 })
        ));
        assert!(matches!(
            base("1@", 16, 10),
            Err(PolyCryptoError::InvalidDigit { digit: '@', base: 16 })
        ));
        assert!(matches!(
            base("1ä", 62, 10),
            Err(PolyCryptoError::InvalidDigit { digit: 'ä', base: 62 })
        ));
    }

    #[test]
    fn test_lowercase_alphabet_folds_input_down() {
        let fax = PolyConvert::new(alphabets::FAX);
        assert_eq!(fax.apply_base("n7", 21, 10).unwrap(), "6cc");
        assert_eq!(fax.apply_base("N7", 21, 10).unwrap(), "6cc");
    }

    #[test]
    fn test_bytes() {
        let convert = PolyConvert::default();
        assert_eq!(convert.from_bytes(b"Hello", 16).unwrap(), "48656C6C6F");
        assert_eq!(convert.from_bytes(b"Hello", 62).unwrap(), "5TP3P3v");
        assert_eq!(convert.to_bytes("48656c6c6f", 16).unwrap(), b"Hello");
        assert_eq!(convert.to_bytes("0", 10).unwrap(), vec![0]);
        assert_eq!(convert.from_bytes(&[0, 0, 1], 10).unwrap(), "1");
    }

    #[test]
    fn test_named_alphabets() {
        assert_eq!(to_fax("255", 10).unwrap(), "n7");
        assert_eq!(from_fax("n7", 10).unwrap(), "255");
        assert_eq!(to_slug("1000000", 10).unwrap(), "75PM");
        assert_eq!(from_slug("75PM", 10).unwrap(), "1000000");
        assert_eq!(to_base64("255", 10).unwrap(), "D/");
        assert_eq!(from_base64("D/", 10).unwrap(), "255");
    }

    #[test]
    fn test_substitute_passes_unknown_chars() {
        assert_eq!(substitute("a-b-c", "abc", "xyz"), "x-y-z");
        assert_eq!(substitute("abc", "abc", "x"), "xbc");
    }

    #[test]
    fn test_rot13_mirrors() {
        assert_eq!(rot13("Hello, World!"), "Svool, Dliow!");
        assert_eq!(rot13(&rot13("Hello, World!")), "Hello, World!");
    }
}
