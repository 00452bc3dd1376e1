//! Message digests in lowercase hex

use std::fmt;
use std::str::FromStr;

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

use crate::error::{PolyCryptoError, PolyResult};

/// Supported digest algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

impl DigestAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }
}

impl FromStr for DigestAlgorithm {
    type Err = PolyCryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "md5" => Ok(Self::Md5),
            "sha1" => Ok(Self::Sha1),
            "sha256" => Ok(Self::Sha256),
            "sha512" => Ok(Self::Sha512),
            _ => Err(PolyCryptoError::UnsupportedDigest(s.to_string())),
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Digest `data` with the given algorithm, returning lowercase hex
pub fn digest(algorithm: DigestAlgorithm, data: &[u8]) -> String {
    match algorithm {
        DigestAlgorithm::Md5 => hex_digest::<Md5>(data),
        DigestAlgorithm::Sha1 => hex_digest::<Sha1>(data),
        DigestAlgorithm::Sha256 => hex_digest::<Sha256>(data),
        DigestAlgorithm::Sha512 => hex_digest::<Sha512>(data),
    }
}

/// Digest with an algorithm named at runtime
pub fn digest_named(algorithm: &str, data: &[u8]) -> PolyResult<String> {
    Ok(digest(algorithm.parse()?, data))
}

pub fn md5(data: &[u8]) -> String {
    hex_digest::<Md5>(data)
}

pub fn sha1(data: &[u8]) -> String {
    hex_digest::<Sha1>(data)
}

pub fn sha256(data: &[u8]) -> String {
    hex_digest::<Sha256>(data)
}

pub fn sha512(data: &[u8]) -> String {
    hex_digest::<Sha512>(data)
}

fn hex_digest<D: Digest>(data: &[u8]) -> String {
    let mut hasher = D::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &[u8] = b"digest me";

    #[test]
    fn test_md5() {
        assert_eq!(md5(INPUT), "5a5f31530e5b9571d9353ae3f4e6c76d");
    }

    #[test]
    fn test_sha1() {
        assert_eq!(sha1(INPUT), "f182cb6b0fa5df0150bc9ce4a88769c66fc6cdeb");
    }

    #[test]
    fn test_sha256() {
        assert_eq!(
            sha256(INPUT),
            "a230eb9c90aa2a2e9cc1286fd505a348beae8cb74730255608db9284e2f7cef5"
        );
    }

    #[test]
    fn test_sha512() {
        assert_eq!(
            sha512(INPUT),
            concat!(
                "b2512ca0339783a8868edc928ba132715a84c33b81778420f9be1fdae33554c9",
                "5b1f01a7abcc600ba2e5250568f2b6e71e393a626aa440dfcc572c62476af45a"
            )
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(md5(b""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(
            digest(DigestAlgorithm::Sha256, b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_named() {
        assert_eq!(
            digest_named("SHA1", b"abc").unwrap(),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
        assert!(matches!(
            digest_named("sha3", b"abc"),
            Err(PolyCryptoError::UnsupportedDigest(name)) if name == "sha3"
        ));
    }

    #[test]
    fn test_algorithm_display() {
        assert_eq!(DigestAlgorithm::Sha512.to_string(), "sha512");
        assert_eq!("md5".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Md5);
    }
}
