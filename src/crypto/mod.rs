//! Cryptographic primitives for poly-crypto
//!
//! Provides an AES-256-GCM envelope whose bytes match the PHP and JavaScript
//! runtimes, bcrypt hashing that accepts every `$2?$` variant, and random
//! string, digest and base conversion helpers.

pub mod aes;
pub mod bcrypt;
pub mod convert;
pub mod digest;
pub mod encoding;
pub mod key;
pub mod rand;

pub use self::aes::PolyAes;
pub use self::bcrypt::BcryptInfo;
pub use self::convert::PolyConvert;
pub use self::digest::DigestAlgorithm;
pub use self::encoding::Encoding;
pub use self::key::{generate_key, generate_salt, AesKey};
