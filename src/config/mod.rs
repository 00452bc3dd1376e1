//! Configuration module for poly-crypto
//!
//! - Config directory resolution
//! - Persisted command-line defaults

pub mod paths;
pub mod settings;

pub use paths::PolyPaths;
pub use settings::Settings;
