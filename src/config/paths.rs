//! Path management for poly-crypto
//!
//! ## Path Resolution Order
//!
//! 1. `POLY_CRYPTO_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory: `~/.config/poly-crypto` on Linux,
//!    `~/Library/Application Support/poly-crypto` on macOS,
//!    `%APPDATA%\poly-crypto\config` on Windows

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::PolyCryptoError;

/// Environment variable that overrides the config directory
pub const CONFIG_DIR_ENV: &str = "POLY_CRYPTO_CONFIG_DIR";

/// Manages the paths used by poly-crypto
#[derive(Debug, Clone)]
pub struct PolyPaths {
    base_dir: PathBuf,
}

impl PolyPaths {
    /// Resolve the config directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override is not set.
    pub fn new() -> Result<Self, PolyCryptoError> {
        let base_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create PolyPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn config_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Create the config directory if it does not exist
    pub fn ensure_directories(&self) -> Result<(), PolyCryptoError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PolyCryptoError::Io(format!("Failed to create config directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, PolyCryptoError> {
    ProjectDirs::from("", "", "poly-crypto")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| PolyCryptoError::Config("Could not determine home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PolyPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.config_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();

        env::set_var(CONFIG_DIR_ENV, temp_dir.path());
        let paths = PolyPaths::new().unwrap();
        env::remove_var(CONFIG_DIR_ENV);

        assert_eq!(paths.config_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("poly-crypto");
        let paths = PolyPaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();
        assert!(nested.is_dir());
    }
}
