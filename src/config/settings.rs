//! User settings for poly-crypto
//!
//! Stores defaults for the command line: the ciphertext encoding, the PBKDF2
//! iteration count and the bcrypt cost. Flags given on the command line take
//! precedence over these.

use serde::{Deserialize, Serialize};

use super::paths::PolyPaths;
use crate::crypto::bcrypt::{DEFAULT_COST, MAX_COST, MIN_COST};
use crate::crypto::key::DEFAULT_ITERATIONS;
use crate::crypto::Encoding;
use crate::error::PolyCryptoError;

/// User settings for poly-crypto
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Encoding for encrypted output
    #[serde(default)]
    pub encoding: Encoding,

    /// PBKDF2 iterations for password-based encryption
    #[serde(default = "default_iterations")]
    pub pbkdf2_iterations: u32,

    /// Cost for new bcrypt hashes
    #[serde(default = "default_cost")]
    pub bcrypt_cost: u32,
}

fn default_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

fn default_cost() -> u32 {
    DEFAULT_COST
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            encoding: Encoding::default(),
            pbkdf2_iterations: default_iterations(),
            bcrypt_cost: default_cost(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    ///
    /// Never writes to disk.
    pub fn load_or_default(paths: &PolyPaths) -> Result<Self, PolyCryptoError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            tracing::debug!(path = %settings_path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| PolyCryptoError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            PolyCryptoError::Config(format!("Failed to parse settings file: {}", e))
        })?;
        settings.validate()?;

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PolyPaths) -> Result<(), PolyCryptoError> {
        self.validate()?;
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            PolyCryptoError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| PolyCryptoError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject values the crypto functions would refuse anyway
    pub fn validate(&self) -> Result<(), PolyCryptoError> {
        if !(MIN_COST..=MAX_COST).contains(&self.bcrypt_cost) {
            return Err(PolyCryptoError::Config(format!(
                "bcrypt_cost must be between {} and {}, got {}",
                MIN_COST, MAX_COST, self.bcrypt_cost
            )));
        }
        if self.pbkdf2_iterations == 0 {
            return Err(PolyCryptoError::Config(
                "pbkdf2_iterations must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.encoding, Encoding::Base64);
        assert_eq!(settings.pbkdf2_iterations, 10_000);
        assert_eq!(settings.bcrypt_cost, 13);
    }

    #[test]
    fn test_missing_file_gives_defaults_without_writing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PolyPaths::with_base_dir(temp_dir.path().join("cfg"));

        let settings = Settings::load_or_default(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PolyPaths::with_base_dir(temp_dir.path().join("cfg"));

        let settings = Settings {
            encoding: Encoding::Hex,
            pbkdf2_iterations: 5000,
            bcrypt_cost: 10,
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PolyPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"encoding":"bin"}"#).unwrap();

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded.encoding, Encoding::Bin);
        assert_eq!(loaded.bcrypt_cost, 13);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PolyPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        assert!(matches!(
            Settings::load_or_default(&paths),
            Err(PolyCryptoError::Config(_))
        ));
    }

    #[test]
    fn test_validate() {
        let mut settings = Settings::default();
        settings.bcrypt_cost = 3;
        assert!(settings.validate().is_err());

        settings.bcrypt_cost = 31;
        settings.pbkdf2_iterations = 0;
        assert!(settings.validate().is_err());

        settings.pbkdf2_iterations = 1;
        assert!(settings.validate().is_ok());
    }
}
