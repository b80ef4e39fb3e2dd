//! Configuration loading
//!
//! Defaults come from `PassgenConfig::default()`, then either a JSON file
//! (`--config`) or the `PASSGEN_*` environment variables.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config_error;
use crate::error::{PassgenError, Result};
use crate::password::validator::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};
use crate::password::OptionsValidator;
use crate::types::Options;

pub const ENV_LENGTH: &str = "PASSGEN_LENGTH";
pub const ENV_UPPERCASE: &str = "PASSGEN_UPPERCASE";
pub const ENV_LOWERCASE: &str = "PASSGEN_LOWERCASE";
pub const ENV_NUMBERS: &str = "PASSGEN_NUMBERS";
pub const ENV_SYMBOLS: &str = "PASSGEN_SYMBOLS";
pub const ENV_MIN_LENGTH: &str = "PASSGEN_MIN_LENGTH";
pub const ENV_MAX_LENGTH: &str = "PASSGEN_MAX_LENGTH";
pub const ENV_COPY: &str = "PASSGEN_COPY";

/// Front-end configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassgenConfig {
    /// Options used when the command line does not override them
    pub options: Options,
    pub min_length: usize,
    pub max_length: usize,
    pub copy_to_clipboard: bool,
}

impl Default for PassgenConfig {
    fn default() -> Self {
        Self {
            options: Options::default(),
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            copy_to_clipboard: false,
        }
    }
}

impl PassgenConfig {
    /// Build configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::default().apply_env()
    }

    /// Overlay `PASSGEN_*` environment variables
    pub fn apply_env(self) -> Result<Self> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    /// Overlay variables resolved by `lookup`
    pub fn apply_vars<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_UPPERCASE) {
            self.options.uppercase = parse_bool(ENV_UPPERCASE, &value)?;
        }
        if let Some(value) = lookup(ENV_LOWERCASE) {
            self.options.lowercase = parse_bool(ENV_LOWERCASE, &value)?;
        }
        if let Some(value) = lookup(ENV_NUMBERS) {
            self.options.numbers = parse_bool(ENV_NUMBERS, &value)?;
        }
        if let Some(value) = lookup(ENV_SYMBOLS) {
            self.options.symbols = parse_bool(ENV_SYMBOLS, &value)?;
        }
        if let Some(value) = lookup(ENV_MIN_LENGTH) {
            self.min_length = parse_usize(ENV_MIN_LENGTH, &value)?;
        }
        if let Some(value) = lookup(ENV_MAX_LENGTH) {
            self.max_length = parse_usize(ENV_MAX_LENGTH, &value)?;
        }
        if let Some(value) = lookup(ENV_COPY) {
            self.copy_to_clipboard = parse_bool(ENV_COPY, &value)?;
        }

        // Length is checked against the bounds resolved above
        let validator = self.validator()?;
        if let Some(value) = lookup(ENV_LENGTH) {
            self.options.length = validator.parse_length(&value).map_err(|e| match e {
                PassgenError::Validation { message } => config_error!("{}: {}", ENV_LENGTH, message),
                other => other,
            })?;
        }

        Ok(self)
    }

    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PassgenError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })?;

        let config: Self = serde_json::from_str(&content)
            .map_err(|e| PassgenError::parse(e.to_string(), Some(content)))?;

        config.validator()?;
        tracing::debug!(path = %path.display(), "Loaded configuration file");
        Ok(config)
    }

    /// Save configuration as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                PassgenError::io(e.to_string(), Some(parent.to_string_lossy().to_string()))
            })?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| PassgenError::internal(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content).map_err(|e| {
            PassgenError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })
    }

    /// Validator for the configured length range
    pub fn validator(&self) -> Result<OptionsValidator> {
        OptionsValidator::with_bounds(self.min_length, self.max_length)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(config_error!("{} must be true or false, got '{}'", key, other)),
    }
}

fn parse_usize(key: &str, value: &str) -> Result<usize> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| config_error!("{} must be a non-negative whole number, got '{}'", key, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = PassgenConfig::default();
        assert_eq!(config.options.length, 10);
        assert_eq!(config.min_length, 1);
        assert_eq!(config.max_length, 64);
        assert!(!config.copy_to_clipboard);
    }

    #[test]
    fn test_apply_vars() {
        let env = vars(&[
            (ENV_LENGTH, "24"),
            (ENV_SYMBOLS, "yes"),
            (ENV_NUMBERS, "0"),
            (ENV_MAX_LENGTH, "128"),
            (ENV_COPY, "TRUE"),
        ]);
        let config = PassgenConfig::default()
            .apply_vars(|key| env.get(key).cloned())
            .unwrap();

        assert_eq!(config.options.length, 24);
        assert!(config.options.symbols);
        assert!(!config.options.numbers);
        assert!(config.options.uppercase);
        assert_eq!(config.max_length, 128);
        assert!(config.copy_to_clipboard);
    }

    #[test]
    fn test_bad_values() {
        let env = vars(&[(ENV_UPPERCASE, "maybe")]);
        let err = PassgenConfig::default()
            .apply_vars(|key| env.get(key).cloned())
            .unwrap_err();
        assert!(matches!(err, PassgenError::Config { .. }));
        assert!(err.to_string().contains(ENV_UPPERCASE));

        let env = vars(&[(ENV_LENGTH, "-5")]);
        assert!(PassgenConfig::default()
            .apply_vars(|key| env.get(key).cloned())
            .is_err());
    }

    #[test]
    fn test_length_checked_against_bounds() {
        let env = vars(&[(ENV_LENGTH, "0")]);
        let err = PassgenConfig::default()
            .apply_vars(|key| env.get(key).cloned())
            .unwrap_err();
        assert_eq!(
            err,
            PassgenError::config("PASSGEN_LENGTH: Character length can't be zero")
        );

        // Bounds from the same environment apply regardless of lookup order
        let env = vars(&[(ENV_LENGTH, "100"), (ENV_MAX_LENGTH, "128")]);
        let config = PassgenConfig::default()
            .apply_vars(|key| env.get(key).cloned())
            .unwrap();
        assert_eq!(config.options.length, 100);

        let env = vars(&[(ENV_LENGTH, "100")]);
        let err = PassgenConfig::default()
            .apply_vars(|key| env.get(key).cloned())
            .unwrap_err();
        assert!(err.to_string().contains("can't exceed 64"));

        let env = vars(&[(ENV_LENGTH, " 16 ")]);
        let config = PassgenConfig::default()
            .apply_vars(|key| env.get(key).cloned())
            .unwrap();
        assert_eq!(config.options.length, 16);
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let env = vars(&[(ENV_MIN_LENGTH, "30"), (ENV_MAX_LENGTH, "20")]);
        assert!(PassgenConfig::default()
            .apply_vars(|key| env.get(key).cloned())
            .is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("passgen.json");

        let config = PassgenConfig {
            options: Options::all(20),
            max_length: 32,
            ..Default::default()
        };
        config.save(&path).unwrap();

        assert_eq!(PassgenConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            PassgenConfig::load(&missing),
            Err(PassgenError::Io { .. })
        ));

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(
            PassgenConfig::load(&broken),
            Err(PassgenError::Parse { .. })
        ));
    }
}
