//! Input validation applied before generation
//!
//! The generator accepts any options. These checks are the front-end policy:
//! a zero length or an empty class selection is refused before generating.

use crate::error::{PassgenError, Result};
use crate::types::Options;
use regex::Regex;

pub const ZERO_LENGTH_MESSAGE: &str = "Character length can't be zero";
pub const NO_CLASS_MESSAGE: &str = "Please select at least one type";

pub const DEFAULT_MIN_LENGTH: usize = 1;
pub const DEFAULT_MAX_LENGTH: usize = 64;

/// Options validator with configurable length bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionsValidator {
    min_length: usize,
    max_length: usize,
}

impl OptionsValidator {
    /// Create a new validator with the default 1..=64 length range
    pub fn new() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }

    /// Create validator with custom length bounds
    pub fn with_bounds(min_length: usize, max_length: usize) -> Result<Self> {
        if min_length == 0 {
            return Err(PassgenError::config("Minimum length must be at least 1"));
        }
        if min_length > max_length {
            return Err(PassgenError::config(format!(
                "Minimum length {} is greater than maximum length {}",
                min_length, max_length
            )));
        }
        Ok(Self {
            min_length,
            max_length,
        })
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Validate options before handing them to the generator
    pub fn validate(&self, options: &Options) -> Result<()> {
        self.validate_length(options.length)?;
        self.validate_classes(options)?;
        Ok(())
    }

    /// Validate a requested length
    pub fn validate_length(&self, length: usize) -> Result<()> {
        if length == 0 {
            return Err(PassgenError::validation(ZERO_LENGTH_MESSAGE));
        }

        if length < self.min_length {
            return Err(PassgenError::validation(format!(
                "Character length must be at least {}",
                self.min_length
            )));
        }

        if length > self.max_length {
            return Err(PassgenError::validation(format!(
                "Character length can't exceed {}",
                self.max_length
            )));
        }

        Ok(())
    }

    /// Require at least one enabled class
    pub fn validate_classes(&self, options: &Options) -> Result<()> {
        if !options.has_any_class() {
            return Err(PassgenError::validation(NO_CLASS_MESSAGE));
        }
        Ok(())
    }

    /// Parse and validate a length typed as text
    pub fn parse_length(&self, input: &str) -> Result<usize> {
        let input = input.trim();
        let digits = Regex::new(r"^[0-9]+$").map_err(|e| PassgenError::internal(e.to_string()))?;

        if !digits.is_match(input) {
            return Err(PassgenError::validation(format!(
                "Character length must be a whole number, got '{}'",
                input
            )));
        }

        let length = input.parse::<usize>().map_err(|_| {
            PassgenError::validation(format!("Character length '{}' is out of range", input))
        })?;

        self.validate_length(length)?;
        Ok(length)
    }
}

impl Default for OptionsValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::CharacterClass;

    #[test]
    fn test_valid_options() {
        let validator = OptionsValidator::new();
        assert!(validator.validate(&Options::all(16)).is_ok());
        assert!(validator.validate(&Options::with_classes(1, &[CharacterClass::Numbers])).is_ok());
        assert!(validator.validate(&Options::all(64)).is_ok());
    }

    #[test]
    fn test_zero_length_rejected() {
        let validator = OptionsValidator::new();
        assert_eq!(
            validator.validate(&Options::all(0)),
            Err(PassgenError::validation(ZERO_LENGTH_MESSAGE))
        );
    }

    #[test]
    fn test_no_class_rejected() {
        let validator = OptionsValidator::new();
        assert_eq!(
            validator.validate(&Options::none(12)),
            Err(PassgenError::validation(NO_CLASS_MESSAGE))
        );
    }

    #[test]
    fn test_length_checked_before_classes() {
        let validator = OptionsValidator::new();
        assert_eq!(
            validator.validate(&Options::none(0)),
            Err(PassgenError::validation(ZERO_LENGTH_MESSAGE))
        );
    }

    #[test]
    fn test_bounds() {
        let validator = OptionsValidator::with_bounds(4, 20).unwrap();
        assert!(validator.validate_length(3).is_err());
        assert!(validator.validate_length(4).is_ok());
        assert!(validator.validate_length(20).is_ok());
        assert!(validator
            .validate_length(21)
            .unwrap_err()
            .to_string()
            .contains("can't exceed 20"));

        assert!(OptionsValidator::with_bounds(0, 10).is_err());
        assert!(OptionsValidator::with_bounds(30, 10).is_err());
    }

    #[test]
    fn test_parse_length() {
        let validator = OptionsValidator::new();
        assert_eq!(validator.parse_length(" 12 ").unwrap(), 12);
        assert!(validator.parse_length("0").is_err());
        assert!(validator.parse_length("-3").is_err());
        assert!(validator.parse_length("8.5").is_err());
        assert!(validator.parse_length("ten").is_err());
        assert!(validator.parse_length("99999999999999999999999").is_err());
    }

    #[test]
    fn test_parse_length_ascii_digits_only() {
        let validator = OptionsValidator::new();
        let err = validator.parse_length("٣").unwrap_err();
        assert!(err.to_string().contains("must be a whole number"));
        assert!(validator.parse_length("１２").is_err());
    }
}
