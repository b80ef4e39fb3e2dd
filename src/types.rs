//! Core types and structures for passgen

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::password::{CharacterClass, StrengthResult};

/// Options for a single generation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            length: 10,
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: false,
        }
    }
}

impl Options {
    /// Options with no character class enabled
    pub fn none(length: usize) -> Self {
        Self {
            length,
            uppercase: false,
            lowercase: false,
            numbers: false,
            symbols: false,
        }
    }

    /// Options with every character class enabled
    pub fn all(length: usize) -> Self {
        Self {
            length,
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
        }
    }

    /// Options enabling exactly the given classes
    pub fn with_classes(length: usize, classes: &[CharacterClass]) -> Self {
        classes
            .iter()
            .fold(Self::none(length), |options, class| options.enable(*class))
    }

    /// Return a copy with `class` switched on
    pub fn enable(mut self, class: CharacterClass) -> Self {
        match class {
            CharacterClass::Uppercase => self.uppercase = true,
            CharacterClass::Lowercase => self.lowercase = true,
            CharacterClass::Numbers => self.numbers = true,
            CharacterClass::Symbols => self.symbols = true,
        }
        self
    }

    /// Whether `class` is switched on
    pub fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Numbers => self.numbers,
            CharacterClass::Symbols => self.symbols,
        }
    }

    /// Enabled classes, in alphabet order
    pub fn classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.includes(*class))
            .collect()
    }

    /// Number of enabled classes (0-4)
    pub fn enabled_classes(&self) -> usize {
        CharacterClass::ALL
            .iter()
            .filter(|class| self.includes(**class))
            .count()
    }

    pub fn has_any_class(&self) -> bool {
        self.enabled_classes() > 0
    }
}

/// A generated password together with how it was made and how strong it is
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub strength: StrengthResult,
    pub options: Options,
    pub generated_at: DateTime<Utc>,
}
