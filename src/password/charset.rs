//! Character classes and alphabet assembly

use serde::{Deserialize, Serialize};

use crate::types::Options;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const NUMBERS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+[]{}<>?";

/// One of the four fixed character groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl CharacterClass {
    /// All classes in alphabet order
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Numbers,
        CharacterClass::Symbols,
    ];

    pub fn chars(&self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Numbers => NUMBERS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    /// Label shown next to the class toggle
    pub fn label(&self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "Include Uppercase Letters",
            CharacterClass::Lowercase => "Include Lowercase Letters",
            CharacterClass::Numbers => "Include Numbers",
            CharacterClass::Symbols => "Include Symbols",
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars().contains(c)
    }
}

impl std::fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Concatenate the enabled classes into one alphabet.
///
/// Empty when no class is enabled.
pub fn build_alphabet(options: &Options) -> Vec<char> {
    CharacterClass::ALL
        .iter()
        .filter(|class| options.includes(**class))
        .flat_map(|class| class.chars().chars())
        .collect()
}
