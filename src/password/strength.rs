//! Password strength scoring
//!
//! The score adds a length signal and a diversity signal. Diversity comes from
//! the options used to request the password, not from its actual characters.

use serde::{Deserialize, Serialize};

use crate::types::Options;

/// Four-tier strength rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrengthLevel {
    TooWeak,
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    /// Classify a raw score (0-4)
    pub fn from_score(raw: u8) -> Self {
        match raw {
            0 | 1 => StrengthLevel::TooWeak,
            2 => StrengthLevel::Weak,
            3 => StrengthLevel::Medium,
            _ => StrengthLevel::Strong,
        }
    }

    /// Reported score, always in 1..=4
    pub fn score(&self) -> u8 {
        match self {
            StrengthLevel::TooWeak => 1,
            StrengthLevel::Weak => 2,
            StrengthLevel::Medium => 3,
            StrengthLevel::Strong => 4,
        }
    }

    pub fn classname(&self) -> &'static str {
        match self {
            StrengthLevel::TooWeak => "too-weak",
            StrengthLevel::Weak => "weak",
            StrengthLevel::Medium => "medium",
            StrengthLevel::Strong => "strong",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            StrengthLevel::TooWeak => "TOO WEAK!",
            StrengthLevel::Weak => "WEAK",
            StrengthLevel::Medium => "MEDIUM",
            StrengthLevel::Strong => "STRONG",
        }
    }
}

impl std::fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

/// Result of scoring a password
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrengthResult {
    pub classname: &'static str,
    pub score: u8,
    pub text: &'static str,
    pub level: StrengthLevel,
}

impl From<StrengthLevel> for StrengthResult {
    fn from(level: StrengthLevel) -> Self {
        Self {
            classname: level.classname(),
            score: level.score(),
            text: level.text(),
            level,
        }
    }
}

/// Points from password length: one at 8 characters, another at 12
fn length_points(password: &str) -> u8 {
    let length = password.chars().count();
    u8::from(length >= 8) + u8::from(length >= 12)
}

/// Points from configured diversity: one at 2 classes, another at all 4
fn diversity_points(options: &Options) -> u8 {
    let types = options.enabled_classes();
    u8::from(types >= 2) + u8::from(types >= 4)
}

/// Score `password` as generated with `options`
pub fn calculate_strength(password: &str, options: &Options) -> StrengthResult {
    let raw = length_points(password) + diversity_points(options);
    StrengthLevel::from_score(raw).into()
}
