//! Password generation and strength scoring

pub mod charset;
pub mod generator;
pub mod strength;
pub mod validator;

// Re-export main functionality
pub use charset::{build_alphabet, CharacterClass};
pub use generator::{generate_password, generate_password_with_rng};
pub use strength::{calculate_strength, StrengthLevel, StrengthResult};
pub use validator::OptionsValidator;

use crate::types::{GeneratedPassword, Options};
use chrono::Utc;

/// Generate a password and score it in one step
pub fn generate(options: &Options) -> GeneratedPassword {
    let password = generate_password(options);
    let strength = calculate_strength(&password, options);

    tracing::debug!(
        length = options.length,
        classes = options.enabled_classes(),
        score = strength.score,
        strength = %strength.level,
        "Password generated"
    );

    GeneratedPassword {
        password,
        strength,
        options: *options,
        generated_at: Utc::now(),
    }
}
