//! Random password generation

use rand::Rng;

use super::charset::build_alphabet;
use crate::types::Options;

/// Generate a password using the thread-local random source.
///
/// Returns an empty string when no class is enabled or `length` is zero.
pub fn generate_password(options: &Options) -> String {
    generate_password_with_rng(options, &mut rand::thread_rng())
}

/// Generate a password drawing indices from `rng`.
///
/// Every position is an independent uniform draw from the alphabet, with
/// replacement.
pub fn generate_password_with_rng<R: Rng + ?Sized>(options: &Options, rng: &mut R) -> String {
    let alphabet = build_alphabet(options);
    if alphabet.is_empty() {
        return String::new();
    }

    (0..options.length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::CharacterClass;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    #[test]
    fn test_exact_length() {
        let mut rng = StdRng::seed_from_u64(7);
        for length in [0, 1, 8, 12, 64, 500] {
            let password = generate_password_with_rng(&Options::all(length), &mut rng);
            assert_eq!(password.chars().count(), length);
        }
    }

    #[test]
    fn test_no_classes_is_empty() {
        for length in [0, 5, 100] {
            assert_eq!(generate_password(&Options::none(length)), "");
        }
    }

    #[test]
    fn test_zero_length_is_empty() {
        assert_eq!(generate_password(&Options::all(0)), "");
    }

    #[test]
    fn test_uppercase_only() {
        let options = Options::with_classes(200, &[CharacterClass::Uppercase]);
        let password = generate_password(&options);
        assert_eq!(password.len(), 200);
        assert!(password.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_only_enabled_classes() {
        let options = Options::with_classes(300, &[CharacterClass::Numbers, CharacterClass::Symbols]);
        let password = generate_password(&options);
        assert!(password
            .chars()
            .all(|c| CharacterClass::Numbers.contains(c) || CharacterClass::Symbols.contains(c)));
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let options = Options::all(32);
        let first = generate_password_with_rng(&options, &mut StdRng::seed_from_u64(42));
        let second = generate_password_with_rng(&options, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_uniform_sampling() {
        // 10 digits, 100k draws: expected 10k each, allow 5% deviation
        let options = Options::with_classes(100_000, &[CharacterClass::Numbers]);
        let password = generate_password_with_rng(&options, &mut StdRng::seed_from_u64(2024));

        let mut counts: HashMap<char, usize> = HashMap::new();
        for c in password.chars() {
            *counts.entry(c).or_default() += 1;
        }

        assert_eq!(counts.len(), 10);
        for (c, count) in counts {
            let frequency = count as f64 / 100_000.0;
            assert!(
                (frequency - 0.1).abs() < 0.005,
                "digit {} drawn with frequency {}",
                c,
                frequency
            );
        }
    }
}
