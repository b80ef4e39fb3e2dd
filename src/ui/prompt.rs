//! Interactive prompts for collecting options

use inquire::list_option::ListOption;
use inquire::validator::Validation;
use inquire::{Confirm, CustomType, CustomUserError, MultiSelect};

use crate::config::PassgenConfig;
use crate::error::{PassgenError, Result};
use crate::password::validator::NO_CLASS_MESSAGE;
use crate::password::{CharacterClass, OptionsValidator};
use crate::types::Options;

/// Ask for length and character classes, starting from the configured defaults
pub fn prompt_options(config: &PassgenConfig) -> Result<Options> {
    let validator = config.validator()?;
    let length = prompt_length(validator, config.options.length)?;
    let classes = prompt_classes(&config.options)?;
    Ok(Options::with_classes(length, &classes))
}

fn prompt_length(validator: OptionsValidator, default: usize) -> Result<usize> {
    let default = default.clamp(validator.min_length(), validator.max_length());
    let help = format!(
        "Between {} and {}",
        validator.min_length(),
        validator.max_length()
    );

    let length = CustomType::<usize>::new("Character length:")
        .with_default(default)
        .with_help_message(&help)
        .with_error_message("Please type a whole number")
        .with_validator(
            move |value: &usize| -> std::result::Result<Validation, CustomUserError> {
                match validator.validate_length(*value) {
                    Ok(()) => Ok(Validation::Valid),
                    Err(e) => Ok(Validation::Invalid(validation_message(&e).into())),
                }
            },
        )
        .prompt()?;

    Ok(length)
}

fn prompt_classes(defaults: &Options) -> Result<Vec<CharacterClass>> {
    let selected: Vec<usize> = CharacterClass::ALL
        .iter()
        .enumerate()
        .filter(|(_, class)| defaults.includes(**class))
        .map(|(i, _)| i)
        .collect();

    let classes = MultiSelect::new("Character types:", CharacterClass::ALL.to_vec())
        .with_default(&selected)
        .with_validator(
            |chosen: &[ListOption<&CharacterClass>]| -> std::result::Result<Validation, CustomUserError> {
                if chosen.is_empty() {
                    Ok(Validation::Invalid(NO_CLASS_MESSAGE.into()))
                } else {
                    Ok(Validation::Valid)
                }
            },
        )
        .prompt()?;

    Ok(classes)
}

/// Ask whether to copy the password
pub fn prompt_copy(default: bool) -> Result<bool> {
    Ok(Confirm::new("Copy to clipboard?")
        .with_default(default)
        .prompt()?)
}

fn validation_message(error: &PassgenError) -> String {
    match error {
        PassgenError::Validation { message } => message.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::validator::ZERO_LENGTH_MESSAGE;

    #[test]
    fn test_validation_message_is_bare() {
        let error = OptionsValidator::new().validate_length(0).unwrap_err();
        assert_eq!(validation_message(&error), ZERO_LENGTH_MESSAGE);

        let error = PassgenError::config("broken");
        assert_eq!(validation_message(&error), "Configuration error: broken");
    }
}
