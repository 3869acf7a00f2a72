//! Interactive submission form
//!
//! The terminal counterpart of the three-field web form: one prompt per
//! URL field, each validated on entry so the error message appears
//! adjacent to the offending input and the field is re-asked.

use dialoguer::{Confirm, Input, theme::ColorfulTheme};

use crate::core::error::{LinkFactsError, Result};
use crate::types::SubmissionInput;
use crate::validation::{Field, validate, validate_field};

/// Prompt for the three profile URLs and return a validated submission.
///
/// A field that fails validation is re-prompted with its field-scoped
/// message; the submission cannot be produced while any field is invalid.
pub fn prompt_submission() -> Result<SubmissionInput> {
    let theme = ColorfulTheme::default();
    let mut values = Vec::with_capacity(Field::ALL.len());

    for field in Field::ALL {
        let value: String = Input::with_theme(&theme)
            .with_prompt(field.label())
            .validate_with(|input: &String| validate_field(input).map(|_| ()))
            .interact_text()
            .map_err(dialog_error)?;
        values.push(value);
    }

    // Each field was validated on entry, so this cannot produce field errors
    validate(&values[0], &values[1], &values[2])
        .map_err(|errors| LinkFactsError::Validation(errors.to_string()))
}

/// Ask whether to run another submission after a result or error was shown.
pub fn confirm_another_round() -> Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Analyze another batch of profiles?")
        .default(false)
        .interact()
        .map_err(dialog_error)
}

fn dialog_error(err: dialoguer::Error) -> LinkFactsError {
    match err {
        dialoguer::Error::IO(io) => LinkFactsError::Io(io),
    }
}
