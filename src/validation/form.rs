use std::fmt;

use crate::core::constants::{form, messages};
use crate::types::SubmissionInput;

/// The three URL fields of the submission form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Url1,
    Url2,
    Url3,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; form::REQUIRED_URLS] = [Field::Url1, Field::Url2, Field::Url3];

    /// Human-readable label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Url1 => "LinkedIn URL 1",
            Field::Url2 => "LinkedIn URL 2",
            Field::Url3 => "LinkedIn URL 3",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Field-scoped validation errors, ordered by field.
///
/// At most one message per field; a field without an entry passed
/// validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(Field, &'static str)>,
}

impl FieldErrors {
    fn insert(&mut self, field: Field, message: &'static str) {
        self.entries.push((field, message));
    }

    /// Whether any field failed validation.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The message for one field, if it failed.
    pub fn message_for(&self, field: Field) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, msg)| *msg)
    }

    /// Iterate failing fields with their messages, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.entries.iter().copied()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", field.label(), message)?;
        }
        Ok(())
    }
}

/// Validate one raw field value.
///
/// A field is valid only if it is non-empty after trimming and contains the
/// profile-URL marker substring. Returns the trimmed value on success.
pub fn validate_field(raw: &str) -> Result<String, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(messages::URL_REQUIRED);
    }
    if !trimmed.contains(form::PROFILE_URL_MARKER) {
        return Err(messages::INVALID_PROFILE_URL);
    }
    Ok(trimmed.to_string())
}

/// Validate the three raw inputs into a normalized `SubmissionInput`.
///
/// Every field is checked even after the first failure so the caller can
/// surface all messages adjacent to their inputs at once.
pub fn validate(url1: &str, url2: &str, url3: &str) -> Result<SubmissionInput, FieldErrors> {
    let mut errors = FieldErrors::default();
    let mut normalized: [Option<String>; form::REQUIRED_URLS] = [None, None, None];

    for (i, (field, raw)) in Field::ALL
        .iter()
        .zip([url1, url2, url3])
        .enumerate()
    {
        match validate_field(raw) {
            Ok(value) => normalized[i] = Some(value),
            Err(message) => errors.insert(*field, message),
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let [u1, u2, u3] = normalized;
    // The error check above guarantees all three are populated
    Ok(SubmissionInput::new_unchecked(
        u1.unwrap(),
        u2.unwrap(),
        u3.unwrap(),
    ))
}
