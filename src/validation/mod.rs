//! Submission validation logic
//!
//! This module checks the three raw URL inputs before any
//! network request is issued.

pub mod form;

// Re-export commonly used items
pub use form::{Field, FieldErrors, validate, validate_field};
