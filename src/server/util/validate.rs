//! Field rules shared by the write parameter types.

use crate::server::error::validation::ValidationError;

/// Longest accepted description, in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 4096;

/// Fails when `value` is empty or only whitespace.
///
/// # Arguments
/// - `field` - Field name reported in the error
/// - `value` - Text to check
///
/// # Returns
/// - `Ok(())` - Value has at least one non-whitespace character
/// - `Err(ValidationError::Required)` - Value is blank
pub fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }

    Ok(())
}

/// Fails when `value` holds more than `max` characters.
pub fn max_chars(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(())
}

/// Applies the description length limit to an optional description.
pub fn description(value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(text) => max_chars("description", text, MAX_DESCRIPTION_LENGTH),
        None => Ok(()),
    }
}
