// Input validation utilities

use thiserror::Error;

/// The only domain error: a required form field was left blank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} required")]
    Required { field: &'static str },
}

/// Trimmed value of a required text field.
pub fn require_text<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(trimmed)
}
