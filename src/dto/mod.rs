pub mod orders;
pub mod products;

use crate::error::{AppError, AppResult};

/// Presence check for a decoded request field.
pub(crate) fn required<T>(field: &str, value: Option<T>) -> AppResult<T> {
    value.ok_or_else(|| AppError::validation(format!("{field} is required")))
}

/// Presence, non-blank and length check for a text field. The value is kept as sent.
pub(crate) fn required_text(field: &str, value: Option<String>, max_chars: usize) -> AppResult<String> {
    let value = required(field, value)?;
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be blank")));
    }
    if value.chars().count() > max_chars {
        return Err(AppError::validation(format!(
            "{field} must be at most {max_chars} characters"
        )));
    }
    Ok(value)
}
