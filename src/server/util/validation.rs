//! Field validation shared by controllers and services.
//!
//! Presence is checked at the controller boundary with [`require`]; content rules (blank
//! names, colors, finite numbers) are enforced by the services.

use entity::star_color::StarColor;

use crate::server::error::validation::ValidationError;

/// Unwraps a required request field
pub fn require<T>(value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::MissingFields)
}

/// Trims a name, treating a blank name the same as a missing one
pub fn non_blank(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::MissingFields);
    }

    Ok(trimmed.to_string())
}

pub fn parse_color(color: &str) -> Result<StarColor, ValidationError> {
    StarColor::from_id(color).ok_or_else(|| ValidationError::InvalidColor(color.to_string()))
}

/// Accepts any finite number, star jitter is decorative so no range is enforced
pub fn finite(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteNumber(field));
    }

    Ok(value)
}
