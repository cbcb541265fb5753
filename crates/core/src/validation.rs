//! Input validators for employee and project payloads.
//!
//! Every function here is pure: it inspects a value and returns a
//! `CoreError::Validation` naming the offending field. Checks that need the
//! database (name uniqueness, foreign-key existence) live in the API layer.

use crate::error::CoreError;

/// Maximum length (in characters) of names, specialties and descriptions.
pub const MAX_TEXT_LEN: usize = 255;

/// Validate that a monetary amount (salary, budget) is strictly positive.
pub fn validate_positive_amount(value: f64, field: &str) -> Result<(), CoreError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CoreError::Validation(format!(
            "{field} must be greater than zero, got {value}"
        )));
    }
    Ok(())
}

/// Validate that a required text field is non-blank and within length limits.
pub fn validate_required_text(value: &str, field: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(CoreError::Validation(format!(
            "{field} must not exceed {MAX_TEXT_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate an optional lower/upper bound pair used by budget filters.
///
/// Either side may be absent; when both are present the lower bound must
/// not exceed the upper bound.
pub fn validate_amount_range(min: Option<f64>, max: Option<f64>) -> Result<(), CoreError> {
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(CoreError::Validation(format!(
                "presupuesto_min ({min}) must not exceed presupuesto_max ({max})"
            )));
        }
    }
    Ok(())
}
