use chrono::NaiveDateTime;

use crate::error::validation::ValidationError;

/// Accepted timestamp layouts, tried in order: HTML `datetime-local` output
/// with and without seconds, then the common SQL literal.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Parses a timestamp form field.
///
/// # Arguments
/// - `field` - Name of the form field, used in the validation error
/// - `value` - The raw form value to parse
///
/// # Returns
/// - `Ok(NaiveDateTime)` - Successfully parsed timestamp
/// - `Err(ValidationError::InvalidField)` - Value matched none of the accepted layouts
pub fn parse_datetime(field: &'static str, value: &str) -> Result<NaiveDateTime, ValidationError> {
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(parsed);
        }
    }

    Err(ValidationError::InvalidField {
        field,
        reason: format!("'{}' is not a recognized timestamp", value),
    })
}
