//! Parsing of free-text score fields supplied by the input layer.

use crate::errors::domain::{DomainError, ValidationKind};

/// Parse a required signed integer (round deltas, bracket scores, totals).
pub fn parse_points(raw: &str, field: &str, who: &str) -> Result<i32, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::MissingScore,
            format!("Please enter a {field} for {who}."),
        ));
    }
    trimmed.parse::<i32>().map_err(|_| {
        DomainError::validation(
            ValidationKind::NotAnInteger,
            format!("The {field} for {who} must be a whole number (got '{trimmed}')."),
        )
    })
}

/// Parse a required non-negative count (bids, tricks won).
pub fn parse_count(raw: &str, field: &str, who: &str) -> Result<i32, DomainError> {
    let value = parse_points(raw, field, who)?;
    if value < 0 {
        return Err(DomainError::validation(
            ValidationKind::NotAnInteger,
            format!("The {field} for {who} cannot be negative (got {value})."),
        ));
    }
    Ok(value)
}

/// Parse an optional signed integer; blank means 0.
pub fn parse_optional_points(raw: &str, field: &str, who: &str) -> Result<i32, DomainError> {
    if raw.trim().is_empty() {
        Ok(0)
    } else {
        parse_points(raw, field, who)
    }
}

/// Lenient parse used where a non-number simply means "not entered yet".
pub fn try_points(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok()
}
