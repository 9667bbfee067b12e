//! Explicit input checks that run before any persistence call.

use crate::errors::DomainError;
use thiserror::Error;

pub const NON_NEGATIVE_PRICE_MESSAGE: &str =
    "Invalid input: 'price' should be a non-negative integer.";
pub const INTEGER_PRICE_MESSAGE: &str = "Invalid input: 'price' should be an integer.";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PriceError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("'{0}' is not a whole number")]
    NotAnInteger(String),

    #[error("{0} is negative")]
    Negative(i64),

    #[error("'{0}' does not fit a 64-bit integer")]
    OutOfRange(String),
}

/// Parse a price as submitted by a form or JSON body.
///
/// Accepts anything that reads as a finite, integral, non-negative decimal
/// number: `"12"`, `" 12 "`, `"12.0"` and `"1e2"` are all valid. Fractions,
/// negatives, empty strings and non-numeric text are rejected.
pub fn parse_price(raw: &str) -> Result<i64, PriceError> {
    let trimmed = raw.trim();

    let value = match trimmed.parse::<i64>() {
        Ok(value) => value,
        Err(_) => parse_integral_float(trimmed)?,
    };

    if value < 0 {
        return Err(PriceError::Negative(value));
    }

    Ok(value)
}

fn parse_integral_float(text: &str) -> Result<i64, PriceError> {
    let float = text
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| PriceError::NotANumber(text.to_string()))?;

    if float.fract() != 0.0 {
        return Err(PriceError::NotAnInteger(text.to_string()));
    }

    // i64::MAX as f64 rounds up to 2^63
    if float >= i64::MAX as f64 || float < i64::MIN as f64 {
        return Err(PriceError::OutOfRange(text.to_string()));
    }

    Ok(float as i64)
}

/// Returns the trimmed value of a required text field.
pub fn require_field(field: &str, value: Option<&str>) -> Result<String, DomainError> {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(DomainError::ValidationError(format!(
            "Invalid input: '{}' is required.",
            field
        ))),
    }
}
