//! Validation helpers shared by the text and binary decoders
//!
//! Each helper is a pure predicate: it returns the value unchanged or a range
//! [`DecodeError`] naming the field. Callers attach file and position.

use super::field_spec::Rule;
use crate::app::models::Value;
use crate::error::{DecodeError, DecodeResult};
use std::fmt::Display;

/// Check `min <= value <= max`
pub fn range<T>(field: &str, value: T, min: T, max: T) -> DecodeResult<T>
where
    T: PartialOrd + Display + Copy,
{
    if value >= min && value <= max {
        Ok(value)
    } else {
        Err(DecodeError::range(
            field,
            format!("value {} outside [{}, {}]", value, min, max),
        ))
    }
}

/// Check `value > 0`
pub fn positive<T>(field: &str, value: T) -> DecodeResult<T>
where
    T: PartialOrd + Display + Copy + Default,
{
    if value > T::default() {
        Ok(value)
    } else {
        Err(DecodeError::range(
            field,
            format!("value {} must be positive", value),
        ))
    }
}

/// Check `value >= 0`
pub fn nonnegative<T>(field: &str, value: T) -> DecodeResult<T>
where
    T: PartialOrd + Display + Copy + Default,
{
    if value >= T::default() {
        Ok(value)
    } else {
        Err(DecodeError::range(
            field,
            format!("value {} must not be negative", value),
        ))
    }
}

/// Check a float is finite
pub fn finite(field: &str, value: f64) -> DecodeResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DecodeError::range(
            field,
            format!("value {} is not a finite number", value),
        ))
    }
}

impl Rule {
    /// Apply the rule to a coerced value; text values are not subject to rules
    pub fn check(&self, field: &str, value: &Value) -> DecodeResult<()> {
        let Some(number) = value.as_float() else {
            return Ok(());
        };

        match *self {
            Rule::Range { min, max } => range(field, number, min, max).map(|_| ()),
            Rule::Positive => positive(field, number).map(|_| ()),
            Rule::NonNegative => nonnegative(field, number).map(|_| ()),
        }
    }
}
