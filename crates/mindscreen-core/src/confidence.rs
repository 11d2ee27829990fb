//! Certainty factor value helpers.
//!
//! Both expert rule weights and user answers are certainty factors in
//! `[0, 1]`. Values are carried as plain `f64`; these helpers are the single
//! place the range and display precision are defined.

use crate::error::CoreError;

pub const MIN: f64 = 0.0;
pub const MAX: f64 = 1.0;

/// True if `value` is a finite number in `[0, 1]`.
pub fn is_valid_confidence(value: f64) -> bool {
    value.is_finite() && (MIN..=MAX).contains(&value)
}

/// Check `value` for the named field, returning it unchanged when valid.
pub fn check_confidence(field: &str, value: f64) -> Result<f64, CoreError> {
    if is_valid_confidence(value) {
        Ok(value)
    } else {
        Err(CoreError::InvalidConfidence {
            field: field.to_string(),
            value,
        })
    }
}

/// Parse a confidence submitted as text (e.g. `"0.6"`). Range is not checked.
pub fn parse_confidence(field: &str, raw: &str) -> Result<f64, CoreError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| CoreError::UnparsableConfidence {
            field: field.to_string(),
            raw: raw.to_string(),
        })
}

/// Round to two decimals for display. The unrounded value stays the one
/// used for any further computation.
pub fn round_confidence(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
