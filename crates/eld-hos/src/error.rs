use thiserror::Error;

#[derive(Debug, Error)]
pub enum HosError {
    #[error("invalid {field}: {value} ({reason})")]
    InvalidInput {
        field:  &'static str,
        value:  f64,
        reason: &'static str,
    },
}

pub type HosResult<T> = Result<T, HosError>;

/// Reject NaN and ±∞.
pub(crate) fn require_finite(field: &'static str, value: f64) -> HosResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(HosError::InvalidInput { field, value, reason: "must be finite" })
    }
}

/// Reject NaN, ±∞, and negative values.
pub(crate) fn require_non_negative(field: &'static str, value: f64) -> HosResult<f64> {
    let value = require_finite(field, value)?;
    if value < 0.0 {
        return Err(HosError::InvalidInput { field, value, reason: "must not be negative" });
    }
    Ok(value)
}

/// Reject NaN, ±∞, negative values, and values above `max`.
pub(crate) fn require_in_range(field: &'static str, value: f64, max: f64) -> HosResult<f64> {
    let value = require_non_negative(field, value)?;
    if value > max {
        return Err(HosError::InvalidInput { field, value, reason: "too large" });
    }
    Ok(value)
}
