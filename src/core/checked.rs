//! Corrected operations: every out-of-domain input is an `InvalidArgument`.

use crate::core::seeded::USER_LABEL_PREFIX;
use crate::utils::error::{FixtureError, Result};
use crate::utils::validation::{validate_non_negative, validate_non_zero, validate_required_text};

pub fn add(a: i64, b: i64) -> Result<i64> {
    validate_non_negative("add", "a", a).map_err(log_rejection)?;
    validate_non_negative("add", "b", b).map_err(log_rejection)?;

    a.checked_add(b).ok_or_else(|| {
        log_rejection(FixtureError::invalid_argument(
            "add",
            "a + b",
            format!("sum of {} and {} overflows i64", a, b),
        ))
    })
}

/// Integer quotient, truncated toward zero.
pub fn divide(a: i64, b: i64) -> Result<i64> {
    validate_non_zero("divide", "b", b).map_err(log_rejection)?;

    // Only i64::MIN / -1 can still fail here.
    a.checked_div(b).ok_or_else(|| {
        log_rejection(FixtureError::invalid_argument(
            "divide",
            "a / b",
            format!("quotient of {} and {} overflows i64", a, b),
        ))
    })
}

pub fn format_user(name: &str) -> Result<String> {
    validate_required_text("format_user", "name", name).map_err(log_rejection)?;
    Ok(format!("{}{}", USER_LABEL_PREFIX, name))
}

fn log_rejection(err: FixtureError) -> FixtureError {
    tracing::debug!("rejected input: {}", err);
    err
}
