//! Fixture operations with their defects left in place.
//!
//! Harnesses consume these as-is. Do not fix them here; the corrected
//! versions live in [`crate::core::checked`].

use crate::utils::error::Result;

pub const USER_LABEL_PREFIX: &str = "User: ";

/// Returns the sum of two integers.
///
/// A negative operand yields `Ok(0)` instead of an error, so a rejected input
/// is indistinguishable from a genuine zero sum. Overflow wraps.
pub fn add(a: i64, b: i64) -> Result<i64> {
    if a < 0 || b < 0 {
        return Ok(0);
    }
    Ok(a.wrapping_add(b))
}

/// Integer quotient, truncated toward zero.
///
/// No divisor check: `b == 0` panics with the runtime's divide-by-zero fault.
pub fn divide(a: i64, b: i64) -> i64 {
    a / b
}

/// Builds a `User: <name>` label, or `""` for an empty name.
///
/// An empty name is not reported as an error.
pub fn format_user(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }
    format!("{}{}", USER_LABEL_PREFIX, name)
}
