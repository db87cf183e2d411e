use crate::utils::error::{FixtureError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_negative(operation: &str, argument: &str, value: i64) -> Result<()> {
    if value < 0 {
        return Err(FixtureError::invalid_argument(
            operation,
            argument,
            format!("must not be negative, got {}", value),
        ));
    }
    Ok(())
}

pub fn validate_non_zero(operation: &str, argument: &str, value: i64) -> Result<()> {
    if value == 0 {
        return Err(FixtureError::invalid_argument(
            operation,
            argument,
            "must not be zero",
        ));
    }
    Ok(())
}

pub fn validate_required_text(operation: &str, argument: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FixtureError::invalid_argument(
            operation,
            argument,
            "value is required and cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(FixtureError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Expected one of: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FixtureError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
