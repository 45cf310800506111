//! Validation utilities for scheme and field parameters

use super::types::{Error, FieldError, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate that a field operand lies in `[0, cardinality)`
#[inline(always)]
pub fn field_operand(operand: u64, cardinality: u32) -> core::result::Result<(), FieldError> {
    if operand >= u64::from(cardinality) {
        return Err(FieldError::OutOfRange {
            operand,
            cardinality,
        });
    }
    Ok(())
}

/// Validate a value lies in an inclusive range
#[inline(always)]
pub fn in_range(
    value: u64,
    min: u64,
    max: u64,
    name: &'static str,
    reason: &'static str,
) -> Result<()> {
    parameter(value >= min && value <= max, name, reason)
}
