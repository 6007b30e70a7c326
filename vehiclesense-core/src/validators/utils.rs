//! Shared range-check helpers
//!
//! Every bound in this crate is inclusive. Float fields are first checked for
//! NaN and infinity: a NaN compares false against both ends of a range and
//! would otherwise slip through a naive `value < min || value > max` test.

use crate::{
    errors::{ValidationError, ValidationResult},
    traits::Validatable,
};

use super::Bounds;

/// Check that `value` lies in `bounds`, reporting `field` on failure
pub fn check_range<T>(field: &'static str, value: T, bounds: Bounds<T>) -> ValidationResult<()>
where
    T: Validatable + PartialOrd + Copy + Into<f64>,
{
    if !value.is_valid() {
        return Err(ValidationError::InvalidValue { field });
    }

    if bounds.contains(value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            value: value.into(),
            min: bounds.min.into(),
            max: bounds.max.into(),
        })
    }
}
