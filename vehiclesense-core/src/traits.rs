//! Core traits for validators
//!
//! A validator looks at one reading and either accepts it or names the first
//! field that broke a bound.

use crate::errors::ValidationResult;

/// Core validator trait - implement this for each reading type
pub trait Validator {
    /// The type of reading this validator checks
    type Reading;

    /// Validate a single reading
    fn validate(&self, reading: &Self::Reading) -> ValidationResult<()>;

    /// Convenience wrapper for filtering
    fn is_valid(&self, reading: &Self::Reading) -> bool {
        self.validate(reading).is_ok()
    }
}

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is a usable number (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for i32 {
    fn is_valid(&self) -> bool {
        true
    }
}
