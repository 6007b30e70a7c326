//! Tire sensor validator
//!
//! Checks pressure, temperature and wear level against inclusive bounds.
//! Fields are checked in wire order, so the reported field is the first
//! offending one.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::sensors::*,
    errors::ValidationResult,
    record::TireReading,
    traits::Validator,
};

use super::{utils, Bounds};

/// Range rule for tire readings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TireValidator {
    /// Accepted pressure (psi)
    pub pressure: Bounds<f32>,
    /// Accepted temperature (°C)
    pub temperature: Bounds<f32>,
    /// Accepted wear level (%)
    pub wear_level: Bounds<i32>,
}

impl Default for TireValidator {
    fn default() -> Self {
        Self {
            pressure: Bounds::new(TIRE_PRESSURE_MIN, TIRE_PRESSURE_MAX),
            temperature: Bounds::new(TIRE_TEMPERATURE_MIN_C, TIRE_TEMPERATURE_MAX_C),
            wear_level: Bounds::new(TIRE_WEAR_MIN_PCT, TIRE_WEAR_MAX_PCT),
        }
    }
}

impl Validator for TireValidator {
    type Reading = TireReading;

    fn validate(&self, reading: &TireReading) -> ValidationResult<()> {
        utils::check_range("pressure", reading.pressure, self.pressure)?;
        utils::check_range("temperature", reading.temperature, self.temperature)?;
        utils::check_range("wear_level", reading.wear_level, self.wear_level)?;
        Ok(())
    }
}
