//! Power management unit validator

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::sensors::*,
    errors::ValidationResult,
    record::PmuReading,
    traits::Validator,
};

use super::{utils, Bounds};

/// Range rule for PMU readings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PmuValidator {
    /// Accepted pack voltage (V)
    pub voltage: Bounds<f32>,
    /// Accepted current (A)
    pub current: Bounds<f32>,
    /// Accepted power consumption (kW)
    pub power_consumption: Bounds<f32>,
    /// Accepted regenerated energy (%)
    pub energy_regen: Bounds<i32>,
    /// Accepted state of charge (%)
    pub energy_storage: Bounds<i32>,
}

impl Default for PmuValidator {
    fn default() -> Self {
        Self {
            voltage: Bounds::new(PMU_VOLTAGE_MIN_V, PMU_VOLTAGE_MAX_V),
            current: Bounds::new(PMU_CURRENT_MIN_A, PMU_CURRENT_MAX_A),
            power_consumption: Bounds::new(PMU_POWER_MIN_KW, PMU_POWER_MAX_KW),
            energy_regen: Bounds::new(PMU_PERCENT_MIN, PMU_PERCENT_MAX),
            energy_storage: Bounds::new(PMU_PERCENT_MIN, PMU_PERCENT_MAX),
        }
    }
}

impl Validator for PmuValidator {
    type Reading = PmuReading;

    fn validate(&self, reading: &PmuReading) -> ValidationResult<()> {
        utils::check_range("voltage", reading.voltage, self.voltage)?;
        utils::check_range("current", reading.current, self.current)?;
        utils::check_range("power_consumption", reading.power_consumption, self.power_consumption)?;
        utils::check_range("energy_regen", reading.energy_regen, self.energy_regen)?;
        utils::check_range("energy_storage", reading.energy_storage, self.energy_storage)?;
        Ok(())
    }
}
