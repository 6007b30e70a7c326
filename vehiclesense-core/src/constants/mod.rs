//! Constants for VehicleSense Core
//!
//! Every numeric limit used by the validators, the wire codec and the built-in
//! analysis operations is defined here with its unit and meaning.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Sensors**: Range rules a record must satisfy to survive compaction
//! - **Format**: Byte layout of the binary dump
//! - **Operations**: Thresholds used by the built-in analysis routines
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Use descriptive names that include units
//! 3. Bounds are inclusive unless the name says otherwise

/// Validity bounds for tire and power management unit readings.
pub mod sensors;

/// Byte layout of the packed little-endian record dump.
pub mod format;

/// Thresholds and slot numbers for the built-in analysis operations.
pub mod operations;

// Re-export commonly used constants for convenience
pub use sensors::{
    TIRE_PRESSURE_MIN, TIRE_PRESSURE_MAX,
    TIRE_TEMPERATURE_MIN_C, TIRE_TEMPERATURE_MAX_C,
    TIRE_WEAR_MIN_PCT, TIRE_WEAR_MAX_PCT,
    PMU_VOLTAGE_MIN_V, PMU_VOLTAGE_MAX_V,
    PMU_CURRENT_MIN_A, PMU_CURRENT_MAX_A,
    PMU_POWER_MIN_KW, PMU_POWER_MAX_KW,
    PMU_PERCENT_MIN, PMU_PERCENT_MAX,
};

pub use format::{
    TAG_TIRE, TAG_PMU, WORD_SIZE,
    HEADER_SIZE, TIRE_PAYLOAD_SIZE, PMU_PAYLOAD_SIZE, MIN_RECORD_SIZE,
};

pub use operations::MAX_OPERATIONS;
