//! Sensor Validity Bounds
//!
//! A record survives compaction only when every field of its payload lies
//! inside the bounds below. All bounds are inclusive: a tire at exactly
//! 19.0 or 28.0 pressure units is valid, 18.99 is not.

// ===== TIRE SENSOR BOUNDS =====

/// Minimum valid tire pressure (psi).
///
/// Below this the tire is considered flat or the sensor disconnected.
pub const TIRE_PRESSURE_MIN: f32 = 19.0;

/// Maximum valid tire pressure (psi).
pub const TIRE_PRESSURE_MAX: f32 = 28.0;

/// Minimum valid tire temperature (°C).
pub const TIRE_TEMPERATURE_MIN_C: f32 = 0.0;

/// Maximum valid tire temperature (°C).
///
/// Compound degradation starts well above track operating temperature.
pub const TIRE_TEMPERATURE_MAX_C: f32 = 120.0;

/// Minimum wear level (% of tread consumed).
pub const TIRE_WEAR_MIN_PCT: i32 = 0;

/// Maximum wear level (% of tread consumed).
pub const TIRE_WEAR_MAX_PCT: i32 = 100;

// ===== POWER MANAGEMENT UNIT BOUNDS =====

/// Minimum valid pack voltage (V).
pub const PMU_VOLTAGE_MIN_V: f32 = 10.0;

/// Maximum valid pack voltage (V).
pub const PMU_VOLTAGE_MAX_V: f32 = 20.0;

/// Minimum valid current (A). Negative current means the pack is charging.
pub const PMU_CURRENT_MIN_A: f32 = -100.0;

/// Maximum valid current (A).
pub const PMU_CURRENT_MAX_A: f32 = 100.0;

/// Minimum valid power consumption (kW).
pub const PMU_POWER_MIN_KW: f32 = 0.0;

/// Maximum valid power consumption (kW).
pub const PMU_POWER_MAX_KW: f32 = 1000.0;

/// Lower bound shared by the percentage fields (energy regen, energy storage).
pub const PMU_PERCENT_MIN: i32 = 0;

/// Upper bound shared by the percentage fields (energy regen, energy storage).
pub const PMU_PERCENT_MAX: i32 = 100;
