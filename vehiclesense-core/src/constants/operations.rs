//! Analysis Operation Parameters
//!
//! Slot numbers of the built-in operation table and the thresholds those
//! operations grade readings against.

/// Number of slots in an operation table.
///
/// Operation indices stored in a record must lie in `0..MAX_OPERATIONS`.
pub const MAX_OPERATIONS: usize = 8;

// ===== SLOT ASSIGNMENT =====

/// Reports whether tire pressure is low, normal or high.
pub const OP_TIRE_PRESSURE_STATUS: usize = 0;
/// Reports whether tire temperature is normal.
pub const OP_TIRE_TEMPERATURE_STATUS: usize = 1;
/// Reports tread condition from the wear level.
pub const OP_TIRE_WEAR_STATUS: usize = 2;
/// Computes and stores the tire performance score.
pub const OP_TIRE_PERFORMANCE_SCORE: usize = 3;
/// Reports PMU power output (voltage × current).
pub const OP_PMU_POWER_OUTPUT: usize = 4;
/// Moves regenerated energy into storage.
pub const OP_PMU_REGENERATE_ENERGY: usize = 5;
/// Reports PMU energy usage (power consumption × current).
pub const OP_PMU_ENERGY_USAGE: usize = 6;
/// Reports every PMU field outside its healthy range.
pub const OP_PMU_BATTERY_HEALTH: usize = 7;

// ===== TIRE GRADING =====

/// Lower edge of the normal pressure band (psi).
pub const TIRE_PRESSURE_NORMAL_MIN: f32 = 21.0;

/// Upper edge of the normal pressure band (psi).
pub const TIRE_PRESSURE_NORMAL_MAX: f32 = 26.0;

/// Below this temperature a tire runs in its coolest scoring band (°C).
pub const TIRE_TEMPERATURE_COOL_C: f32 = 40.0;

/// Below this temperature a tire runs in its warm scoring band (°C).
pub const TIRE_TEMPERATURE_WARM_C: f32 = 80.0;

/// Wear at or below this is "good condition" (%).
pub const TIRE_WEAR_GOOD_PCT: i32 = 20;

/// Wear at or below this is "average condition" (%).
pub const TIRE_WEAR_AVERAGE_PCT: i32 = 40;

/// Wear below this still scores neutral-negative rather than worst (%).
pub const TIRE_WEAR_WORN_PCT: i32 = 60;

/// Lowest computed performance score. Zero is reserved for "not calculated".
pub const PERFORMANCE_SCORE_MIN: i32 = 1;

/// Highest computed performance score.
pub const PERFORMANCE_SCORE_MAX: i32 = 10;

// ===== PMU =====

/// Energy storage saturates here after regeneration (%).
pub const PMU_STORAGE_CAP_PCT: i32 = 100;
