//! Binary Dump Layout
//!
//! ```text
//! u32 record_count
//! repeat record_count times:
//!   u32 kind_tag              0 = tire, 1 = PMU
//!   <payload>                 tire: 16 bytes, PMU: 20 bytes
//!   u32 operation_count
//!   i32[operation_count]      operation indices
//! ```
//!
//! Every scalar is 4 bytes, little-endian, with no padding between fields.

/// Wire tag for a tire sensor record.
pub const TAG_TIRE: u32 = 0;

/// Wire tag for a power management unit record.
pub const TAG_PMU: u32 = 1;

/// Width of every scalar on the wire (u32, i32 and f32 alike).
pub const WORD_SIZE: usize = 4;

/// Size of the leading record count.
pub const HEADER_SIZE: usize = WORD_SIZE;

/// Tire payload: pressure, temperature, wear_level, performance_score.
pub const TIRE_PAYLOAD_SIZE: usize = 4 * WORD_SIZE;

/// PMU payload: voltage, current, power_consumption, energy_regen, energy_storage.
pub const PMU_PAYLOAD_SIZE: usize = 5 * WORD_SIZE;

/// Smallest possible record: tag, tire payload, zero operation count.
///
/// Used to cap pre-allocation when the declared count is larger than the
/// remaining bytes could ever hold.
pub const MIN_RECORD_SIZE: usize = WORD_SIZE + TIRE_PAYLOAD_SIZE + WORD_SIZE;
