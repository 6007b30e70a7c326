//! Sensor Record Model
//!
//! A record is one sensor's reading plus the ordered list of analysis
//! operations to run on it. The reading is a sum type over the two sensor
//! kinds, so the kind can never disagree with the payload layout:
//!
//! ```text
//! SensorRecord
//! ├── payload: Payload
//! │   ├── Tire(TireReading)   pressure, temperature, wear_level, performance_score
//! │   └── Pmu(PmuReading)     voltage, current, power_consumption, energy_regen, energy_storage
//! └── operations: Vec<i32>    indices into an OperationTable, checked at dispatch
//! ```
//!
//! Operation indices are kept exactly as they appear on the wire, including
//! negative or oversized values, so a store re-encodes to identical bytes.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::format::{TAG_PMU, TAG_TIRE};

/// Sensor kind
///
/// Closed set; the wire tag maps one-to-one onto a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u32)]
pub enum SensorKind {
    /// Tire pressure/temperature/wear sensor
    Tire = TAG_TIRE,
    /// Power management unit
    PowerManagementUnit = TAG_PMU,
}

impl SensorKind {
    /// Decode a wire tag
    pub const fn from_tag(tag: u32) -> Option<Self> {
        match tag {
            TAG_TIRE => Some(Self::Tire),
            TAG_PMU => Some(Self::PowerManagementUnit),
            _ => None,
        }
    }

    /// Wire tag for this kind
    pub const fn tag(self) -> u32 {
        self as u32
    }

    /// Human-readable heading used when printing a record
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Tire => "Tire Sensor",
            Self::PowerManagementUnit => "Power Management Unit",
        }
    }

    /// Sort key for kind partitioning: PMU records go first
    pub const fn partition_rank(self) -> u8 {
        match self {
            Self::PowerManagementUnit => 0,
            Self::Tire => 1,
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Tire sensor reading
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TireReading {
    /// Inflation pressure (psi)
    pub pressure: f32,
    /// Tire temperature (°C)
    pub temperature: f32,
    /// Tread consumed (%)
    pub wear_level: i32,
    /// Computed score, `0` until an analysis operation fills it in
    pub performance_score: i32,
}

impl TireReading {
    /// Whether an operation has computed the performance score yet
    pub const fn has_performance_score(&self) -> bool {
        self.performance_score != 0
    }
}

/// Power management unit reading
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PmuReading {
    /// Pack voltage (V)
    pub voltage: f32,
    /// Pack current (A), negative while charging
    pub current: f32,
    /// Power drawn (kW)
    pub power_consumption: f32,
    /// Energy recovered and not yet stored (%)
    pub energy_regen: i32,
    /// State of charge (%)
    pub energy_storage: i32,
}

/// Kind-specific reading
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Payload {
    /// Tire sensor payload
    Tire(TireReading),
    /// Power management unit payload
    Pmu(PmuReading),
}

impl Payload {
    /// Kind implied by the variant
    pub const fn kind(&self) -> SensorKind {
        match self {
            Self::Tire(_) => SensorKind::Tire,
            Self::Pmu(_) => SensorKind::PowerManagementUnit,
        }
    }
}

impl From<TireReading> for Payload {
    fn from(reading: TireReading) -> Self {
        Self::Tire(reading)
    }
}

impl From<PmuReading> for Payload {
    fn from(reading: PmuReading) -> Self {
        Self::Pmu(reading)
    }
}

/// One sensor record: payload plus its operation index sequence
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorRecord {
    /// The reading
    pub payload: Payload,
    /// Operation table indices, run in order by `analyze`
    pub operations: Vec<i32>,
}

impl SensorRecord {
    /// Create a record with no operations
    pub fn new(payload: impl Into<Payload>) -> Self {
        Self {
            payload: payload.into(),
            operations: Vec::new(),
        }
    }

    /// Attach an operation index sequence
    pub fn with_operations(mut self, operations: impl Into<Vec<i32>>) -> Self {
        self.operations = operations.into();
        self
    }

    /// Kind of this record's payload
    pub const fn kind(&self) -> SensorKind {
        self.payload.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for kind in [SensorKind::Tire, SensorKind::PowerManagementUnit] {
            assert_eq!(SensorKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(SensorKind::from_tag(2), None);
        assert_eq!(SensorKind::from_tag(u32::MAX), None);
    }

    #[test]
    fn pmu_ranks_before_tire() {
        assert!(SensorKind::PowerManagementUnit.partition_rank() < SensorKind::Tire.partition_rank());
    }

    #[test]
    fn record_kind_follows_payload() {
        let tire = SensorRecord::new(TireReading::default());
        assert_eq!(tire.kind(), SensorKind::Tire);

        let pmu = SensorRecord::new(PmuReading::default()).with_operations([4, 5]);
        assert_eq!(pmu.kind(), SensorKind::PowerManagementUnit);
        assert_eq!(pmu.operations, vec![4, 5]);
    }

    #[test]
    fn zero_score_means_not_calculated() {
        let mut reading = TireReading::default();
        assert!(!reading.has_performance_score());
        reading.performance_score = 7;
        assert!(reading.has_performance_score());
    }
}
