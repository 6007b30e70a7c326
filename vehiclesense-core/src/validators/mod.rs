//! Per-Kind Range Validators
//!
//! ## Overview
//!
//! Each sensor kind has one validity rule: every payload field must lie in an
//! inclusive range. A record that breaks any bound is dropped by
//! [`RecordStore::compact`](crate::RecordStore::compact); nothing is repaired
//! or clamped.
//!
//! ```text
//! Kind   Field               Min     Max
//! ----------------------------------------
//! Tire   pressure            19      28
//! Tire   temperature         0       120
//! Tire   wear_level          0       100
//! PMU    voltage             10      20
//! PMU    current             -100    100
//! PMU    power_consumption   0       1000
//! PMU    energy_regen        0       100
//! PMU    energy_storage      0       100
//! ```
//!
//! The tire performance score is not validated; it is an output of analysis,
//! not a measurement.
//!
//! ## Customization
//!
//! The defaults above come from [`crate::constants::sensors`]. Deployments with
//! different hardware can override them, and with the `serde` feature the
//! limits load from JSON, missing fields keeping their defaults:
//!
//! ```rust
//! use vehiclesense_core::{Bounds, ValidationLimits, TireValidator};
//!
//! let limits = ValidationLimits {
//!     tire: TireValidator {
//!         pressure: Bounds::new(17.0, 30.0),
//!         ..TireValidator::default()
//!     },
//!     ..ValidationLimits::default()
//! };
//! assert_eq!(limits.tire.pressure.max, 30.0);
//! ```

mod pmu;
mod tire;
mod utils;

pub use pmu::PmuValidator;
pub use tire::TireValidator;
pub use utils::check_range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    errors::ValidationResult,
    record::{Payload, SensorRecord},
    traits::Validator,
};

/// Inclusive range
///
/// Deserialized ranges go through [`Bounds::new`], so reversed ends in a
/// limits file are swapped rather than producing an empty range.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        from = "RawBounds<T>",
        bound(deserialize = "T: Deserialize<'de> + PartialOrd + Copy")
    )
)]
pub struct Bounds<T> {
    /// Smallest accepted value
    pub min: T,
    /// Largest accepted value
    pub max: T,
}

/// Wire shape of [`Bounds`] before the ends are ordered
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawBounds<T> {
    min: T,
    max: T,
}

#[cfg(feature = "serde")]
impl<T: PartialOrd + Copy> From<RawBounds<T>> for Bounds<T> {
    fn from(raw: RawBounds<T>) -> Self {
        Bounds::new(raw.min, raw.max)
    }
}

impl<T: PartialOrd + Copy> Bounds<T> {
    /// Create a range, swapping the ends if given backwards
    pub fn new(min: T, max: T) -> Self {
        if min > max {
            Self { min: max, max: min }
        } else {
            Self { min, max }
        }
    }

    /// Inclusive membership test
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Validity rules for every sensor kind
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ValidationLimits {
    /// Tire sensor rule
    pub tire: TireValidator,
    /// Power management unit rule
    pub pmu: PmuValidator,
}

impl Validator for ValidationLimits {
    type Reading = Payload;

    fn validate(&self, reading: &Payload) -> ValidationResult<()> {
        match reading {
            Payload::Tire(tire) => self.tire.validate(tire),
            Payload::Pmu(pmu) => self.pmu.validate(pmu),
        }
    }
}

impl ValidationLimits {
    /// Validate a whole record (only its payload carries constraints)
    pub fn validate_record(&self, record: &SensorRecord) -> ValidationResult<()> {
        self.validate(&record.payload)
    }
}
