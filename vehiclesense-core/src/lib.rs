//! Core engine for VehicleSense
//!
//! Loads binary dumps of vehicle sensor records (tire sensors and power
//! management units), filters them against physical range rules and runs
//! numbered analysis operations on individual records.
//!
//! Key pieces:
//! - [`stream::decode`] turns the packed little-endian dump into a [`RecordStore`]
//! - [`RecordStore::compact`] drops records that fail their kind's range check
//! - [`RecordStore::partition_by_kind`] groups PMU records ahead of tire records
//! - [`dispatch::analyze`] runs a record's operation indices through an [`OperationTable`]
//!
//! Both cargo features are on by default and the crate always links `std`:
//! - `serde`: serialization derives, used to load [`ValidationLimits`] from JSON
//! - `log`: diagnostics through the `log` facade
//!
//! ```no_run
//! use vehiclesense_core::{operations, stream, dispatch, ValidationLimits};
//!
//! let mut store = stream::load_file("sensors.dat")?;
//! store.partition_by_kind();
//!
//! let (mut store, report) = store.compact(&ValidationLimits::default());
//! println!("kept {} of {}", report.kept, report.kept + report.dropped);
//!
//! let table = operations::default_table();
//! let mut out = std::io::stdout();
//! dispatch::analyze(&mut store, 0, &table, &mut out)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

// Logging goes through `log` when the feature is on and compiles away otherwise.
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_info {
    ($($arg:tt)*) => { log::info!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_info {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

pub mod constants;
pub mod dispatch;
pub mod errors;
pub mod operations;
pub mod record;
pub mod render;
pub mod store;
pub mod stream;
pub mod traits;
pub mod validators;

// Public API
pub use dispatch::{OperationTable, MAX_OPERATIONS};
pub use errors::{CommandError, CommandResult, ValidationError, ValidationResult};
pub use record::{Payload, PmuReading, SensorKind, SensorRecord, TireReading};
pub use store::{CompactionReport, KindCounts, RecordStore};
pub use stream::{LoadError, LoadResult};
pub use traits::Validator;
pub use validators::{Bounds, PmuValidator, TireValidator, ValidationLimits};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
