//! Sample dump for trying the tool out
//!
//! Two valid records of each kind plus one invalid of each, so `clear` has
//! something to drop. Every built-in operation appears in some sequence.

use std::io;
use std::path::Path;

use vehiclesense_core::{stream, PmuReading, RecordStore, SensorRecord, TireReading};

/// Records written by `--emit-sample`, in file order
pub fn sample_store() -> RecordStore {
    vec![
        SensorRecord::new(TireReading {
            pressure: 23.5,
            temperature: 45.0,
            wear_level: 15,
            performance_score: 0,
        })
        .with_operations([0, 1, 2, 3]),
        SensorRecord::new(PmuReading {
            voltage: 14.2,
            current: 12.5,
            power_consumption: 120.0,
            energy_regen: 25,
            energy_storage: 80,
        })
        .with_operations([4, 5, 6, 7]),
        SensorRecord::new(TireReading {
            pressure: 30.0,
            temperature: 60.0,
            wear_level: 35,
            performance_score: 0,
        })
        .with_operations([0, 3]),
        SensorRecord::new(PmuReading {
            voltage: 25.0,
            current: -8.0,
            power_consumption: 40.0,
            energy_regen: 10,
            energy_storage: 55,
        })
        .with_operations([7]),
        SensorRecord::new(TireReading {
            pressure: 20.0,
            temperature: 95.0,
            wear_level: 55,
            performance_score: 0,
        })
        .with_operations([2, 3]),
        SensorRecord::new(PmuReading {
            voltage: 12.0,
            current: 5.0,
            power_consumption: 60.0,
            energy_regen: 0,
            energy_storage: 100,
        }),
    ]
    .into_iter()
    .collect()
}

/// Write the sample dump to `path`
pub fn write_sample(path: &Path) -> io::Result<usize> {
    let store = sample_store();
    stream::write_file(&store, path)?;
    Ok(store.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vehiclesense_core::{KindCounts, ValidationLimits};

    #[test]
    fn sample_has_one_invalid_record_per_kind() {
        let store = sample_store();
        assert_eq!(store.count_by_kind(), KindCounts { tire: 3, pmu: 3 });

        let (kept, report) = store.compact(&ValidationLimits::default());
        assert_eq!(report.dropped, 2);
        assert_eq!(kept.count_by_kind(), KindCounts { tire: 2, pmu: 2 });
    }

    #[test]
    fn sample_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.dat");

        assert_eq!(write_sample(&path).unwrap(), 6);
        assert_eq!(stream::load_file(&path).unwrap(), sample_store());
    }
}
