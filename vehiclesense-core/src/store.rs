//! Record Store
//!
//! The in-memory collection of sensor records. Exactly one store is live in a
//! session; it owns every payload and operation sequence it holds.
//!
//! ## Lifecycle
//!
//! ```text
//! decode ──▶ RecordStore ──partition_by_kind──▶ RecordStore (PMU… Tire…)
//!                 │
//!                 └──compact(self)──▶ new RecordStore   (old one dropped)
//! ```
//!
//! `compact` takes the store by value. The caller swaps the returned store in
//! for the old binding, so the old and new collections are never both
//! reachable and mutable.

use crate::{
    errors::{CommandError, CommandResult},
    record::{SensorKind, SensorRecord},
    validators::ValidationLimits,
};

/// Ordered collection of sensor records
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordStore {
    records: Vec<SensorRecord>,
}

/// Outcome of a compaction pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompactionReport {
    /// Records that satisfied their kind's rule
    pub kept: usize,
    /// Records discarded with their operation sequences
    pub dropped: usize,
}

/// Record counts per sensor kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KindCounts {
    /// Tire sensor records
    pub tire: usize,
    /// Power management unit records
    pub pmu: usize,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with room for `capacity` records
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    /// Append a record
    pub fn push(&mut self, record: SensorRecord) {
        self.records.push(record);
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `index`, if present
    pub fn get(&self, index: usize) -> Option<&SensorRecord> {
        self.records.get(index)
    }

    /// Mutable record at `index`, if present
    pub fn get_mut(&mut self, index: usize) -> Option<&mut SensorRecord> {
        self.records.get_mut(index)
    }

    /// Resolve a user-supplied (possibly negative) index
    pub fn checked_index(&self, index: i64) -> CommandResult<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.records.len())
            .ok_or(CommandError::IndexOutOfRange {
                index,
                len: self.records.len(),
            })
    }

    /// Record at a user-supplied index, or `IndexOutOfRange`
    pub fn lookup(&self, index: i64) -> CommandResult<&SensorRecord> {
        let i = self.checked_index(index)?;
        Ok(&self.records[i])
    }

    /// All records in store order
    pub fn records(&self) -> &[SensorRecord] {
        &self.records
    }

    /// Iterate over records in store order
    pub fn iter(&self) -> core::slice::Iter<'_, SensorRecord> {
        self.records.iter()
    }

    /// Count records of each kind
    pub fn count_by_kind(&self) -> KindCounts {
        self.records
            .iter()
            .fold(KindCounts::default(), |mut counts, record| {
                match record.kind() {
                    SensorKind::Tire => counts.tire += 1,
                    SensorKind::PowerManagementUnit => counts.pmu += 1,
                }
                counts
            })
    }

    /// Reorder in place so every PMU record precedes every tire record
    ///
    /// Stable: relative order within each kind is preserved, and running it
    /// twice gives the same order as running it once.
    pub fn partition_by_kind(&mut self) {
        self.records.sort_by_key(|record| record.kind().partition_rank());
    }

    /// Build a new store holding only records that pass `limits`
    ///
    /// Relative order is preserved. Failing records are dropped silently
    /// apart from a debug log line naming the first violated bound. The old
    /// store is consumed and released when this returns.
    pub fn compact(self, limits: &ValidationLimits) -> (RecordStore, CompactionReport) {
        let total = self.records.len();
        let mut kept = Vec::with_capacity(total);

        for (position, record) in self.records.into_iter().enumerate() {
            match limits.validate_record(&record) {
                Ok(()) => kept.push(record),
                Err(_reason) => {
                    log_debug!(
                        "dropping {} record at position {}: {}",
                        record.kind(),
                        position,
                        _reason
                    );
                }
            }
        }

        kept.shrink_to_fit();
        let report = CompactionReport {
            kept: kept.len(),
            dropped: total - kept.len(),
        };
        log_info!("compaction kept {} of {} records", report.kept, total);

        (RecordStore { records: kept }, report)
    }
}

impl From<Vec<SensorRecord>> for RecordStore {
    fn from(records: Vec<SensorRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<SensorRecord> for RecordStore {
    fn from_iter<I: IntoIterator<Item = SensorRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a SensorRecord;
    type IntoIter = core::slice::Iter<'a, SensorRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{PmuReading, TireReading};

    fn tire(pressure: f32) -> SensorRecord {
        SensorRecord::new(TireReading { pressure, temperature: 20.0, wear_level: 50, performance_score: 0 })
    }

    fn pmu(voltage: f32) -> SensorRecord {
        SensorRecord::new(PmuReading {
            voltage,
            current: 5.0,
            power_consumption: 60.0,
            energy_regen: 30,
            energy_storage: 70,
        })
    }

    #[test]
    fn lookup_rejects_out_of_range() {
        let store: RecordStore = vec![tire(25.0), pmu(12.0)].into_iter().collect();
        assert!(store.lookup(0).is_ok());
        assert!(store.lookup(1).is_ok());
        assert_eq!(store.lookup(2), Err(CommandError::IndexOutOfRange { index: 2, len: 2 }));
        assert_eq!(store.lookup(-1), Err(CommandError::IndexOutOfRange { index: -1, len: 2 }));
    }

    #[test]
    fn partition_is_stable() {
        let mut store: RecordStore =
            vec![tire(20.0), pmu(11.0), tire(21.0), pmu(12.0), tire(22.0)].into_iter().collect();
        store.partition_by_kind();

        let expected: RecordStore =
            vec![pmu(11.0), pmu(12.0), tire(20.0), tire(21.0), tire(22.0)].into_iter().collect();
        assert_eq!(store, expected);

        let once = store.clone();
        store.partition_by_kind();
        assert_eq!(store, once);
    }

    #[test]
    fn compact_keeps_order_and_operations() {
        let store: RecordStore = vec![
            tire(25.0).with_operations([0, 1]),
            tire(30.0).with_operations([2]),
            pmu(12.0).with_operations([4]),
            pmu(25.0),
        ]
        .into_iter()
        .collect();

        let (store, report) = store.compact(&ValidationLimits::default());
        assert_eq!(report, CompactionReport { kept: 2, dropped: 2 });
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].operations, vec![0, 1]);
        assert_eq!(store.records()[1].operations, vec![4]);
    }

    #[test]
    fn compact_empty_store() {
        let (store, report) = RecordStore::new().compact(&ValidationLimits::default());
        assert!(store.is_empty());
        assert_eq!(report, CompactionReport::default());
    }

    #[test]
    fn counts_by_kind() {
        let store: RecordStore = vec![tire(25.0), pmu(12.0), pmu(13.0)].into_iter().collect();
        assert_eq!(store.count_by_kind(), KindCounts { tire: 1, pmu: 2 });
    }
}
