//! Binary dump reader
//!
//! Decodes the packed little-endian record dump described in
//! [`crate::constants::format`]:
//!
//! ```text
//! offset  size  field
//! 0       4     record_count (u32)
//! 4       4     kind_tag of record 0
//! 8       16|20 payload, fields in declaration order
//! ...     4     operation_count
//! ...     4*n   operation indices (i32)
//! ...           record 1 ...
//! ```
//!
//! ## Memory Safety
//!
//! The declared record count is untrusted. Pre-allocation is capped at the
//! number of minimum-size records the remaining bytes could hold, so a corrupt
//! count of `0xFFFF_FFFF` costs nothing until records actually decode.
//!
//! ## Example
//!
//! ```rust
//! use vehiclesense_core::stream::{decode, encode};
//! use vehiclesense_core::{RecordStore, SensorRecord, TireReading};
//!
//! let store: RecordStore = vec![SensorRecord::new(TireReading {
//!     pressure: 25.0,
//!     temperature: 20.0,
//!     wear_level: 50,
//!     performance_score: 0,
//! })]
//! .into_iter()
//! .collect();
//!
//! let bytes = encode(&store);
//! assert_eq!(decode(&bytes)?, store);
//! # Ok::<(), vehiclesense_core::LoadError>(())
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::{
    constants::format::*,
    record::{Payload, PmuReading, SensorKind, SensorRecord, TireReading},
    store::RecordStore,
};

use super::{LoadError, LoadResult};

/// Statistics for a decode pass
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReaderStats {
    /// Records decoded successfully
    pub records_read: usize,
    /// Operation indices decoded across all records
    pub operations_read: usize,
    /// Bytes consumed
    pub bytes_read: usize,
    /// Bytes left over after the last declared record
    pub trailing_bytes: usize,
}

/// Cursor over an in-memory dump
///
/// Tracks the record being decoded so every error names where it happened.
pub struct BinaryReader<'a> {
    /// Whole input
    data: &'a [u8],
    /// Next unread byte
    pos: usize,
    /// Record currently being decoded
    record: usize,
    /// Statistics
    stats: ReaderStats,
}

impl<'a> BinaryReader<'a> {
    /// Create a reader positioned at the start of `data`
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            record: 0,
            stats: ReaderStats::default(),
        }
    }

    /// Get statistics
    pub fn stats(&self) -> &ReaderStats {
        &self.stats
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Decode the whole dump
    pub fn read_store(&mut self) -> LoadResult<RecordStore> {
        let count = self.read_header()? as usize;

        // Never trust the header for allocation size
        let capacity = count.min(self.remaining() / MIN_RECORD_SIZE);
        let mut store = RecordStore::with_capacity(capacity);

        for index in 0..count {
            self.record = index;
            store.push(self.read_record()?);
            self.stats.records_read += 1;
        }

        self.stats.bytes_read = self.pos;
        self.stats.trailing_bytes = self.remaining();
        if self.stats.trailing_bytes > 0 {
            log_debug!("ignoring {} trailing bytes after record {}", self.stats.trailing_bytes, count);
        }

        Ok(store)
    }

    /// Read the leading record count
    fn read_header(&mut self) -> LoadResult<u32> {
        if self.remaining() < HEADER_SIZE {
            return Err(LoadError::MalformedHeader {
                needed: HEADER_SIZE,
                available: self.remaining(),
            });
        }
        self.read_u32("record count")
    }

    /// Read one tagged record with its operation sequence
    fn read_record(&mut self) -> LoadResult<SensorRecord> {
        let tag = self.read_u32("kind tag")?;
        let kind = SensorKind::from_tag(tag).ok_or(LoadError::UnknownSensorKind {
            tag,
            record: self.record,
        })?;

        let payload = match kind {
            SensorKind::Tire => Payload::Tire(self.read_tire()?),
            SensorKind::PowerManagementUnit => Payload::Pmu(self.read_pmu()?),
        };

        let operations = self.read_operations()?;
        Ok(SensorRecord { payload, operations })
    }

    fn read_tire(&mut self) -> LoadResult<TireReading> {
        self.ensure(TIRE_PAYLOAD_SIZE, "tire payload")?;
        Ok(TireReading {
            pressure: self.read_f32("pressure")?,
            temperature: self.read_f32("temperature")?,
            wear_level: self.read_i32("wear_level")?,
            performance_score: self.read_i32("performance_score")?,
        })
    }

    fn read_pmu(&mut self) -> LoadResult<PmuReading> {
        self.ensure(PMU_PAYLOAD_SIZE, "pmu payload")?;
        Ok(PmuReading {
            voltage: self.read_f32("voltage")?,
            current: self.read_f32("current")?,
            power_consumption: self.read_f32("power_consumption")?,
            energy_regen: self.read_i32("energy_regen")?,
            energy_storage: self.read_i32("energy_storage")?,
        })
    }

    fn read_operations(&mut self) -> LoadResult<Vec<i32>> {
        let count = self.read_u32("operation count")? as usize;

        let needed = count.checked_mul(WORD_SIZE).ok_or(LoadError::TruncatedStream {
            record: self.record,
            context: "operation indices",
            offset: self.pos,
            needed: usize::MAX,
            available: self.remaining(),
        })?;
        self.ensure(needed, "operation indices")?;

        let operations = self.data[self.pos..self.pos + needed]
            .chunks_exact(WORD_SIZE)
            .map(|b| i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
            .collect::<Vec<_>>();
        self.pos += needed;
        self.stats.operations_read += operations.len();

        Ok(operations)
    }

    /// Fail with `TruncatedStream` unless `needed` bytes remain
    fn ensure(&self, needed: usize, context: &'static str) -> LoadResult<()> {
        if self.remaining() < needed {
            return Err(LoadError::TruncatedStream {
                record: self.record,
                context,
                offset: self.pos,
                needed,
                available: self.remaining(),
            });
        }
        Ok(())
    }

    fn take_word(&mut self, context: &'static str) -> LoadResult<[u8; WORD_SIZE]> {
        self.ensure(WORD_SIZE, context)?;
        let b = &self.data[self.pos..self.pos + WORD_SIZE];
        self.pos += WORD_SIZE;
        Ok([b[0], b[1], b[2], b[3]])
    }

    fn read_u32(&mut self, context: &'static str) -> LoadResult<u32> {
        self.take_word(context).map(u32::from_le_bytes)
    }

    fn read_i32(&mut self, context: &'static str) -> LoadResult<i32> {
        self.take_word(context).map(i32::from_le_bytes)
    }

    fn read_f32(&mut self, context: &'static str) -> LoadResult<f32> {
        self.take_word(context).map(f32::from_le_bytes)
    }
}

/// Decode a dump held in memory
pub fn decode(data: &[u8]) -> LoadResult<RecordStore> {
    BinaryReader::new(data).read_store()
}

/// Read `reader` to the end, then decode
pub fn load_from<R: Read>(mut reader: R) -> LoadResult<RecordStore> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    decode(&data)
}

/// Read a dump file into memory and decode it
pub fn load_file<P: AsRef<Path>>(path: P) -> LoadResult<RecordStore> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let store = load_from(file)?;

    let _counts = store.count_by_kind();
    log_info!(
        "loaded {} records from {} ({} tire, {} pmu)",
        store.len(),
        path.display(),
        _counts.tire,
        _counts.pmu
    );

    Ok(store)
}
