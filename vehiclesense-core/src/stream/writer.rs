//! Binary dump writer
//!
//! Inverse of the reader. Used to build fixtures and by the CLI's sample
//! emitter; the running program never writes dumps on its own.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::{
    constants::format::*,
    record::{Payload, SensorRecord},
    store::RecordStore,
};

/// Encoded size of one record
pub fn encoded_len(record: &SensorRecord) -> usize {
    let payload = match record.payload {
        Payload::Tire(_) => TIRE_PAYLOAD_SIZE,
        Payload::Pmu(_) => PMU_PAYLOAD_SIZE,
    };
    WORD_SIZE + payload + WORD_SIZE + record.operations.len() * WORD_SIZE
}

/// Append one record's bytes to `buf`
pub fn encode_record(record: &SensorRecord, buf: &mut Vec<u8>) {
    buf.extend(record.kind().tag().to_le_bytes());

    match &record.payload {
        Payload::Tire(tire) => {
            buf.extend(tire.pressure.to_le_bytes());
            buf.extend(tire.temperature.to_le_bytes());
            buf.extend(tire.wear_level.to_le_bytes());
            buf.extend(tire.performance_score.to_le_bytes());
        }
        Payload::Pmu(pmu) => {
            buf.extend(pmu.voltage.to_le_bytes());
            buf.extend(pmu.current.to_le_bytes());
            buf.extend(pmu.power_consumption.to_le_bytes());
            buf.extend(pmu.energy_regen.to_le_bytes());
            buf.extend(pmu.energy_storage.to_le_bytes());
        }
    }

    buf.extend((record.operations.len() as u32).to_le_bytes());
    for op in &record.operations {
        buf.extend(op.to_le_bytes());
    }
}

/// Encode a whole store
pub fn encode(store: &RecordStore) -> Vec<u8> {
    let size = HEADER_SIZE + store.iter().map(encoded_len).sum::<usize>();
    let mut buf = Vec::with_capacity(size);

    buf.extend((store.len() as u32).to_le_bytes());
    for record in store {
        encode_record(record, &mut buf);
    }
    buf
}

/// Encode a store into any writer
pub fn write_to<W: Write>(store: &RecordStore, mut writer: W) -> io::Result<()> {
    writer.write_all(&encode(store))?;
    writer.flush()
}

/// Encode a store into a file, replacing it if present
pub fn write_file<P: AsRef<Path>>(store: &RecordStore, path: P) -> io::Result<()> {
    let file = File::create(path)?;
    write_to(store, BufWriter::new(file))
}
