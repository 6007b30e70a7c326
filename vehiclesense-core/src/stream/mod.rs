//! Binary dump codec
//!
//! The sensor dump is read into memory in one go and decoded into a
//! [`RecordStore`](crate::RecordStore). There is no partial result: a load either
//! yields every declared record or fails.
//!
//! ## Module Organization
//!
//! - Load errors (this file)
//! - `reader` - decodes bytes or files into a store
//! - `writer` - encodes a store back into the same format

use std::io;

use thiserror_no_std::Error;

pub mod reader;
pub mod writer;

pub use reader::{decode, load_file, load_from, BinaryReader, ReaderStats};
pub use writer::{encode, write_file, write_to};

/// Result type for loading a dump
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors that abort a load
///
/// None of these leave a partially populated store behind. `UnknownSensorKind`
/// is fatal by policy: once a tag is corrupt every later offset is garbage, so
/// callers are expected to stop rather than try to resynchronise.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Input ended before the 4-byte record count
    #[error("malformed header: need {needed} bytes for the record count, found {available}")]
    MalformedHeader {
        /// Bytes required
        needed: usize,
        /// Bytes present
        available: usize,
    },

    /// Input ended inside a record
    #[error("truncated stream at byte {offset} reading {context} of record {record}: need {needed} bytes, {available} left")]
    TruncatedStream {
        /// Index of the record being decoded
        record: usize,
        /// What was being read
        context: &'static str,
        /// Byte offset where the read started
        offset: usize,
        /// Bytes the read required
        needed: usize,
        /// Bytes left in the input
        available: usize,
    },

    /// Kind tag other than 0 (tire) or 1 (PMU)
    #[error("unknown sensor kind tag {tag} in record {record}")]
    UnknownSensorKind {
        /// The tag as read
        tag: u32,
        /// Index of the record carrying it
        record: usize,
    },

    /// The input could not be read
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

impl LoadError {
    /// Whether this is the fail-fast corrupt-tag case
    pub fn is_unknown_kind(&self) -> bool {
        matches!(self, Self::UnknownSensorKind { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_error_display() {
        let err = LoadError::MalformedHeader { needed: 4, available: 2 };
        assert_eq!(err.to_string(), "malformed header: need 4 bytes for the record count, found 2");

        let err = LoadError::UnknownSensorKind { tag: 7, record: 3 };
        assert_eq!(err.to_string(), "unknown sensor kind tag 7 in record 3");
        assert!(err.is_unknown_kind());
    }
}
