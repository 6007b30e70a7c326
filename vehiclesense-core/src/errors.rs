//! Error Types for Validation and Per-Command Failures
//!
//! Errors are split by how far they propagate:
//!
//! ### Validation
//! - `OutOfRange`: a payload field lies outside its inclusive bounds
//! - `InvalidValue`: a float field is NaN or infinite
//!
//! Validation errors never reach the user. Compaction uses them only to
//! decide which records to drop.
//!
//! ### Commands
//! - `IndexOutOfRange`: `print`/`analyze` named a record that does not exist
//! - `OperationIndexOutOfRange`: a record lists an operation outside the table
//! - `OperationNotBound`: a record lists a table slot with nothing in it
//! - `MissingArgument`: `print`/`analyze` without an integer index
//!
//! Command errors are reported and the loop carries on. The live store is
//! never modified by a failing command.
//!
//! Load failures live in [`crate::stream::LoadError`] because they carry I/O
//! sources and abort the program.
//!
//! ```rust
//! use vehiclesense_core::{RecordStore, CommandError};
//!
//! let store = RecordStore::new();
//! match store.lookup(7) {
//!     Err(CommandError::IndexOutOfRange { index, len }) => {
//!         assert_eq!((index, len), (7, 0));
//!     }
//!     _ => unreachable!(),
//! }
//! ```

use std::io;

use thiserror_no_std::Error;

/// Result type for validation checks
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type for per-command operations
pub type CommandResult<T> = Result<T, CommandError>;

/// Reasons a payload fails its kind's range rule
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ValidationError {
    /// Field outside its inclusive bounds
    #[error("{field} = {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// Name of the offending payload field
        field: &'static str,
        /// The value read from the record
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },

    /// Float field is NaN or infinite
    #[error("{field} is not a finite number")]
    InvalidValue {
        /// Name of the offending payload field
        field: &'static str,
    },
}

impl ValidationError {
    /// Name of the field that failed
    pub fn field(&self) -> &'static str {
        match self {
            Self::OutOfRange { field, .. } | Self::InvalidValue { field } => field,
        }
    }
}

/// Recoverable failures of a single command
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// Record index outside `[0, len)`
    #[error("record index {index} not in range (store holds {len} records)")]
    IndexOutOfRange {
        /// Index as typed by the user
        index: i64,
        /// Number of records in the live store
        len: usize,
    },

    /// A record's operation sequence names a slot outside the table
    #[error("operation index {index} at position {position} outside [0, {max})")]
    OperationIndexOutOfRange {
        /// The stored operation index
        index: i32,
        /// Position of the index within the record's sequence
        position: usize,
        /// Table size
        max: usize,
    },

    /// A record's operation sequence names an empty table slot
    #[error("operation slot {index} has no operation bound")]
    OperationNotBound {
        /// The empty slot
        index: usize,
    },

    /// `print` or `analyze` was not followed by an integer
    #[error("`{command}` expects an integer record index")]
    MissingArgument {
        /// Command that lacked its argument
        command: &'static str,
    },

    /// An operation failed to write its report
    #[error("operation output failed: {0:?}")]
    Output(io::ErrorKind),
}

impl From<io::Error> for CommandError {
    fn from(err: io::Error) -> Self {
        Self::Output(err.kind())
    }
}
