//! Operation Dispatch
//!
//! ## Overview
//!
//! A record carries a list of small integers naming analysis operations. The
//! record does not know what those operations are; the mapping from index to
//! callable lives in an [`OperationTable`] that the caller passes in. Dispatch
//! is therefore fully determined by its inputs: the same store, index and table
//! always produce the same calls.
//!
//! ```text
//! record.operations = [2, 5]
//!                      │  │
//! OperationTable  ┌────▼──▼──────────────────────────┐
//!                 │ 0 │ 1 │ 2 │ 3 │ 4 │ 5 │ 6 │ 7 │
//!                 └───────┬───────────┬───────────────┘
//!                         ▼           ▼
//!                  op2(&mut payload)  op5(&mut payload)
//! ```
//!
//! ## Bounds
//!
//! Every index in the sequence is checked against the table before any
//! operation runs. An index outside `0..MAX_OPERATIONS`, or one naming an empty
//! slot, fails the whole command with the payload untouched.
//!
//! ## Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use vehiclesense_core::{dispatch, OperationTable, RecordStore, SensorRecord, TireReading};
//!
//! let calls = Rc::new(RefCell::new(Vec::new()));
//! let mut table = OperationTable::new();
//! for slot in [2, 5] {
//!     let calls = Rc::clone(&calls);
//!     table.bind(slot, "probe", move |_payload, _out| {
//!         calls.borrow_mut().push(slot);
//!         Ok(())
//!     })?;
//! }
//!
//! let mut store: RecordStore =
//!     vec![SensorRecord::new(TireReading::default()).with_operations([2, 5])].into_iter().collect();
//! dispatch::analyze(&mut store, 0, &table, &mut std::io::sink())?;
//! assert_eq!(*calls.borrow(), vec![2, 5]);
//! # Ok::<(), vehiclesense_core::CommandError>(())
//! ```

use core::fmt;
use std::io::{self, Write};

use crate::{
    errors::{CommandError, CommandResult},
    record::Payload,
    store::RecordStore,
};

pub use crate::constants::operations::MAX_OPERATIONS;

/// Signature every operation satisfies
///
/// Operations get the payload, never the record, and may write a report to
/// `out`. Their only effect on the store is through the payload reference.
pub type OperationFn = dyn Fn(&mut Payload, &mut dyn Write) -> io::Result<()>;

/// A bound table slot
pub struct Slot {
    name: &'static str,
    operation: Box<OperationFn>,
}

impl Slot {
    /// Name the operation was bound under
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run the operation
    pub fn apply(&self, payload: &mut Payload, out: &mut dyn Write) -> io::Result<()> {
        (self.operation)(payload, out)
    }
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Fixed-size mapping from operation index to callable
#[derive(Debug)]
pub struct OperationTable {
    slots: [Option<Slot>; MAX_OPERATIONS],
}

impl Default for OperationTable {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationTable {
    /// Create a table with every slot empty
    pub fn new() -> Self {
        Self {
            slots: core::array::from_fn(|_| None),
        }
    }

    /// Bind `operation` to slot `index`, replacing whatever was there
    pub fn bind<F>(&mut self, index: usize, name: &'static str, operation: F) -> CommandResult<()>
    where
        F: Fn(&mut Payload, &mut dyn Write) -> io::Result<()> + 'static,
    {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(CommandError::OperationIndexOutOfRange {
                index: i32::try_from(index).unwrap_or(i32::MAX),
                position: 0,
                max: MAX_OPERATIONS,
            })?;
        *slot = Some(Slot {
            name,
            operation: Box::new(operation),
        });
        Ok(())
    }

    /// Empty slot `index`
    pub fn unbind(&mut self, index: usize) -> Option<Slot> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Slot at `index` if bound
    pub fn get(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Number of bound slots
    pub fn bound_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Resolve a stored operation index found at `position` in a sequence
    pub fn resolve(&self, index: i32, position: usize) -> CommandResult<&Slot> {
        let slot_index = usize::try_from(index)
            .ok()
            .filter(|&i| i < MAX_OPERATIONS)
            .ok_or(CommandError::OperationIndexOutOfRange {
                index,
                position,
                max: MAX_OPERATIONS,
            })?;

        self.get(slot_index)
            .ok_or(CommandError::OperationNotBound { index: slot_index })
    }
}

/// Run every operation listed by record `index`, in sequence order
///
/// Returns the number of operations run. The store's shape never changes;
/// only the selected record's payload may be mutated.
pub fn analyze(
    store: &mut RecordStore,
    index: i64,
    table: &OperationTable,
    out: &mut dyn Write,
) -> CommandResult<usize> {
    let len = store.len();
    let position = store.checked_index(index)?;
    let record = store
        .get_mut(position)
        .ok_or(CommandError::IndexOutOfRange { index, len })?;

    // Resolve everything up front so a bad entry never leaves a payload half-analysed
    let slots = record
        .operations
        .iter()
        .enumerate()
        .map(|(pos, &op)| table.resolve(op, pos))
        .collect::<CommandResult<Vec<_>>>()?;

    for slot in &slots {
        log_debug!("record {}: running operation {}", position, slot.name());
        slot.apply(&mut record.payload, out)?;
    }

    Ok(slots.len())
}
