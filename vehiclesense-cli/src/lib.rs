//! Command-line front end for VehicleSense
//!
//! Loads a dump, groups PMU records ahead of tire records and then reads
//! `print`, `analyze`, `clear` and `exit` commands until told to stop.

#![deny(unsafe_code)]
#![warn(missing_docs)]

use std::io::{BufRead, Write};

use vehiclesense_core::{operations, stream};

pub mod commands;
pub mod config;
pub mod sample;

pub use commands::{report, Command, Flow, LoopStats, Parsed, Session, Tokens};
pub use config::{init_logging, load_limits, Args, CliError};

/// Do what `args` asks, reading commands from `input` and answering on `out`
///
/// With `--emit-sample` the sample dump is written and `input` is never read.
/// Any load failure, including an unknown sensor kind, returns before the
/// first command is read.
pub fn run<R: BufRead>(args: &Args, input: R, out: &mut dyn Write) -> Result<LoopStats, CliError> {
    if let Some(path) = &args.emit_sample {
        let written = sample::write_sample(path)?;
        log::info!("wrote {} sample records to {}", written, path.display());
        return Ok(LoopStats::default());
    }

    let dump = args.input.as_deref().ok_or(CliError::MissingInput)?;
    let limits = load_limits(args.limits.as_deref())?;

    let mut store = stream::load_file(dump).map_err(|source| CliError::Load {
        path: dump.display().to_string(),
        source,
    })?;
    store.partition_by_kind();

    let counts = store.count_by_kind();
    log::info!(
        "{}: {} records ({} PMU, {} tire)",
        dump.display(),
        store.len(),
        counts.pmu,
        counts.tire
    );

    let mut session = Session::new(store, operations::default_table(), limits);
    Ok(session.run(input, out)?)
}
