//! Command-line arguments, logging setup and limit overrides

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::LevelFilter;
use thiserror_no_std::Error;
use vehiclesense_core::{LoadError, ValidationLimits};

/// Load a vehicle sensor dump and answer print/analyze/clear commands on stdin
#[derive(Parser, Debug)]
#[command(name = "vehiclesense")]
#[command(version)]
#[command(about = "Inspect and analyse binary vehicle sensor dumps", long_about = None)]
pub struct Args {
    /// Binary sensor dump to load
    #[arg(value_name = "INPUT", required_unless_present = "emit_sample")]
    pub input: Option<PathBuf>,

    /// JSON file overriding the validation limits used by `clear`
    #[arg(long, value_name = "FILE")]
    pub limits: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace); RUST_LOG applies when unset
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<LevelFilter>,

    /// Write a small sample dump to PATH and exit
    #[arg(long, value_name = "PATH", conflicts_with = "input")]
    pub emit_sample: Option<PathBuf>,
}

/// Failures that end the program
#[derive(Error, Debug)]
pub enum CliError {
    /// The dump could not be loaded
    #[error("cannot load {path}: {source}")]
    Load {
        /// Dump path as given
        path: String,
        /// Underlying load failure
        #[source]
        source: LoadError,
    },

    /// The limits file could not be read
    #[error("cannot read limits file {path}: {source}")]
    LimitsRead {
        /// Limits path as given
        path: String,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// The limits file is not valid JSON for the limits schema
    #[error("invalid limits file {path}: {source}")]
    LimitsParse {
        /// Limits path as given
        path: String,
        /// Underlying parse failure
        #[source]
        source: serde_json::Error,
    },

    /// No dump path was given
    #[error("no input file given")]
    MissingInput,

    /// Terminal or sample file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Whether the dump held a record of unknown kind
    pub fn is_corrupt_kind(&self) -> bool {
        matches!(self, Self::Load { source, .. } if source.is_unknown_kind())
    }
}

/// Install the stderr logger
///
/// `level` wins over `RUST_LOG`; with neither, only warnings and errors show.
pub fn init_logging(level: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .init();
}

/// Validation limits from `path`, or the defaults when no file is given
///
/// Fields missing from the file keep their default bounds.
pub fn load_limits(path: Option<&Path>) -> Result<ValidationLimits, CliError> {
    let Some(path) = path else {
        return Ok(ValidationLimits::default());
    };

    let text = fs::read_to_string(path).map_err(|source| CliError::LimitsRead {
        path: path.display().to_string(),
        source,
    })?;
    let limits = serde_json::from_str(&text).map_err(|source| CliError::LimitsParse {
        path: path.display().to_string(),
        source,
    })?;

    log::info!("validation limits loaded from {}", path.display());
    Ok(limits)
}
