//! `vehiclesense` binary

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use vehiclesense_cli::{init_logging, run, Args, CliError};

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_level);

    let mut out = BufWriter::new(io::stdout().lock());
    let result = run(&args, io::stdin().lock(), &mut out).and_then(|_| out.flush().map_err(CliError::from));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if err.is_corrupt_kind() {
                log::error!("dump holds a record of unknown sensor kind; refusing to continue");
            }
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
