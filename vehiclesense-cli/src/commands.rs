//! Command Loop
//!
//! ## Overview
//!
//! Input is a stream of whitespace-separated tokens. Four words are commands;
//! anything else is skipped without output:
//!
//! ```text
//! Token      Argument   Effect
//! ----------------------------------------------------------
//! print      <index>    render record <index>
//! analyze    <index>    run record <index>'s operation sequence
//! clear      -          drop records failing their range rule
//! exit       -          stop (end of input does the same)
//! ```
//!
//! Command words match exactly. When `print` or `analyze` is not followed by
//! an integer the command is rejected and the following token is left in
//! place, so `print exit` reports the missing index and then exits.
//!
//! ## Output
//!
//! Everything the user sees goes to the output writer: rendered records,
//! operation reports, `Index not in range!` for a missing record and
//! `Error: <message>` for any other rejected command. Diagnostics go to the
//! log.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use vehiclesense_core::{
    dispatch, render, CommandError, CommandResult, OperationTable, RecordStore, ValidationLimits,
};

/// A parsed command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Render one record
    Print(i64),
    /// Run one record's operation sequence
    Analyze(i64),
    /// Compact the store
    Clear,
    /// Leave the loop
    Exit,
}

/// Outcome of reading one command word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    /// A runnable command
    Command(Command),
    /// A command word whose argument was unusable
    Rejected(CommandError),
    /// A token that is not a command word
    Skipped(String),
}

/// Whitespace tokenizer over buffered input with one-token lookahead
///
/// Input is split on ASCII whitespace as raw bytes. Tokens that are not valid
/// UTF-8 are decoded lossily and end up skipped like any other unknown word.
#[derive(Debug)]
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
    line: Vec<u8>,
}

impl<R: BufRead> Tokens<R> {
    /// Wrap a reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: Vec::new(),
        }
    }

    /// Read lines until a token is available. Returns `false` at end of input.
    fn fill(&mut self) -> io::Result<bool> {
        while self.pending.is_empty() {
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(false);
            }
            self.pending.extend(
                self.line
                    .split(u8::is_ascii_whitespace)
                    .filter(|token| !token.is_empty())
                    .map(|token| String::from_utf8_lossy(token).into_owned()),
            );
        }
        Ok(true)
    }

    /// Take the next token
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        Ok(if self.fill()? { self.pending.pop_front() } else { None })
    }

    /// Look at the next token without taking it
    pub fn peek_token(&mut self) -> io::Result<Option<&str>> {
        Ok(if self.fill()? {
            self.pending.front().map(String::as_str)
        } else {
            None
        })
    }

    /// Read the next command word and its argument
    ///
    /// Returns `None` at end of input.
    pub fn next_command(&mut self) -> io::Result<Option<Parsed>> {
        let Some(token) = self.next_token()? else {
            return Ok(None);
        };

        let parsed = match token.as_str() {
            "print" => match self.index_argument("print")? {
                Ok(index) => Parsed::Command(Command::Print(index)),
                Err(err) => Parsed::Rejected(err),
            },
            "analyze" => match self.index_argument("analyze")? {
                Ok(index) => Parsed::Command(Command::Analyze(index)),
                Err(err) => Parsed::Rejected(err),
            },
            "clear" => Parsed::Command(Command::Clear),
            "exit" => Parsed::Command(Command::Exit),
            _ => Parsed::Skipped(token),
        };
        Ok(Some(parsed))
    }

    /// Consume the next token only if it is an integer
    fn index_argument(&mut self, command: &'static str) -> io::Result<Result<i64, CommandError>> {
        let index = self.peek_token()?.and_then(|token| token.parse::<i64>().ok());
        Ok(match index {
            Some(index) => {
                self.pending.pop_front();
                Ok(index)
            }
            None => Err(CommandError::MissingArgument { command }),
        })
    }
}

/// Counters for one run of the loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopStats {
    /// Commands executed, successful or not
    pub executed: usize,
    /// Commands that reported an error
    pub failed: usize,
    /// Tokens skipped as unrecognised
    pub skipped: usize,
}

/// Whether the loop keeps going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command
    Continue,
    /// Stop reading
    Exit,
}

/// The live store together with what commands need to act on it
#[derive(Debug)]
pub struct Session {
    store: RecordStore,
    table: OperationTable,
    limits: ValidationLimits,
}

impl Session {
    /// Start a session over an already loaded and partitioned store
    pub fn new(store: RecordStore, table: OperationTable, limits: ValidationLimits) -> Self {
        Self { store, table, limits }
    }

    /// The live store
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Run one command
    ///
    /// The store is left as it was whenever this returns `Err`.
    pub fn execute(&mut self, command: Command, out: &mut dyn Write) -> CommandResult<Flow> {
        match command {
            Command::Print(index) => {
                let record = self.store.lookup(index)?;
                render::render_record(out, record)?;
            }
            Command::Analyze(index) => {
                dispatch::analyze(&mut self.store, index, &self.table, out)?;
            }
            Command::Clear => {
                let store = core::mem::take(&mut self.store);
                let (store, _report) = store.compact(&self.limits);
                self.store = store;
            }
            Command::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    /// Read and execute commands until `exit` or end of input
    pub fn run<R: BufRead>(&mut self, input: R, out: &mut dyn Write) -> io::Result<LoopStats> {
        let mut tokens = Tokens::new(input);
        let mut stats = LoopStats::default();

        while let Some(parsed) = tokens.next_command()? {
            match parsed {
                Parsed::Command(command) => {
                    stats.executed += 1;
                    match self.execute(command, out) {
                        Ok(Flow::Continue) => {}
                        Ok(Flow::Exit) => break,
                        Err(err) => {
                            stats.failed += 1;
                            report(out, err)?;
                        }
                    }
                }
                Parsed::Rejected(err) => {
                    stats.executed += 1;
                    stats.failed += 1;
                    report(out, err)?;
                }
                Parsed::Skipped(token) => {
                    stats.skipped += 1;
                    log::debug!("skipping unrecognised token {token:?}");
                }
            }
            out.flush()?;
        }

        out.flush()?;
        log::info!(
            "session ended: {} commands, {} failed, {} tokens skipped",
            stats.executed,
            stats.failed,
            stats.skipped
        );
        Ok(stats)
    }
}

/// Write a command failure the way the user sees it
pub fn report(out: &mut dyn Write, err: CommandError) -> io::Result<()> {
    match err {
        CommandError::IndexOutOfRange { .. } => writeln!(out, "{}", render::INDEX_NOT_IN_RANGE),
        CommandError::Output(kind) => Err(io::Error::from(kind)),
        other => {
            log::debug!("command rejected: {other:?}");
            writeln!(out, "Error: {other}")
        }
    }
}
