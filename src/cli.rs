// src/cli.rs
use std::{fmt, io, path::PathBuf};

use color_eyre::eyre::Result;
use tracing::warn;

use crate::config::consts::USAGE;
use crate::config::{Direction, RunConfig, SortField};
use crate::progress::Progress;
use crate::runner::{self, RunOutcome};

/// Bad or missing command-line input. The binary prints it and exits 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageError {
    msg: String,
}

impl UsageError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.msg)
    }
}

impl std::error::Error for UsageError {}

/// Prints pipeline milestones to stdout, between report sections.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
}

/// `<url> <w|r|t> <inc|desc> [outputPath]`, program name already stripped.
pub fn parse_args<I, S>(args: I) -> Result<RunConfig, UsageError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    if args.len() < 3 {
        return Err(UsageError::new(USAGE));
    }

    let sort_field: SortField = args[1].parse()?;
    let direction: Direction = args[2].parse()?;
    let output_path = args.get(3).map(PathBuf::from);

    if args.len() > 4 {
        warn!("Ignoring {} extra argument(s): {:?}", args.len() - 4, &args[4..]);
    }

    Ok(RunConfig::new(args[0].clone(), sort_field, direction, output_path))
}

/// Run the whole pipeline against the real server, reporting to stdout.
pub fn run(config: &RunConfig) -> Result<RunOutcome> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut progress = ConsoleProgress;
    runner::run(config, &mut out, Some(&mut progress))
}
