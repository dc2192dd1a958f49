//! # copyline
//!
//! A tool that inserts, updates or verifies copyright notices in source files.

use std::process::ExitCode;

use anyhow::Result;
use copyline::cli::{Cli, run};

fn main() -> Result<ExitCode> {
  let cli = Cli::parse_args();
  run(cli.run_args)
}
