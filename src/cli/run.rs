//! # Run Command
//!
//! This module resolves the command line into a [`RunConfig`] and runs the
//! processor over the given paths.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use crate::config::{ConfigError, ConfigFile, DEFAULT_SCAN_LINE_LIMIT, RunConfig, current_year, load_config};
use crate::diff::DiffManager;
use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::output::print_summary;
use crate::processor::{Mode, Processor};

/// Arguments for a run
#[derive(Args, Debug, Default)]
pub struct RunArgs {
  /// Files or directories to process. Directories are processed recursively.
  #[arg(required = true, value_name = "PATH")]
  pub paths: Vec<PathBuf>,

  /// Copyright year [default: current year]
  #[arg(long, short = 'y', value_parser = clap::value_parser!(u16).range(1..=9999))]
  pub year: Option<u16>,

  /// Copyright holder name
  #[arg(long, short = 'n')]
  pub name: Option<String>,

  /// Check whether files have a notice for the year instead of fixing them;
  /// exits with status 1 if any file does not
  #[arg(long)]
  pub check: bool,

  /// Extend any existing copyright year into a range instead of overwriting
  /// it
  #[arg(long, short = 'u')]
  pub update: bool,

  /// File extension to scan [default: py]
  #[arg(long, short = 'e', value_name = "EXT")]
  pub extension: Option<String>,

  /// Comment characters [default: #]
  #[arg(long, short = 'c', value_name = "CHARS", allow_hyphen_values = true)]
  pub comment: Option<String>,

  /// Strip trailing whitespace and convert line endings to \n
  #[arg(long, short = 's')]
  pub strip: bool,

  /// Keep a .bak copy of each modified file
  #[arg(long, short = 'b')]
  pub backup: bool,

  /// Print which files would be modified without changing them (files
  /// already up to date are not listed)
  #[arg(long, short = 'p')]
  pub print_only: bool,

  /// Silence the list of processed files
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Number of leading lines to scan for an existing copyright [default: 5]
  #[arg(long, value_name = "NUM")]
  pub check_lines: Option<usize>,

  /// Do not insert a blank line after a newly added copyright line
  #[arg(long)]
  pub no_newline: bool,

  /// Print a diff of each file that changes (or would change) to stderr
  #[arg(long)]
  pub show_diff: bool,

  /// Path to config file (default: .copyline.toml in the current directory)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long, conflicts_with = "config")]
  pub no_config: bool,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

impl RunArgs {
  /// Merges the arguments with config file values into a validated
  /// [`RunConfig`].
  ///
  /// Values given on the command line win over the config file, which wins
  /// over the built-in defaults.
  pub fn resolve(&self, file: Option<&ConfigFile>) -> Result<RunConfig, ConfigError> {
    let file = file.cloned().unwrap_or_default();
    let mut config = RunConfig::for_year(self.year.unwrap_or_else(current_year));

    if let Some(name) = self.name.clone().or(file.name) {
      config = config.with_holder(name);
    }
    if let Some(comment) = self.comment.clone().or(file.comment) {
      config.comment_prefix = comment;
    }
    if let Some(extension) = self.extension.clone().or(file.extension) {
      config.extension = extension;
    }
    config.scan_line_limit = self.check_lines.or(file.check_lines).unwrap_or(DEFAULT_SCAN_LINE_LIMIT);

    config.update_existing = self.update || file.update;
    config.strip_whitespace = self.strip || file.strip;
    config.insert_trailing_blank_line = !(self.no_newline || file.no_newline);
    config.keep_backup = self.backup || file.backup;
    config.check_only = self.check;
    config.print_only = self.print_only;
    config.quiet = self.quiet;

    config.validate()
  }
}

/// Run copyline with the given arguments.
///
/// Returns exit status 1 when check mode finds a file without a current
/// notice. Any error aborts the run before the remaining files are touched.
pub fn run(args: RunArgs) -> Result<ExitCode> {
  init_tracing(args.quiet, args.verbose);

  if args.verbose > 0 {
    set_verbose();
  }
  args.colors.apply();

  let current_dir = std::env::current_dir().context("Failed to get current directory")?;
  let file_config = load_config(args.config.as_deref(), &current_dir, args.no_config)?;
  let config = args.resolve(file_config.as_ref())?;
  debug!(?config, "Resolved configuration");

  if config.quiet {
    set_quiet();
  }

  // Every path must exist before any file is touched.
  for path in &args.paths {
    std::fs::metadata(path).with_context(|| format!("Cannot access {}", path.display()))?;
  }

  let processor = Processor::new(&config)?.with_diff_manager(DiffManager::new(args.show_diff));
  let summary = processor.process(&args.paths)?;

  print_summary(&summary, processor.mode());

  if processor.mode() == Mode::Check && !summary.is_compliant() {
    return Ok(ExitCode::from(1));
  }
  Ok(ExitCode::SUCCESS)
}
