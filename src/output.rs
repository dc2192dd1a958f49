//! # Output Module
//!
//! This module centralizes user-facing output for the copyline tool.
//!
//! Stdout carries one path per line so it can be piped into other tools;
//! everything else goes to stderr.

use std::path::Path;

use owo_colors::{OwoColorize, Stream};

use crate::info_log;
use crate::logging::is_verbose;
use crate::processor::Mode;
use crate::report::ProcessingSummary;

/// Symbols used in output
pub mod symbols {
  /// Everything compliant
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Non-compliant files found
  pub const FAILURE: &str = "\u{2717}"; // ✗
  /// Files changed
  pub const UPDATED: &str = "\u{21bb}"; // ↻
}

/// Print a processed path on its own line (respects quiet mode).
pub fn print_path(path: &Path) {
  info_log!("{}", path.display());
}

/// Print the path of a file that failed the check.
///
/// Unlike [`print_path`] this ignores quiet mode: the list of failing files
/// is the result of a check run.
pub fn print_failed_path(path: &Path) {
  println!("{}", path.display());
}

/// Print the end-of-run summary to stderr. Only shown in verbose mode.
///
/// Format: "<symbol> N files checked, M non-compliant (0.01s)"
pub fn print_summary(summary: &ProcessingSummary, mode: Mode) {
  if !is_verbose() {
    return;
  }

  let files_word = if summary.files_seen == 1 { "file" } else { "files" };
  let line = match mode {
    Mode::Check => {
      let symbol = if summary.is_compliant() {
        symbols::SUCCESS.if_supports_color(Stream::Stderr, |s| s.green()).to_string()
      } else {
        symbols::FAILURE.if_supports_color(Stream::Stderr, |s| s.red()).to_string()
      };
      format!(
        "{} {} {} checked, {} non-compliant",
        symbol, summary.files_seen, files_word, summary.files_non_compliant
      )
    }
    Mode::PrintOnly => format!(
      "{} {} {} scanned, {} would change",
      symbols::UPDATED.if_supports_color(Stream::Stderr, |s| s.yellow()),
      summary.files_seen,
      files_word,
      summary.files_changed
    ),
    Mode::Fix => format!(
      "{} {} {} processed, {} changed",
      symbols::UPDATED.if_supports_color(Stream::Stderr, |s| s.yellow()),
      summary.files_seen,
      files_word,
      summary.files_changed
    ),
  };

  eprintln!("{} ({:.2}s)", line, summary.processing_time.as_secs_f64());
}
