//! # Processor Module
//!
//! This module drives a run: it selects files, computes each file's new
//! content in memory, and then writes, prints or checks it depending on the
//! [`Mode`].
//!
//! The module is organized into several submodules:
//! - [`file_collector`] - Selecting files by extension under directory roots
//! - [`file_text`] - Line-preserving representation of a file's content
//! - [`notice`] - Finding, inserting and rewriting the copyright notice
//! - [`file_io`] - File reading, backup and writing
//!
//! Files are processed strictly one after another, and the first error ends
//! the run. Files already written keep their new content.

mod file_collector;
mod file_io;
mod file_text;
mod notice;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
pub use file_collector::{FileSelector, absolutize_path};
pub use file_io::{BACKUP_SUFFIX, FileError, FileIO};
pub use file_text::{FileText, Line, LineEnding};
pub use notice::{CopyrightMatch, CopyrightTransformer, Scan};
use tracing::debug;

use crate::config::RunConfig;
use crate::diff::DiffManager;
use crate::output::{print_failed_path, print_path};
use crate::report::{FileAction, ProcessingSummary};

/// What a run does with each selected file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
  /// Rewrite files in place
  Fix,
  /// Print the files that would change, write nothing
  PrintOnly,
  /// Print the files without a current notice, write nothing
  Check,
}

impl Mode {
  /// Check mode takes precedence over print-only.
  pub const fn from_config(config: &RunConfig) -> Self {
    if config.check_only {
      Self::Check
    } else if config.print_only {
      Self::PrintOnly
    } else {
      Self::Fix
    }
  }
}

/// Processor for applying copyright notices to files.
///
/// The `Processor` is responsible for:
/// - Selecting files under the given roots
/// - Adding or rewriting the notice in each file (fix mode)
/// - Listing files that would change (print-only mode)
/// - Verifying notices without modifying files (check mode)
/// - Keeping `.bak` copies of modified files when requested
pub struct Processor {
  mode: Mode,

  /// Whether to copy a file's old content to `<file>.bak` before rewriting
  keep_backup: bool,

  /// Notice transformer built once for the run
  transformer: CopyrightTransformer,

  /// Selects files by extension
  selector: FileSelector,

  /// Manager for rendering diffs of changed files
  diff_manager: DiffManager,
}

impl Processor {
  /// Creates a new processor for the given configuration.
  ///
  /// # Errors
  ///
  /// Returns an error if the notice pattern cannot be built.
  pub fn new(config: &RunConfig) -> Result<Self> {
    Ok(Self {
      mode: Mode::from_config(config),
      keep_backup: config.keep_backup,
      transformer: CopyrightTransformer::new(config)?,
      selector: FileSelector::new(&config.extension),
      diff_manager: DiffManager::default(),
    })
  }

  /// Enables diff output for changed files.
  pub fn with_diff_manager(mut self, diff_manager: DiffManager) -> Self {
    self.diff_manager = diff_manager;
    self
  }

  pub const fn mode(&self) -> Mode {
    self.mode
  }

  /// Processes every file selected under `roots`.
  ///
  /// # Errors
  ///
  /// Stops at the first file that cannot be selected, read, decoded or
  /// written.
  pub fn process(&self, roots: &[PathBuf]) -> Result<ProcessingSummary> {
    let start_time = Instant::now();
    let mut summary = ProcessingSummary::default();

    for path in self.selector.select(roots) {
      let path = path?;
      let action = self.process_file(&path)?;
      debug!("{}: {}", path.display(), action);
      summary.record(action);
    }

    summary.processing_time = start_time.elapsed();
    Ok(summary)
  }

  /// Processes a single file according to the mode.
  pub fn process_file(&self, path: &Path) -> Result<FileAction> {
    match self.mode {
      Mode::Fix => self.fix_file(path),
      Mode::PrintOnly => self.preview_file(path),
      Mode::Check => self.check_file(path),
    }
  }

  /// Rewrites the file with its notice added or replaced.
  ///
  /// The path is printed before the file is read. Content that would not
  /// change is not rewritten.
  fn fix_file(&self, path: &Path) -> Result<FileAction> {
    print_path(path);

    let (original, updated, action) = self.compute(path)?;
    if !action.is_change() {
      return Ok(action);
    }

    self.diff_manager.display_diff(path, &original, &updated);

    if self.keep_backup {
      let backup = FileIO::write_backup(path)?;
      debug!("Backed up {} to {}", path.display(), backup.display());
    }
    FileIO::write_text(path, &updated)?;

    Ok(action)
  }

  /// Prints the path of a file that fixing would change.
  fn preview_file(&self, path: &Path) -> Result<FileAction> {
    let (original, updated, action) = self.compute(path)?;
    if action.is_change() {
      print_path(path);
      self.diff_manager.display_diff(path, &original, &updated);
    }
    Ok(action)
  }

  /// Prints the path of a file without a notice for the configured year.
  fn check_file(&self, path: &Path) -> Result<FileAction> {
    let original = FileIO::read_text(path)?;
    let text = FileText::parse(&original);

    if self.transformer.is_compliant(&text) {
      return Ok(FileAction::Compliant);
    }

    print_failed_path(path);
    if self.diff_manager.show_diff {
      let updated = self.transformer.transform(text).render();
      self.diff_manager.display_diff(path, &original, &updated);
    }
    Ok(FileAction::NonCompliant)
  }

  /// Reads a file and computes its fixed content.
  ///
  /// Returns the original text, the new text and what the change amounts to.
  fn compute(&self, path: &Path) -> Result<(String, String, FileAction)> {
    let original = FileIO::read_text(path)?;
    let text = FileText::parse(&original);
    let had_notice = self.transformer.scan(&text).found.is_some();
    let updated = self.transformer.transform(text).render();

    let action = if updated == original {
      FileAction::Unchanged
    } else if had_notice {
      FileAction::Replaced
    } else {
      FileAction::Added
    };

    Ok((original, updated, action))
  }
}
