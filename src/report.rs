//! # Report Module
//!
//! Records what happened to each processed file and totals it for the end of
//! the run.

use std::fmt;
use std::time::Duration;

/// Outcome of processing one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
  /// A new notice was inserted (or would be, in print-only mode)
  Added,
  /// An existing notice was rewritten (or would be, in print-only mode)
  Replaced,
  /// Fixing the file would not change it
  Unchanged,
  /// Check mode: the file has a notice for the configured year
  Compliant,
  /// Check mode: the notice is missing or outdated
  NonCompliant,
}

impl FileAction {
  /// Whether the file's content differs (or would differ) after fixing.
  pub const fn is_change(self) -> bool {
    matches!(self, Self::Added | Self::Replaced)
  }
}

impl fmt::Display for FileAction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let label = match self {
      Self::Added => "added",
      Self::Replaced => "replaced",
      Self::Unchanged => "unchanged",
      Self::Compliant => "compliant",
      Self::NonCompliant => "non-compliant",
    };
    f.write_str(label)
  }
}

/// Totals for a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingSummary {
  /// Files selected and processed
  pub files_seen: usize,
  /// Files whose notice was added or replaced
  pub files_changed: usize,
  /// Files failing the check
  pub files_non_compliant: usize,
  /// Wall time spent processing
  pub processing_time: Duration,
}

impl ProcessingSummary {
  pub fn record(&mut self, action: FileAction) {
    self.files_seen += 1;
    if action.is_change() {
      self.files_changed += 1;
    }
    if action == FileAction::NonCompliant {
      self.files_non_compliant += 1;
    }
  }

  /// `true` when no checked file was found non-compliant.
  pub const fn is_compliant(&self) -> bool {
    self.files_non_compliant == 0
  }
}
