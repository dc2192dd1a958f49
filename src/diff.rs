//! # Diff Module
//!
//! Renders line diffs between a file's current content and the content
//! copyline would write, for `--show-diff`.

use std::path::Path;

use owo_colors::{OwoColorize, Stream};
use similar::{ChangeTag, TextDiff};

/// Renders diffs for files that change (or would change).
#[derive(Debug, Clone, Copy, Default)]
pub struct DiffManager {
  /// Whether to print diffs to stderr
  pub show_diff: bool,
}

impl DiffManager {
  pub const fn new(show_diff: bool) -> Self {
    Self { show_diff }
  }

  /// Builds the diff text for one file.
  ///
  /// Each line is prefixed with `-`, `+` or a space. Carriage returns are shown
  /// as `\r` so that line-ending changes are visible.
  pub fn render_diff(path: &Path, original: &str, new: &str) -> String {
    let diff = TextDiff::from_lines(original, new);

    let mut diff_content = format!("Diff for {}:\n", path.display());
    for change in diff.iter_all_changes() {
      let sign = match change.tag() {
        ChangeTag::Delete => "-",
        ChangeTag::Insert => "+",
        ChangeTag::Equal => " ",
      };
      let value = change.value();
      let body = value.strip_suffix('\n').unwrap_or(value).replace('\r', "\\r");
      diff_content.push_str(sign);
      diff_content.push_str(&body);
      diff_content.push('\n');
    }
    diff_content
  }

  /// Prints the diff to stderr when enabled, coloring added and removed lines.
  pub fn display_diff(&self, path: &Path, original: &str, new: &str) {
    if !self.show_diff {
      return;
    }

    for line in Self::render_diff(path, original, new).lines() {
      if line.starts_with('+') {
        eprintln!("{}", line.if_supports_color(Stream::Stderr, |l| l.green()));
      } else if line.starts_with('-') {
        eprintln!("{}", line.if_supports_color(Stream::Stderr, |l| l.red()));
      } else {
        eprintln!("{}", line);
      }
    }
    eprintln!();
  }
}
