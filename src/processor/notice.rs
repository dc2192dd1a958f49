//! # Notice Module
//!
//! Locates, inserts and rewrites the one-line copyright notice near the top of
//! a file.
//!
//! The scan looks at the first line for a shebang and the line terminator,
//! at the first two lines for an encoding declaration such as
//! `# -*- coding: utf-8 -*-`, and at the first `scan_line_limit` lines for an
//! existing notice of the form `<prefix> Copyright ... YYYY`.

use anyhow::{Context, Result};
use regex::Regex;
use tracing::trace;

use super::file_text::{FileText, Line, LineEnding};
use crate::config::RunConfig;

/// Encoding declarations that must stay above the notice (PEP 263 style).
const CODING_PATTERN: &str = r"coding[:=]\s*[-\w.]+";

/// Marker of an interpreter line.
const SHEBANG: &str = "#!";

/// An existing notice found during a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyrightMatch {
  /// Index of the notice line.
  pub line_index: usize,
  /// First year written in the notice.
  pub start_year: u16,
  /// End of a `YYYY-YYYY` range, when the notice has one.
  pub end_year: Option<u16>,
}

impl CopyrightMatch {
  /// The latest year the notice covers.
  pub fn last_year(&self) -> u16 {
    self.end_year.unwrap_or(self.start_year)
  }
}

/// What a scan learned about the head of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scan {
  /// Terminator for any line the transformer adds.
  pub ending: LineEnding,
  /// Where a new notice goes when none exists.
  pub insertion_offset: usize,
  /// The existing notice, if any.
  pub found: Option<CopyrightMatch>,
}

/// Inserts or rewrites copyright notices according to a [`RunConfig`].
///
/// Patterns are compiled once when the transformer is built and reused for
/// every file of the run.
#[derive(Debug, Clone)]
pub struct CopyrightTransformer {
  notice_regex: Regex,
  coding_regex: Regex,
  year: u16,
  holder_name: Option<String>,
  comment_prefix: String,
  update_existing: bool,
  strip_whitespace: bool,
  scan_line_limit: usize,
  insert_trailing_blank_line: bool,
}

impl CopyrightTransformer {
  /// Builds a transformer for the given configuration.
  pub fn new(config: &RunConfig) -> Result<Self> {
    let notice_regex = compile_notice_regex(&config.comment_prefix)?;
    let coding_regex = Regex::new(CODING_PATTERN).context("Failed to compile coding declaration pattern")?;

    Ok(Self {
      notice_regex,
      coding_regex,
      year: config.year,
      holder_name: config.holder_name.clone().filter(|name| !name.is_empty()),
      comment_prefix: config.comment_prefix.clone(),
      update_existing: config.update_existing,
      strip_whitespace: config.strip_whitespace,
      scan_line_limit: config.scan_line_limit,
      insert_trailing_blank_line: config.insert_trailing_blank_line,
    })
  }

  /// Inspects the head of a file without changing it.
  pub fn scan(&self, text: &FileText) -> Scan {
    let lines = text.lines();
    let ending = text.first_line_ending().unwrap_or(LineEnding::DEFAULT);

    let mut insertion_offset = 0;
    if lines.first().is_some_and(|line| line.text.starts_with(SHEBANG)) {
      insertion_offset += 1;
    }

    let mut found = None;
    for (idx, line) in lines.iter().take(self.scan_line_limit).enumerate() {
      if idx < 2 && self.coding_regex.is_match(&line.text) {
        insertion_offset += 1;
      }
      if let Some(notice) = self.match_notice(idx, line) {
        found = Some(notice);
        break;
      }
    }

    trace!(?ending, insertion_offset, ?found, "Scanned file head");

    Scan {
      ending,
      insertion_offset,
      found,
    }
  }

  fn match_notice(&self, line_index: usize, line: &Line) -> Option<CopyrightMatch> {
    let caps = self.notice_regex.captures(&line.text)?;
    let start_year = caps.name("from")?.as_str().parse().ok()?;
    let end_year = caps.name("to").and_then(|m| m.as_str().parse().ok());
    Some(CopyrightMatch {
      line_index,
      start_year,
      end_year,
    })
  }

  /// Renders the notice line, without a terminator.
  ///
  /// In update mode an existing start year is kept and extended to the
  /// configured year, even when the two are equal. Otherwise only the
  /// configured year is written.
  pub fn render_notice(&self, found: Option<&CopyrightMatch>) -> String {
    let years = match found {
      Some(existing) if self.update_existing => {
        format!("{:04}-{:04}", existing.start_year, self.year)
      }
      _ => format!("{:04}", self.year),
    };

    match self.holder_name {
      Some(ref name) => format!("{} Copyright {} {}", self.comment_prefix, years, name),
      None => format!("{} Copyright {}", self.comment_prefix, years),
    }
  }

  /// Inserts or rewrites the notice, then applies whitespace normalization
  /// when enabled.
  ///
  /// An existing notice is replaced in place. Otherwise the notice goes after
  /// any shebang and encoding declaration, followed by a blank line unless
  /// that is disabled.
  pub fn transform(&self, mut text: FileText) -> FileText {
    let scan = self.scan(&text);
    let notice = Line::new(self.render_notice(scan.found.as_ref()), Some(scan.ending));

    match scan.found {
      Some(existing) => text.replace(existing.line_index, notice),
      None => {
        let offset = scan.insertion_offset.min(text.len());
        text.insert(offset, notice, scan.ending);
        if self.insert_trailing_blank_line {
          text.insert(offset + 1, Line::new("", Some(scan.ending)), scan.ending);
        }
      }
    }

    if self.strip_whitespace {
      text.strip_trailing_whitespace();
    }

    text
  }

  /// Convenience wrapper around [`transform`](Self::transform) for whole
  /// strings.
  pub fn transform_str(&self, content: &str) -> String {
    self.transform(FileText::parse(content)).render()
  }

  /// Whether the file already carries a notice covering the configured year.
  pub fn is_compliant(&self, text: &FileText) -> bool {
    self
      .scan(text)
      .found
      .is_some_and(|existing| existing.last_year() == self.year)
  }
}

/// Builds the notice pattern for a comment prefix.
///
/// The prefix is matched literally at the start of the line, "Copyright" in
/// any case, then the first run of digits must be exactly four digits long,
/// optionally followed by `-YYYY`.
fn compile_notice_regex(comment_prefix: &str) -> Result<Regex> {
  let pattern = format!(
    r"^{}\s*(?i:copyright)[^0-9]+(?P<from>[0-9]{{4}})(?:\s*-\s*(?P<to>[0-9]{{4}}))?(?:[^0-9]|$)",
    regex::escape(comment_prefix)
  );
  Regex::new(&pattern).with_context(|| format!("Failed to compile notice pattern for prefix {comment_prefix:?}"))
}
