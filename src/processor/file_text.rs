//! # File Text Module
//!
//! A file's content held as an ordered sequence of lines, each remembering its
//! own terminator so the original bytes can be rebuilt exactly.

/// A line terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
  /// `\n`
  Lf,
  /// `\r`
  Cr,
  /// `\r\n`
  CrLf,
}

impl LineEnding {
  /// Terminator used for new lines when a file gives no hint, and by the
  /// whitespace normalization pass.
  pub const DEFAULT: Self = Self::Lf;

  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Lf => "\n",
      Self::Cr => "\r",
      Self::CrLf => "\r\n",
    }
  }
}

/// One line of a file: its body and the terminator that followed it, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
  pub text: String,
  pub ending: Option<LineEnding>,
}

impl Line {
  pub fn new(text: impl Into<String>, ending: Option<LineEnding>) -> Self {
    Self {
      text: text.into(),
      ending,
    }
  }
}

/// The content of a single file, split into lines.
///
/// Only `\n`, `\r\n` and `\r` are treated as terminators. Only the last line
/// can lack one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileText {
  lines: Vec<Line>,
}

impl FileText {
  /// Splits `content` into lines. An empty string has no lines.
  pub fn parse(content: &str) -> Self {
    let mut lines = Vec::new();
    let bytes = content.as_bytes();
    let mut start = 0;
    let mut idx = 0;

    while idx < bytes.len() {
      let ending = match bytes[idx] {
        b'\r' if bytes.get(idx + 1) == Some(&b'\n') => LineEnding::CrLf,
        b'\r' => LineEnding::Cr,
        b'\n' => LineEnding::Lf,
        _ => {
          idx += 1;
          continue;
        }
      };
      lines.push(Line::new(&content[start..idx], Some(ending)));
      idx += ending.as_str().len();
      start = idx;
    }

    if start < content.len() {
      lines.push(Line::new(&content[start..], None));
    }

    Self { lines }
  }

  /// Rebuilds the full text from the lines and their terminators.
  pub fn render(&self) -> String {
    let capacity = self.lines.iter().map(|l| l.text.len() + 2).sum();
    let mut out = String::with_capacity(capacity);
    for line in &self.lines {
      out.push_str(&line.text);
      if let Some(ending) = line.ending {
        out.push_str(ending.as_str());
      }
    }
    out
  }

  pub fn lines(&self) -> &[Line] {
    &self.lines
  }

  pub fn len(&self) -> usize {
    self.lines.len()
  }

  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }

  /// Terminator of the first line, or `None` for an empty file or a single
  /// unterminated line.
  pub fn first_line_ending(&self) -> Option<LineEnding> {
    self.lines.first().and_then(|line| line.ending)
  }

  /// Replaces the line at `index`.
  ///
  /// # Panics
  ///
  /// Panics if `index` is out of bounds.
  pub fn replace(&mut self, index: usize, line: Line) {
    self.lines[index] = line;
  }

  /// Inserts `line` at `index`, clamped to the end of the file.
  ///
  /// If the line before the insertion point has no terminator it is given
  /// `ending`, otherwise the new line would be glued onto it.
  pub fn insert(&mut self, index: usize, line: Line, ending: LineEnding) {
    let index = index.min(self.lines.len());
    if let Some(prev) = index.checked_sub(1).and_then(|i| self.lines.get_mut(i))
      && prev.ending.is_none()
    {
      prev.ending = Some(ending);
    }
    self.lines.insert(index, line);
  }

  /// Strips trailing whitespace from every line and terminates each one with
  /// [`LineEnding::DEFAULT`], whatever the file used before.
  pub fn strip_trailing_whitespace(&mut self) {
    for line in &mut self.lines {
      let trimmed_len = line.text.trim_end().len();
      line.text.truncate(trimmed_len);
      line.ending = Some(LineEnding::DEFAULT);
    }
  }
}
