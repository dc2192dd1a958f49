//! # File I/O Module
//!
//! This module provides file reading and writing utilities for the processor.
//! It encapsulates synchronous file operations.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Suffix appended to a file name for its backup copy.
pub const BACKUP_SUFFIX: &str = ".bak";

/// Errors for file content that cannot be processed.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
  /// The file is not valid UTF-8.
  #[error("{path} is not valid UTF-8: {source}")]
  Decode {
    path: PathBuf,
    source: std::string::FromUtf8Error,
  },
}

/// File I/O operations for the processor.
///
/// This struct provides static methods for reading and writing files.
pub struct FileIO;

impl FileIO {
  /// Reads a whole file as UTF-8 text, leaving line endings untouched.
  ///
  /// Content that is not valid UTF-8 is an error; no other encoding is tried.
  pub fn read_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    let text = String::from_utf8(bytes).map_err(|source| FileError::Decode {
      path: path.to_path_buf(),
      source,
    })?;
    Ok(text)
  }

  /// Returns the backup location for `path`: the same name with `.bak` added.
  pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
  }

  /// Copies the current content of `path` to its backup location.
  ///
  /// Returns the backup path. An existing backup is overwritten.
  pub fn write_backup(path: &Path) -> Result<PathBuf> {
    let backup = Self::backup_path(path);
    std::fs::copy(path, &backup)
      .with_context(|| format!("Failed to back up {} to {}", path.display(), backup.display()))?;
    Ok(backup)
  }

  /// Truncates `path` and writes `content` to it.
  pub fn write_text(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
  }
}
