//! # File Collector Module
//!
//! Turns the user's path arguments into the sequence of files to process.
//!
//! A path naming a file with the target extension is taken as is. Any other
//! path is walked recursively and every file whose name ends with the
//! extension and does not start with a dot is selected.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Selects files by extension under a set of roots.
#[derive(Debug, Clone)]
pub struct FileSelector {
  /// `.` followed by the extension.
  suffix: String,
}

impl FileSelector {
  /// Creates a selector for `extension` (with or without a leading dot).
  pub fn new(extension: &str) -> Self {
    Self {
      suffix: format!(".{}", extension.trim_start_matches('.')),
    }
  }

  /// Lazily yields the absolute paths of all selected files under `roots`.
  ///
  /// Directories are walked in file-name order so the sequence is stable for
  /// a given file system state. Errors from the walk are yielded in place.
  pub fn select<'a>(&'a self, roots: &'a [PathBuf]) -> impl Iterator<Item = Result<PathBuf>> + 'a {
    roots.iter().flat_map(move |root| self.select_root(root))
  }

  fn select_root<'a>(&'a self, root: &Path) -> Box<dyn Iterator<Item = Result<PathBuf>> + 'a> {
    let root = match absolutize_path(root) {
      Ok(root) => root,
      Err(e) => return Box::new(std::iter::once(Err(e))),
    };

    if root.is_file() && self.has_suffix(&root) {
      debug!("Selected file: {}", root.display());
      return Box::new(std::iter::once(Ok(root)));
    }

    debug!("Scanning directory: {}", root.display());
    let walk = WalkDir::new(root).sort_by_file_name().into_iter();
    Box::new(walk.filter_map(move |entry| match entry {
      Ok(entry) if self.is_selected(&entry) => Some(Ok(entry.into_path())),
      Ok(_) => None,
      Err(e) => Some(Err(e).context("Failed to walk directory")),
    }))
  }

  /// Whether a directory entry is a regular file (or a link to one) with a
  /// matching, non-hidden name.
  fn is_selected(&self, entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    let is_file = file_type.is_file() || (file_type.is_symlink() && entry.path().is_file());
    if !is_file {
      return false;
    }

    let name = entry.file_name().to_string_lossy();
    !name.starts_with('.') && name.ends_with(&self.suffix)
  }

  fn has_suffix(&self, path: &Path) -> bool {
    path
      .file_name()
      .is_some_and(|name| name.to_string_lossy().ends_with(&self.suffix))
  }
}

/// Converts a potentially relative path to an absolute path.
///
/// # Parameters
///
/// * `path` - The path to absolutize
///
/// # Returns
///
/// The absolute path.
pub fn absolutize_path(path: &Path) -> Result<PathBuf> {
  if path.is_absolute() {
    Ok(path.to_path_buf())
  } else {
    let current_dir = std::env::current_dir().with_context(|| "Failed to get current directory")?;
    Ok(current_dir.join(path))
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use tempfile::tempdir;

  use super::*;

  fn collect(selector: &FileSelector, roots: &[PathBuf]) -> Vec<PathBuf> {
    selector
      .select(roots)
      .collect::<Result<Vec<_>>>()
      .expect("selection should succeed")
  }

  #[test]
  fn test_select_walks_directories() {
    let dir = tempdir().expect("temp dir");
    let root = dir.path();
    fs::create_dir_all(root.join("pkg/sub")).expect("mkdir");
    fs::write(root.join("a.py"), "").expect("write");
    fs::write(root.join("pkg/b.py"), "").expect("write");
    fs::write(root.join("pkg/sub/c.py"), "").expect("write");
    fs::write(root.join("pkg/notes.txt"), "").expect("write");
    fs::write(root.join("pkg/.hidden.py"), "").expect("write");
    fs::write(root.join("pkg/sub/d.pyc"), "").expect("write");

    let selector = FileSelector::new("py");
    let files = collect(&selector, &[root.to_path_buf()]);

    assert_eq!(
      files,
      vec![root.join("a.py"), root.join("pkg/b.py"), root.join("pkg/sub/c.py")]
    );
  }

  #[test]
  fn test_select_direct_file() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("only.rs");
    fs::write(&path, "").expect("write");

    let selector = FileSelector::new(".rs");
    assert_eq!(collect(&selector, std::slice::from_ref(&path)), vec![path]);
  }

  #[test]
  fn test_select_direct_file_wrong_extension() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("only.txt");
    fs::write(&path, "").expect("write");

    let selector = FileSelector::new("rs");
    assert!(collect(&selector, &[path]).is_empty());
  }

  #[test]
  fn test_select_empty_directory() {
    let dir = tempdir().expect("temp dir");
    let selector = FileSelector::new("py");
    assert!(collect(&selector, &[dir.path().to_path_buf()]).is_empty());
  }

  #[test]
  fn test_select_missing_root_is_error() {
    let dir = tempdir().expect("temp dir");
    let selector = FileSelector::new("py");
    let roots = [dir.path().join("missing")];
    let result: Result<Vec<_>> = selector.select(&roots).collect();
    assert!(result.is_err());
  }

  #[test]
  fn test_absolutize_path() {
    let abs = absolutize_path(Path::new("some/rel.py")).expect("absolutize");
    assert!(abs.is_absolute());
    assert!(abs.ends_with("some/rel.py"));
  }
}
