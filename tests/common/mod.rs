#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use assert_cmd::Command;

/// Year used by tests so expectations do not depend on the clock.
pub const YEAR: &str = "2024";

pub const NAME: &str = "Dan Watson";

/// Returns a command for the copyline binary with config discovery disabled.
pub fn copyline() -> Result<Command> {
  let mut cmd = Command::cargo_bin("copyline").context("copyline binary should be built")?;
  cmd
    .arg("--no-config")
    .arg("--colors=never")
    .env_remove("COPYLINE_CONFIG")
    .env_remove("RUST_LOG");
  Ok(cmd)
}

/// Writes `content` to `dir/name`, creating parent directories.
pub fn write_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
  let path = dir.join(name);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }
  fs::write(&path, content)?;
  Ok(path)
}

/// Reads a file without any newline translation.
pub fn read_file(path: &Path) -> Result<String> {
  fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
