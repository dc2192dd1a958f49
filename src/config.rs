//! # Configuration Module
//!
//! This module holds the resolved per-run configuration ([`RunConfig`]) and the
//! optional `.copyline.toml` file that supplies project defaults for it.
//!
//! Values are resolved once at startup in the order: command line, config
//! file, built-in default. The config file can be named with `--config`, via
//! the `COPYLINE_CONFIG` environment variable, or found as `.copyline.toml` in
//! the current directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Datelike;
use serde::Deserialize;

use crate::verbose_log;

/// The default config file name.
pub const DEFAULT_CONFIG_FILENAME: &str = ".copyline.toml";

/// Environment variable for specifying config file path.
pub const CONFIG_ENV_VAR: &str = "COPYLINE_CONFIG";

/// Comment prefix used when none is configured.
pub const DEFAULT_COMMENT_PREFIX: &str = "#";

/// File extension scanned when none is configured.
pub const DEFAULT_EXTENSION: &str = "py";

/// Number of leading lines searched for an existing notice.
pub const DEFAULT_SCAN_LINE_LIMIT: usize = 5;

/// Immutable configuration for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
  /// Calendar year to stamp.
  pub year: u16,
  /// Copyright holder appended after the year.
  pub holder_name: Option<String>,
  /// Comment characters written before the notice and matched literally.
  pub comment_prefix: String,
  /// Extend an existing year into a range instead of overwriting it.
  pub update_existing: bool,
  /// Strip trailing whitespace and convert every line ending to `\n`.
  pub strip_whitespace: bool,
  /// Only verify notices, never write.
  pub check_only: bool,
  /// How many leading lines to search for an existing notice.
  pub scan_line_limit: usize,
  /// Add a blank line after a freshly inserted notice.
  pub insert_trailing_blank_line: bool,
  /// File suffix to select, without the leading dot.
  pub extension: String,
  pub quiet: bool,
  pub print_only: bool,
  pub keep_backup: bool,
}

impl Default for RunConfig {
  fn default() -> Self {
    Self::for_year(current_year())
  }
}

impl RunConfig {
  /// Creates a configuration with the built-in defaults and the given year.
  pub fn for_year(year: u16) -> Self {
    Self {
      year,
      holder_name: None,
      comment_prefix: DEFAULT_COMMENT_PREFIX.to_string(),
      update_existing: false,
      strip_whitespace: false,
      check_only: false,
      scan_line_limit: DEFAULT_SCAN_LINE_LIMIT,
      insert_trailing_blank_line: true,
      extension: DEFAULT_EXTENSION.to_string(),
      quiet: false,
      print_only: false,
      keep_backup: false,
    }
  }

  /// Sets the holder name, treating an empty string as no name.
  pub fn with_holder(mut self, name: impl Into<String>) -> Self {
    let name = name.into();
    self.holder_name = (!name.is_empty()).then_some(name);
    self
  }

  pub fn with_comment_prefix(mut self, prefix: impl Into<String>) -> Self {
    self.comment_prefix = prefix.into();
    self
  }

  /// Validates the configuration and normalizes the extension.
  ///
  /// A leading dot on the extension is dropped, so `.rs` and `rs` select the
  /// same files.
  pub fn validate(mut self) -> Result<Self, ConfigError> {
    if self.comment_prefix.is_empty() {
      return Err(ConfigError::Invalid {
        field: "comment",
        message: "comment prefix cannot be empty".to_string(),
      });
    }

    let extension = self.extension.trim_start_matches('.');
    if extension.is_empty() {
      return Err(ConfigError::Invalid {
        field: "extension",
        message: "extension cannot be empty".to_string(),
      });
    }
    self.extension = extension.to_string();

    if self.holder_name.as_deref().is_some_and(str::is_empty) {
      self.holder_name = None;
    }

    Ok(self)
  }
}

/// Returns the current local calendar year.
pub fn current_year() -> u16 {
  u16::try_from(chrono::Local::now().year()).unwrap_or(9999)
}

/// Project defaults read from a `.copyline.toml` file.
///
/// Every key is optional. Boolean keys can only switch a behavior on; the
/// command line cannot switch it back off.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ConfigFile {
  /// Copyright holder name.
  #[serde(default)]
  pub name: Option<String>,

  /// Comment prefix (e.g. "//").
  #[serde(default)]
  pub comment: Option<String>,

  /// File extension to scan.
  #[serde(default)]
  pub extension: Option<String>,

  /// Number of leading lines to search for an existing notice.
  #[serde(default)]
  pub check_lines: Option<usize>,

  #[serde(default)]
  pub update: bool,

  #[serde(default)]
  pub strip: bool,

  #[serde(default)]
  pub no_newline: bool,

  #[serde(default)]
  pub backup: bool,
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}': {source}")]
  ParseError { path: PathBuf, source: toml::de::Error },

  /// A resolved value is unusable.
  #[error("Invalid {field}: {message}")]
  Invalid { field: &'static str, message: String },
}

impl ConfigFile {
  /// Load configuration from a file.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    verbose_log!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::ParseError {
      path: path.to_path_buf(),
      source: e,
    })
  }
}

/// Discover the configuration file path.
///
/// The configuration file is discovered in the following order:
/// 1. Path specified via `--config` flag (passed as `explicit_path`)
/// 2. Path specified via `COPYLINE_CONFIG` environment variable
/// 3. `.copyline.toml` in `search_dir`
///
/// An explicit path is returned even when it does not exist, so that loading
/// it reports the problem instead of silently falling back to defaults.
pub fn discover_config_path(explicit_path: Option<&Path>, search_dir: &Path) -> Option<PathBuf> {
  if let Some(path) = explicit_path {
    verbose_log!("Using explicit config path: {}", path.display());
    return Some(path.to_path_buf());
  }

  if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
    let path = PathBuf::from(&env_path);
    if path.exists() {
      verbose_log!("Using config from {}: {}", CONFIG_ENV_VAR, path.display());
      return Some(path);
    }
    verbose_log!("{} path does not exist: {}", CONFIG_ENV_VAR, env_path);
  }

  let local_config = search_dir.join(DEFAULT_CONFIG_FILENAME);
  if local_config.exists() {
    verbose_log!("Using config: {}", local_config.display());
    return Some(local_config);
  }

  verbose_log!("No config file found");
  None
}

/// Load the config file if one is found.
///
/// Returns `None` when discovery is disabled or nothing is found.
pub fn load_config(explicit_path: Option<&Path>, search_dir: &Path, no_config: bool) -> Result<Option<ConfigFile>> {
  if no_config {
    verbose_log!("Config file discovery disabled (--no-config)");
    return Ok(None);
  }

  match discover_config_path(explicit_path, search_dir) {
    Some(path) => {
      let config = ConfigFile::load(&path).with_context(|| format!("Failed to load config from {}", path.display()))?;
      Ok(Some(config))
    }
    None => Ok(None),
  }
}
