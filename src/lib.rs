//! # copyline
//!
//! A tool that inserts, updates or verifies a one-line copyright notice at the
//! top of source files across a directory tree.
//!
//! `copyline` keeps any shebang and encoding declaration above the notice,
//! preserves each file's line endings, and can optionally normalize trailing
//! whitespace and line endings for the whole file.
//!
//! ## Features
//!
//! * Recursively scan directories for files with a given extension
//! * Insert a notice, or rewrite an existing one in place
//! * Update mode that extends an existing year into a range
//! * Check mode that verifies notices without modifying files
//! * Optional `.bak` copies of every modified file
//!
//! ## Usage as a Library
//!
//! ```rust
//! use copyline::config::RunConfig;
//! use copyline::processor::CopyrightTransformer;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = RunConfig::for_year(2024).with_holder("ACME Corp");
//!     let transformer = CopyrightTransformer::new(&config)?;
//!
//!     let fixed = transformer.transform_str("#!/usr/bin/env python\nprint('hi')\n");
//!     assert_eq!(fixed, "#!/usr/bin/env python\n# Copyright 2024 ACME Corp\n\nprint('hi')\n");
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - File selection, notice transformation and file updates
//! * [`config`] - Run configuration and config file loading
//! * [`logging`] - Logging utilities for verbose output
//!
//! [`processor`]: crate::processor
//! [`config`]: crate::config
//! [`logging`]: crate::logging

pub mod cli;
pub mod config;
pub mod diff;
pub mod logging;
pub mod output;
pub mod processor;
pub mod report;
