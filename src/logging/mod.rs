//! # Logging Module
//!
//! This module provides logging utilities for the copyline tool, including:
//! - Verbose logging that can be enabled/disabled
//! - Plain info logging to stdout, silenced by `--quiet`
//! - The `tracing` subscriber used for structured diagnostics
//!
//! Verbose logs go to stderr. Info logs go to stdout, where they share the
//! stream with the list of processed paths.
//!
//! ## Example
//!
//! ```rust
//! use copyline::logging::{ColorMode, set_verbose};
//! use copyline::{info_log, verbose_log};
//!
//! set_verbose();
//! ColorMode::Never.apply();
//!
//! // Goes to stderr
//! verbose_log!("Processing file: {}", "example.py");
//!
//! // Goes to stdout
//! info_log!("{}", "/src/example.py");
//! ```

mod modes;

pub use modes::{ColorMode, init_tracing, is_quiet, is_verbose, set_quiet, set_verbose};

/// Logs a message to stderr if verbose mode is enabled.
///
/// This macro is used for detailed logging that is only shown when verbose mode
/// is enabled via [`set_verbose`]. It uses the same format string syntax as
/// the standard [`eprintln!`] macro.
#[macro_export]
macro_rules! verbose_log {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Logs a message to stdout unless quiet mode is enabled.
///
/// It uses the same format string syntax as the standard [`println!`] macro.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        if !$crate::logging::is_quiet() {
            $crate::logging::print_info_log(&format!($($arg)*));
        }
    };
}

/// Internal function to print info log messages with formatting.
///
/// Used by [`info_log!`]. Stdout carries paths meant for other tools, so the
/// message is never colored.
pub fn print_info_log(message: &str) {
  println!("{message}");
}
