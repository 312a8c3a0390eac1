//! # Logging Module
//!
//! Console logging for copyright-validator:
//! - [`verbose_log!`] for progress detail, shown only with `-v`
//! - [`info_log!`] for notable events, hidden with `-q`
//! - [`warn_log!`] for per-file problems that do not stop the run
//!
//! Structured events go through `tracing` instead; [`init_tracing`] wires
//! them to stderr with a filter derived from the same flags.
//!
//! ## Example
//!
//! ```rust
//! use copyright_validator::logging::{ColorMode, set_verbose};
//! use copyright_validator::{info_log, verbose_log};
//!
//! set_verbose();
//! ColorMode::Never.apply();
//!
//! verbose_log!("Checking file: {}", "example.py");
//! info_log!("Copyright header added to: {}", "example.py");
//! ```

mod modes;

pub use modes::{ColorMode, default_filter, init_tracing, is_quiet, is_verbose, set_quiet, set_verbose};
use owo_colors::{OwoColorize, Stream};

/// Logs a message to stderr if verbose mode is enabled.
#[macro_export]
macro_rules! verbose_log {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Logs a message to stdout unless quiet mode is enabled.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        if !$crate::logging::is_quiet() {
            $crate::logging::print_info_log(&format!($($arg)*));
        }
    };
}

/// Logs a warning to stderr. Warnings are shown even in quiet mode.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        $crate::logging::print_warn_log(&format!($($arg)*));
    };
}

/// Prints an info line in yellow when stdout supports color.
pub fn print_info_log(message: &str) {
  println!("{}", message.if_supports_color(Stream::Stdout, |m| m.yellow()));
}

/// Prints a `warning:`-prefixed line to stderr.
pub fn print_warn_log(message: &str) {
  eprintln!(
    "{} {}",
    "warning:".if_supports_color(Stream::Stderr, |m| m.yellow()),
    message
  );
}
