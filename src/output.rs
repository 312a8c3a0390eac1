//! # Output Module
//!
//! This module centralizes all user-facing output for copyright-validator.
//!
//! Diagnostics are printed one per line as `path:line:column: message` so
//! that editors and CI annotators can pick them up. Everything else (start
//! message, summary, hints) is decoration that `-q` suppresses.

use std::path::Path;

use owo_colors::{OwoColorize, Stream};

use crate::logging::{is_quiet, is_verbose};
use crate::report::ProcessingSummary;
use crate::validator::Diagnostic;

/// Symbols used in output
pub mod symbols {
  /// Success/has header
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Missing header/failure
  pub const FAILURE: &str = "\u{2717}"; // ✗
  /// Header prepended
  pub const FIXED: &str = "\u{21bb}"; // ↻
}

/// Print the initial "Checking N files..." or "Updating N files..." message.
pub fn print_start_message(file_count: usize, update_mode: bool) {
  if is_quiet() {
    return;
  }

  let verb = if update_mode { "Updating" } else { "Checking" };
  let files_word = if file_count == 1 { "file" } else { "files" };

  println!("{} {} {}...", verb, file_count, files_word);
}

/// Print a blank line for visual separation (respects quiet mode).
pub fn print_blank_line() {
  if !is_quiet() {
    println!();
  }
}

/// Print one diagnostic.
///
/// Diagnostics are always printed, even in quiet mode. Multi-line messages
/// (detailed diffs) are printed as-is after the location.
pub fn print_diagnostic(path: &Path, diagnostic: &Diagnostic, base: Option<&Path>) {
  let display_path = make_relative_path(path, base);
  let location = format!("{}:{}:{}:", display_path, diagnostic.line, diagnostic.column);

  println!(
    "{} {}",
    location.if_supports_color(Stream::Stdout, |s| s.bold()),
    diagnostic.message
  );
}

/// Print a note that a file had its header prepended.
pub fn print_fixed_file(path: &Path, base: Option<&Path>) {
  if is_quiet() {
    return;
  }

  println!(
    "{} Added copyright header to {}",
    symbols::FIXED.if_supports_color(Stream::Stdout, |s| s.green()),
    make_relative_path(path, base)
  );
}

/// Print the success message when every file has its header.
pub fn print_all_files_ok() {
  if is_quiet() {
    return;
  }

  println!(
    "{} All files have the expected copyright header.",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green())
  );
}

/// Print the processing summary.
///
/// Format: "Summary: X OK, Y missing, Z fixed, W failed"
/// In verbose mode, also shows timing.
pub fn print_summary(summary: &ProcessingSummary) {
  if is_quiet() {
    return;
  }

  let ok_str = summary.files_ok.if_supports_color(Stream::Stdout, |s| s.cyan());
  let missing_str = if summary.files_missing > 0 {
    summary
      .files_missing
      .if_supports_color(Stream::Stdout, |s| s.red())
      .to_string()
  } else {
    summary
      .files_missing
      .if_supports_color(Stream::Stdout, |s| s.cyan())
      .to_string()
  };
  let fixed_str = summary.files_fixed.if_supports_color(Stream::Stdout, |s| s.green());
  let failed_str = summary.files_failed.if_supports_color(Stream::Stdout, |s| s.dimmed());

  let mut summary_line = format!(
    "Summary: {} OK, {} missing, {} fixed, {} failed",
    ok_str, missing_str, fixed_str, failed_str
  );

  if is_verbose() {
    summary_line.push_str(&format!(" ({:.2}s)", summary.processing_time.as_secs_f64()));
  }

  println!("{}", summary_line);
}

/// Print the "N files missing headers" line.
pub fn print_missing_count(count: usize) {
  if is_quiet() || count == 0 {
    return;
  }

  println!(
    "{} {} {} missing the expected copyright header",
    symbols::FAILURE.if_supports_color(Stream::Stdout, |s| s.red()),
    count,
    if count == 1 { "file" } else { "files" }
  );
}

/// Print a hint for the user about what to do next.
pub fn print_hint(message: &str) {
  if is_quiet() {
    return;
  }

  println!("{}", message.if_supports_color(Stream::Stdout, |s| s.yellow()));
}

/// Make a path relative to `base` for display.
///
/// Falls back to the path as given when no relative form exists.
fn make_relative_path(path: &Path, base: Option<&Path>) -> String {
  match base {
    Some(base) if path.is_absolute() => pathdiff::diff_paths(path, base)
      .filter(|relative| !relative.starts_with(".."))
      .unwrap_or_else(|| path.to_path_buf())
      .to_string_lossy()
      .to_string(),
    _ => path.to_string_lossy().to_string(),
  }
}
