//! # Validator Module
//!
//! This module contains the core of copyright-validator: deciding whether a
//! file begins with the expected header and, in update mode, prepending the
//! header to files that do not.
//!
//! The module is organized into several submodules:
//! - [`strategy`] - The plain-text and regex header checks
//! - [`file_io`] - Reading and rewriting borrowed file handles
//!
//! [`HeaderValidator`] is the entry point. It owns the materialized
//! [`ValidationConfig`] and is safe to share between threads; each call to
//! [`HeaderValidator::run`] borrows one open file.

pub mod file_io;
pub mod strategy;

use std::io::{Read, Seek, Write};
use std::path::{Path, PathBuf};

pub use file_io::FileIO;
use serde::Serialize;
pub use strategy::{HeaderStrategy, PlainTextStrategy, RegexStrategy};
use tracing::{debug, trace};

use crate::materialize::ValidationConfig;
use crate::messages::HeaderViolation;

/// Identity attached to every diagnostic this crate produces.
pub const CHECK_NAME: &str = env!("CARGO_PKG_NAME");

/// A single header problem in a file.
///
/// Field order mirrors the `(line, column, message, check)` tuples that
/// lint hosts consume; see [`Diagnostic::as_tuple`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
  /// 1-based line for regex mismatches, 0 when the header as a whole is at
  /// fault.
  pub line: usize,
  /// Always 0.
  pub column: usize,
  /// Human-readable message starting with a `CPY` code.
  pub message: String,
  /// Name of the check that produced the diagnostic.
  pub check: &'static str,
}

impl Diagnostic {
  fn from_violation(violation: &HeaderViolation) -> Self {
    Self {
      line: violation.line(),
      column: 0,
      message: violation.to_string(),
      check: CHECK_NAME,
    }
  }

  /// The diagnostic as a `(line, column, message, check)` tuple.
  pub fn as_tuple(&self) -> (usize, usize, &str, &'static str) {
    (self.line, self.column, &self.message, self.check)
  }
}

/// Errors raised while validating a single file.
#[derive(Debug, thiserror::Error)]
pub enum ValidatorError {
  /// The file could not be read or is not UTF-8 text.
  #[error("Failed to read file {path}: {source}")]
  Read { path: PathBuf, source: std::io::Error },

  /// The fixed content could not be written back.
  #[error("Failed to write file {path}: {source}")]
  Write { path: PathBuf, source: std::io::Error },

  /// Update mode was requested without any text to insert.
  #[error("Provide --copyright-text to add at the beginning of validated files")]
  MissingCopyrightText,
}

impl ValidatorError {
  /// Whether this error must abort the whole run rather than just the file.
  pub const fn is_fatal(&self) -> bool {
    matches!(self, Self::MissingCopyrightText)
  }
}

/// Validates file headers against a materialized configuration.
pub struct HeaderValidator {
  config: ValidationConfig,
}

impl HeaderValidator {
  pub const fn new(config: ValidationConfig) -> Self {
    Self { config }
  }

  pub const fn config(&self) -> &ValidationConfig {
    &self.config
  }

  /// Validates one open file, fixing it when update mode is enabled.
  ///
  /// The whole file is read in update mode, since the rewrite needs all of
  /// it; otherwise only the first `bytes_to_read` bytes are read. At most one
  /// diagnostic is produced. When the header is missing and update mode is on,
  /// the file has already been rewritten by the time the diagnostic is
  /// returned.
  ///
  /// # Parameters
  ///
  /// * `file` - An open handle, positioned at the start of the file; must be
  ///   writable in update mode
  /// * `path` - Used only to identify the file in errors
  ///
  /// # Errors
  ///
  /// Returns [`ValidatorError::MissingCopyrightText`] if a file needs fixing
  /// and no copyright text was configured. I/O failures are returned as
  /// [`ValidatorError::Read`] / [`ValidatorError::Write`].
  pub fn run<F: Read + Write + Seek>(&self, file: &mut F, path: &Path) -> Result<Option<Diagnostic>, ValidatorError> {
    let content = if self.config.auto_fix {
      FileIO::read_full(file)
    } else {
      FileIO::read_prefix(file, self.config.bytes_to_read)
    }
    .map_err(|source| ValidatorError::Read {
      path: path.to_path_buf(),
      source,
    })?;

    trace!("Read {} bytes from {}", content.len(), path.display());

    let Some(violation) = self.check_content(&content) else {
      return Ok(None);
    };

    debug!("Header check failed for {}: {}", path.display(), violation.code());

    self.add_copyright(file, path, &content)?;

    Ok(Some(Diagnostic::from_violation(&violation)))
  }

  /// Checks already-read content without touching any file.
  ///
  /// Returns `None` if the header is present or the file is excluded.
  pub fn check_content(&self, content: &str) -> Option<HeaderViolation> {
    // CRLF files compare the same as LF ones; the bytes on disk are untouched
    let lines: Vec<&str> = content
      .split('\n')
      .map(|line| line.strip_suffix('\r').unwrap_or(line))
      .collect();

    let first_line = lines.first()?;
    if self.config.is_excluded(first_line) {
      trace!("Skipping file, first line is excluded: {first_line:?}");
      return None;
    }

    self.strategy().validate(&lines)
  }

  fn strategy(&self) -> Box<dyn HeaderStrategy + '_> {
    if self.config.uses_regex() {
      Box::new(RegexStrategy::new(&self.config.expected_regex_lines))
    } else {
      Box::new(PlainTextStrategy::new(
        &self.config.expected_text_lines,
        self.config.detailed_output,
      ))
    }
  }

  /// Prepends the copyright text to `content` and writes it back.
  fn add_copyright<W: Write + Seek>(&self, file: &mut W, path: &Path, content: &str) -> Result<(), ValidatorError> {
    if !self.config.auto_fix {
      return Ok(());
    }

    let copyright_text = self
      .config
      .copyright_text
      .as_deref()
      .ok_or(ValidatorError::MissingCopyrightText)?;

    let fixed = format!("{copyright_text}\n{content}");
    FileIO::write_from_start(file, &fixed).map_err(|source| ValidatorError::Write {
      path: path.to_path_buf(),
      source,
    })?;

    debug!("Prepended copyright header to {}", path.display());
    Ok(())
  }
}
