//! # Messages Module
//!
//! Diagnostic message templates and the header violations they describe.
//!
//! Every message starts with a stable code so that diagnostics can be
//! filtered or suppressed by whatever consumes them.

use std::fmt;

/// The file has fewer lines than there are expected header patterns.
pub const COPYRIGHT_LENGTH_MISMATCH: &str = "CPY001 File is shorter than the expected copyright header";

/// The leading lines differ from the expected copyright text.
///
/// `{details}` is replaced with a unified diff in detailed mode and with the
/// empty string otherwise.
pub const COPYRIGHT_PLAIN_NOT_FOUND: &str = "CPY002 Copyright header not found{details}";

/// A header line does not match its positional pattern.
pub const COPYRIGHT_REGEX_MISMATCH: &str = "CPY003 Copyright header line does not match the expected pattern";

/// A way in which a file's leading lines fail to satisfy the expected header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderViolation {
  /// There are more expected patterns than lines in the file.
  LengthMismatch,

  /// The pattern for the given 1-based line did not match.
  RegexMismatch { line: usize },

  /// The leading lines are not equal to the expected text.
  PlainNotFound {
    /// Unified diff between the expected and actual lines, when requested.
    details: Option<String>,
  },
}

impl HeaderViolation {
  /// Line number reported for this violation.
  ///
  /// Regex mismatches point at the offending 1-based line; the other kinds
  /// refer to the header as a whole and report line 0.
  pub const fn line(&self) -> usize {
    match self {
      Self::RegexMismatch { line } => *line,
      Self::LengthMismatch | Self::PlainNotFound { .. } => 0,
    }
  }

  /// The stable code prefixing the message.
  pub const fn code(&self) -> &'static str {
    match self {
      Self::LengthMismatch => "CPY001",
      Self::PlainNotFound { .. } => "CPY002",
      Self::RegexMismatch { .. } => "CPY003",
    }
  }
}

impl fmt::Display for HeaderViolation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::LengthMismatch => f.write_str(COPYRIGHT_LENGTH_MISMATCH),
      Self::RegexMismatch { .. } => f.write_str(COPYRIGHT_REGEX_MISMATCH),
      Self::PlainNotFound { details } => {
        let details = details
          .as_deref()
          .filter(|d| !d.is_empty())
          .map(|d| format!("\n{d}"))
          .unwrap_or_default();
        f.write_str(&COPYRIGHT_PLAIN_NOT_FOUND.replace("{details}", &details))
      }
    }
  }
}
