//! # Header Strategies
//!
//! The two interchangeable ways of deciding whether a file's leading lines
//! form the expected header.

use regex::Regex;

use crate::diff::render_header_diff;
use crate::messages::HeaderViolation;

/// Trait for header checks.
///
/// Implementations receive the file content split on `\n` (possibly
/// truncated to the read limit) and report the first way in which it fails
/// to start with the expected header.
pub trait HeaderStrategy: Send + Sync {
  /// Checks the leading lines, returning `None` when the header is present.
  fn validate(&self, lines: &[&str]) -> Option<HeaderViolation>;
}

/// Positional per-line pattern matching.
///
/// The N-th pattern must match somewhere within the N-th line; patterns are
/// not anchored unless they anchor themselves.
pub struct RegexStrategy<'a> {
  patterns: &'a [Regex],
}

impl<'a> RegexStrategy<'a> {
  pub const fn new(patterns: &'a [Regex]) -> Self {
    Self { patterns }
  }
}

impl HeaderStrategy for RegexStrategy<'_> {
  /// Reports a length mismatch when the file has fewer lines than patterns,
  /// otherwise the first line whose pattern does not match. Lines after the
  /// first failure are not examined.
  fn validate(&self, lines: &[&str]) -> Option<HeaderViolation> {
    if self.patterns.len() > lines.len() {
      return Some(HeaderViolation::LengthMismatch);
    }

    self
      .patterns
      .iter()
      .zip(lines)
      .position(|(pattern, line)| !pattern.is_match(line))
      .map(|idx| HeaderViolation::RegexMismatch { line: idx + 1 })
  }
}

/// Exact comparison of the leading lines with the expected text.
pub struct PlainTextStrategy<'a> {
  expected: &'a [String],
  detailed_output: bool,
}

impl<'a> PlainTextStrategy<'a> {
  pub const fn new(expected: &'a [String], detailed_output: bool) -> Self {
    Self {
      expected,
      detailed_output,
    }
  }
}

impl HeaderStrategy for PlainTextStrategy<'_> {
  fn validate(&self, lines: &[&str]) -> Option<HeaderViolation> {
    let actual = &lines[..self.expected.len().min(lines.len())];

    // Nothing to compare against is never a match
    let matches = !self.expected.is_empty()
      && actual.len() == self.expected.len()
      && actual.iter().zip(self.expected).all(|(line, expected)| *line == expected.as_str());

    if matches {
      return None;
    }

    let details = self
      .detailed_output
      .then(|| render_header_diff(self.expected, actual))
      .filter(|diff| !diff.is_empty());

    Some(HeaderViolation::PlainNotFound { details })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn patterns(sources: &[&str]) -> Vec<Regex> {
    sources
      .iter()
      .map(|source| Regex::new(source).expect("test pattern should compile"))
      .collect()
  }

  fn expected(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
  }

  // === Regex strategy ===

  #[test]
  fn test_regex_all_lines_match() {
    let patterns = patterns(&[r"^# Copyright \d{4}", "Example Corp"]);
    let strategy = RegexStrategy::new(&patterns);

    let lines = ["# Copyright 2024", "# (c) Example Corp", "", "print(1)"];
    assert_eq!(strategy.validate(&lines), None);
  }

  #[test]
  fn test_regex_is_unanchored_search() {
    let patterns = patterns(&["Copyright"]);
    let strategy = RegexStrategy::new(&patterns);

    assert_eq!(strategy.validate(&["// Copyright 2024 Example"]), None);
  }

  #[test]
  fn test_regex_first_failure_wins() {
    let patterns = patterns(&["^# Copyright", "^# Example", "^# Licensed"]);
    let strategy = RegexStrategy::new(&patterns);

    let lines = ["# Copyright 2024", "# Other", "# Other"];
    assert_eq!(strategy.validate(&lines), Some(HeaderViolation::RegexMismatch { line: 2 }));
  }

  #[test]
  fn test_regex_mismatch_on_first_line() {
    let patterns = patterns(&["^# Copyright", "^# Example"]);
    let strategy = RegexStrategy::new(&patterns);

    let lines = ["import os", "import sys"];
    assert_eq!(strategy.validate(&lines), Some(HeaderViolation::RegexMismatch { line: 1 }));
  }

  #[test]
  fn test_regex_more_patterns_than_lines() {
    let patterns = patterns(&[".*", ".*", ".*"]);
    let strategy = RegexStrategy::new(&patterns);

    assert_eq!(strategy.validate(&["a", "b"]), Some(HeaderViolation::LengthMismatch));
  }

  // === Plain-text strategy ===

  #[test]
  fn test_plain_exact_match() {
    let expected = expected(&["# Copyright 2024", "# Example Corp"]);
    let strategy = PlainTextStrategy::new(&expected, false);

    let lines = ["# Copyright 2024", "# Example Corp", "", "print(1)"];
    assert_eq!(strategy.validate(&lines), None);
  }

  #[test]
  fn test_plain_mismatch_without_details() {
    let expected = expected(&["# Copyright 2024"]);
    let strategy = PlainTextStrategy::new(&expected, false);

    assert_eq!(
      strategy.validate(&["print(1)", ""]),
      Some(HeaderViolation::PlainNotFound { details: None })
    );
  }

  #[test]
  fn test_plain_mismatch_with_details() {
    let expected = expected(&["# Copyright 2024"]);
    let strategy = PlainTextStrategy::new(&expected, true);

    let Some(HeaderViolation::PlainNotFound { details: Some(details) }) = strategy.validate(&["print(1)", ""]) else {
      panic!("expected a detailed plain-text violation");
    };
    assert!(details.contains("-# Copyright 2024"));
    assert!(details.contains("+print(1)"));
  }

  #[test]
  fn test_plain_nothing_expected_reports_not_found() {
    let strategy = PlainTextStrategy::new(&[], true);

    assert_eq!(
      strategy.validate(&["print(1)", ""]),
      Some(HeaderViolation::PlainNotFound { details: None })
    );
  }

  #[test]
  fn test_plain_file_shorter_than_header() {
    let expected = expected(&["# Copyright 2024", "# Example Corp"]);
    let strategy = PlainTextStrategy::new(&expected, false);

    assert!(matches!(
      strategy.validate(&["# Copyright 2024"]),
      Some(HeaderViolation::PlainNotFound { .. })
    ));
  }

  #[test]
  fn test_plain_whitespace_is_significant() {
    let expected = expected(&["# Copyright 2024"]);
    let strategy = PlainTextStrategy::new(&expected, false);

    assert!(strategy.validate(&["# Copyright 2024 "]).is_some());
  }
}
