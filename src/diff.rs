//! # Diff Module
//!
//! Renders the difference between the expected header and a file's actual
//! leading lines. Used for detailed diagnostics.

use similar::TextDiff;

/// Render a unified line diff from `expected` to `actual`.
///
/// Lines are compared whole; the result has `--- expected` / `+++ actual`
/// headers followed by the hunks, without a trailing newline. Returns an
/// empty string when both sides are equal.
pub fn render_header_diff<E: AsRef<str>>(expected: &[E], actual: &[&str]) -> String {
  let expected_text = join_lines(expected.iter().map(AsRef::<str>::as_ref));
  let actual_text = join_lines(actual.iter().copied());

  if expected_text == actual_text {
    return String::new();
  }

  let mut rendered = TextDiff::from_lines(&expected_text, &actual_text)
    .unified_diff()
    .context_radius(3)
    .header("expected", "actual")
    .to_string();
  rendered.truncate(rendered.trim_end_matches('\n').len());
  rendered
}

fn join_lines<'a>(lines: impl Iterator<Item = &'a str>) -> String {
  let mut text = String::new();
  for line in lines {
    text.push_str(line);
    text.push('\n');
  }
  text
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_diff_shows_both_sides() {
    let diff = render_header_diff(&["# Copyright 2024"], &["print(1)"]);

    assert!(diff.contains("--- expected"));
    assert!(diff.contains("+++ actual"));
    assert!(diff.contains("-# Copyright 2024"));
    assert!(diff.contains("+print(1)"));
  }

  #[test]
  fn test_diff_keeps_matching_lines_as_context() {
    let diff = render_header_diff(&["# Copyright 2024", "# Example Corp"], &["# Copyright 2024", "# Other Corp"]);

    assert!(diff.contains(" # Copyright 2024"));
    assert!(diff.contains("-# Example Corp"));
    assert!(diff.contains("+# Other Corp"));
  }

  #[test]
  fn test_diff_of_missing_lines() {
    let diff = render_header_diff(&["# Copyright 2024", "# Example Corp"], &["# Copyright 2024"]);

    assert!(diff.contains("-# Example Corp"));
    assert!(!diff.contains("+# Example Corp"));
  }

  #[test]
  fn test_diff_has_no_trailing_newline() {
    let diff = render_header_diff(&["# Copyright 2024"], &["print(1)"]);

    assert!(diff.ends_with("+print(1)"));
  }

  #[test]
  fn test_equal_sides_render_nothing() {
    let diff = render_header_diff(&["# Copyright 2024"], &["# Copyright 2024"]);
    assert!(diff.is_empty());
  }
}
