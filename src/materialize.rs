//! # Materialize Module
//!
//! Turns raw [`HeaderOptions`] into a [`ValidationConfig`]: multi-line option
//! blobs are stripped of their wrapping symbols and split into lines, and
//! header patterns are compiled.
//!
//! Materialization happens once per run. The resulting config is never
//! mutated afterwards and can be shared freely between validations.

use regex::Regex;
use tracing::debug;

use crate::config::{ConfigError, HeaderOptions};

/// Number of bytes read from each file when it is not being updated.
pub const DEFAULT_BYTES_TO_READ: usize = 2048;

/// Symbols stripped from option text when none are configured.
pub const DEFAULT_SYMBOLS_TO_REPLACE: &[&str] = &["'"];

/// Normalized, immutable validation settings.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
  /// Expected header, one entry per line.
  pub expected_text_lines: Vec<String>,

  /// Expected header as a single blob, inserted by auto-fix.
  pub copyright_text: Option<String>,

  /// Patterns for the leading lines, by position.
  pub expected_regex_lines: Vec<Regex>,

  /// First-line prefixes that exempt a file from validation.
  pub excluded_first_lines: Vec<String>,

  /// Symbols stripped from the raw option text.
  pub symbols_to_replace: Vec<String>,

  /// Read cap when not rewriting files.
  pub bytes_to_read: usize,

  /// Whether diagnostics embed a diff of the header.
  pub detailed_output: bool,

  /// Whether failing files are rewritten with the expected header.
  pub auto_fix: bool,
}

impl Default for ValidationConfig {
  fn default() -> Self {
    Self {
      expected_text_lines: Vec::new(),
      copyright_text: None,
      expected_regex_lines: Vec::new(),
      excluded_first_lines: Vec::new(),
      symbols_to_replace: DEFAULT_SYMBOLS_TO_REPLACE.iter().map(|s| s.to_string()).collect(),
      bytes_to_read: DEFAULT_BYTES_TO_READ,
      detailed_output: false,
      auto_fix: false,
    }
  }
}

impl ValidationConfig {
  /// Build the validation config from raw options.
  ///
  /// Empty option strings are treated as unset, as is a zero
  /// `bytes-to-read`.
  ///
  /// # Errors
  ///
  /// Fails if a multi-line option is not newline-terminated or if a
  /// `copyright-regex` line does not compile.
  pub fn materialize(options: &HeaderOptions) -> Result<Self, ConfigError> {
    let mut config = Self {
      detailed_output: options.detailed_output.unwrap_or(false),
      auto_fix: options.update,
      ..Self::default()
    };

    if let Some(symbols) = options.symbols_to_replace.as_ref().filter(|s| !s.is_empty()) {
      config.symbols_to_replace = symbols.clone();
    }

    if let Some(raw) = non_empty(&options.lines_to_exclude) {
      config.excluded_first_lines = parse_lines("lines-to-exclude", raw, &config.symbols_to_replace)?;
    }

    if let Some(raw) = non_empty(&options.copyright_text) {
      config.expected_text_lines = parse_lines("copyright-text", raw, &config.symbols_to_replace)?;
      // A header of blank lines has nothing to insert
      config.copyright_text = Some(config.expected_text_lines.join("\n")).filter(|text| !text.is_empty());
    }

    if let Some(raw) = non_empty(&options.copyright_regex) {
      config.expected_regex_lines = parse_lines("copyright-regex", raw, &config.symbols_to_replace)?
        .iter()
        .enumerate()
        .map(|(idx, pattern)| {
          Regex::new(pattern).map_err(|source| ConfigError::InvalidRegex { line: idx + 1, source })
        })
        .collect::<Result<_, _>>()?;
    }

    if let Some(bytes) = options.bytes_to_read.filter(|&b| b > 0) {
      config.bytes_to_read = bytes;
    }

    debug!(
      text_lines = config.expected_text_lines.len(),
      regex_lines = config.expected_regex_lines.len(),
      excluded = config.excluded_first_lines.len(),
      bytes_to_read = config.bytes_to_read,
      auto_fix = config.auto_fix,
      "Materialized validation config"
    );

    Ok(config)
  }

  /// Whether the regex strategy is authoritative for this run.
  pub const fn uses_regex(&self) -> bool {
    !self.expected_regex_lines.is_empty()
  }

  /// Whether a file starting with `first_line` is exempt from validation.
  pub fn is_excluded(&self, first_line: &str) -> bool {
    self
      .excluded_first_lines
      .iter()
      .any(|excluded| first_line.starts_with(excluded.as_str()))
  }
}

/// Split the raw value of `option` into lines.
///
/// Every occurrence of each symbol in `symbols_to_strip` is removed first,
/// then the text is split on `\n` and the empty element left by the
/// terminating newline is dropped. Text that is empty after stripping yields
/// no lines.
///
/// # Errors
///
/// Returns [`ConfigError::MissingTrailingNewline`] naming `option` if
/// non-empty text does not end with `\n`.
pub fn parse_lines<S: AsRef<str>>(
  option: &'static str,
  raw: &str,
  symbols_to_strip: &[S],
) -> Result<Vec<String>, ConfigError> {
  let mut stripped = raw.to_string();
  for symbol in symbols_to_strip {
    let symbol: &str = symbol.as_ref();
    if !symbol.is_empty() {
      stripped = stripped.replace(symbol, "");
    }
  }

  if stripped.is_empty() {
    return Ok(Vec::new());
  }

  let Some(body) = stripped.strip_suffix('\n') else {
    return Err(ConfigError::MissingTrailingNewline { option });
  };

  Ok(body.split('\n').map(str::to_string).collect())
}

fn non_empty(value: &Option<String>) -> Option<&str> {
  value.as_deref().filter(|v| !v.is_empty())
}
