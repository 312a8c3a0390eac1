//! # Configuration Module
//!
//! This module provides the raw option surface of copyright-validator and
//! its configuration file support.
//!
//! Options can be specified in a `.copyright-validator.toml` file, found via
//! the `COPYRIGHT_VALIDATOR_CONFIG` environment variable, or passed on the
//! command line. Command-line values take precedence key by key.
//!
//! The values here are unprocessed: multi-line blobs still carry their
//! wrapping symbols. See [`crate::materialize`] for the normalized form.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::verbose_log;

/// The default config file name.
pub const DEFAULT_CONFIG_FILENAME: &str = ".copyright-validator.toml";

/// Environment variable for specifying config file path.
pub const CONFIG_ENV_VAR: &str = "COPYRIGHT_VALIDATOR_CONFIG";

/// Raw header options, as read from the config file or the command line.
///
/// Multi-line values (`copyright-text`, `copyright-regex`,
/// `lines-to-exclude`) are newline-terminated blobs, one header line per line.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct HeaderOptions {
  /// Literal header text to look for at the top of each file.
  pub copyright_text: Option<String>,

  /// Per-line patterns the leading lines must match.
  pub copyright_regex: Option<String>,

  /// Prepend the copyright text to failing files. Only settable from the
  /// command line.
  #[serde(skip)]
  pub update: bool,

  /// Embed a diff of the expected and actual header in diagnostics.
  pub detailed_output: Option<bool>,

  /// Number of bytes to read when not updating files.
  pub bytes_to_read: Option<usize>,

  /// Files whose first line starts with one of these lines are skipped.
  pub lines_to_exclude: Option<String>,

  /// Symbols wrapping the option text that are stripped before parsing.
  pub symbols_to_replace: Option<Vec<String>>,
}

impl HeaderOptions {
  /// Overlay `overrides` on top of these options.
  ///
  /// Every value set in `overrides` wins; unset values fall back to `self`.
  /// `update` is enabled if either side enables it.
  pub fn merge(self, overrides: HeaderOptions) -> Self {
    Self {
      copyright_text: overrides.copyright_text.or(self.copyright_text),
      copyright_regex: overrides.copyright_regex.or(self.copyright_regex),
      update: overrides.update || self.update,
      detailed_output: overrides.detailed_output.or(self.detailed_output),
      bytes_to_read: overrides.bytes_to_read.or(self.bytes_to_read),
      lines_to_exclude: overrides.lines_to_exclude.or(self.lines_to_exclude),
      symbols_to_replace: overrides.symbols_to_replace.or(self.symbols_to_replace),
    }
  }

  /// Load options from a TOML file.
  ///
  /// # Arguments
  ///
  /// * `path` - Path to the configuration file
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

/// Error type for configuration operations.
///
/// All of these abort the run before any file is inspected.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}': {source}")]
  ParseError { path: PathBuf, source: toml::de::Error },

  /// A multi-line option value is not newline-terminated.
  #[error("Option '{option}' must end with a newline")]
  MissingTrailingNewline { option: &'static str },

  /// A line of `copyright-regex` is not a valid regular expression.
  #[error("Invalid pattern on line {line} of 'copyright-regex': {source}")]
  InvalidRegex { line: usize, source: regex::Error },
}

/// Discover the configuration file path.
///
/// The configuration file is discovered in the following order:
/// 1. Path specified via `--config` flag (passed as `explicit_path`)
/// 2. Path specified via `COPYRIGHT_VALIDATOR_CONFIG` environment variable
/// 3. `.copyright-validator.toml` in `search_dir`
pub fn discover_config_path(explicit_path: Option<&Path>, search_dir: &Path) -> Option<PathBuf> {
  if let Some(path) = explicit_path {
    if path.exists() {
      verbose_log!("Using explicit config path: {}", path.display());
      return Some(path.to_path_buf());
    }
    verbose_log!("Explicit config path does not exist: {}", path.display());
    return None;
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

/// Load options from the discovered config file, if any.
///
/// # Arguments
///
/// * `explicit_path` - Optional explicit path from CLI flag
/// * `search_dir` - Directory searched for `.copyright-validator.toml`
/// * `no_config` - If true, skip config file discovery
pub fn load_config(explicit_path: Option<&Path>, search_dir: &Path, no_config: bool) -> Result<Option<HeaderOptions>> {
  if no_config {
    verbose_log!("Config file discovery disabled (--no-config)");
    return Ok(None);
  }

  match discover_config_path(explicit_path, search_dir) {
    Some(path) => {
      let options =
        HeaderOptions::load(&path).with_context(|| format!("Failed to load config from {}", path.display()))?;
      Ok(Some(options))
    }
    None => Ok(None),
  }
}

#[cfg(test)]
mod tests {
  use tempfile::TempDir;

  use super::*;

  #[test]
  fn test_parse_valid_config() {
    let config_content = concat!(
      "copyright-text = \"\"\"\n",
      "# Copyright 2024 Example Corp\n",
      "# All rights reserved.\n",
      "\"\"\"\n",
      "detailed-output = true\n",
      "bytes-to-read = 512\n",
      "symbols-to-replace = [\"'\", \"\\\"\"]\n",
    );

    let options: HeaderOptions = toml::from_str(config_content).expect("valid config should parse");

    assert_eq!(
      options.copyright_text.as_deref(),
      Some("# Copyright 2024 Example Corp\n# All rights reserved.\n")
    );
    assert_eq!(options.detailed_output, Some(true));
    assert_eq!(options.bytes_to_read, Some(512));
    assert_eq!(
      options.symbols_to_replace,
      Some(vec!["'".to_string(), "\"".to_string()])
    );
    assert!(options.copyright_regex.is_none());
    assert!(!options.update);
  }

  #[test]
  fn test_parse_empty_config() {
    let options: HeaderOptions = toml::from_str("").expect("empty config should parse");
    assert_eq!(options, HeaderOptions::default());
  }

  #[test]
  fn test_update_is_not_read_from_file() {
    let result: Result<HeaderOptions, _> = toml::from_str("update = true\n");
    assert!(result.is_err());
  }

  #[test]
  fn test_unknown_key_rejected() {
    let result: Result<HeaderOptions, _> = toml::from_str("copyright-txt = \"typo\\n\"\n");
    assert!(result.is_err());
  }

  #[test]
  fn test_merge_prefers_overrides() {
    let file_options = HeaderOptions {
      copyright_text: Some("# From file\n".to_string()),
      bytes_to_read: Some(100),
      detailed_output: Some(true),
      ..HeaderOptions::default()
    };
    let cli_options = HeaderOptions {
      copyright_text: Some("# From CLI\n".to_string()),
      update: true,
      ..HeaderOptions::default()
    };

    let merged = file_options.merge(cli_options);

    assert_eq!(merged.copyright_text.as_deref(), Some("# From CLI\n"));
    assert_eq!(merged.bytes_to_read, Some(100));
    assert_eq!(merged.detailed_output, Some(true));
    assert!(merged.update);
  }

  #[test]
  fn test_load_config_from_file() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let config_path = temp_dir.path().join(DEFAULT_CONFIG_FILENAME);

    std::fs::write(&config_path, "copyright-regex = \"^# Copyright \\\\d{4}\\n\"\n").expect("write config");

    let options = HeaderOptions::load(&config_path).expect("load should succeed");
    assert_eq!(options.copyright_regex.as_deref(), Some("^# Copyright \\d{4}\n"));
  }

  #[test]
  fn test_load_config_file_not_found() {
    let result = HeaderOptions::load(Path::new("/nonexistent/path/.copyright-validator.toml"));
    assert!(matches!(result, Err(ConfigError::ReadError { .. })));
  }

  #[test]
  fn test_load_config_invalid_toml() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let config_path = temp_dir.path().join(DEFAULT_CONFIG_FILENAME);
    std::fs::write(&config_path, "copyright-text = [unterminated").expect("write config");

    let result = HeaderOptions::load(&config_path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
  }

  #[test]
  fn test_discover_config_explicit_path() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let config_path = temp_dir.path().join("custom-config.toml");
    std::fs::write(&config_path, "").expect("write config");

    let result = discover_config_path(Some(&config_path), temp_dir.path());

    assert_eq!(result, Some(config_path));
  }

  #[test]
  fn test_discover_config_missing_explicit_path() {
    let temp_dir = TempDir::new().expect("create temp dir");
    std::fs::write(temp_dir.path().join(DEFAULT_CONFIG_FILENAME), "").expect("write config");

    let missing = temp_dir.path().join("missing.toml");
    let result = discover_config_path(Some(&missing), temp_dir.path());

    assert!(result.is_none());
  }

  #[test]
  fn test_discover_config_search_dir() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let config_path = temp_dir.path().join(DEFAULT_CONFIG_FILENAME);
    std::fs::write(&config_path, "").expect("write config");

    let result = discover_config_path(None, temp_dir.path());

    assert_eq!(result, Some(config_path));
  }

  #[test]
  fn test_load_config_disabled() {
    let temp_dir = TempDir::new().expect("create temp dir");
    std::fs::write(
      temp_dir.path().join(DEFAULT_CONFIG_FILENAME),
      "copyright-text = \"# x\\n\"\n",
    )
    .expect("write config");

    let result = load_config(None, temp_dir.path(), true).expect("load should succeed");
    assert!(result.is_none());
  }
}
