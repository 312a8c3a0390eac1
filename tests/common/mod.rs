#![allow(dead_code)]

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use copyright_validator::config::HeaderOptions;
use copyright_validator::materialize::ValidationConfig;
use copyright_validator::validator::{Diagnostic, HeaderValidator};

/// Builds a validator from raw options, failing the test on bad options.
pub fn validator(options: &HeaderOptions) -> Result<HeaderValidator> {
  let config = ValidationConfig::materialize(options).context("options should materialize")?;
  Ok(HeaderValidator::new(config))
}

/// Options with only `copyright-text` set.
pub fn text_options(text: &str) -> HeaderOptions {
  HeaderOptions {
    copyright_text: Some(text.to_string()),
    ..HeaderOptions::default()
  }
}

/// Options with only `copyright-regex` set.
pub fn regex_options(patterns: &str) -> HeaderOptions {
  HeaderOptions {
    copyright_regex: Some(patterns.to_string()),
    ..HeaderOptions::default()
  }
}

/// Writes `content` to `name` inside `dir` and returns the full path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
  let path = dir.join(name);
  std::fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
  Ok(path)
}

/// Opens `path` the way the CLI does and runs the validator on it.
pub fn run_on_path(validator: &HeaderValidator, path: &Path) -> Result<Option<Diagnostic>> {
  let mut file = OpenOptions::new()
    .read(true)
    .write(validator.config().auto_fix)
    .open(path)
    .with_context(|| format!("Failed to open {}", path.display()))?;

  Ok(validator.run(&mut file, path)?)
}
