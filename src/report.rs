//! # Report Module
//!
//! This module records the outcome of every checked file and can write the
//! collected results as a JSON report.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;

use crate::validator::Diagnostic;

/// Outcome of checking a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
  /// The header is present, or the file is excluded
  Ok,
  /// The header is missing or malformed
  Missing,
  /// The header was missing and has been prepended
  Fixed,
  /// The file could not be read or written
  Failed,
}

/// Information about a checked file for reporting
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
  /// Path to the file
  #[serde(serialize_with = "serialize_path")]
  pub path: PathBuf,
  pub status: FileStatus,
  /// The diagnostic produced for the file, if any
  #[serde(skip_serializing_if = "Option::is_none")]
  pub diagnostic: Option<Diagnostic>,
  /// I/O error message for failed files
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

impl FileReport {
  pub fn from_outcome(path: &Path, diagnostic: Option<Diagnostic>, fixed: bool) -> Self {
    let status = match (&diagnostic, fixed) {
      (None, _) => FileStatus::Ok,
      (Some(_), true) => FileStatus::Fixed,
      (Some(_), false) => FileStatus::Missing,
    };

    Self {
      path: path.to_path_buf(),
      status,
      diagnostic,
      error: None,
    }
  }

  pub fn failed(path: &Path, error: String) -> Self {
    Self {
      path: path.to_path_buf(),
      status: FileStatus::Failed,
      diagnostic: None,
      error: Some(error),
    }
  }
}

fn serialize_path<S>(path: &Path, serializer: S) -> Result<S::Ok, S::Error>
where
  S: serde::Serializer,
{
  serializer.serialize_str(&path.to_string_lossy())
}

/// Summary of a run, derived from the file reports
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProcessingSummary {
  pub total_files: usize,
  pub files_ok: usize,
  pub files_missing: usize,
  pub files_fixed: usize,
  pub files_failed: usize,
  /// Wall time spent checking files
  #[serde(serialize_with = "serialize_duration_secs", rename = "processing_time_secs")]
  pub processing_time: Duration,
}

impl ProcessingSummary {
  pub fn from_reports(reports: &[FileReport], processing_time: Duration) -> Self {
    let count = |status: FileStatus| reports.iter().filter(|r| r.status == status).count();

    Self {
      total_files: reports.len(),
      files_ok: count(FileStatus::Ok),
      files_missing: count(FileStatus::Missing),
      files_fixed: count(FileStatus::Fixed),
      files_failed: count(FileStatus::Failed),
      processing_time,
    }
  }

  /// Whether any file still lacks its header or could not be checked.
  pub const fn has_problems(&self) -> bool {
    self.files_missing > 0 || self.files_failed > 0
  }
}

fn serialize_duration_secs<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
  S: serde::Serializer,
{
  serializer.serialize_f64(duration.as_secs_f64())
}

#[derive(Serialize)]
struct JsonReport<'a> {
  generated_at: String,
  tool_version: &'static str,
  summary: &'a ProcessingSummary,
  files: &'a [FileReport],
}

/// Writes a JSON report of a run.
pub struct ReportGenerator<'a> {
  output_path: &'a Path,
}

impl<'a> ReportGenerator<'a> {
  pub const fn new(output_path: &'a Path) -> Self {
    Self { output_path }
  }

  /// Render the report without writing it.
  pub fn render(&self, files: &[FileReport], summary: &ProcessingSummary) -> Result<String> {
    let report = JsonReport {
      generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
      tool_version: env!("CARGO_PKG_VERSION"),
      summary,
      files,
    };

    serde_json::to_string_pretty(&report).context("Failed to serialize JSON report")
  }

  /// Render the report and write it to the output path.
  pub fn generate(&self, files: &[FileReport], summary: &ProcessingSummary) -> Result<()> {
    let content = self.render(files, summary)?;

    fs::write(self.output_path, content)
      .with_context(|| format!("Failed to write report to {}", self.output_path.display()))
  }
}
