//! # Check Command
//!
//! This module implements the check/update command for copyright headers.
//! This is the default command when no subcommand is specified.
//!
//! It is the host around the validator: it resolves options, opens each
//! file it is given, and reports the results. Directories are not walked.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use crate::config::{HeaderOptions, load_config};
use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::materialize::ValidationConfig;
use crate::output::{
  print_all_files_ok, print_blank_line, print_diagnostic, print_fixed_file, print_hint, print_missing_count,
  print_start_message, print_summary,
};
use crate::report::{FileReport, FileStatus, ProcessingSummary, ReportGenerator};
use crate::validator::HeaderValidator;
use crate::{info_log, verbose_log, warn_log};

/// Arguments for the check command
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
  /// Files to check. Directories are skipped.
  #[arg(required = false, value_name = "FILES")]
  pub files: Vec<PathBuf>,

  /// Header text each file must start with, one line per line, ending with a
  /// newline
  #[arg(long, value_name = "TEXT", allow_hyphen_values = true)]
  pub copyright_text: Option<String>,

  /// Patterns the leading lines must match, one per line, ending with a
  /// newline. Takes precedence over --copyright-text for checking
  #[arg(long, value_name = "PATTERNS", allow_hyphen_values = true)]
  pub copyright_regex: Option<String>,

  /// Prepend the copyright text to files that lack the header
  #[arg(long)]
  pub update: bool,

  /// Include a diff of the expected and actual header in diagnostics
  #[arg(long)]
  pub detailed_output: bool,

  /// Number of bytes to read from each file when not updating [default: 2048]
  #[arg(long, value_name = "BYTES")]
  pub bytes_to_read: Option<usize>,

  /// Skip files whose first line starts with one of these lines
  #[arg(long, value_name = "LINES", allow_hyphen_values = true)]
  pub lines_to_exclude: Option<String>,

  /// Comma-separated symbols stripped from the option text [default: ']
  #[arg(long, value_name = "SYMBOLS", value_delimiter = ',')]
  pub symbols_to_replace: Vec<String>,

  /// Path to config file (default: .copyright-validator.toml in the current
  /// directory)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long)]
  pub no_config: bool,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except diagnostics and errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,

  /// Write a JSON report of the results to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_json: Option<PathBuf>,
}

impl CheckArgs {
  /// Validate the arguments and return an error if invalid
  fn validate(&self) -> Result<(), String> {
    if self.files.is_empty() {
      return Err("Missing required argument: <FILES>...".to_string());
    }
    Ok(())
  }

  /// The header options given on the command line.
  ///
  /// Flags that were not passed stay unset so that config file values show
  /// through when merged.
  pub fn header_options(&self) -> HeaderOptions {
    HeaderOptions {
      copyright_text: self.copyright_text.clone(),
      copyright_regex: self.copyright_regex.clone(),
      update: self.update,
      detailed_output: self.detailed_output.then_some(true),
      bytes_to_read: self.bytes_to_read,
      lines_to_exclude: self.lines_to_exclude.clone(),
      symbols_to_replace: (!self.symbols_to_replace.is_empty()).then(|| self.symbols_to_replace.clone()),
    }
  }
}

/// Run the check command with the given arguments
pub fn run_check(args: CheckArgs) -> Result<()> {
  if let Err(e) = args.validate() {
    eprintln!("ERROR: {e}");
    process::exit(1);
  }

  init_tracing(args.quiet, args.verbose);

  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  let current_dir = std::env::current_dir().context("Failed to get current directory")?;

  let file_options = load_config(args.config.as_deref(), &current_dir, args.no_config)?;
  if file_options.is_some() {
    debug!("Merging command-line options over config file");
  }
  let options = file_options.unwrap_or_default().merge(args.header_options());

  // Everything below assumes a valid config; bad options stop here before any
  // file is opened
  let config = ValidationConfig::materialize(&options).context("Invalid copyright header options")?;
  if config.expected_text_lines.is_empty() && !config.uses_regex() {
    warn_log!("Neither --copyright-text nor --copyright-regex is set; every file will be reported");
  }

  let validator = HeaderValidator::new(config);
  let update = validator.config().auto_fix;

  let files = collect_files(&args.files);

  print_start_message(files.len(), update);

  if files.is_empty() {
    print_blank_line();
    print_all_files_ok();
    return Ok(());
  }

  let start_time = Instant::now();
  let mut file_reports = Vec::with_capacity(files.len());

  for path in &files {
    let report = check_file(&validator, path)?;

    if let Some(ref diagnostic) = report.diagnostic {
      print_diagnostic(path, diagnostic, Some(current_dir.as_path()));
    }
    if report.status == FileStatus::Fixed {
      print_fixed_file(path, Some(current_dir.as_path()));
    }

    file_reports.push(report);
  }

  let summary = ProcessingSummary::from_reports(&file_reports, start_time.elapsed());

  print_blank_line();
  if summary.has_problems() || summary.files_fixed > 0 {
    print_missing_count(summary.files_missing);
  } else {
    print_all_files_ok();
  }

  print_blank_line();
  print_summary(&summary);

  if summary.files_missing > 0 && validator.config().copyright_text.is_some() {
    print_blank_line();
    print_hint("Run with --update to prepend the copyright text to these files.");
  }

  if let Some(ref output_path) = args.report_json {
    let report_generator = ReportGenerator::new(output_path);
    if let Err(e) = report_generator.generate(&file_reports, &summary) {
      eprintln!("Error generating JSON report: {}", e);
    } else {
      info_log!("Generated JSON report at {}", output_path.display());
    }
  }

  if summary.has_problems() {
    process::exit(1);
  }

  Ok(())
}

/// Keep the paths that can be checked, warning about directories.
fn collect_files(paths: &[PathBuf]) -> Vec<PathBuf> {
  paths
    .iter()
    .filter(|path| {
      if path.is_dir() {
        warn_log!("Skipping directory {} (only files are checked)", path.display());
        false
      } else {
        true
      }
    })
    .cloned()
    .collect()
}

/// Open and validate one file.
///
/// Per-file I/O problems are recorded in the report; only errors that
/// invalidate the whole run are returned.
fn check_file(validator: &HeaderValidator, path: &Path) -> Result<FileReport> {
  verbose_log!("Checking file: {}", path.display());

  let update = validator.config().auto_fix;
  let mut file = match OpenOptions::new().read(true).write(update).open(path) {
    Ok(file) => file,
    Err(e) => {
      warn_log!("Failed to open {}: {}", path.display(), e);
      return Ok(FileReport::failed(path, e.to_string()));
    }
  };

  match validator.run(&mut file, path) {
    Ok(diagnostic) => Ok(FileReport::from_outcome(path, diagnostic, update)),
    Err(e) if e.is_fatal() => Err(e.into()),
    Err(e) => {
      warn_log!("{}", e);
      Ok(FileReport::failed(path, e.to_string()))
    }
  }
}
