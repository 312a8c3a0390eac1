//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing and supports subcommands for
//! extensibility.

mod check;

pub use check::{CheckArgs, run_check};
use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::{Parser, Subcommand};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about,
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Check that files start with a literal header
  copyright-validator --copyright-text $'# Copyright 2024 Example Corp\\n' src/main.py

  # Match the header line by line with regular expressions
  copyright-validator --copyright-regex $'^# Copyright \\\\d{4}\\n^# Example Corp\\n' src/*.py

  # Show a diff of the expected and actual header
  copyright-validator --detailed-output --copyright-text $'# Copyright 2024\\n' app.py

  # Prepend the header to files that lack it
  copyright-validator --update --copyright-text $'# Copyright 2024\\n' app.py

  # Skip scripts and generated files
  copyright-validator --lines-to-exclude $'#!\\n# Generated\\n' --copyright-text $'# Copyright 2024\\n' *.py

Multi-line options must end with a newline. Options can also be set in a
.copyright-validator.toml file using the same names.
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Option<Command>,

  #[command(flatten)]
  pub check_args: CheckArgs,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
  /// Check and optionally update copyright headers (default)
  Check(CheckArgs),
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }

  /// Get the effective check arguments, whether from a subcommand or top-level
  pub fn get_check_args(self) -> CheckArgs {
    match self.command {
      Some(Command::Check(args)) => args,
      None => self.check_args,
    }
  }
}
