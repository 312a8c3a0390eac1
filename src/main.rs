//! # copyright-validator
//!
//! A tool that checks source files for an expected copyright header.

use anyhow::Result;
use copyright_validator::cli::{Cli, run_check};

fn main() -> Result<()> {
  let cli = Cli::parse_args();
  run_check(cli.get_check_args())
}
