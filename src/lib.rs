//! # copyright-validator
//!
//! A tool that checks that source files begin with an expected copyright header.
//!
//! The expected header is given either as literal text, compared line by line against the start of each file, or as a
//! list of regular expressions where the N-th pattern must match somewhere in the N-th line. Files that fail the check
//! produce a single [`Diagnostic`](validator::Diagnostic), and in update mode the expected text is prepended to them.
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::fs::OpenOptions;
//! use std::path::Path;
//!
//! use copyright_validator::config::HeaderOptions;
//! use copyright_validator::materialize::ValidationConfig;
//! use copyright_validator::validator::HeaderValidator;
//!
//! fn main() -> anyhow::Result<()> {
//!     let options = HeaderOptions {
//!         copyright_text: Some("# Copyright 2024 Example Corp\n".to_string()),
//!         ..HeaderOptions::default()
//!     };
//!
//!     // Materialize once, then share the validator across files
//!     let validator = HeaderValidator::new(ValidationConfig::materialize(&options)?);
//!
//!     let path = Path::new("script.py");
//!     let mut file = OpenOptions::new().read(true).write(true).open(path)?;
//!     if let Some(diagnostic) = validator.run(&mut file, path)? {
//!         println!("{}:{}:{}: {}", path.display(), diagnostic.line, diagnostic.column, diagnostic.message);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`materialize`] - Turns raw option strings into a [`ValidationConfig`](materialize::ValidationConfig)
//! * [`validator`] - Header validation strategies and the auto-fix rewrite
//! * [`config`] - Option surface and `.copyright-validator.toml` discovery
//! * [`logging`] - Logging utilities for verbose output
//!
//! [`materialize`]: crate::materialize
//! [`validator`]: crate::validator
//! [`config`]: crate::config
//! [`logging`]: crate::logging

pub mod cli;
pub mod config;
pub mod diff;
pub mod logging;
pub mod materialize;
pub mod messages;
pub mod output;
pub mod report;
pub mod validator;
