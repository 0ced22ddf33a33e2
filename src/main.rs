//! # headstamp
//!
//! A tool that standardizes the leading header comment block of source files.

mod boundary;
mod cli;
mod config;
mod diff;
mod file_io;
mod logging;
mod output;
mod processor;
mod report;
mod rewriter;
mod templates;

use anyhow::Result;

use crate::cli::{Cli, run_apply};

fn main() -> Result<()> {
  let cli = Cli::parse_args();

  run_apply(cli.apply_args)
}
