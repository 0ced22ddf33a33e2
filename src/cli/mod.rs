//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing.

mod apply;

pub use apply::{ApplyArgs, run_apply};
use clap::Parser;
use clap::builder::styling::{AnsiColor, Color, Style, Styles};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Version string including the git commit when available.
fn long_version() -> &'static str {
  static VERSION: std::sync::OnceLock<String> = std::sync::OnceLock::new();
  VERSION.get_or_init(|| match option_env!("GIT_HASH") {
    Some(hash) if !hash.is_empty() => format!("{} ({})", env!("CARGO_PKG_VERSION"), hash),
    _ => env!("CARGO_PKG_VERSION").to_string(),
  })
}

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  version,
  long_version = long_version(),
  about,
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Check which headers differ from the standard form (dry run, default)
  headstamp --project PolySaver --author Kimi Sources/Models/Models.swift

  # Rewrite the headers listed in .headstamp.toml
  headstamp --modify

  # Show a diff of pending changes without modifying files
  headstamp --show-diff --project PolySaver --author Kimi Sources/**.swift

  # Save pending changes to a consolidated diff file
  headstamp --save-diff changes.diff --modify

  # Use a different inclusion marker for C-family sources
  headstamp --marker '#include' --project demo --author dev main.c util.c

  # Generate a JSON report of the run
  headstamp --report-json report.json --modify
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(flatten)]
  pub apply_args: ApplyArgs,
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
