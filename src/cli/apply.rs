//! # Apply Command
//!
//! This module implements the check/rewrite command for standardized headers.
//! Dry run is the default; `--modify` rewrites files in place.

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Args;
use tracing::debug;

use crate::boundary::DEFAULT_MARKER;
use crate::config::{Config, DEFAULT_CONFIG_FILENAME, HeaderFieldsConfig, load_config};
use crate::diff::DiffManager;
use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::output::{
  CategorizedReports, print_all_files_ok, print_blank_line, print_hint, print_pending_files, print_skipped_files,
  print_start_message, print_summary, print_updated_files,
};
use crate::processor::{Processor, ProcessorConfig};
use crate::report::{ReportGenerator, RunSummary};
use crate::templates::{HeaderData, create_resolver};

/// Arguments for the apply command
#[derive(Args, Debug, Default)]
pub struct ApplyArgs {
  /// Files to process, relative to the root directory. Overrides the
  /// manifest from the config file.
  #[arg(required = false)]
  pub files: Vec<String>,

  /// Path to config file (default: .headstamp.toml in the current directory)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long)]
  pub no_config: bool,

  /// Root directory the file paths are resolved against
  #[arg(long, value_name = "DIR")]
  pub root: Option<PathBuf>,

  /// Dry run mode: only report headers that differ without modifying files
  /// (default)
  #[arg(long, group = "mode", hide = true)]
  pub dry_run: bool,

  /// Modify mode: rewrite headers in place
  #[arg(
    long,
    group = "mode",
    help = "Modify mode: rewrite headers in place

[default: --dry-run]"
  )]
  pub modify: bool,

  /// Show diff of changes in dry run mode
  #[arg(long)]
  pub show_diff: bool,

  /// Save diff of changes to a file
  #[arg(long, short = 'o', value_name = "FILE")]
  pub save_diff: Option<PathBuf>,

  /// Module-inclusion marker token used to locate the content boundary
  #[arg(long, value_name = "TOKEN")]
  pub marker: Option<String>,

  /// Treat an inclusion statement on the very first line the same as no
  /// inclusion statement at all, letting the comment heuristic decide
  #[arg(long)]
  pub first_line_fallback: bool,

  /// Project name shown in the header
  #[arg(long, value_name = "NAME")]
  pub project: Option<String>,

  /// Author named in the attribution line
  #[arg(long, value_name = "NAME")]
  pub author: Option<String>,

  /// Attribution date (default: today)
  #[arg(long, value_name = "DATE")]
  pub date: Option<String>,

  /// Copyright year (default: current year)
  #[arg(long, value_name = "YEAR")]
  pub year: Option<String>,

  /// Copyright holder (default: the author)
  #[arg(long, value_name = "NAME")]
  pub copyright_holder: Option<String>,

  /// Contact address shown next to the copyright holder
  #[arg(long, value_name = "EMAIL")]
  pub contact: Option<String>,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
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

  /// Generate a JSON report of the run and save to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_json: Option<PathBuf>,
}

/// Resolve the header field values from CLI flags and the config file.
///
/// CLI flags take precedence. Project and author are required; the date and
/// year default to today, and the copyright holder defaults to the author.
fn resolve_header(args: &ApplyArgs, config: HeaderFieldsConfig) -> Result<HeaderData, String> {
  let project_name = args
    .project
    .clone()
    .or(config.project)
    .ok_or_else(|| "Missing required value: --project (or `project` in the [header] config section)".to_string())?;

  let author = args
    .author
    .clone()
    .or(config.author)
    .ok_or_else(|| "Missing required value: --author (or `author` in the [header] config section)".to_string())?;

  let now = chrono::Local::now();
  let date = args
    .date
    .clone()
    .or(config.date)
    .unwrap_or_else(|| format!("{}/{}/{}", now.month(), now.day(), now.year() % 100));
  let year = args.year.clone().or(config.year).unwrap_or_else(|| now.year().to_string());

  let copyright_holder = args
    .copyright_holder
    .clone()
    .or(config.copyright_holder)
    .unwrap_or_else(|| author.clone());
  let contact = args.contact.clone().or(config.contact).unwrap_or_default();

  Ok(HeaderData {
    project_name,
    author,
    date,
    year,
    copyright_holder,
    contact,
  })
}

/// Run the apply command with the given arguments
pub fn run_apply(args: ApplyArgs) -> Result<()> {
  // Initialize tracing subscriber for structured logging
  init_tracing(args.quiet, args.verbose);

  // Set verbose mode for output formatting and the info_log! macro
  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  let current_dir = std::env::current_dir().with_context(|| "Failed to get current directory")?;

  // Load configuration file if present
  let config = load_config(args.config.as_deref(), &current_dir, args.no_config)?;

  let Config {
    root: config_root,
    files: config_files,
    header: config_header,
    boundary: config_boundary,
    comment_styles,
    filenames,
  } = config.unwrap_or_default();

  // Determine the manifest: CLI positionals override the config file list
  let files = if args.files.is_empty() {
    config_files
  } else {
    args.files.clone()
  };

  if files.is_empty() {
    eprintln!("ERROR: No files to process");
    eprintln!("Pass file paths on the command line or list them under `files` in {DEFAULT_CONFIG_FILENAME}");
    process::exit(1);
  }

  // Resolve the root directory; relative roots are anchored at the current
  // directory
  let root = match args.root.clone().or(config_root) {
    Some(dir) if dir.is_absolute() => dir,
    Some(dir) => current_dir.join(dir),
    None => current_dir,
  };
  debug!("Using root directory: {}", root.display());

  let header = match resolve_header(&args, config_header) {
    Ok(header) => header,
    Err(message) => {
      eprintln!("ERROR: {message}");
      process::exit(1);
    }
  };

  let marker = args
    .marker
    .clone()
    .or(config_boundary.marker)
    .unwrap_or_else(|| DEFAULT_MARKER.to_string());
  let first_line_fallback = args.first_line_fallback || config_boundary.first_line_fallback;

  // Determine mode (dry run is the default unless --modify is given)
  let check_only = args.dry_run || !args.modify;

  let diff_manager = DiffManager::new(args.show_diff, args.save_diff.clone());
  diff_manager.init()?;

  // Build the comment style resolver from config overrides, if any
  let style_config = Config {
    comment_styles,
    filenames,
    ..Config::default()
  };
  let resolver = if style_config.has_style_overrides() {
    debug!("Using configuration file for comment style overrides");
    create_resolver(Some(style_config))
  } else {
    create_resolver(None)
  };

  let mut processor = Processor::new(ProcessorConfig {
    header,
    root: root.clone(),
    marker,
    first_line_fallback,
    check_only,
    diff_manager: Some(diff_manager),
    resolver: Some(resolver),
  })?;

  // Print start message with file count
  print_start_message(files.len(), !check_only);

  // Start timing
  let start_time = Instant::now();

  let has_changes = processor.process(&files)?;

  let elapsed = start_time.elapsed();

  // Take ownership of the reports to avoid a clone
  let file_reports = processor.take_reports();

  let summary = RunSummary::from_reports(&file_reports, elapsed);
  let categorized = CategorizedReports::from_reports(&file_reports);

  print_blank_line();

  if check_only {
    if categorized.pending.is_empty() && categorized.skipped.is_empty() {
      print_all_files_ok();
    } else {
      print_pending_files(&categorized.pending, Some(&root));
      if !categorized.skipped.is_empty() {
        if !categorized.pending.is_empty() {
          print_blank_line();
        }
        print_skipped_files(&categorized.skipped, Some(&root));
      }
    }
  } else {
    if !categorized.updated.is_empty() {
      print_updated_files(&categorized.updated, Some(&root));
    }
    if !categorized.skipped.is_empty() {
      if !categorized.updated.is_empty() {
        print_blank_line();
      }
      print_skipped_files(&categorized.skipped, Some(&root));
    }
    if categorized.updated.is_empty() && categorized.skipped.is_empty() {
      print_all_files_ok();
    }
  }

  // Print summary
  print_blank_line();
  print_summary(&summary, check_only);

  // Print hint if there are pending changes in dry run mode
  if check_only && has_changes {
    print_blank_line();
    print_hint("Run with --modify to rewrite the nonstandard headers.");
  }

  // Generate JSON report if requested
  if let Some(ref output_path) = args.report_json {
    let report_generator = ReportGenerator::new(output_path);
    if let Err(e) = report_generator.generate(&file_reports, &summary) {
      eprintln!("Error generating JSON report: {}", e);
    } else {
      debug!("Generated JSON report at {}", output_path.display());
    }
  }

  // Exit with non-zero code if in dry run mode and headers need rewriting
  if check_only && has_changes {
    process::exit(1);
  }

  Ok(())
}
