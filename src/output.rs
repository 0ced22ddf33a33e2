//! # Output Module
//!
//! This module centralizes all user-facing output for the headstamp tool.
//! It provides consistent formatting, colors, and symbols for terminal output.
//!
//! ## Design Goals
//!
//! - **Informative**: Show actionable information without requiring flags
//! - **Scannable**: Use formatting to make output easy to parse visually
//! - **Progressive**: More detail with `-v`, silence with `-q`
//! - **Scriptable**: Keep stdout predictable for piping/automation

use std::path::Path;

use owo_colors::{OwoColorize, Stream};

use crate::logging::{is_quiet, is_verbose};
use crate::report::{FileAction, FileReport, RunSummary};

/// Symbols used in output
pub mod symbols {
  /// Success/rewritten
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Pending change
  pub const PENDING: &str = "\u{21bb}"; // ↻
  /// Skipped
  pub const SKIPPED: &str = "-";
}

/// Maximum number of files to show in the default output before truncating
const DEFAULT_FILE_LIST_LIMIT: usize = 20;

/// Print the initial "Checking N files..." or "Rewriting N files..." message.
pub fn print_start_message(file_count: usize, modify_mode: bool) {
  if is_quiet() {
    return;
  }

  let verb = if modify_mode { "Rewriting headers in" } else { "Checking" };
  let files_word = if file_count == 1 { "file" } else { "files" };

  println!("{} {} {}...", verb, file_count, files_word);
}

/// Print a blank line for visual separation (respects quiet mode).
pub fn print_blank_line() {
  if !is_quiet() {
    println!();
  }
}

/// Print one categorized file list with a colored header line.
///
/// Shows up to `DEFAULT_FILE_LIST_LIMIT` entries unless verbose mode is on.
/// In quiet mode only the bare paths are printed, for scripting.
fn print_file_list(header: String, files: &[&FileReport], workspace_root: Option<&Path>) {
  if files.is_empty() {
    return;
  }

  if is_quiet() {
    for file in files {
      println!("{}", make_relative_path(&file.path, workspace_root));
    }
    return;
  }

  println!("{}", header);

  let count = files.len();
  let show_all = is_verbose();
  let limit = if show_all { count } else { DEFAULT_FILE_LIST_LIMIT };

  for file in files.iter().take(limit) {
    let display_path = make_relative_path(&file.path, workspace_root);
    match &file.reason {
      Some(reason) => println!("  {} ({})", display_path, reason),
      None => println!("  {}", display_path),
    }
  }

  if !show_all && count > limit {
    println!("  ... and {} more (use -v to see all)", count - limit);
  }
}

/// Print the list of files whose headers were rewritten.
pub fn print_updated_files(files: &[&FileReport], workspace_root: Option<&Path>) {
  if is_quiet() {
    return;
  }

  let count = files.len();
  let header = format!(
    "{} Rewrote header in {} {}:",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    count,
    if count == 1 { "file" } else { "files" }
  );
  print_file_list(header, files, workspace_root);
}

/// Print the list of files whose headers are pending a rewrite (dry run).
pub fn print_pending_files(files: &[&FileReport], workspace_root: Option<&Path>) {
  let count = files.len();
  let header = format!(
    "{} {} {} with a nonstandard header:",
    symbols::PENDING.if_supports_color(Stream::Stdout, |s| s.yellow()),
    count,
    if count == 1 { "file" } else { "files" }
  );
  print_file_list(header, files, workspace_root);
}

/// Print the list of files that were skipped, with reasons.
pub fn print_skipped_files(files: &[&FileReport], workspace_root: Option<&Path>) {
  if is_quiet() {
    return;
  }

  let count = files.len();
  let header = format!(
    "{} Skipped {} {}:",
    symbols::SKIPPED.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    count,
    if count == 1 { "file" } else { "files" }
  );
  print_file_list(header, files, workspace_root);
}

/// Print the success message when every header is already standardized.
pub fn print_all_files_ok() {
  if is_quiet() {
    return;
  }

  println!(
    "{} All headers are up to date.",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green())
  );
}

/// Print the processing summary.
///
/// Format: "Summary: X updated, Y up-to-date, Z skipped"
/// (with "pending" instead of "updated" in dry run mode).
/// In verbose mode, also shows timing.
pub fn print_summary(summary: &RunSummary, check_only: bool) {
  if is_quiet() {
    return;
  }

  let changed_count = if check_only { summary.pending } else { summary.updated };
  let changed_word = if check_only { "pending" } else { "updated" };

  let changed_str = if changed_count > 0 {
    changed_count
      .if_supports_color(Stream::Stdout, |s| s.yellow())
      .to_string()
  } else {
    changed_count.if_supports_color(Stream::Stdout, |s| s.cyan()).to_string()
  };
  let ok_str = summary.up_to_date.if_supports_color(Stream::Stdout, |s| s.cyan());
  let skipped_str = summary.skipped.if_supports_color(Stream::Stdout, |s| s.dimmed());

  let mut summary_line = format!(
    "Summary: {} {}, {} up-to-date, {} skipped",
    changed_str, changed_word, ok_str, skipped_str
  );

  // Show timing in verbose mode
  if is_verbose() {
    summary_line.push_str(&format!(" ({:.2}s)", summary.processing_time.as_secs_f64()));
  }

  println!("{}", summary_line);
}

/// Print a hint for the user about what to do next.
pub fn print_hint(message: &str) {
  if is_quiet() {
    return;
  }

  println!("{}", message.if_supports_color(Stream::Stdout, |s| s.yellow()));
}

/// Categorize file reports into different groups for output.
pub struct CategorizedReports<'a> {
  /// Files whose headers were rewritten
  pub updated: Vec<&'a FileReport>,
  /// Files whose headers differ from the standard form (dry run)
  pub pending: Vec<&'a FileReport>,
  /// Files already carrying the standard header
  pub up_to_date: Vec<&'a FileReport>,
  /// Files that were skipped
  pub skipped: Vec<&'a FileReport>,
}

impl<'a> CategorizedReports<'a> {
  /// Categorize a slice of file reports.
  pub fn from_reports(reports: &'a [FileReport]) -> Self {
    let mut updated = Vec::new();
    let mut pending = Vec::new();
    let mut up_to_date = Vec::new();
    let mut skipped = Vec::new();

    for report in reports {
      match report.action {
        FileAction::Updated => updated.push(report),
        FileAction::WouldUpdate => pending.push(report),
        FileAction::UpToDate => up_to_date.push(report),
        FileAction::Skipped => skipped.push(report),
      }
    }

    Self {
      updated,
      pending,
      up_to_date,
      skipped,
    }
  }
}

/// Make a path relative to the workspace root for display.
fn make_relative_path(path: &Path, workspace_root: Option<&Path>) -> String {
  if let Some(root) = workspace_root {
    path
      .strip_prefix(root)
      .map(|p| p.to_string_lossy().to_string())
      .unwrap_or_else(|_| path.to_string_lossy().to_string())
  } else {
    path.to_string_lossy().to_string()
  }
}
