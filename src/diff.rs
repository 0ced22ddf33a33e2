//! # Diff Module
//!
//! This module contains functionality for creating and rendering diffs between original and rewritten content.
//! It's used primarily for showing what would change in dry run mode before a header rewrite is applied.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use similar::{ChangeTag, TextDiff};

/// Manages diff creation and rendering for header rewrites.
///
/// This struct handles:
/// - Generating diffs between original and rewritten content
/// - Displaying diffs on stderr
/// - Appending diffs from multiple files into a single saved diff file
pub struct DiffManager {
  /// Whether to show diffs in dry run mode
  pub show_diff: bool,

  /// Path to save the diff to in dry run mode
  pub save_diff_path: Option<PathBuf>,
}

impl DiffManager {
  /// Creates a new DiffManager with the specified configuration.
  pub const fn new(show_diff: bool, save_diff_path: Option<PathBuf>) -> Self {
    Self {
      show_diff,
      save_diff_path,
    }
  }

  /// Whether any diff output was requested at all.
  pub const fn wants_diff(&self) -> bool {
    self.show_diff || self.save_diff_path.is_some()
  }

  /// Clears a stale saved diff file so this run's diffs start fresh.
  ///
  /// Diffs are appended per file during the run; without this, output from a
  /// previous run would accumulate.
  pub fn init(&self) -> Result<()> {
    if let Some(ref path) = self.save_diff_path
      && path.exists()
    {
      std::fs::remove_file(path).with_context(|| format!("Failed to clear diff file: {}", path.display()))?;
    }
    Ok(())
  }

  /// Renders a line diff between the original and new content.
  fn render_diff(path: &Path, original: &str, new: &str) -> String {
    let diff = TextDiff::from_lines(original, new);

    let mut rendered = format!("Diff for {}:\n", path.display());
    for change in diff.iter_all_changes() {
      let sign = match change.tag() {
        ChangeTag::Delete => "-",
        ChangeTag::Insert => "+",
        ChangeTag::Equal => " ",
      };
      rendered.push_str(sign);
      rendered.push_str(change.value());
    }
    rendered.push('\n');

    rendered
  }

  /// Displays and/or saves a diff between the original and new content.
  ///
  /// If show_diff is enabled, the diff is written to stderr. If
  /// save_diff_path is provided, the diff is appended to that file so a run
  /// over many files produces a single consolidated diff.
  pub fn display_diff(&self, path: &Path, original: &str, new: &str) -> Result<()> {
    let rendered = Self::render_diff(path, original, new);

    if self.show_diff {
      eprint!("{rendered}");
    }

    if let Some(ref diff_path) = self.save_diff_path {
      let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(diff_path)
        .with_context(|| format!("Failed to open diff file: {}", diff_path.display()))?;
      file
        .write_all(rendered.as_bytes())
        .with_context(|| format!("Failed to write diff file: {}", diff_path.display()))?;
    }

    Ok(())
  }
}
