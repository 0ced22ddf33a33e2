//! # Report Module
//!
//! This module captures the outcome of each processed file and the summary of
//! a whole run, and can persist both as a JSON report.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};

/// Outcome of one manifest entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
  /// Path to the file
  #[serde(with = "path_serialization")]
  pub path: PathBuf,
  /// What happened to the file
  pub action: FileAction,
  /// Why the file was skipped, if it was
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reason: Option<String>,
}

impl FileReport {
  /// Report an action with no skip reason.
  pub const fn new(path: PathBuf, action: FileAction) -> Self {
    Self {
      path,
      action,
      reason: None,
    }
  }

  /// Report a skipped file with the reason it was skipped.
  pub fn skipped(path: PathBuf, reason: impl Into<String>) -> Self {
    Self {
      path,
      action: FileAction::Skipped,
      reason: Some(reason.into()),
    }
  }
}

/// Possible outcomes for a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileAction {
  /// The header was rewritten in place
  Updated,
  /// Dry run: the file differs from its standardized form
  WouldUpdate,
  /// The file already carries the standardized header
  UpToDate,
  /// The file was skipped (missing, unreadable, ...)
  Skipped,
}

/// Helper module for serializing/deserializing PathBuf
mod path_serialization {
  use std::path::PathBuf;

  use serde::{Deserialize, Deserializer, Serializer};

  pub fn serialize<S>(path: &std::path::Path, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_str(&path.to_string_lossy())
  }

  pub fn deserialize<'de, D>(deserializer: D) -> Result<PathBuf, D::Error>
  where
    D: Deserializer<'de>,
  {
    let s = String::deserialize(deserializer)?;
    Ok(PathBuf::from(s))
  }
}

/// Summary of the results of one run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
  /// Total number of manifest entries processed
  pub total_files: usize,
  /// Number of files rewritten
  pub updated: usize,
  /// Number of files that would be rewritten (dry run)
  pub pending: usize,
  /// Number of files already up to date
  pub up_to_date: usize,
  /// Number of files skipped
  pub skipped: usize,
  /// Total processing time
  #[serde(skip_serializing)]
  pub processing_time: std::time::Duration,
  /// Processing time in seconds for serialization
  #[serde(rename = "processing_time_seconds")]
  pub processing_time_secs: f64,
  /// Timestamp when the report was generated
  #[serde(skip_serializing_if = "Option::is_none")]
  pub timestamp: Option<i64>,
}

impl RunSummary {
  /// Create a new RunSummary initialized to zero
  pub fn new(processing_time: std::time::Duration) -> Self {
    Self {
      total_files: 0,
      updated: 0,
      pending: 0,
      up_to_date: 0,
      skipped: 0,
      processing_time,
      processing_time_secs: processing_time.as_secs_f64(),
      timestamp: Some(Local::now().timestamp()),
    }
  }

  /// Create a RunSummary from a collection of FileReports
  pub fn from_reports(files: &[FileReport], processing_time: std::time::Duration) -> Self {
    let mut summary = Self::new(processing_time);

    summary.total_files = files.len();

    for file in files {
      match file.action {
        FileAction::Updated => summary.updated += 1,
        FileAction::WouldUpdate => summary.pending += 1,
        FileAction::UpToDate => summary.up_to_date += 1,
        FileAction::Skipped => summary.skipped += 1,
      }
    }

    summary
  }
}

/// Writes a JSON report of a run
pub struct ReportGenerator<'a> {
  /// Path where the report will be saved
  output_path: &'a std::path::Path,
}

impl<'a> ReportGenerator<'a> {
  /// Create a new report generator
  pub const fn new(output_path: &'a std::path::Path) -> Self {
    Self { output_path }
  }

  /// Generate a JSON report from a collection of file reports.
  ///
  /// # Errors
  ///
  /// Returns an error if serialization fails or the report file can't be
  /// written.
  pub fn generate(&self, files: &[FileReport], summary: &RunSummary) -> Result<()> {
    let report = serde_json::json!({
      "summary": summary,
      "files": files,
    });

    let content = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;

    fs::write(self.output_path, content)
      .with_context(|| format!("Failed to write report to {}", self.output_path.display()))
  }
}
