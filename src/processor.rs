//! # Processor Module
//!
//! This module runs the rewriter over a manifest of files. Entries are
//! processed strictly in manifest order, one at a time; the unit of failure is
//! always a single file, so a missing or unreadable entry is reported and the
//! batch keeps going.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use tracing::debug;

use crate::boundary::{BoundaryDetector, DEFAULT_MARKER};
use crate::diff::DiffManager;
use crate::report::{FileAction, FileReport};
use crate::rewriter::{RewriteOutcome, Rewriter};
use crate::templates::{CommentStyleResolver, HeaderData, HeaderTemplate};
use crate::{info_log, verbose_log};

/// Configuration for creating a Processor instance.
pub struct ProcessorConfig {
  /// Header field values shared across the run
  pub header: HeaderData,

  /// Root directory manifest paths are resolved against
  pub root: PathBuf,

  /// Module-inclusion marker token
  pub marker: String,

  /// Treat a first-line inclusion match the same as no match at all
  pub first_line_fallback: bool,

  /// Whether to only report changes without modifying files
  pub check_only: bool,

  /// Optional diff manager; a silent one is used when absent
  pub diff_manager: Option<DiffManager>,

  /// Optional comment style resolver; builtin mappings are used when absent
  pub resolver: Option<Box<dyn CommentStyleResolver>>,
}

impl ProcessorConfig {
  /// Creates a new ProcessorConfig with required fields and sensible defaults.
  ///
  /// Use struct update syntax to override specific fields:
  /// ```ignore
  /// ProcessorConfig {
  ///     check_only: true,
  ///     ..ProcessorConfig::new(header, root)
  /// }
  /// ```
  pub fn new(header: HeaderData, root: PathBuf) -> Self {
    Self {
      header,
      root,
      marker: DEFAULT_MARKER.to_string(),
      first_line_fallback: false,
      check_only: false,
      diff_manager: None,
      resolver: None,
    }
  }
}

/// Processor for rewriting headers across a manifest of files.
///
/// The `Processor` is responsible for:
/// - Resolving manifest entries against the root directory
/// - Invoking the rewriter on each entry in order
/// - Reporting per-file outcomes on the console
/// - Collecting report data about processed files
pub struct Processor {
  /// Single-file rewriter
  rewriter: Rewriter,

  /// Root of the manifest
  root: PathBuf,

  /// Collection of file reports for this run
  file_reports: Vec<FileReport>,
}

impl Processor {
  /// Creates a new processor with the specified configuration.
  ///
  /// # Errors
  ///
  /// Returns an error if the inclusion marker is invalid.
  pub fn new(config: ProcessorConfig) -> Result<Self> {
    let detector = BoundaryDetector::new(&config.marker)?.with_first_line_fallback(config.first_line_fallback);

    let template = match config.resolver {
      Some(resolver) => HeaderTemplate::with_resolver(config.header, resolver),
      None => HeaderTemplate::new(config.header),
    };

    let diff_manager = config.diff_manager.unwrap_or_else(|| DiffManager::new(false, None));

    let rewriter = Rewriter::new(template, detector, config.check_only, diff_manager);

    Ok(Self {
      rewriter,
      root: config.root,
      file_reports: Vec::new(),
    })
  }

  /// Processes the manifest entries in order.
  ///
  /// Each entry is resolved against the root directory and handed to the
  /// rewriter. Missing files are skipped with a report; read or write
  /// failures on one file are reported and never abort the rest of the batch.
  ///
  /// # Returns
  ///
  /// `true` if any file was rewritten (or, in dry run mode, would be).
  pub fn process(&mut self, files: &[String]) -> Result<bool> {
    let start = Instant::now();
    let mut has_changes = false;

    for entry in files {
      let path = self.root.join(entry);

      match self.rewriter.rewrite_file(&path) {
        Ok(RewriteOutcome::Updated) => {
          info_log!("updated: {}", path.display());
          has_changes = true;
          self.file_reports.push(FileReport::new(path, FileAction::Updated));
        }
        Ok(RewriteOutcome::WouldUpdate) => {
          info_log!("would update: {}", path.display());
          has_changes = true;
          self.file_reports.push(FileReport::new(path, FileAction::WouldUpdate));
        }
        Ok(RewriteOutcome::UpToDate) => {
          verbose_log!("up-to-date: {}", path.display());
          self.file_reports.push(FileReport::new(path, FileAction::UpToDate));
        }
        Ok(RewriteOutcome::Missing) => {
          info_log!("skipped: {}, not found", path.display());
          self.file_reports.push(FileReport::skipped(path, "not found"));
        }
        Err(e) => {
          eprintln!("skipped: {}, {:#}", path.display(), e);
          self.file_reports.push(FileReport::skipped(path, format!("{e:#}")));
        }
      }
    }

    debug!(
      "Processed {} manifest entries in {}ms",
      files.len(),
      start.elapsed().as_millis()
    );

    Ok(has_changes)
  }

  /// File reports collected so far.
  #[allow(dead_code)] // Used by library consumers and tests, not in the CLI binary
  pub fn reports(&self) -> &[FileReport] {
    &self.file_reports
  }

  /// Takes ownership of the collected file reports.
  pub fn take_reports(&mut self) -> Vec<FileReport> {
    std::mem::take(&mut self.file_reports)
  }
}
