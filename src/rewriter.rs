//! # Rewriter Module
//!
//! This module applies the standardized header to a single file: it locates
//! the content boundary, renders the header for the file's name and comment
//! style, and replaces the file with the header followed by the original body.
//!
//! The output obeys one law: it is exactly the rendered header lines followed
//! by the original lines from the boundary onward, in order and unmodified.

use std::path::Path;

use anyhow::Result;
use tracing::trace;

use crate::boundary::BoundaryDetector;
use crate::diff::DiffManager;
use crate::file_io::FileIO;
use crate::templates::HeaderTemplate;

/// Outcome of a single-file rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteOutcome {
  /// The file was rewritten in place
  Updated,
  /// Dry run: the file differs from its standardized form
  WouldUpdate,
  /// The file already carries the standardized header
  UpToDate,
  /// The path does not exist
  Missing,
}

/// Rewrites the leading header block of individual files.
pub struct Rewriter {
  /// Template for the replacement header
  template: HeaderTemplate,

  /// Locator for the boundary between header and body
  detector: BoundaryDetector,

  /// Whether to only report changes without modifying files
  check_only: bool,

  /// Manager for handling diff creation and rendering
  diff_manager: DiffManager,
}

impl Rewriter {
  /// Creates a new rewriter.
  pub const fn new(
    template: HeaderTemplate,
    detector: BoundaryDetector,
    check_only: bool,
    diff_manager: DiffManager,
  ) -> Self {
    Self {
      template,
      detector,
      check_only,
      diff_manager,
    }
  }

  /// Rewrites one file in place.
  ///
  /// A missing path is reported as [`RewriteOutcome::Missing`] rather than an
  /// error so the caller can skip it and keep going. A file whose content
  /// already equals its standardized form is left untouched.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or the replacement cannot be
  /// written.
  pub fn rewrite_file(&self, path: &Path) -> Result<RewriteOutcome> {
    if !path.exists() {
      return Ok(RewriteOutcome::Missing);
    }

    let file_name = path
      .file_name()
      .map(|name| name.to_string_lossy().into_owned())
      .unwrap_or_default();

    let content = FileIO::read_full_content(path)?;
    let style = self.template.style_for(path);

    // Keep line terminators attached so the body survives byte-for-byte.
    let lines: Vec<&str> = content.split_inclusive('\n').collect();
    let boundary = self.detector.detect(&lines, &style);
    trace!("Content boundary for {} at line {}", path.display(), boundary);

    let mut new_content = self.template.render(&file_name, &style);
    new_content.push_str(&lines[boundary..].concat());

    if new_content == content {
      return Ok(RewriteOutcome::UpToDate);
    }

    if self.diff_manager.wants_diff()
      && let Err(e) = self.diff_manager.display_diff(path, &content, &new_content)
    {
      eprintln!("Warning: Failed to display diff for {}: {}", path.display(), e);
    }

    if self.check_only {
      return Ok(RewriteOutcome::WouldUpdate);
    }

    FileIO::write_atomic(path, &new_content)?;
    Ok(RewriteOutcome::Updated)
  }
}
