//! # Boundary Module
//!
//! This module locates the content boundary of a source file: the index of the
//! first line that belongs to the body rather than the leading header block.
//! Everything at or after the boundary survives a rewrite verbatim; everything
//! before it is replaced by the standardized header.
//!
//! Detection is purely lexical. The primary cue is the module-inclusion
//! statement (an `import`-style line); when a file has none, the fallback cue
//! is the first line that is neither blank nor a comment.

use anyhow::{Context, Result};
use regex::Regex;

use crate::templates::CommentStyle;

/// Default module-inclusion marker token.
pub const DEFAULT_MARKER: &str = "import";

/// Locates the boundary between a file's leading header and its body.
pub struct BoundaryDetector {
  /// Matches a trimmed line that begins with the inclusion marker token
  inclusion: Regex,

  /// When enabled, an inclusion statement on the very first line does not pin
  /// the boundary; the comment heuristic decides instead
  first_line_fallback: bool,
}

impl BoundaryDetector {
  /// Creates a detector for the given inclusion marker token.
  ///
  /// The marker is matched as a whole token at the start of a trimmed line, so
  /// a marker of `import` matches `import Foo` but not `important()`.
  ///
  /// # Errors
  ///
  /// Returns an error if the marker is empty after trimming.
  pub fn new(marker: &str) -> Result<Self> {
    let token = marker.trim();
    if token.is_empty() {
      anyhow::bail!("inclusion marker must not be empty");
    }

    let inclusion = Regex::new(&format!(r"^{}\b", regex::escape(token)))
      .with_context(|| format!("Failed to compile matcher for inclusion marker '{token}'"))?;

    Ok(Self {
      inclusion,
      first_line_fallback: false,
    })
  }

  /// Controls how an inclusion statement on the very first line is treated.
  ///
  /// When enabled, a first-line match is handled the same as no match at all
  /// and the fallback scan decides the boundary. Off by default: a first-line
  /// inclusion statement pins the boundary at index 0.
  #[must_use]
  pub fn with_first_line_fallback(mut self, enabled: bool) -> Self {
    self.first_line_fallback = enabled;
    self
  }

  /// Index of the first line whose trimmed text begins with the inclusion
  /// marker token, if any. Scanning stops at the first match; later inclusion
  /// statements never move the boundary.
  pub fn find_inclusion(&self, lines: &[&str]) -> Option<usize> {
    lines.iter().position(|line| self.inclusion.is_match(line.trim()))
  }

  /// Index of the first line that is neither blank nor a comment line in the
  /// given style, if any.
  pub fn find_first_code(&self, lines: &[&str], style: &CommentStyle) -> Option<usize> {
    lines.iter().position(|line| {
      let trimmed = line.trim();
      !trimmed.is_empty() && !style.is_comment_line(trimmed)
    })
  }

  /// Computes the content boundary for a file.
  ///
  /// The inclusion scan wins when it finds anything; otherwise the first
  /// non-blank non-comment line does. A file with neither (all comments, or
  /// empty) yields `lines.len()`: the whole file counts as header and nothing
  /// survives a rewrite. Never returns an index past the end of `lines`.
  pub fn detect(&self, lines: &[&str], style: &CommentStyle) -> usize {
    let primary = self.find_inclusion(lines);

    let primary = if self.first_line_fallback {
      primary.filter(|&index| index != 0)
    } else {
      primary
    };

    primary
      .or_else(|| self.find_first_code(lines, style))
      .unwrap_or(lines.len())
  }
}
