//! # File I/O Module
//!
//! This module provides file reading and writing utilities for the rewriter.
//! Writes go through a temporary file in the target directory followed by a
//! rename, so a file is either fully rewritten or left untouched.

use std::io::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

/// File I/O operations for the rewriter.
///
/// This struct provides static methods for reading and writing files.
pub struct FileIO;

impl FileIO {
  /// Read full file content.
  pub fn read_full_content(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
  }

  /// Replace a file's content atomically.
  ///
  /// The new content is written to a temporary file in the same directory and
  /// renamed over the original, so an interrupted run leaves either the old
  /// file or the new one, never a truncated mix. The original file's
  /// permissions are carried over to the replacement.
  pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = path
      .parent()
      .filter(|parent| !parent.as_os_str().is_empty())
      .unwrap_or_else(|| Path::new("."));

    let permissions = std::fs::metadata(path).ok().map(|meta| meta.permissions());

    let mut tmp =
      NamedTempFile::new_in(dir).with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    tmp
      .write_all(content.as_bytes())
      .with_context(|| format!("Failed to write replacement for {}", path.display()))?;
    tmp
      .persist(path)
      .map_err(|e| e.error)
      .with_context(|| format!("Failed to replace file: {}", path.display()))?;

    if let Some(perms) = permissions {
      // Temp files are created with restrictive permissions; restore the
      // original mode after the rename.
      let _ = std::fs::set_permissions(path, perms);
    }

    Ok(())
  }
}
