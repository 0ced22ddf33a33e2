//! # Configuration Module
//!
//! This module provides configuration support for headstamp: the manifest of
//! files to rewrite, the header field values, boundary detection settings, and
//! comment style overrides.
//!
//! Configuration can be specified in a `.headstamp.toml` file or via the
//! `HEADSTAMP_CONFIG` environment variable.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::verbose_log;

/// The default config file name.
pub const DEFAULT_CONFIG_FILENAME: &str = ".headstamp.toml";

/// Environment variable for specifying config file path.
pub const CONFIG_ENV_VAR: &str = "HEADSTAMP_CONFIG";

/// User-defined comment style configuration.
///
/// Defines how header comments should be formatted for a specific file
/// extension or filename pattern.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CommentStyleConfig {
  /// The string to use at the top of a comment block (e.g., "/*").
  /// Optional for line-style comments.
  #[serde(default)]
  pub top: String,

  /// The string to use at the beginning of each line in the comment block
  /// (e.g., " * " or "// ").
  pub middle: String,

  /// The string to use at the bottom of a comment block (e.g., " */").
  /// Optional for line-style comments.
  #[serde(default)]
  pub bottom: String,
}

impl CommentStyleConfig {
  /// Create a new line-comment style (no top/bottom markers).
  #[allow(dead_code)]
  pub fn line(prefix: &str) -> Self {
    Self {
      top: String::new(),
      middle: prefix.to_string(),
      bottom: String::new(),
    }
  }

  /// Create a new block-comment style.
  #[allow(dead_code)]
  pub fn block(top: &str, middle: &str, bottom: &str) -> Self {
    Self {
      top: top.to_string(),
      middle: middle.to_string(),
      bottom: bottom.to_string(),
    }
  }
}

/// Header field values from the `[header]` section.
///
/// Every field is optional here; the CLI layer decides which ones are
/// required and which get defaults (date and year fall back to the current
/// date when neither the config nor the CLI supplies them).
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
pub struct HeaderFieldsConfig {
  /// Project name shown in the header
  #[serde(default)]
  pub project: Option<String>,

  /// Author named in the attribution line
  #[serde(default)]
  pub author: Option<String>,

  /// Attribution date (free-form)
  #[serde(default)]
  pub date: Option<String>,

  /// Copyright year
  #[serde(default)]
  pub year: Option<String>,

  /// Copyright holder
  #[serde(default, rename = "copyright-holder")]
  pub copyright_holder: Option<String>,

  /// Contact address shown next to the copyright holder
  #[serde(default)]
  pub contact: Option<String>,
}

/// Boundary detection settings from the `[boundary]` section.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
pub struct BoundaryDetectionConfig {
  /// Module-inclusion marker token (default: "import")
  #[serde(default)]
  pub marker: Option<String>,

  /// Treat an inclusion statement on the very first line the same as no
  /// inclusion statement at all, letting the comment heuristic decide
  #[serde(default, rename = "first-line-fallback")]
  pub first_line_fallback: bool,
}

/// Main configuration struct for headstamp.
///
/// Loaded from a `.headstamp.toml` file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
  /// Root directory the manifest paths are resolved against.
  /// Relative values are resolved against the current directory.
  #[serde(default)]
  pub root: Option<PathBuf>,

  /// Ordered manifest of relative file paths to rewrite.
  #[serde(default)]
  pub files: Vec<String>,

  /// Header field values.
  #[serde(default)]
  pub header: HeaderFieldsConfig,

  /// Boundary detection settings.
  #[serde(default)]
  pub boundary: BoundaryDetectionConfig,

  /// Custom comment styles for file extensions.
  /// Keys are file extensions without the leading dot (e.g., "java", "xyz").
  #[serde(default, rename = "comment-styles")]
  pub comment_styles: HashMap<String, CommentStyleConfig>,

  /// Filename-specific comment style overrides.
  /// Keys are exact filenames or glob patterns (e.g., "Justfile",
  /// "*.cmake.in").
  #[serde(default)]
  pub filenames: HashMap<String, CommentStyleConfig>,
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}': {source}")]
  ParseError { path: PathBuf, source: toml::de::Error },

  /// A comment style configuration is invalid.
  #[error("Invalid comment style for '{extension}': {message}")]
  InvalidCommentStyle { extension: String, message: String },

  /// The boundary settings are invalid.
  #[error("Invalid boundary settings: {message}")]
  InvalidBoundary { message: String },
}

impl Config {
  /// Load configuration from a file.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read, contains invalid TOML, or
  /// fails validation.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    verbose_log!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
      path: path.to_path_buf(),
      source: e,
    })?;

    config.validate()?;

    // Normalize keys to lowercase for case-insensitive matching
    let config = config.normalize();

    verbose_log!(
      "Loaded {} manifest entries and {} comment style overrides",
      config.files.len(),
      config.comment_styles.len()
    );

    Ok(config)
  }

  /// Validate the configuration.
  ///
  /// Checks that:
  /// - All `middle` fields in comment styles are non-empty
  /// - Extension names don't include the leading dot
  /// - The inclusion marker, when present, is non-empty
  fn validate(&self) -> Result<(), ConfigError> {
    for (ext, style) in &self.comment_styles {
      if style.middle.is_empty() {
        return Err(ConfigError::InvalidCommentStyle {
          extension: ext.clone(),
          message: "middle field cannot be empty".to_string(),
        });
      }

      if ext.starts_with('.') {
        return Err(ConfigError::InvalidCommentStyle {
          extension: ext.clone(),
          message: "extension should not include leading dot".to_string(),
        });
      }
    }

    for (filename, style) in &self.filenames {
      if style.middle.is_empty() {
        return Err(ConfigError::InvalidCommentStyle {
          extension: filename.clone(),
          message: "middle field cannot be empty".to_string(),
        });
      }
    }

    if let Some(ref marker) = self.boundary.marker
      && marker.trim().is_empty()
    {
      return Err(ConfigError::InvalidBoundary {
        message: "marker cannot be empty".to_string(),
      });
    }

    Ok(())
  }

  /// Check if the configuration has any comment style overrides.
  pub fn has_style_overrides(&self) -> bool {
    !self.comment_styles.is_empty() || !self.filenames.is_empty()
  }

  /// Normalize style keys to lowercase for case-insensitive matching.
  ///
  /// This ensures that config keys like "Justfile" or "CMakeLists.txt" will
  /// match the lowercased filenames used during lookup.
  fn normalize(self) -> Self {
    let Self {
      root,
      files,
      header,
      boundary,
      comment_styles,
      filenames,
    } = self;

    let comment_styles = comment_styles.into_iter().map(|(k, v)| (k.to_lowercase(), v)).collect();
    let filenames = filenames.into_iter().map(|(k, v)| (k.to_lowercase(), v)).collect();

    Self {
      root,
      files,
      header,
      boundary,
      comment_styles,
      filenames,
    }
  }
}

/// Discover the configuration file path.
///
/// The configuration file is discovered in the following order:
/// 1. Path specified via `--config` flag (passed as `explicit_path`)
/// 2. Path specified via `HEADSTAMP_CONFIG` environment variable
/// 3. `.headstamp.toml` in the workspace root
pub fn discover_config_path(explicit_path: Option<&Path>, workspace_root: &Path) -> Option<PathBuf> {
  // 1. Explicit path from CLI takes highest priority
  if let Some(path) = explicit_path {
    if path.exists() {
      verbose_log!("Using explicit config path: {}", path.display());
      return Some(path.to_path_buf());
    }
    verbose_log!("Explicit config path does not exist: {}", path.display());
    return None;
  }

  // 2. Check environment variable
  if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
    let path = PathBuf::from(&env_path);
    if path.exists() {
      verbose_log!("Using config from {}: {}", CONFIG_ENV_VAR, path.display());
      return Some(path);
    }
    verbose_log!("{} path does not exist: {}", CONFIG_ENV_VAR, env_path);
  }

  // 3. Check workspace root
  let workspace_config = workspace_root.join(DEFAULT_CONFIG_FILENAME);
  if workspace_config.exists() {
    verbose_log!("Using workspace config: {}", workspace_config.display());
    return Some(workspace_config);
  }

  verbose_log!("No config file found");
  None
}

/// Load configuration from the discovered path, if any.
///
/// # Arguments
///
/// * `explicit_path` - Optional explicit path from CLI flag
/// * `workspace_root` - The workspace root directory
/// * `no_config` - If true, skip config file discovery entirely
pub fn load_config(explicit_path: Option<&Path>, workspace_root: &Path, no_config: bool) -> Result<Option<Config>> {
  if no_config {
    verbose_log!("Config file discovery disabled (--no-config)");
    return Ok(None);
  }

  match discover_config_path(explicit_path, workspace_root) {
    Some(path) => {
      let config = Config::load(&path).with_context(|| format!("Failed to load config from {}", path.display()))?;
      Ok(Some(config))
    }
    None => Ok(None),
  }
}
