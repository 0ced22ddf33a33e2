//! # Templates Module
//!
//! This module produces the standardized header block that replaces whatever
//! leading comment block a source file currently carries.
//!
//! The module includes:
//! - [`HeaderData`] for the static field values shared by every file in a run
//! - [`HeaderTemplate`] for rendering the header line sequence for one file
//! - [`CommentStyle`] for defining how comments should be formatted in
//!   different file types
//!
//! ## Example
//!
//! ```rust
//! use headstamp::templates::{HeaderData, HeaderTemplate};
//! use std::path::Path;
//!
//! let data = HeaderData {
//!   project_name: "PolySaver".to_string(),
//!   author: "Kimi".to_string(),
//!   date: "1/12/26".to_string(),
//!   year: "2026".to_string(),
//!   copyright_holder: "Kimi".to_string(),
//!   contact: "kimi@example.com".to_string(),
//! };
//!
//! let template = HeaderTemplate::new(data);
//! let style = template.style_for(Path::new("Models.swift"));
//! let header = template.render("Models.swift", &style);
//! assert!(header.starts_with("//\n//  Models.swift\n"));
//! ```

use std::path::Path;
use std::sync::Arc;

use crate::config::{CommentStyleConfig, Config};
use crate::verbose_log;

/// Static field values used to fill out the header template.
///
/// All fields are shared by every file in a run; only the embedded file name
/// varies per file. The `year` is kept separate from the attribution `date`
/// because the copyright line carries a plain year while the attribution line
/// carries a short date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderData {
  /// Project name shown on the third header line
  pub project_name: String,
  /// Author named in the attribution line
  pub author: String,
  /// Attribution date (free-form, e.g. "1/12/26")
  pub date: String,
  /// Copyright year
  pub year: String,
  /// Copyright holder
  pub copyright_holder: String,
  /// Contact address shown next to the copyright holder; may be empty
  pub contact: String,
}

/// Renders the standardized header for individual files.
///
/// The `HeaderTemplate` is responsible for:
/// - Resolving the comment style appropriate for a file path
/// - Producing the fixed header line sequence with the file's own name
///   embedded
///
/// Rendering is a pure function of the template data and the file name; it has
/// no failure modes.
pub struct HeaderTemplate {
  /// Field values shared across the run
  data: HeaderData,
  /// The comment style resolver to use
  resolver: Box<dyn CommentStyleResolver>,
}

impl HeaderTemplate {
  /// Creates a template with the default builtin comment style resolver.
  pub fn new(data: HeaderData) -> Self {
    Self {
      data,
      resolver: Box::new(BuiltinResolver),
    }
  }

  /// Creates a template with a custom comment style resolver.
  pub fn with_resolver(data: HeaderData, resolver: Box<dyn CommentStyleResolver>) -> Self {
    Self { data, resolver }
  }

  /// Resolve the comment style for the given file path.
  pub fn style_for(&self, path: &Path) -> CommentStyle {
    self.resolver.resolve(path)
  }

  /// Renders the header line sequence for one file.
  ///
  /// The sequence is fixed: an opening marker line, the file name, the project
  /// name, a blank comment line, the attribution line, the copyright line, a
  /// closing marker line, and one blank line separating the header from the
  /// body. Lines are returned without terminators.
  pub fn render_lines(&self, file_name: &str, style: &CommentStyle) -> Vec<String> {
    let bare = style.middle.trim_end();
    let open = if style.top.is_empty() {
      bare.to_string()
    } else {
      style.top.clone()
    };
    let close = if style.bottom.is_empty() {
      bare.to_string()
    } else {
      style.bottom.clone()
    };

    let text = |value: &str| format!("{bare}  {value}");

    let attribution = format!("Created by {} on {}.", self.data.author, self.data.date);
    let copyright = if self.data.contact.is_empty() {
      format!(
        "Copyright \u{a9} {} {}. All rights reserved.",
        self.data.year, self.data.copyright_holder
      )
    } else {
      format!(
        "Copyright \u{a9} {} {} ({}). All rights reserved.",
        self.data.year, self.data.copyright_holder, self.data.contact
      )
    };

    vec![
      open,
      text(file_name),
      text(&self.data.project_name),
      bare.to_string(),
      text(&attribution),
      text(&copyright),
      close,
      String::new(),
    ]
  }

  /// Renders the header as a single string, each line terminated.
  pub fn render(&self, file_name: &str, style: &CommentStyle) -> String {
    let mut rendered = self.render_lines(file_name, style).join("\n");
    rendered.push('\n');
    rendered
  }
}

/// Defines the comment style for different file types.
///
/// Line styles (`//`, `#`) leave `top` and `bottom` empty; block styles
/// (`/* ... */`) fill all three markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentStyle {
  /// The string to use at the top of a comment block
  pub top: String,

  /// The string to use at the beginning of each line in the comment block
  pub middle: String,

  /// The string to use at the bottom of a comment block
  pub bottom: String,
}

impl CommentStyle {
  /// Create a line-comment style (no top/bottom markers).
  pub fn line(prefix: &str) -> Self {
    Self {
      top: String::new(),
      middle: prefix.to_string(),
      bottom: String::new(),
    }
  }

  /// Create a block-comment style.
  pub fn block(top: &str, middle: &str, bottom: &str) -> Self {
    Self {
      top: top.to_string(),
      middle: middle.to_string(),
      bottom: bottom.to_string(),
    }
  }

  /// Whether the line reads as a comment line in this style.
  ///
  /// The check is lexical: the line (after leading whitespace) must start with
  /// one of the style's markers. Markers are compared trimmed so block-style
  /// interior lines (" * like this") match.
  pub fn is_comment_line(&self, line: &str) -> bool {
    let trimmed = line.trim_start();
    [&self.top, &self.middle, &self.bottom]
      .iter()
      .map(|marker| marker.trim())
      .any(|marker| !marker.is_empty() && trimmed.starts_with(marker))
  }
}

impl From<CommentStyleConfig> for CommentStyle {
  fn from(config: CommentStyleConfig) -> Self {
    Self {
      top: config.top,
      middle: config.middle,
      bottom: config.bottom,
    }
  }
}

impl From<&CommentStyleConfig> for CommentStyle {
  fn from(config: &CommentStyleConfig) -> Self {
    Self {
      top: config.top.clone(),
      middle: config.middle.clone(),
      bottom: config.bottom.clone(),
    }
  }
}

/// Trait for resolving comment styles for file paths.
///
/// Implementations can use built-in mappings, user configuration, or both.
pub trait CommentStyleResolver: Send + Sync {
  /// Resolve the comment style for the given file path.
  fn resolve(&self, path: &Path) -> CommentStyle;
}

/// Default resolver using built-in extension mappings.
#[derive(Debug, Default)]
pub struct BuiltinResolver;

impl CommentStyleResolver for BuiltinResolver {
  fn resolve(&self, path: &Path) -> CommentStyle {
    get_comment_style_for_file(path)
  }
}

/// Resolver that checks user config first, then falls back to builtin.
///
/// Lookup order: exact filename override, filename glob override, extension
/// override, builtin mapping.
pub struct ConfigurableResolver {
  config: Arc<Config>,
}

impl std::fmt::Debug for ConfigurableResolver {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ConfigurableResolver")
      .field("config", &"<config>")
      .finish()
  }
}

impl ConfigurableResolver {
  /// Create a new configurable resolver with the given config.
  pub fn new(config: Config) -> Self {
    Self {
      config: Arc::new(config),
    }
  }
}

impl CommentStyleResolver for ConfigurableResolver {
  fn resolve(&self, path: &Path) -> CommentStyle {
    let file_name = path
      .file_name()
      .and_then(|name| name.to_str())
      .unwrap_or("")
      .to_lowercase();

    // 1. Exact filename overrides
    if let Some(style) = self.config.filenames.get(&file_name) {
      verbose_log!("Using config filename override for: {}", file_name);
      return CommentStyle::from(style);
    }

    // 2. Filename glob overrides
    for (pattern, style) in &self.config.filenames {
      if pattern.contains('*')
        && let Ok(glob_pattern) = glob::Pattern::new(&pattern.to_lowercase())
        && glob_pattern.matches(&file_name)
      {
        verbose_log!("Using config filename glob override '{}' for: {}", pattern, file_name);
        return CommentStyle::from(style);
      }
    }

    // 3. Extension overrides
    let extension = path
      .extension()
      .and_then(|ext| ext.to_str())
      .unwrap_or("")
      .to_lowercase();

    if let Some(style) = self.config.comment_styles.get(&extension) {
      verbose_log!("Using config extension override for: .{}", extension);
      return CommentStyle::from(style);
    }

    // 4. Builtin mapping
    get_comment_style_for_file(path)
  }
}

/// Create a comment style resolver based on the provided configuration.
pub fn create_resolver(config: Option<Config>) -> Box<dyn CommentStyleResolver> {
  match config {
    Some(cfg) => Box::new(ConfigurableResolver::new(cfg)),
    None => Box::new(BuiltinResolver),
  }
}

/// Determines the appropriate comment style for a file based on its extension.
///
/// Falls back to C-style line comments (`// `) for unknown file types, which
/// also covers the Swift/ObjC family the tool was first pointed at.
fn get_comment_style_for_file(path: &Path) -> CommentStyle {
  let file_name = path
    .file_name()
    .and_then(|name| name.to_str())
    .unwrap_or("")
    .to_lowercase();

  let extension = path
    .extension()
    .and_then(|ext| ext.to_str())
    .unwrap_or("")
    .to_lowercase();

  match extension.as_str() {
    "c" | "h" | "java" | "scala" | "kt" | "kts" => CommentStyle::block("/*", " * ", " */"),
    "js" | "mjs" | "cjs" | "jsx" | "tsx" | "css" | "scss" | "ts" => CommentStyle::block("/**", " * ", " */"),
    "cc" | "cpp" | "cs" | "go" | "hh" | "hpp" | "m" | "mm" | "proto" | "rs" | "swift" | "dart" | "groovy" => {
      CommentStyle::line("// ")
    }
    "py" | "sh" | "yaml" | "yml" | "rb" | "tf" | "pl" | "toml" => CommentStyle::line("# "),
    "el" | "lisp" => CommentStyle::line(";; "),
    "erl" => CommentStyle::line("% "),
    "hs" | "sql" => CommentStyle::line("-- "),
    "html" | "xml" | "vue" => CommentStyle::block("<!--", " ", "-->"),
    "php" => CommentStyle::line("// "),
    "ml" | "mli" => CommentStyle::block("(**", "   ", "*)"),
    _ => {
      if file_name == "cmakelists.txt"
        || file_name.ends_with(".cmake")
        || file_name == "dockerfile"
        || file_name.ends_with(".dockerfile")
      {
        CommentStyle::line("# ")
      } else {
        // Default to C-style comments if we can't determine the file type
        CommentStyle::line("// ")
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;
  use std::path::Path;

  use super::*;

  fn test_data() -> HeaderData {
    HeaderData {
      project_name: "PolySaver".to_string(),
      author: "Kimi".to_string(),
      date: "1/12/26".to_string(),
      year: "2026".to_string(),
      copyright_holder: "Kimi".to_string(),
      contact: "kimi@example.com".to_string(),
    }
  }

  #[test]
  fn test_render_lines_line_style() {
    let template = HeaderTemplate::new(test_data());
    let style = CommentStyle::line("// ");
    let lines = template.render_lines("Models.swift", &style);

    assert_eq!(
      lines,
      vec![
        "//".to_string(),
        "//  Models.swift".to_string(),
        "//  PolySaver".to_string(),
        "//".to_string(),
        "//  Created by Kimi on 1/12/26.".to_string(),
        "//  Copyright \u{a9} 2026 Kimi (kimi@example.com). All rights reserved.".to_string(),
        "//".to_string(),
        String::new(),
      ]
    );
  }

  #[test]
  fn test_render_terminates_every_line() {
    let template = HeaderTemplate::new(test_data());
    let style = CommentStyle::line("// ");
    let header = template.render("Models.swift", &style);

    assert!(header.starts_with("//\n//  Models.swift\n"));
    // The blank separator line is terminated too
    assert!(header.ends_with("//\n\n"));
    assert_eq!(header.lines().count(), 8);
  }

  #[test]
  fn test_render_lines_block_style() {
    let template = HeaderTemplate::new(test_data());
    let style = CommentStyle::block("/*", " * ", " */");
    let lines = template.render_lines("Main.java", &style);

    assert_eq!(lines[0], "/*");
    assert_eq!(lines[1], " *  Main.java");
    assert_eq!(lines[3], " *");
    assert_eq!(lines[6], " */");
    assert_eq!(lines[7], "");
  }

  #[test]
  fn test_render_without_contact() {
    let data = HeaderData {
      contact: String::new(),
      ..test_data()
    };
    let template = HeaderTemplate::new(data);
    let style = CommentStyle::line("// ");
    let lines = template.render_lines("Models.swift", &style);

    assert_eq!(lines[5], "//  Copyright \u{a9} 2026 Kimi. All rights reserved.");
  }

  #[test]
  fn test_only_file_name_varies() {
    let template = HeaderTemplate::new(test_data());
    let style = CommentStyle::line("// ");
    let first = template.render_lines("A.swift", &style);
    let second = template.render_lines("B.swift", &style);

    for (index, (a, b)) in first.iter().zip(second.iter()).enumerate() {
      if index == 1 {
        assert_ne!(a, b);
      } else {
        assert_eq!(a, b);
      }
    }
  }

  #[test]
  fn test_is_comment_line() {
    let line_style = CommentStyle::line("// ");
    assert!(line_style.is_comment_line("// a comment"));
    assert!(line_style.is_comment_line("  //indented"));
    assert!(!line_style.is_comment_line("let x = 1; // trailing"));
    assert!(!line_style.is_comment_line(""));

    let block_style = CommentStyle::block("/*", " * ", " */");
    assert!(block_style.is_comment_line("/*"));
    assert!(block_style.is_comment_line(" * interior"));
    assert!(block_style.is_comment_line(" */"));
    assert!(!block_style.is_comment_line("int x;"));
  }

  #[test]
  fn test_builtin_resolver_swift() {
    let resolver = BuiltinResolver;
    let style = resolver.resolve(Path::new("Models.swift"));

    assert_eq!(style.top, "");
    assert_eq!(style.middle, "// ");
    assert_eq!(style.bottom, "");
  }

  #[test]
  fn test_builtin_resolver_python() {
    let resolver = BuiltinResolver;
    let style = resolver.resolve(Path::new("script.py"));

    assert_eq!(style.middle, "# ");
  }

  #[test]
  fn test_builtin_resolver_java() {
    let resolver = BuiltinResolver;
    let style = resolver.resolve(Path::new("Main.java"));

    assert_eq!(style.top, "/*");
    assert_eq!(style.middle, " * ");
    assert_eq!(style.bottom, " */");
  }

  #[test]
  fn test_builtin_resolver_unknown_defaults_to_line_comment() {
    let resolver = BuiltinResolver;
    let style = resolver.resolve(Path::new("unknown.xyz"));

    assert_eq!(style.middle, "// ");
  }

  #[test]
  fn test_configurable_resolver_extension_override() {
    let mut comment_styles = HashMap::new();
    comment_styles.insert("java".to_string(), CommentStyleConfig::line("// "));

    let config = Config {
      comment_styles,
      ..Config::default()
    };

    let resolver = ConfigurableResolver::new(config);
    let style = resolver.resolve(Path::new("Main.java"));

    // Config override (line style) beats builtin (block style)
    assert_eq!(style.top, "");
    assert_eq!(style.middle, "// ");
    assert_eq!(style.bottom, "");
  }

  #[test]
  fn test_configurable_resolver_filename_override() {
    let mut filenames = HashMap::new();
    filenames.insert("justfile".to_string(), CommentStyleConfig::line("# "));

    let config = Config {
      filenames,
      ..Config::default()
    };

    let resolver = ConfigurableResolver::new(config);
    let style = resolver.resolve(Path::new("Justfile"));

    assert_eq!(style.middle, "# ");
  }

  #[test]
  fn test_configurable_resolver_filename_glob() {
    let mut filenames = HashMap::new();
    filenames.insert("*.cmake.in".to_string(), CommentStyleConfig::line("# "));

    let config = Config {
      filenames,
      ..Config::default()
    };

    let resolver = ConfigurableResolver::new(config);
    let style = resolver.resolve(Path::new("config.cmake.in"));

    assert_eq!(style.middle, "# ");
  }

  #[test]
  fn test_configurable_resolver_falls_back_to_builtin() {
    let resolver = ConfigurableResolver::new(Config::default());

    let style = resolver.resolve(Path::new("Models.swift"));
    assert_eq!(style.middle, "// ");

    let style = resolver.resolve(Path::new("script.py"));
    assert_eq!(style.middle, "# ");
  }

  #[test]
  fn test_create_resolver_without_config() {
    let resolver = create_resolver(None);
    let style = resolver.resolve(Path::new("Models.swift"));

    assert_eq!(style.middle, "// ");
  }
}
