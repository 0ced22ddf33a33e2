#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use headstamp::processor::{Processor, ProcessorConfig};
use headstamp::templates::HeaderData;

/// Deterministic header field values shared by the integration tests.
pub fn test_header_data() -> HeaderData {
  HeaderData {
    project_name: "PolySaver".to_string(),
    author: "Kimi".to_string(),
    date: "1/12/26".to_string(),
    year: "2026".to_string(),
    copyright_holder: "Kimi".to_string(),
    contact: "kimi@example.com".to_string(),
  }
}

/// The header [`test_header_data`] produces for a `//`-commented file,
/// including the trailing blank separator line.
pub fn expected_swift_header(file_name: &str) -> String {
  format!(
    "//\n\
     //  {file_name}\n\
     //  PolySaver\n\
     //\n\
     //  Created by Kimi on 1/12/26.\n\
     //  Copyright \u{a9} 2026 Kimi (kimi@example.com). All rights reserved.\n\
     //\n\
     \n"
  )
}

/// Writes a file under `root`, creating parent directories as needed.
pub fn write_file(root: &Path, rel: &str, content: &str) -> Result<PathBuf> {
  let path = root.join(rel);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }
  fs::write(&path, content)?;
  Ok(path)
}

/// A processor that rewrites files in place.
pub fn modify_processor(root: &Path) -> Result<Processor> {
  Processor::new(ProcessorConfig::new(test_header_data(), root.to_path_buf()))
}

/// A processor in dry run mode.
pub fn check_processor(root: &Path) -> Result<Processor> {
  Processor::new(ProcessorConfig {
    check_only: true,
    ..ProcessorConfig::new(test_header_data(), root.to_path_buf())
  })
}
