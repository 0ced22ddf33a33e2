use std::fs;
use std::path::Path;

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

mod common;
use common::{expected_swift_header, write_file};

fn headstamp() -> Command {
  Command::cargo_bin("headstamp").expect("binary should build")
}

/// Writes a full config file with deterministic header values.
fn write_config(dir: &Path, files: &[&str]) -> Result<()> {
  let mut config = String::from("files = [\n");
  for file in files {
    config.push_str(&format!("  \"{file}\",\n"));
  }
  config.push_str("]\n\n");

  config.push_str(
    "[header]\n\
     project = \"PolySaver\"\n\
     author = \"Kimi\"\n\
     date = \"1/12/26\"\n\
     year = \"2026\"\n\
     copyright-holder = \"Kimi\"\n\
     contact = \"kimi@example.com\"\n",
  );

  fs::write(dir.join(".headstamp.toml"), config)?;
  Ok(())
}

#[test]
fn test_version_flag() {
  headstamp()
    .arg("--version")
    .assert()
    .success()
    .stdout(predicate::str::contains("headstamp"));
}

#[test]
fn test_errors_without_files() -> Result<()> {
  let temp_dir = tempdir()?;

  headstamp()
    .current_dir(temp_dir.path())
    .arg("--no-config")
    .assert()
    .failure()
    .stderr(predicate::str::contains("No files to process"));

  Ok(())
}

#[test]
fn test_errors_without_project() -> Result<()> {
  let temp_dir = tempdir()?;
  write_file(temp_dir.path(), "Models.swift", "import Foo\n")?;

  headstamp()
    .current_dir(temp_dir.path())
    .args(["--no-config", "Models.swift"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Missing required value: --project"));

  Ok(())
}

#[test]
fn test_modify_end_to_end_with_config() -> Result<()> {
  let temp_dir = tempdir()?;
  write_config(temp_dir.path(), &["Models.swift", "Extensions.swift"])?;
  write_file(
    temp_dir.path(),
    "Models.swift",
    "// old\n// banner\n\nimport Foundation\nstruct Word {}\n",
  )?;
  write_file(
    temp_dir.path(),
    "Extensions.swift",
    "// old\nimport UIKit\nextension String {}\n",
  )?;

  headstamp()
    .current_dir(temp_dir.path())
    .arg("--modify")
    .assert()
    .success()
    .stdout(predicate::str::contains("updated:"))
    .stdout(predicate::str::contains("2 updated"));

  let models = fs::read_to_string(temp_dir.path().join("Models.swift"))?;
  assert_eq!(
    models,
    expected_swift_header("Models.swift") + "import Foundation\nstruct Word {}\n"
  );

  let extensions = fs::read_to_string(temp_dir.path().join("Extensions.swift"))?;
  assert!(extensions.starts_with("//\n//  Extensions.swift\n"));

  Ok(())
}

#[test]
fn test_dry_run_is_default_and_exits_nonzero() -> Result<()> {
  let temp_dir = tempdir()?;
  write_config(temp_dir.path(), &["Models.swift"])?;
  let original = "// old\nimport Foo\n";
  write_file(temp_dir.path(), "Models.swift", original)?;

  headstamp()
    .current_dir(temp_dir.path())
    .assert()
    .failure()
    .stdout(predicate::str::contains("would update:"))
    .stdout(predicate::str::contains("--modify"));

  // Dry run leaves the file untouched
  assert_eq!(fs::read_to_string(temp_dir.path().join("Models.swift"))?, original);

  Ok(())
}

#[test]
fn test_missing_file_is_skipped_not_fatal() -> Result<()> {
  let temp_dir = tempdir()?;
  write_config(temp_dir.path(), &["Gone.swift", "Models.swift"])?;
  write_file(temp_dir.path(), "Models.swift", "// old\nimport Foo\n")?;

  headstamp()
    .current_dir(temp_dir.path())
    .arg("--modify")
    .assert()
    .success()
    .stdout(predicate::str::contains("not found"))
    .stdout(predicate::str::contains("updated:"));

  Ok(())
}

#[test]
fn test_second_run_reports_up_to_date() -> Result<()> {
  let temp_dir = tempdir()?;
  write_config(temp_dir.path(), &["Models.swift"])?;
  write_file(temp_dir.path(), "Models.swift", "// old\nimport Foo\n")?;

  headstamp().current_dir(temp_dir.path()).arg("--modify").assert().success();

  headstamp()
    .current_dir(temp_dir.path())
    .arg("--modify")
    .assert()
    .success()
    .stdout(predicate::str::contains("All headers are up to date."));

  Ok(())
}

#[test]
fn test_show_diff_renders_changes() -> Result<()> {
  let temp_dir = tempdir()?;
  write_config(temp_dir.path(), &["Models.swift"])?;
  write_file(temp_dir.path(), "Models.swift", "// old\nimport Foo\n")?;

  headstamp()
    .current_dir(temp_dir.path())
    .arg("--show-diff")
    .assert()
    .failure()
    .stderr(predicate::str::contains("Diff for"))
    .stderr(predicate::str::contains("-// old"))
    .stderr(predicate::str::contains("+//  Models.swift"));

  Ok(())
}

#[test]
fn test_save_diff_writes_consolidated_file() -> Result<()> {
  let temp_dir = tempdir()?;
  write_config(temp_dir.path(), &["A.swift", "B.swift"])?;
  write_file(temp_dir.path(), "A.swift", "// old\nimport Foo\n")?;
  write_file(temp_dir.path(), "B.swift", "// old\nimport Bar\n")?;

  headstamp()
    .current_dir(temp_dir.path())
    .args(["--save-diff", "changes.diff"])
    .assert()
    .failure();

  let diff = fs::read_to_string(temp_dir.path().join("changes.diff"))?;
  assert!(diff.contains("Diff for"));
  assert!(diff.contains("A.swift"));
  assert!(diff.contains("B.swift"));

  Ok(())
}

#[test]
fn test_report_json() -> Result<()> {
  let temp_dir = tempdir()?;
  write_config(temp_dir.path(), &["Models.swift", "Gone.swift"])?;
  write_file(temp_dir.path(), "Models.swift", "// old\nimport Foo\n")?;

  headstamp()
    .current_dir(temp_dir.path())
    .args(["--modify", "--report-json", "report.json"])
    .assert()
    .success();

  let report = fs::read_to_string(temp_dir.path().join("report.json"))?;
  let value: serde_json::Value = serde_json::from_str(&report)?;

  assert_eq!(value["summary"]["total_files"], 2);
  assert_eq!(value["summary"]["updated"], 1);
  assert_eq!(value["summary"]["skipped"], 1);
  assert_eq!(value["files"][0]["action"], "updated");
  assert_eq!(value["files"][1]["action"], "skipped");

  Ok(())
}

#[test]
fn test_cli_files_override_config_manifest() -> Result<()> {
  let temp_dir = tempdir()?;
  write_config(temp_dir.path(), &["Ignored.swift"])?;
  write_file(temp_dir.path(), "Ignored.swift", "// old\nimport Foo\n")?;
  write_file(temp_dir.path(), "Chosen.swift", "// old\nimport Bar\n")?;

  headstamp()
    .current_dir(temp_dir.path())
    .args(["--modify", "Chosen.swift"])
    .assert()
    .success();

  // Only the CLI-listed file is rewritten
  let chosen = fs::read_to_string(temp_dir.path().join("Chosen.swift"))?;
  assert!(chosen.starts_with("//\n//  Chosen.swift\n"));

  let ignored = fs::read_to_string(temp_dir.path().join("Ignored.swift"))?;
  assert_eq!(ignored, "// old\nimport Foo\n");

  Ok(())
}

#[test]
fn test_quiet_mode_suppresses_status_lines() -> Result<()> {
  let temp_dir = tempdir()?;
  write_config(temp_dir.path(), &["Models.swift"])?;
  write_file(temp_dir.path(), "Models.swift", "// old\nimport Foo\n")?;

  headstamp()
    .current_dir(temp_dir.path())
    .args(["--modify", "--quiet"])
    .assert()
    .success()
    .stdout(predicate::str::contains("updated:").not())
    .stdout(predicate::str::contains("Summary").not());

  Ok(())
}
