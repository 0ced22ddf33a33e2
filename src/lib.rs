//! # headstamp
//!
//! A tool that standardizes the leading header comment block of source files.
//!
//! `headstamp` rewrites each file from a configured manifest with a uniform
//! templated header. The boundary between the old header and the code is
//! located lexically, so the body of the file survives the rewrite untouched.
//! Files are treated as plain sequences of text lines; the source language is
//! never parsed.
//!
//! ## Features
//!
//! * Uniform header generation (file name, project, attribution, copyright)
//!   with comment styles matched to the file type
//! * Content boundary detection via the module-inclusion statement, with a
//!   comment-scan fallback for files that have none
//! * Dry run mode with diffs, so pending rewrites can be reviewed first
//! * Atomic in-place rewrites (temp file plus rename)
//! * Per-file failure isolation: a missing or unreadable file is skipped and
//!   reported, never aborting the batch
//!
//! ## Usage as a Library
//!
//! This crate can be used as a library in your Rust projects:
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//!
//! use headstamp::processor::{Processor, ProcessorConfig};
//! use headstamp::templates::HeaderData;
//!
//! fn main() -> anyhow::Result<()> {
//!     let header = HeaderData {
//!         project_name: "PolySaver".to_string(),
//!         author: "Kimi".to_string(),
//!         date: "1/12/26".to_string(),
//!         year: "2026".to_string(),
//!         copyright_holder: "Kimi".to_string(),
//!         contact: "kimi@example.com".to_string(),
//!     };
//!
//!     let mut processor = Processor::new(ProcessorConfig::new(header, PathBuf::from("Sources")))?;
//!
//!     let changed = processor.process(&[
//!         "Models/Models.swift".to_string(),
//!         "Views/LearnEnglishView.swift".to_string(),
//!     ])?;
//!
//!     if changed {
//!         println!("Some headers were rewritten");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - Batch processing of the file manifest
//! * [`rewriter`] - Single-file header rewriting
//! * [`boundary`] - Content boundary detection
//! * [`templates`] - Header template rendering and comment styles
//!
//! [`processor`]: crate::processor
//! [`rewriter`]: crate::rewriter
//! [`boundary`]: crate::boundary
//! [`templates`]: crate::templates

// Re-export modules for public API
pub mod boundary;
pub mod config;
pub mod diff;
pub mod file_io;
pub mod logging;
pub mod output;
pub mod processor;
pub mod report;
pub mod rewriter;
pub mod templates;
