//! Build pipeline for the tuner iOS app.
//!
//! # Overview
//!
//! The pipeline:
//! 1. Regenerates the Dart/C bridge from `tuner-rs/src/api.rs`
//! 2. Builds the native crate with `cargo build` and `cargo lipo`
//! 3. Installs `libtuner_rs.a` into `ios/Runner`, replacing any previous copy
//!
//! Steps 1 and 2 gate the ones after them. External tools go through the
//! [`ToolRunner`] seam with an explicit working directory per invocation.
//!
//! # Module Organization
//!
//! - [`mode`] - Release/debug selection
//! - [`tool`] - Tool commands and the process runner
//! - [`tool_detection`] - Locating tools on `PATH`
//! - [`steps`] - The individual steps
//! - [`orchestrator`] - The [`Builder`] that sequences them
//! - [`checksum`] - SHA-256 of installed artifacts
//! - [`fs`] - File replacement helpers
//! - [`error`] - Error types

pub mod checksum;
pub mod error;
pub mod fs;
pub mod mode;
pub mod orchestrator;
pub mod steps;
pub mod tool;
pub mod tool_detection;

pub use error::{Error, ErrorExt, Result};
pub use mode::BuildMode;
pub use orchestrator::{Builder, PipelineSettings};
pub use steps::InstalledArtifact;
pub use tool::{DEFAULT_TOOL_TIMEOUT, ProcessRunner, ToolCommand, ToolRunner, ToolStatus};
