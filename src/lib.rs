//! iOS build orchestration for the tuner app
//!
//! This library sequences the three steps that produce the iOS static library:
//! - bridge code generation with `flutter_rust_bridge_codegen`
//! - native compilation with `cargo build` and `cargo lipo`
//! - installation of `libtuner_rs.a` into `ios/Runner`
//!
//! It backs the `build_ios` binary and can be driven directly with a custom
//! [`pipeline::ToolRunner`].

pub mod cli;
pub mod error;
pub mod pipeline;
pub mod project;

// Re-export commonly used types
pub use error::{BuildError, CliError, Result};
