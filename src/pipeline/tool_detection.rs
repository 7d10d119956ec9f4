//! External tool lookup.
//!
//! Resolves the bridge generator and cargo on `PATH` before they are spawned,
//! so a missing tool is reported by name instead of as a bare spawn error.

use std::path::PathBuf;

use super::error::{Error, Result};

/// Program that generates the Dart bindings and C header.
pub const BRIDGE_CODEGEN: &str = "flutter_rust_bridge_codegen";

/// Native build tool; `cargo lipo` is a cargo subcommand.
pub const CARGO: &str = "cargo";

/// Finds `tool` on `PATH`.
pub fn locate(tool: &str) -> Result<PathBuf> {
    match which::which(tool) {
        Ok(path) => {
            log::debug!("Found {} at: {}", tool, path.display());
            Ok(path)
        }
        Err(error) => {
            log::debug!("{} not found in PATH: {}", tool, error);
            Err(Error::ToolNotFound {
                tool: tool.to_string(),
                error,
            })
        }
    }
}
