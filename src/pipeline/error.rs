//! Error types for the build pipeline.
//!
//! Stage variants (`BindingGeneration`, `NativeBuild`, `ArtifactCopy`) are what
//! the CLI reports to the user; the remaining variants describe the low-level
//! cause and are folded into a stage variant by the step that hit them.

use std::{
    io,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while generating bindings, compiling or installing the artifact.
#[derive(Error, Debug)]
pub enum Error {
    /// Bridge code generation did not succeed
    #[error("Failed to generate bridge code: {reason}")]
    BindingGeneration {
        /// Exit status or launch failure of the generator
        reason: String,
    },

    /// One or both native build invocations did not succeed
    #[error("Failed to build rust: {}", failures.join("; "))]
    NativeBuild {
        /// One entry per failed invocation
        failures: Vec<String>,
    },

    /// Installing the static library into the platform project failed
    #[error("Failed to copy build artifact: {source}")]
    ArtifactCopy {
        /// Underlying filesystem or verification error
        #[source]
        source: Box<Error>,
    },

    /// Tool is not on PATH
    #[error("`{tool}` not found in PATH: {error}")]
    ToolNotFound {
        /// Program name that was looked up
        tool: String,
        /// Lookup failure
        #[source]
        error: which::Error,
    },

    /// Spawning or waiting on a subprocess failed
    #[error("Failed to run `{command}`: {error}")]
    CommandFailed {
        /// Rendered command line
        command: String,
        /// Underlying IO error
        #[source]
        error: io::Error,
    },

    /// Subprocess exceeded its time budget and was killed
    #[error("`{command}` timed out after {} seconds", timeout.as_secs())]
    Timeout {
        /// Rendered command line
        command: String,
        /// Budget that was exceeded
        timeout: Duration,
    },

    /// Filesystem operation failed on a specific path
    #[error("{context} {}: {error}", path.display())]
    Fs {
        /// What was being done
        context: &'static str,
        /// Offending path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        error: io::Error,
    },

    /// Copied file does not hash to the same value as its source
    #[error(
        "Checksum mismatch after copy: {} ({expected}) -> {} ({actual})",
        source_path.display(),
        dest_path.display()
    )]
    ChecksumMismatch {
        /// File that was copied
        source_path: PathBuf,
        /// Copy destination
        dest_path: PathBuf,
        /// SHA-256 of the source
        expected: String,
        /// SHA-256 of the destination
        actual: String,
    },

    /// Native crate manifest could not be parsed
    #[error("Failed to parse {}: {error}", path.display())]
    Manifest {
        /// Manifest path
        path: PathBuf,
        /// TOML error
        #[source]
        error: toml::de::Error,
    },
}

impl Error {
    /// Wraps a low-level error as an artifact copy failure.
    pub fn artifact_copy(source: Error) -> Self {
        Self::ArtifactCopy {
            source: Box::new(source),
        }
    }
}

/// Attaches path context to IO results.
pub trait ErrorExt<T> {
    /// Converts an `io::Error` into [`Error::Fs`] naming `path`.
    fn fs_context(self, context: &'static str, path: &Path) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: &Path) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.to_path_buf(),
            error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fs_context_names_the_path() {
        let result: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let err = result
            .fs_context("copying artifact", Path::new("/tmp/libtuner_rs.a"))
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("copying artifact"));
        assert!(message.contains("/tmp/libtuner_rs.a"));
    }

    #[test]
    fn native_build_lists_every_failure() {
        let err = Error::NativeBuild {
            failures: vec!["cargo build exited with 101".into(), "cargo lipo exited with 1".into()],
        };
        assert_eq!(
            err.to_string(),
            "Failed to build rust: cargo build exited with 101; cargo lipo exited with 1"
        );
    }
}
