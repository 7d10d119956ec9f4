//! Top-level error types for the build CLI.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, BuildError>;

/// Main error type for a build run
#[derive(Error, Debug)]
pub enum BuildError {
    /// CLI environment errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// Pipeline step errors; already name the failed stage
    #[error(transparent)]
    Pipeline(#[from] crate::pipeline::Error),

    /// Generic errors from anyhow
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// The current directory could not be determined
    #[error("Cannot determine working directory: {reason}")]
    WorkingDirectory {
        /// Reason for the error
        reason: String,
    },
}

impl BuildError {
    /// Process exit status for this error.
    ///
    /// Every failure exits with 1; only a complete build exits with 0.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_errors_display_unchanged() {
        let err = BuildError::from(crate::pipeline::Error::BindingGeneration {
            reason: "flutter_rust_bridge_codegen exited with exit code 2".into(),
        });
        assert_eq!(
            err.to_string(),
            "Failed to generate bridge code: flutter_rust_bridge_codegen exited with exit code 2"
        );
        assert_eq!(err.exit_code(), 1);
    }
}
