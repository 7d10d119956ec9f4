//! Main build orchestration.
//!
//! This module provides the [`Builder`] that sequences bridge generation,
//! native compilation and artifact installation.

use std::time::Duration;

use crate::{cli::OutputManager, project::ProjectLayout};

use super::{
    BuildMode,
    error::Result,
    steps::{self, InstalledArtifact},
    tool::{DEFAULT_TOOL_TIMEOUT, ProcessRunner, ToolRunner},
};

/// Inputs fixed for the whole run.
#[derive(Clone, Debug)]
pub struct PipelineSettings {
    /// Project paths
    pub layout: ProjectLayout,
    /// Release or debug
    pub mode: BuildMode,
    /// Budget for each tool invocation
    pub tool_timeout: Duration,
}

impl PipelineSettings {
    /// Settings with the default tool timeout.
    pub fn new(layout: ProjectLayout, mode: BuildMode) -> Self {
        Self {
            layout,
            mode,
            tool_timeout: DEFAULT_TOOL_TIMEOUT,
        }
    }
}

/// Build orchestrator.
///
/// Runs the three steps in order and stops at the first failing one:
///
/// 1. `flutter_rust_bridge_codegen` regenerates `lib/api.dart` and `ios/Runner/api.h`
/// 2. `cargo build` and `cargo lipo` compile the native crate
/// 3. the universal `libtuner_rs.a` is copied into `ios/Runner`
///
/// # Examples
///
/// ```no_run
/// use tuner_ios_build::cli::OutputManager;
/// use tuner_ios_build::pipeline::{BuildMode, Builder, PipelineSettings};
/// use tuner_ios_build::project::ProjectLayout;
///
/// # async fn example() -> tuner_ios_build::pipeline::Result<()> {
/// let settings = PipelineSettings::new(ProjectLayout::new("/work/tuner"), BuildMode::Debug);
/// let artifact = Builder::new(settings).run(&OutputManager::default()).await?;
/// println!("Installed {}", artifact.dest.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Builder<R = ProcessRunner> {
    settings: PipelineSettings,
    runner: R,
}

impl Builder<ProcessRunner> {
    /// Creates a builder that runs real processes.
    pub fn new(settings: PipelineSettings) -> Self {
        let runner = ProcessRunner::new(settings.tool_timeout);
        Self { settings, runner }
    }
}

impl<R: ToolRunner> Builder<R> {
    /// Creates a builder with a custom tool runner.
    pub fn with_runner(settings: PipelineSettings, runner: R) -> Self {
        Self { settings, runner }
    }

    /// Returns a reference to the tool runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Runs all steps, returning the installed artifact.
    pub async fn run(&self, output: &OutputManager) -> Result<InstalledArtifact> {
        let layout = &self.settings.layout;
        let mode = self.settings.mode;

        // Terminal write failures must not fail the build.
        let _ = output.progress("Generating bridge code...");
        steps::generate_bindings(layout, &self.runner).await?;
        let _ = output.success("Bridge code generated");

        let _ = output.progress(&format!("Building rust ({mode})..."));
        steps::compile_native(layout, mode, &self.runner).await?;
        let _ = output.success("Rust library built");

        let _ = output.progress("Copying static library...");
        let artifact = steps::install_artifact(layout, mode).await?;
        let _ = output.indent(&format!(
            "{} ({} bytes)",
            artifact.dest.display(),
            artifact.size
        ));
        let _ = output.verbose(&format!("sha256 {}", artifact.checksum));

        Ok(artifact)
    }
}
