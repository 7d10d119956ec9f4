//! Command line interface for the iOS build.
//!
//! Prints the crate-type reminder, parses `--debug`, locates the project and
//! runs the [`Builder`] pipeline, turning its outcome into an exit code.

mod args;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use std::path::Path;

use crate::{
    error::{CliError, Result},
    pipeline::{Builder, InstalledArtifact, PipelineSettings},
    project::{self, CrateTypeCheck, ProjectLayout, REQUIRED_CRATE_TYPE},
};

/// Reminder printed before every build
pub const CRATE_TYPE_REMINDER: &str = "Remember to set `crate-type = [\"staticlib\"]` in Cargo.toml";

/// Main CLI entry point
pub async fn run() -> i32 {
    let startup = OutputManager::default();
    let _ = startup.println(CRATE_TYPE_REMINDER);

    let args = Args::parse_args();
    let runtime_config = RuntimeConfig::from(&args);

    let result = match std::env::current_dir() {
        Ok(cwd) => execute(&runtime_config, &cwd).await,
        Err(e) => Err(CliError::WorkingDirectory {
            reason: e.to_string(),
        }
        .into()),
    };

    report(&runtime_config, result)
}

/// Runs the build for the project containing `start`.
pub async fn execute(runtime_config: &RuntimeConfig, start: &Path) -> Result<InstalledArtifact> {
    let layout = ProjectLayout::discover(start)?;
    check_staticlib(runtime_config, &layout).await;

    let settings = PipelineSettings::new(layout, runtime_config.mode());
    let artifact = Builder::new(settings).run(runtime_config.output()).await?;
    Ok(artifact)
}

/// Prints the outcome of a build and returns the process exit code.
pub fn report(runtime_config: &RuntimeConfig, result: Result<InstalledArtifact>) -> i32 {
    let output = runtime_config.output();
    match result {
        Ok(_) => {
            let _ = output.success("Build complete");
            0
        }
        Err(e) => {
            log::debug!("Build failed: {:?}", e);
            let _ = output.error(&e.to_string());
            e.exit_code()
        }
    }
}

/// Warns when the native crate is not configured to build a static library.
///
/// Advisory only; the build continues whatever the outcome.
async fn check_staticlib(runtime_config: &RuntimeConfig, layout: &ProjectLayout) {
    let output = runtime_config.output();
    let manifest = layout.native_manifest();

    let _ = match project::check_crate_type(manifest).await {
        Ok(CrateTypeCheck::Present) => {
            output.verbose(&format!("{} lists {}", manifest.display(), REQUIRED_CRATE_TYPE))
        }
        Ok(CrateTypeCheck::Missing(types)) => output.warn(&format!(
            "{} has crate-type = {:?}; the iOS runner needs \"{}\"",
            manifest.display(),
            types,
            REQUIRED_CRATE_TYPE
        )),
        Ok(CrateTypeCheck::NoLibSection) => output.warn(&format!(
            "{} has no [lib] section; add crate-type = [\"{}\"]",
            manifest.display(),
            REQUIRED_CRATE_TYPE
        )),
        Err(e) => output.warn(&format!("Could not check crate-type: {}", e)),
    };
}
