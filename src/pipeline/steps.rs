//! The three pipeline steps.
//!
//! Each step takes its inputs explicitly; none of them touch the process
//! working directory.

use std::path::PathBuf;

use crate::project::ProjectLayout;

use super::{
    BuildMode,
    checksum::calculate_sha256,
    error::{Error, Result},
    fs::replace_file,
    tool::{ToolCommand, ToolRunner},
    tool_detection::{BRIDGE_CODEGEN, CARGO},
};

/// Command that regenerates the Dart bindings and the C header.
pub fn bindgen_command(layout: &ProjectLayout) -> ToolCommand {
    ToolCommand::new(BRIDGE_CODEGEN)
        .path_arg("--rust-input", layout.bridge_input())
        .path_arg("--dart-output", layout.dart_output())
        .path_arg("--c-output", layout.c_output())
}

/// The plain `cargo build` and the universal `cargo lipo`, in that order.
pub fn native_build_commands(layout: &ProjectLayout, mode: BuildMode) -> [ToolCommand; 2] {
    ["build", "lipo"].map(|subcommand| {
        ToolCommand::new(CARGO)
            .arg(subcommand)
            .opt_arg(mode.cargo_flag())
            .current_dir(layout.native_root())
    })
}

/// Runs the bridge generator once.
///
/// Any non-zero exit, or a generator that cannot be started, is a
/// [`Error::BindingGeneration`].
pub async fn generate_bindings<R: ToolRunner>(layout: &ProjectLayout, runner: &R) -> Result<()> {
    let command = bindgen_command(layout);
    log::info!("Generating bridge code from {}", layout.bridge_input().display());

    match runner.run(&command).await {
        Ok(status) if status.is_success() => Ok(()),
        Ok(status) => Err(Error::BindingGeneration {
            reason: format!("{} exited with {}", command.program, status),
        }),
        Err(e) => Err(Error::BindingGeneration {
            reason: e.to_string(),
        }),
    }
}

/// Builds the native library with `cargo build` and then `cargo lipo`.
///
/// Both invocations are always attempted. The step fails if either one fails
/// and the error lists each failed invocation.
pub async fn compile_native<R: ToolRunner>(
    layout: &ProjectLayout,
    mode: BuildMode,
    runner: &R,
) -> Result<()> {
    log::info!(
        "Building native library ({}) in {}",
        mode,
        layout.native_root().display()
    );

    let mut failures = Vec::new();
    for command in native_build_commands(layout, mode) {
        match runner.run(&command).await {
            Ok(status) if status.is_success() => {}
            Ok(status) => failures.push(format!("`{}` exited with {}", command, status)),
            Err(e) => failures.push(e.to_string()),
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(Error::NativeBuild { failures })
    }
}

/// Result of installing the static library.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstalledArtifact {
    /// Where the library was read from
    pub source: PathBuf,
    /// Where the library now lives
    pub dest: PathBuf,
    /// Bytes copied
    pub size: u64,
    /// SHA-256 of the installed file
    pub checksum: String,
}

/// Copies the universal static library for `mode` into the iOS runner.
///
/// Replaces any previous copy, then verifies the destination hashes the same
/// as the source. Every failure is an [`Error::ArtifactCopy`] naming the path.
pub async fn install_artifact(layout: &ProjectLayout, mode: BuildMode) -> Result<InstalledArtifact> {
    let source = layout.artifact_source(mode);
    let dest = layout.artifact_dest().to_path_buf();

    copy_verified(source, dest).await.map_err(Error::artifact_copy)
}

async fn copy_verified(source: PathBuf, dest: PathBuf) -> Result<InstalledArtifact> {
    log::info!("Copying {} -> {}", source.display(), dest.display());

    let size = replace_file(&source, &dest).await?;
    let expected = calculate_sha256(&source).await?;
    let actual = calculate_sha256(&dest).await?;

    if expected != actual {
        return Err(Error::ChecksumMismatch {
            source_path: source,
            dest_path: dest,
            expected,
            actual,
        });
    }

    log::debug!("Installed {} ({} bytes, sha256 {})", dest.display(), size, actual);
    Ok(InstalledArtifact {
        source,
        dest,
        size,
        checksum: actual,
    })
}
