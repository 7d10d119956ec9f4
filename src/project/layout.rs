//! Fixed project paths, computed once from the project root.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use path_absolutize::Absolutize;

use crate::pipeline::BuildMode;

/// Directory of the native crate, relative to the project root
pub const NATIVE_CRATE_DIR: &str = "tuner-rs";

/// File name of the universal static library
pub const STATIC_LIB_NAME: &str = "libtuner_rs.a";

/// Every path the pipeline reads or writes.
///
/// Built once at startup from the project root and passed to each step.
///
/// ```text
/// <root>/
/// ├── tuner-rs/                 native_root
/// │   ├── Cargo.toml            native_manifest
/// │   ├── src/api.rs            bridge_input
/// │   └── target/universal/<profile>/libtuner_rs.a
/// ├── lib/api.dart              dart_output
/// └── ios/Runner/
///     ├── api.h                 c_output
///     └── libtuner_rs.a         artifact_dest
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    native_root: PathBuf,
    native_manifest: PathBuf,
    bridge_input: PathBuf,
    dart_output: PathBuf,
    c_output: PathBuf,
    artifact_dest: PathBuf,
}

impl ProjectLayout {
    /// Derives all paths from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let native_root = root.join(NATIVE_CRATE_DIR);
        let runner_dir = root.join("ios").join("Runner");
        Self {
            native_manifest: native_root.join("Cargo.toml"),
            bridge_input: native_root.join("src").join("api.rs"),
            dart_output: root.join("lib").join("api.dart"),
            c_output: runner_dir.join("api.h"),
            artifact_dest: runner_dir.join(STATIC_LIB_NAME),
            native_root,
            root,
        }
    }

    /// Finds the project root by walking up from `start`.
    ///
    /// The root is the first ancestor (including `start` itself) that contains
    /// `tuner-rs/Cargo.toml`.
    pub fn discover(start: &Path) -> Result<Self> {
        let start = start
            .absolutize()
            .with_context(|| format!("Failed to resolve {}", start.display()))?;

        start
            .ancestors()
            .find(|dir| dir.join(NATIVE_CRATE_DIR).join("Cargo.toml").is_file())
            .map(|root| {
                log::debug!("Project root: {}", root.display());
                Self::new(root)
            })
            .with_context(|| {
                format!(
                    "No {}/Cargo.toml found in {} or any parent directory",
                    NATIVE_CRATE_DIR,
                    start.display()
                )
            })
    }

    /// Project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Native crate directory; working directory of both cargo invocations.
    pub fn native_root(&self) -> &Path {
        &self.native_root
    }

    /// Native crate manifest.
    pub fn native_manifest(&self) -> &Path {
        &self.native_manifest
    }

    /// Rust source the bridge is generated from.
    pub fn bridge_input(&self) -> &Path {
        &self.bridge_input
    }

    /// Generated Dart bindings.
    pub fn dart_output(&self) -> &Path {
        &self.dart_output
    }

    /// Generated C header for the iOS runner.
    pub fn c_output(&self) -> &Path {
        &self.c_output
    }

    /// Where the static library is installed.
    pub fn artifact_dest(&self) -> &Path {
        &self.artifact_dest
    }

    /// Where `cargo lipo` leaves the static library for `mode`.
    pub fn artifact_source(&self, mode: BuildMode) -> PathBuf {
        self.native_root
            .join("target")
            .join("universal")
            .join(mode.profile_dir())
            .join(STATIC_LIB_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_hang_off_the_root() {
        let layout = ProjectLayout::new("/work/tuner");
        assert_eq!(layout.native_root(), Path::new("/work/tuner/tuner-rs"));
        assert_eq!(layout.bridge_input(), Path::new("/work/tuner/tuner-rs/src/api.rs"));
        assert_eq!(layout.dart_output(), Path::new("/work/tuner/lib/api.dart"));
        assert_eq!(layout.c_output(), Path::new("/work/tuner/ios/Runner/api.h"));
        assert_eq!(
            layout.artifact_dest(),
            Path::new("/work/tuner/ios/Runner/libtuner_rs.a")
        );
    }

    #[test]
    fn artifact_source_follows_mode() {
        let layout = ProjectLayout::new("/work/tuner");
        assert_eq!(
            layout.artifact_source(BuildMode::Release),
            Path::new("/work/tuner/tuner-rs/target/universal/release/libtuner_rs.a")
        );
        assert_eq!(
            layout.artifact_source(BuildMode::Debug),
            Path::new("/work/tuner/tuner-rs/target/universal/debug/libtuner_rs.a")
        );
    }

    #[test]
    fn discover_walks_up_to_the_root() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("tuner-rs").join("src");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("tuner-rs/Cargo.toml"), "[package]\n").unwrap();

        let layout = ProjectLayout::discover(&nested).unwrap();
        assert_eq!(layout.root(), dir.path());
    }

    #[test]
    fn discover_fails_outside_a_project() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProjectLayout::discover(dir.path()).unwrap_err();
        assert!(err.to_string().contains("tuner-rs/Cargo.toml"));
    }
}
