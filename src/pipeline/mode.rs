//! Build mode selection.

use std::fmt;

/// Cargo profile the native library is built with.
///
/// Selects both the flag passed to `cargo build`/`cargo lipo` and the
/// `target/universal/<profile>` directory the artifact is read from.
///
/// # Examples
///
/// ```
/// use tuner_ios_build::pipeline::BuildMode;
///
/// let mode = BuildMode::from_debug_flag(false);
/// assert_eq!(mode, BuildMode::Release);
/// assert_eq!(mode.cargo_flag(), Some("--release"));
/// assert_eq!(BuildMode::Debug.profile_dir(), "debug");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum BuildMode {
    /// Optimized build, `--release`
    #[default]
    Release,
    /// Unoptimized build with debug info
    Debug,
}

impl BuildMode {
    /// Maps the CLI `--debug` switch to a mode.
    pub fn from_debug_flag(debug: bool) -> Self {
        if debug { Self::Debug } else { Self::Release }
    }

    /// Extra cargo argument for this mode, if any.
    pub fn cargo_flag(self) -> Option<&'static str> {
        match self {
            Self::Release => Some("--release"),
            Self::Debug => None,
        }
    }

    /// Name of the profile directory under `target/universal`.
    pub fn profile_dir(self) -> &'static str {
        match self {
            Self::Release => "release",
            Self::Debug => "debug",
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.profile_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_flag_selects_debug() {
        assert_eq!(BuildMode::from_debug_flag(true), BuildMode::Debug);
        assert_eq!(BuildMode::from_debug_flag(false), BuildMode::Release);
        assert_eq!(BuildMode::default(), BuildMode::Release);
    }

    #[test]
    fn only_release_adds_a_cargo_flag() {
        assert_eq!(BuildMode::Release.cargo_flag(), Some("--release"));
        assert_eq!(BuildMode::Debug.cargo_flag(), None);
    }
}
