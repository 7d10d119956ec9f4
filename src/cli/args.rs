//! Command line argument parsing.

use clap::Parser;

use crate::pipeline::BuildMode;

/// Build script for the tuner iOS app
#[derive(Parser, Debug)]
#[command(
    name = "build_ios",
    version,
    about = "Build script for the tuner iOS app",
    long_about = "Regenerates the flutter_rust_bridge bindings, builds tuner-rs as a universal \
static library with cargo lipo, and copies libtuner_rs.a into ios/Runner.

Run from the project root or any directory below it.

Each tool invocation is stopped after 2 hours. Stopping cargo does not stop
the rustc processes it started.

Exit code 0 = libtuner_rs.a installed in ios/Runner."
)]
pub struct Args {
    /// Build in debug mode (default: release)
    #[arg(short, long)]
    pub debug: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Build mode selected by the flags
    pub fn mode(&self) -> BuildMode {
        BuildMode::from_debug_flag(self.debug)
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    mode: BuildMode,
    /// Output manager for terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        let output = super::OutputManager::new(
            log::log_enabled!(log::Level::Debug),
            false, // Never quiet
        );

        Self {
            mode: args.mode(),
            output,
        }
    }
}

impl RuntimeConfig {
    /// Creates a configuration directly, bypassing argument parsing.
    pub fn new(mode: BuildMode, output: super::OutputManager) -> Self {
        Self { mode, output }
    }

    /// Selected build mode
    pub fn mode(&self) -> BuildMode {
        self.mode
    }

    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_by_default() {
        let args = Args::try_parse_from(["build_ios"]).unwrap();
        assert_eq!(args.mode(), BuildMode::Release);
    }

    #[test]
    fn short_and_long_debug_flags() {
        for flag in ["-d", "--debug"] {
            let args = Args::try_parse_from(["build_ios", flag]).unwrap();
            assert_eq!(args.mode(), BuildMode::Debug);
        }
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(Args::try_parse_from(["build_ios", "--release"]).is_err());
    }

    #[test]
    fn help_states_the_tool_time_limit() {
        use clap::CommandFactory;
        let help = Args::command().render_long_help().to_string();
        assert!(help.contains("stopped after 2 hours"));
        assert_eq!(
            crate::pipeline::DEFAULT_TOOL_TIMEOUT,
            std::time::Duration::from_secs(2 * 60 * 60)
        );
    }

    #[test]
    fn clap_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
