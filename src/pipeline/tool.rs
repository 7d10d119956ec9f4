//! Subprocess invocation.
//!
//! Steps describe what to run as a [`ToolCommand`] and hand it to a
//! [`ToolRunner`]. [`ProcessRunner`] is the real implementation; tests swap in
//! a recording double.

use std::{
    ffi::OsString,
    fmt,
    path::{Path, PathBuf},
    time::Duration,
};

use tokio::process::Command;

use super::{
    error::{Error, Result},
    tool_detection,
};

/// Default time budget for a single tool invocation (2 hours)
/// A cold `cargo lipo --release` builds every iOS target and can be slow.
/// Only the tool itself is killed on timeout; processes it spawned (rustc
/// under cargo) are left to exit on their own.
pub const DEFAULT_TOOL_TIMEOUT: Duration = Duration::from_secs(2 * 60 * 60);

/// A single external tool invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolCommand {
    /// Program name, resolved on `PATH`
    pub program: String,
    /// Arguments in order
    pub args: Vec<OsString>,
    /// Working directory for the child; `None` inherits the current one
    pub current_dir: Option<PathBuf>,
}

impl ToolCommand {
    /// Creates a command with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    /// Appends one argument.
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Appends a flag followed by a path value.
    pub fn path_arg(self, flag: &str, path: &Path) -> Self {
        self.arg(flag).arg(path.as_os_str())
    }

    /// Appends `arg` if present.
    pub fn opt_arg(self, arg: Option<&str>) -> Self {
        match arg {
            Some(arg) => self.arg(arg),
            None => self,
        }
    }

    /// Runs the child in `dir`.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Whether `arg` appears among the arguments.
    pub fn has_arg(&self, arg: &str) -> bool {
        self.args.iter().any(|a| a == arg)
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Exit status of a finished tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToolStatus {
    code: Option<i32>,
}

impl ToolStatus {
    /// Status with the given exit code; `None` means killed by a signal.
    pub fn from_code(code: Option<i32>) -> Self {
        Self { code }
    }

    /// Exit code 0.
    pub fn success() -> Self {
        Self { code: Some(0) }
    }

    /// Exit code, if the process exited normally.
    pub fn code(&self) -> Option<i32> {
        self.code
    }

    /// True only for exit code 0.
    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

impl fmt::Display for ToolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {code}"),
            None => f.write_str("terminated by signal"),
        }
    }
}

impl From<std::process::ExitStatus> for ToolStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self::from_code(status.code())
    }
}

/// Runs tool commands to completion.
///
/// Implementations block (asynchronously) until the tool exits and report its
/// status. A tool that cannot be started or that hangs is an `Err`.
#[allow(async_fn_in_trait)]
pub trait ToolRunner {
    /// Runs `command` once and waits for it.
    async fn run(&self, command: &ToolCommand) -> Result<ToolStatus>;
}

/// Runs tools as real child processes with inherited stdio.
#[derive(Clone, Debug)]
pub struct ProcessRunner {
    timeout: Duration,
}

impl ProcessRunner {
    /// Creates a runner that kills any tool running longer than `timeout`.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(DEFAULT_TOOL_TIMEOUT)
    }
}

impl ToolRunner for ProcessRunner {
    async fn run(&self, command: &ToolCommand) -> Result<ToolStatus> {
        let program = tool_detection::locate(&command.program)?;
        let rendered = command.to_string();

        let mut cmd = Command::new(&program);
        cmd.args(&command.args).kill_on_drop(true);
        if let Some(dir) = &command.current_dir {
            log::debug!("Running `{}` in {}", rendered, dir.display());
            cmd.current_dir(dir);
        } else {
            log::debug!("Running `{}`", rendered);
        }

        let mut child = cmd.spawn().map_err(|error| Error::CommandFailed {
            command: rendered.clone(),
            error,
        })?;

        match tokio::time::timeout(self.timeout, child.wait()).await {
            Ok(Ok(status)) => {
                log::debug!("`{}` finished with {:?}", rendered, status.code());
                Ok(status.into())
            }
            Ok(Err(error)) => Err(Error::CommandFailed {
                command: rendered,
                error,
            }),
            Err(_elapsed) => {
                log::warn!(
                    "`{}` timed out after {} seconds, terminating...",
                    rendered,
                    self.timeout.as_secs()
                );
                if let Err(e) = child.kill().await {
                    log::warn!("Failed to kill `{}`: {}", rendered, e);
                }
                Err(Error::Timeout {
                    command: rendered,
                    timeout: self.timeout,
                })
            }
        }
    }
}
