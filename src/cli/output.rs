//! Terminal output for the build CLI.
//!
//! Progress, success and warning lines go to stdout; errors go to stderr.
//! Prefixes are coloured when the stream is a terminal.

use std::io::{self, IsTerminal, Write};

use cyrup_termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Prefixed, quiet-aware terminal output.
#[derive(Debug, Clone, Copy)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    /// Creates an output manager.
    ///
    /// `quiet` suppresses everything except errors; `verbose` enables
    /// [`OutputManager::verbose`] lines.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Whether verbose lines are printed.
    pub fn is_verbose(&self) -> bool {
        self.verbose && !self.quiet
    }

    fn stdout_line(&self, color: Option<Color>, prefix: &str, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut out = StandardStream::stdout(color_choice(io::stdout().is_terminal()));
        write_line(&mut out, color, prefix, message)
    }

    /// Plain informational line.
    pub fn println(&self, message: &str) -> io::Result<()> {
        self.stdout_line(None, "", message)
    }

    /// Detail line, only in verbose mode.
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if !self.is_verbose() {
            return Ok(());
        }
        self.stdout_line(None, "   ", message)
    }

    /// Step in progress.
    pub fn progress(&self, message: &str) -> io::Result<()> {
        self.stdout_line(Some(Color::Cyan), "🔨 ", message)
    }

    /// Completed step.
    pub fn success(&self, message: &str) -> io::Result<()> {
        self.stdout_line(Some(Color::Green), "✓ ", message)
    }

    /// Non-fatal problem.
    pub fn warn(&self, message: &str) -> io::Result<()> {
        self.stdout_line(Some(Color::Yellow), "⚠️  ", message)
    }

    /// Indented sub-item.
    pub fn indent(&self, message: &str) -> io::Result<()> {
        self.stdout_line(None, "   ", message)
    }

    /// Fatal problem; printed even when quiet.
    pub fn error(&self, message: &str) -> io::Result<()> {
        let mut err = StandardStream::stderr(color_choice(io::stderr().is_terminal()));
        write_line(&mut err, Some(Color::Red), "✗ ", message)
    }
}

impl Default for OutputManager {
    fn default() -> Self {
        Self::new(false, false)
    }
}

/// Colour only when writing to a terminal; piped output stays plain.
fn color_choice(is_terminal: bool) -> ColorChoice {
    if is_terminal {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Writes `prefix` in `color` (bold) followed by the uncoloured message.
fn write_line<W: WriteColor>(
    out: &mut W,
    color: Option<Color>,
    prefix: &str,
    message: &str,
) -> io::Result<()> {
    if let Some(color) = color {
        out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(out, "{prefix}")?;
        out.reset()?;
    } else {
        write!(out, "{prefix}")?;
    }
    writeln!(out, "{message}")?;
    out.flush()
}
