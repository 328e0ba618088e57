//! Command execution result type.

use crate::error::ShellError;
use crate::models::OutputLine;

/// Request from the shell to its host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    /// The user asked to end the session.
    Exit,
}

/// Result of handling one line of input.
///
/// Commands produce output and can optionally signal the host.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandResult {
    /// Output lines to display
    pub output: Vec<OutputLine>,
    /// Optional request for the host (e.g., `exit`)
    pub signal: Option<Signal>,
}

impl CommandResult {
    /// Create a result with just output, no signal.
    pub fn output(lines: Vec<OutputLine>) -> Self {
        Self {
            output: lines,
            signal: None,
        }
    }

    /// Create a single-line result.
    pub fn line(line: OutputLine) -> Self {
        Self::output(vec![line])
    }

    /// Render an error as a single error line.
    pub fn error(err: ShellError) -> Self {
        Self::line(OutputLine::error(err.to_string()))
    }

    /// Create a result asking the host to end the session.
    pub fn exit() -> Self {
        Self {
            output: vec![],
            signal: Some(Signal::Exit),
        }
    }

    /// Create an empty result (no output, no signal).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty() && self.signal.is_none()
    }
}
