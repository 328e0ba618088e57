//! Command parsing and execution.
//!
//! This module provides:
//! - `Command` enum for parsed shell commands
//! - `CommandResult` for command execution results
//! - `execute_command` and `answer_secret` for running them against a tree
//!
//! # Architecture
//!
//! Input lines are parsed into a `ParsedCommand`, turned into the `Command`
//! enum, then executed via `execute_command`. While a password is expected,
//! lines bypass the command table and go to `answer_secret` instead.

mod execute;
mod result;

pub use execute::{answer_secret, execute_command};
pub use result::{CommandResult, Signal};

use std::fmt;

use crate::error::ShellError;
use crate::shell::parser::ParsedCommand;

// =============================================================================
// Path Argument Type
// =============================================================================

/// A name argument passed to a command (e.g., `cd foo`, `cat bar.txt`).
///
/// Stored as typed; it is only resolved against the current directory when
/// the command runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathArg(String);

impl PathArg {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<&str> for PathArg {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Command Enum
// =============================================================================

/// Parsed shell command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Exit,
    Ls,
    Cd(PathArg),
    Cat(PathArg),
    /// Start the password prompt for a protected file
    Decode(PathArg),
    Help,
}

impl Command {
    /// Get all available command names.
    pub fn names() -> &'static [&'static str] {
        &["cat", "cd", "decode", "exit", "help", "ls"]
    }

    /// Resolve a parsed line against the command table.
    ///
    /// Names are matched exactly. Arguments past the first are ignored.
    pub fn parse(input: &ParsedCommand) -> Result<Self, ShellError> {
        let required = |what: &'static str| {
            input
                .first_arg()
                .map(PathArg::new)
                .ok_or(ShellError::MissingArgument(what))
        };

        match input.name.as_str() {
            "exit" => Ok(Self::Exit),
            "ls" => Ok(Self::Ls),
            "cd" => required("a directory").map(Self::Cd),
            "cat" => required("a file").map(Self::Cat),
            "decode" => required("a file to decode").map(Self::Decode),
            "help" => Ok(Self::Help),
            _ => Err(ShellError::UnknownCommand(input.raw.clone())),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::parser::parse_input;

    fn parse(line: &str) -> Result<Command, ShellError> {
        Command::parse(&parse_input(line).expect("non-blank input"))
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse("ls"), Ok(Command::Ls));
        assert_eq!(parse("help"), Ok(Command::Help));
        assert_eq!(parse("exit"), Ok(Command::Exit));
        assert_eq!(parse("ls extra words"), Ok(Command::Ls));
    }

    #[test]
    fn test_parse_cd() {
        assert!(matches!(
            parse("cd communications"),
            Ok(Command::Cd(ref p)) if p == &"communications"
        ));
        assert!(matches!(parse("cd .."), Ok(Command::Cd(ref p)) if p == &".."));
    }

    #[test]
    fn test_parse_uses_first_argument_only() {
        assert!(matches!(
            parse("cat a.txt b.txt"),
            Ok(Command::Cat(ref p)) if p == &"a.txt"
        ));
    }

    #[test]
    fn test_parse_missing_arguments() {
        assert_eq!(parse("cd"), Err(ShellError::MissingArgument("a directory")));
        assert_eq!(parse("cat"), Err(ShellError::MissingArgument("a file")));
        assert_eq!(
            parse("decode"),
            Err(ShellError::MissingArgument("a file to decode"))
        );
    }

    #[test]
    fn test_parse_unknown_reports_raw_input() {
        assert_eq!(
            parse("  foo --bar  "),
            Err(ShellError::UnknownCommand("foo --bar".to_string()))
        );
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(matches!(parse("LS"), Err(ShellError::UnknownCommand(_))));
    }

    #[test]
    fn test_command_names() {
        let names = Command::names();
        for name in ["ls", "cd", "cat", "decode", "help", "exit"] {
            assert!(names.contains(&name));
        }
        assert!(!names.contains(&"hint"));
    }
}
