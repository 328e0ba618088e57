//! Custom error types for the shell.
//!
//! Every error's `Display` text is the exact message shown to the user,
//! so the interpreter can render any of them as an error line:
//!
//! - [`ShellError`] - Recoverable conditions raised by commands and the tree
//! - [`ManifestError`] - Failures while building a tree from a seed manifest

use thiserror::Error;

/// Shell-level errors. None of these end the session.
///
/// `NotFound` and `NotUnlockable` are deliberately coarse: a missing name,
/// a file where a directory was expected and a directory where a file was
/// expected all produce the same message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    /// A command needed an argument that was not given.
    #[error("Specify {0}")]
    MissingArgument(&'static str),
    /// No entry of the required kind under that name.
    #[error("{0}: No such file or directory")]
    NotFound(String),
    /// Read attempted on a file that is still locked.
    #[error("{0}: File is locked. Type 'decode {0}' to unlock it.")]
    Locked(String),
    /// Unlock attempt with the wrong password.
    #[error("Incorrect password. Try again, or type 'hint' for a hint.")]
    WrongPassword,
    /// Decode or hint requested for something without a lock.
    #[error("{0}: Not an unlockable file")]
    NotUnlockable(String),
    /// First word of the input is not a known command.
    #[error("Command not found: {0}. Type 'help' for available commands.")]
    UnknownCommand(String),
    /// A directory already holds an entry with this name.
    #[error("An entry named '{0}' already exists")]
    DuplicateName(String),
}

/// Errors raised while loading a seed manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("invalid seed manifest: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid secret digest for '{0}': expected 64 hex characters")]
    InvalidDigest(String),
    #[error("manifest conflict: {0}")]
    Conflict(#[from] ShellError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_argument_messages() {
        assert_eq!(
            ShellError::MissingArgument("a directory").to_string(),
            "Specify a directory"
        );
        assert_eq!(
            ShellError::MissingArgument("a file to decode").to_string(),
            "Specify a file to decode"
        );
    }

    #[test]
    fn test_wrong_password_does_not_echo_input() {
        let msg = ShellError::WrongPassword.to_string();
        assert!(msg.contains("hint"));
        assert!(!msg.contains("correcthorse"));
    }

    #[test]
    fn test_unknown_command_names_input() {
        let msg = ShellError::UnknownCommand("foo bar".to_string()).to_string();
        assert!(msg.contains("foo bar"));
    }
}
