//! Terminal-related data types for output rendering.

use std::fmt;

/// A single line of output handed to the host for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputLine {
    /// Plain text output
    Text(String),
    /// Error message
    Error(String),
    /// Success message
    Success(String),
    /// Info message (prompts, hints)
    Info(String),
    /// Directory listing entry (ls)
    Entry { name: String, is_dir: bool },
}

impl OutputLine {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::Error(s.into())
    }

    pub fn success(s: impl Into<String>) -> Self {
        Self::Success(s.into())
    }

    pub fn info(s: impl Into<String>) -> Self {
        Self::Info(s.into())
    }

    pub fn dir_entry(name: impl Into<String>) -> Self {
        Self::Entry {
            name: name.into(),
            is_dir: true,
        }
    }

    pub fn file_entry(name: impl Into<String>) -> Self {
        Self::Entry {
            name: name.into(),
            is_dir: false,
        }
    }

    /// The bare message, without any styling.
    pub fn message(&self) -> &str {
        match self {
            Self::Text(s) | Self::Error(s) | Self::Success(s) | Self::Info(s) => s,
            Self::Entry { name, .. } => name,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Plain-terminal rendering: errors are prefixed, directories get a
/// trailing slash.
impl fmt::Display for OutputLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(msg) => write!(f, "error: {}", msg),
            Self::Entry { name, is_dir: true } => write!(f, "{}/", name),
            other => write!(f, "{}", other.message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(OutputLine::error("boom").to_string(), "error: boom");
        assert_eq!(OutputLine::dir_entry("archives").to_string(), "archives/");
        assert_eq!(OutputLine::file_entry("a.txt").to_string(), "a.txt");
        assert_eq!(OutputLine::info("hi").to_string(), "hi");
    }

    #[test]
    fn test_message_strips_styling() {
        assert_eq!(OutputLine::error("boom").message(), "boom");
        assert_eq!(OutputLine::dir_entry("archives").message(), "archives");
    }
}
