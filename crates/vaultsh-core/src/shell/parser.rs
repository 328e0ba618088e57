//! Input line parsing.
//!
//! A line is trimmed and split on runs of whitespace. The first word is the
//! command name, the rest are positional arguments. There is no quoting,
//! no expansion and no piping.

/// A single parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// The trimmed input, as typed
    pub raw: String,
    pub name: String,
    pub args: Vec<String>,
}

impl ParsedCommand {
    /// First positional argument, if any. Later ones are ignored by every
    /// command.
    pub fn first_arg(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}

/// Parse one line of input. Blank input yields `None`.
pub fn parse_input(input: &str) -> Option<ParsedCommand> {
    let raw = input.trim();
    let mut words = raw.split_whitespace().map(str::to_string);
    let name = words.next()?;

    Some(ParsedCommand {
        raw: raw.to_string(),
        name,
        args: words.collect(),
    })
}
