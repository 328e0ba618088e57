//! One interactive session: a tree plus the interpreter mode.

use tracing::debug;

use crate::config::PROMPT_SUFFIX;
use crate::error::ManifestError;
use crate::shell::commands::{answer_secret, execute_command, Command, CommandResult};
use crate::shell::filesystem::Tree;
use crate::shell::parser::parse_input;

/// Which handler the next input line goes to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Lines are commands.
    #[default]
    Normal,
    /// The next line is a password (or `hint`) for the named file.
    AwaitingSecret(String),
}

/// Interpreter state for a single user.
///
/// Each call to [`Session::handle_line`] is processed completely before it
/// returns. A host serving several users keeps one session per user.
#[derive(Clone, Debug)]
pub struct Session {
    tree: Tree,
    mode: Mode,
}

impl Session {
    pub fn new(tree: Tree) -> Self {
        Self {
            tree,
            mode: Mode::Normal,
        }
    }

    /// Start a session on the default hierarchy.
    pub fn seeded() -> Result<Self, ManifestError> {
        Ok(Self::new(Tree::seeded()?))
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Prompt for the next line, reflecting location or the pending file.
    pub fn prompt(&self) -> String {
        match &self.mode {
            Mode::Normal => format!("{} {}", self.tree.current_path(), PROMPT_SUFFIX),
            Mode::AwaitingSecret(file) => format!("[decode {}] password: ", file),
        }
    }

    /// Process one line of input.
    pub fn handle_line(&mut self, input: &str) -> CommandResult {
        let was_nested = matches!(self.mode, Mode::AwaitingSecret(_));
        let (result, next) = match std::mem::take(&mut self.mode) {
            Mode::Normal => self.dispatch(input),
            Mode::AwaitingSecret(file) => answer_secret(file, input, &mut self.tree),
        };

        if was_nested != matches!(next, Mode::AwaitingSecret(_)) {
            debug!(mode = ?next, "mode changed");
        }
        self.mode = next;
        result
    }

    fn dispatch(&mut self, input: &str) -> (CommandResult, Mode) {
        let Some(parsed) = parse_input(input) else {
            return (CommandResult::empty(), Mode::Normal);
        };
        debug!(command = %parsed.name, "dispatching");

        match Command::parse(&parsed) {
            Ok(cmd) => execute_command(cmd, &mut self.tree),
            Err(err) => (CommandResult::error(err), Mode::Normal),
        }
    }
}
